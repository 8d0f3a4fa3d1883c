//! GitHub Issue update operation.

use crate::github::error::GitHubError;
use crate::github::models::{IssuePayload, IssueRecord};
use crate::github::response::ApiResponse;
use crate::github::util::{into_api_response, repo_route, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Request parameters for updating an issue
#[derive(Debug, Clone)]
pub struct UpdateIssueRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Issue number to update
    pub issue_number: u64,
    /// Fields to change; unset fields keep their current value
    pub payload: IssuePayload,
}

/// Update an existing issue. GitHub answers `200 OK` with the updated issue.
pub(crate) fn update_issue(
    inner: Arc<Octocrab>,
    request: UpdateIssueRequest,
) -> AsyncTask<Result<ApiResponse<IssueRecord>, GitHubError>> {
    let route = format!(
        "{}/issues/{}",
        repo_route(request.owner.as_str(), request.repo.as_str()),
        request.issue_number
    );
    spawn_task(async move {
        let response = inner
            ._patch(route.as_str(), Some(&request.payload))
            .await?;
        into_api_response(&inner, route, response).await
    })
}
