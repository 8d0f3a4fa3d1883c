//! GitHub Issue creation operation.

use crate::github::error::GitHubError;
use crate::github::models::{IssuePayload, IssueRecord};
use crate::github::response::ApiResponse;
use crate::github::util::{into_api_response, repo_route, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Create a new issue. GitHub answers `201 Created` with the new issue.
///
/// The payload is sent as-is, so fields left unset (such as `body`) are
/// never transmitted.
pub(crate) fn create_issue(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    payload: IssuePayload,
) -> AsyncTask<Result<ApiResponse<IssueRecord>, GitHubError>> {
    let route = format!("{}/issues", repo_route(owner, repo));
    spawn_task(async move {
        let response = inner._post(route.as_str(), Some(&payload)).await?;
        into_api_response(&inner, route, response).await
    })
}
