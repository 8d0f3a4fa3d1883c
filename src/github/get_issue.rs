//! GitHub Issue retrieval operation.

use crate::github::error::GitHubError;
use crate::github::models::IssueRecord;
use crate::github::response::ApiResponse;
use crate::github::util::{into_api_response, repo_route, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get a single issue.
pub(crate) fn get_issue(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
) -> AsyncTask<Result<ApiResponse<IssueRecord>, GitHubError>> {
    let route = format!(
        "{}/issues/{issue_number}",
        repo_route(owner, repo)
    );
    spawn_task(async move {
        let response = inner._get(route.as_str()).await?;
        into_api_response(&inner, route, response).await
    })
}
