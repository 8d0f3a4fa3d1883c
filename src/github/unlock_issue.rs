//! GitHub Issue unlock operation.

use crate::github::error::GitHubError;
use crate::github::response::ApiResponse;
use crate::github::util::{into_api_response, repo_route, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Unlock an issue's conversation. GitHub answers `204 No Content`.
pub(crate) fn unlock_issue(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
) -> AsyncTask<Result<ApiResponse<()>, GitHubError>> {
    let route = format!(
        "{}/issues/{issue_number}/lock",
        repo_route(owner, repo)
    );
    spawn_task(async move {
        let response = inner._delete(route.as_str(), None::<&()>).await?;
        into_api_response(&inner, route, response).await
    })
}
