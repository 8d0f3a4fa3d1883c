//! GitHub Issue lock operation.

use crate::github::error::GitHubError;
use crate::github::models::{IssuePayload, LockReason};
use crate::github::response::ApiResponse;
use crate::github::util::{into_api_response, repo_route, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Lock an issue's conversation. GitHub answers `204 No Content`.
pub(crate) fn lock_issue(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
    reason: Option<LockReason>,
) -> AsyncTask<Result<ApiResponse<()>, GitHubError>> {
    let route = format!(
        "{}/issues/{issue_number}/lock",
        repo_route(owner, repo)
    );
    spawn_task(async move {
        let payload = IssuePayload {
            lock_reason: reason,
            ..IssuePayload::default()
        };
        let response = inner._put(route.as_str(), Some(&payload)).await?;
        into_api_response(&inner, route, response).await
    })
}
