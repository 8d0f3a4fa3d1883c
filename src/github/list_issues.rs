//! GitHub Issues listing operation.

use crate::github::error::GitHubError;
use crate::github::models::IssueRecord;
use crate::github::response::ApiResponse;
use crate::github::util::{into_api_response, repo_route, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// List the first page of a repository's issues, in GitHub's default order
/// (open issues, most recently created first).
///
/// Only one page is fetched; callers that need a specific issue select it
/// from this page.
pub(crate) fn list_issues(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<ApiResponse<Vec<IssueRecord>>, GitHubError>> {
    let route = format!("{}/issues", repo_route(owner, repo));
    spawn_task(async move {
        let response = inner._get(route.as_str()).await?;
        into_api_response(&inner, route, response).await
    })
}
