//! GitHub repository retrieval operation.

use crate::github::error::GitHubError;
use crate::github::models::RepositoryRecord;
use crate::github::response::ApiResponse;
use crate::github::util::{into_api_response, repo_route, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get a single repository. `200 OK` when it exists and is visible.
pub(crate) fn get_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<ApiResponse<RepositoryRecord>, GitHubError>> {
    let route = repo_route(owner, repo);
    spawn_task(async move {
        let response = inner._get(route.as_str()).await?;
        into_api_response(&inner, route, response).await
    })
}
