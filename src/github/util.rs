//! GitHub API utilities

use crate::github::error::GitHubResult;
use crate::github::response::ApiResponse;
use crate::runtime::AsyncTask;
use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use octocrab::Octocrab;
use std::future::Future;

/// Response type of Octocrab's unmapped `_get`/`_post`/... calls.
pub(crate) type RawResponse = http::Response<BoxBody<Bytes, octocrab::Error>>;

/// Spawn an async task for GitHub API operations.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Build `/repos/{owner}/{repo}` with both segments percent-encoded.
pub(crate) fn repo_route(owner: impl Into<String>, repo: impl Into<String>) -> String {
    let (owner, repo): (String, String) = (owner.into(), repo.into());
    format!(
        "/repos/{}/{}",
        urlencoding::encode(&owner),
        urlencoding::encode(&repo)
    )
}

/// Drain a raw Octocrab response into an [`ApiResponse`], keeping the
/// status code whatever GitHub answered.
pub(crate) async fn into_api_response<T>(
    inner: &Octocrab,
    route: String,
    response: RawResponse,
) -> GitHubResult<ApiResponse<T>> {
    let status = response.status();
    let text = inner.body_to_string(response).await?;
    log::debug!("{route} -> {status}");
    Ok(ApiResponse::new(route, status, text))
}
