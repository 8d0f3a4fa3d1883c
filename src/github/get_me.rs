//! GitHub authenticated user retrieval operation.

use crate::github::error::GitHubError;
use crate::github::models::AuthenticatedUser;
use crate::github::response::ApiResponse;
use crate::github::util::{into_api_response, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get details of the authenticated GitHub user.
///
/// Calls the `/user` endpoint to retrieve the user associated with the
/// client's credential. GitHub answers `200 OK` for a valid token.
pub(crate) fn get_me(
    inner: Arc<Octocrab>,
) -> AsyncTask<Result<ApiResponse<AuthenticatedUser>, GitHubError>> {
    spawn_task(async move {
        let route = "/user".to_string();
        let response = inner._get(route.as_str()).await?;
        into_api_response(&inner, route, response).await
    })
}
