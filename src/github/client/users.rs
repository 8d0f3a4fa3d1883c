//! Users API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::AuthenticatedUser;
use crate::github::response::ApiResponse;

impl GitHubClient {
    /// Get the authenticated user
    #[must_use]
    pub fn get_me(
        &self,
    ) -> crate::runtime::AsyncTask<Result<ApiResponse<AuthenticatedUser>, GitHubError>> {
        crate::github::get_me::get_me(self.inner.clone())
    }
}
