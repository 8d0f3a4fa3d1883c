//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::RepositoryRecord;
use crate::github::response::ApiResponse;

impl GitHubClient {
    /// Get a repository
    pub fn get_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> crate::runtime::AsyncTask<Result<ApiResponse<RepositoryRecord>, GitHubError>> {
        crate::github::get_repository::get_repository(self.inner.clone(), owner, repo)
    }
}
