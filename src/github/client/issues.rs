//! Issues API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::{IssuePayload, IssueRecord, LockReason};
use crate::github::response::ApiResponse;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Get a single issue
    pub fn get_issue(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
    ) -> AsyncTask<Result<ApiResponse<IssueRecord>, GitHubError>> {
        crate::github::get_issue::get_issue(self.inner.clone(), owner, repo, issue_number)
    }

    /// Create a new issue
    pub fn create_issue(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        payload: IssuePayload,
    ) -> AsyncTask<Result<ApiResponse<IssueRecord>, GitHubError>> {
        crate::github::create_issue::create_issue(self.inner.clone(), owner, repo, payload)
    }

    /// List the first page of issues
    pub fn list_issues(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<ApiResponse<Vec<IssueRecord>>, GitHubError>> {
        crate::github::list_issues::list_issues(self.inner.clone(), owner, repo)
    }

    /// Update an issue
    #[must_use]
    pub fn update_issue(
        &self,
        request: crate::github::UpdateIssueRequest,
    ) -> AsyncTask<Result<ApiResponse<IssueRecord>, GitHubError>> {
        crate::github::update_issue::update_issue(self.inner.clone(), request)
    }

    /// Lock an issue, optionally recording a reason
    pub fn lock_issue(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
        reason: Option<LockReason>,
    ) -> AsyncTask<Result<ApiResponse<()>, GitHubError>> {
        crate::github::lock_issue::lock_issue(
            self.inner.clone(),
            owner,
            repo,
            issue_number,
            reason,
        )
    }

    /// Unlock an issue
    pub fn unlock_issue(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
    ) -> AsyncTask<Result<ApiResponse<()>, GitHubError>> {
        crate::github::unlock_issue::unlock_issue(self.inner.clone(), owner, repo, issue_number)
    }
}
