//! GitHub API operations module
//!
//! Issue-management endpoints over Octocrab's raw request API. Every
//! operation returns an [`ApiResponse`] so callers see the exact HTTP status.

pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-export client types
pub use client::{DEFAULT_BASE_URI, GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export wire types
pub use models::{
    AuthenticatedUser, IssuePayload, IssueRecord, LockReason, RepositoryOwner, RepositoryRecord,
};
pub use response::ApiResponse;
pub use update_issue::UpdateIssueRequest;

// GitHub API operations - Users (internal)
pub(crate) mod get_me;

// GitHub API operations - Repositories (internal)
pub(crate) mod get_repository;

// GitHub API operations - Issues (internal)
pub(crate) mod create_issue;
pub(crate) mod get_issue;
pub(crate) mod list_issues;
pub(crate) mod lock_issue;
pub(crate) mod unlock_issue;
pub(crate) mod update_issue;
