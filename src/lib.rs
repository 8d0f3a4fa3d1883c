//! `github_issue_scenarios` - end-to-end scenarios for GitHub's issue API
//!
//! A thin, status-preserving GitHub client built on octocrab, plus a
//! sequential scenario runner that drives the issue lifecycle (create,
//! edit, lock, unlock) and checks every response against the documented
//! status code and payload.

// Module declarations
pub mod github;
pub mod runtime;
pub mod scenario;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export scenario types
pub use scenario::{
    ConfigError, RunReport, ScenarioConfig, ScenarioError, ScenarioKind, ScenarioRunner,
    TargetSelector,
};
