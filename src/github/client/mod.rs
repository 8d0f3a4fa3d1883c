//! GitHub API client wrapper
//!
//! Provides clean API for the issue endpoints without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use github_issue_scenarios::GitHubClient;
//! use github_issue_scenarios::github::IssuePayload;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::builder().personal_token("ghp_...").build()?;
//!
//!     let created = gh
//!         .create_issue("owner", "repo", IssuePayload::title("Issue title"))
//!         .await??;
//!     println!("{} -> {}", created.route(), created.status());
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use http::header::AUTHORIZATION;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use std::sync::Arc;

mod issues;
mod repositories;
mod users;

/// Public GitHub REST endpoint.
pub const DEFAULT_BASE_URI: &str = "https://api.github.com";

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Every request carries `Authorization: token <credential>`. Octocrab's
/// retry layer is switched off, so each call is sent exactly once.
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (GitHub Enterprise, or a local fake)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| GitHubError::ClientSetup("personal token is required".into()))?;

        let mut builder = Octocrab::builder()
            .add_header(AUTHORIZATION, format!("token {token}"))
            .add_retry_config(RetryConfig::None);

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(uri.as_str())
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
