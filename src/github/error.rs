//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub API operations.
///
/// Unexpected HTTP statuses are not errors at this layer: operations hand
/// back an [`ApiResponse`](crate::github::ApiResponse) carrying whatever
/// status GitHub answered with.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error (transport, URI or request building)
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Response body could not be decoded into the expected shape
    #[error("Failed to decode {route} response: {source}")]
    Decode {
        route: String,
        #[source]
        source: serde_json::Error,
    },

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The spawned request task ended without reporting a result
    #[error("Request task was cancelled before completing")]
    TaskCancelled(#[from] tokio::sync::oneshot::error::RecvError),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;
