//! Scenario and configuration error types

use crate::github::GitHubError;
use crate::scenario::kind::ScenarioKind;
use http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Why a scenario failed.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// GitHub answered with a status other than the documented one
    #[error("{step}: expected HTTP {expected}, got {actual}")]
    UnexpectedStatus {
        step: ScenarioKind,
        expected: StatusCode,
        actual: StatusCode,
    },

    /// A response field did not hold the expected value
    #[error("{step}: `{field}` expected {expected}, got {actual}")]
    Mismatch {
        step: ScenarioKind,
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// The repository has no issues for a dependent scenario to act on
    #[error("{owner}/{repo} has no issues to act on")]
    EmptyIssueList { owner: String, repo: String },

    /// Issues were listed but none matched the target selector
    #[error("no listed issue matches target selector `{selector}`")]
    TargetNotFound { selector: String },

    /// Transport or client failure
    #[error(transparent)]
    Api(#[from] GitHubError),
}

/// Convenience result alias for scenario steps
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Failure to assemble a [`ScenarioConfig`](crate::scenario::ScenarioConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {var} is not set or empty")]
    MissingToken { var: &'static str },

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
