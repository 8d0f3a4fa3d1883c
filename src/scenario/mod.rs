//! Scenario runner for the GitHub issue flow
//!
//! Resolves the authenticated identity, checks the repository, creates an
//! issue, then edits, locks and unlocks a target issue, asserting on HTTP
//! status and payload at every step.

pub mod config;
pub mod context;
pub mod error;
pub mod expect;
pub mod kind;
pub mod report;
pub mod runner;
pub mod steps;
pub mod target;

pub use config::{ConfigOverrides, ScenarioConfig};
pub use context::{CreatedIssue, Identity, IssueNumber, SessionContext};
pub use error::{ConfigError, ScenarioError, ScenarioResult};
pub use kind::ScenarioKind;
pub use report::{OutcomeStatus, RunReport, ScenarioOutcome};
pub use runner::ScenarioRunner;
pub use target::TargetSelector;
