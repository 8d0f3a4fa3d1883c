//! Choosing which listed issue the dependent scenarios act on.

use crate::github::IssueRecord;
use crate::scenario::context::{CreatedIssue, IssueNumber};
use serde::Deserialize;
use std::fmt;

/// Policy for picking the target issue out of the repository's issue list.
///
/// GitHub does not promise a stable list order, so `FirstListed` only picks
/// the newest open issue by convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum TargetSelector {
    /// First entry of the list
    #[default]
    FirstListed,
    /// First entry whose title matches exactly
    ByTitle { title: String },
    /// A fixed issue number, which must be present in the list
    Number { number: u64 },
    /// The issue created earlier in the same run, which must be present in
    /// the list
    Created,
}

impl TargetSelector {
    /// Pick the target from a listed page of issues.
    #[must_use]
    pub fn select(
        &self,
        issues: &[IssueRecord],
        created: Option<&CreatedIssue>,
    ) -> Option<IssueNumber> {
        let listed = |number: u64| issues.iter().any(|i| i.number == number);
        match self {
            Self::FirstListed => issues.first().map(|i| IssueNumber(i.number)),
            Self::ByTitle { title } => issues
                .iter()
                .find(|i| &i.title == title)
                .map(|i| IssueNumber(i.number)),
            Self::Number { number } => listed(*number).then_some(IssueNumber(*number)),
            Self::Created => created.map(|c| c.number).filter(|n| listed(n.0)),
        }
    }
}

impl fmt::Display for TargetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstListed => f.write_str("first listed"),
            Self::ByTitle { title } => write!(f, "title {title:?}"),
            Self::Number { number } => write!(f, "number #{number}"),
            Self::Created => f.write_str("created in this run"),
        }
    }
}
