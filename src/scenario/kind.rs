//! Scenario identifiers.

use std::fmt;

/// One named scenario of the issue flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    ResolveIdentity,
    VerifyRepository,
    CreateIssue,
    /// Precondition of the issue-manipulating scenarios; never reported on
    /// its own.
    RefreshTarget,
    UpdateIssueBody,
    LockIssue,
    UnlockIssue,
}

impl ScenarioKind {
    /// Reported scenarios, in run order.
    pub const ALL: [ScenarioKind; 6] = [
        ScenarioKind::ResolveIdentity,
        ScenarioKind::VerifyRepository,
        ScenarioKind::CreateIssue,
        ScenarioKind::UpdateIssueBody,
        ScenarioKind::LockIssue,
        ScenarioKind::UnlockIssue,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolveIdentity => "resolve identity",
            Self::VerifyRepository => "verify repository",
            Self::CreateIssue => "create issue",
            Self::RefreshTarget => "refresh target issue",
            Self::UpdateIssueBody => "update issue body",
            Self::LockIssue => "lock issue",
            Self::UnlockIssue => "unlock issue",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
