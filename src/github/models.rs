//! Wire models for the endpoints the scenarios touch.
//!
//! Only the fields the scenarios read are modelled; everything else GitHub
//! returns is ignored on decode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The user behind the credential (`GET /user`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
}

/// Owner block embedded in repository payloads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// A repository (`GET /repos/{owner}/{repo}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    pub owner: RepositoryOwner,
}

/// An issue as returned by the issues endpoints.
///
/// Every field is required on decode. `body` and `active_lock_reason` may be
/// `null` but not absent, so a truncated payload fails instead of reading as
/// "no body" or "unlocked".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueRecord {
    pub number: u64,
    pub title: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub body: Option<String>,
    pub locked: bool,
    #[serde(deserialize_with = "Option::deserialize")]
    pub active_lock_reason: Option<String>,
}

/// Reasons GitHub accepts when locking an issue conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockReason {
    #[serde(rename = "off-topic")]
    OffTopic,
    #[serde(rename = "too heated")]
    TooHeated,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "spam")]
    Spam,
}

impl LockReason {
    /// Wire value of the reason.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OffTopic => "off-topic",
            Self::TooHeated => "too heated",
            Self::Resolved => "resolved",
            Self::Spam => "spam",
        }
    }
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for issue create/update/lock calls.
///
/// Unset fields are left out of the JSON entirely, so a create with only a
/// title sends `{"title": "..."}` and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_reason: Option<LockReason>,
}

impl IssuePayload {
    /// Payload carrying only a title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Payload carrying only a body.
    #[must_use]
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Payload carrying only a lock reason.
    #[must_use]
    pub fn lock(reason: LockReason) -> Self {
        Self {
            lock_reason: Some(reason),
            ..Self::default()
        }
    }
}
