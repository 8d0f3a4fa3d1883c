//! Session context and the values threaded between scenarios.

use crate::github::{GitHubClient, GitHubResult};
use crate::scenario::config::ScenarioConfig;
use std::fmt;

/// Everything a scenario needs that stays fixed for the whole run.
#[derive(Debug, Clone)]
pub struct SessionContext {
    client: GitHubClient,
    config: ScenarioConfig,
}

impl SessionContext {
    #[must_use]
    pub fn new(client: GitHubClient, config: ScenarioConfig) -> Self {
        Self { client, config }
    }

    /// Build the GitHub client from the config's credential and base URI.
    pub fn from_config(config: ScenarioConfig) -> GitHubResult<Self> {
        let client = GitHubClient::builder()
            .personal_token(config.token.clone())
            .base_uri(config.base_uri.clone())
            .build()?;
        Ok(Self::new(client, config))
    }

    #[must_use]
    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    #[must_use]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.config.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.config.repo
    }
}

/// Login of the user behind the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub login: String,
}

/// Number of the issue a scenario acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueNumber(pub u64);

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issue produced by the create scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: IssueNumber,
}
