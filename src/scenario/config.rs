//! Configuration for a scenario run
//!
//! Defaults are compiled in; the credential comes from the environment and
//! an optional TOML file can override everything else.

use crate::github::{DEFAULT_BASE_URI, LockReason};
use crate::scenario::error::ConfigError;
use crate::scenario::target::TargetSelector;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable holding the personal access token.
pub const TOKEN_ENV_VAR: &str = "ACCESS_TOKEN";
/// Environment variable naming an optional TOML overrides file.
pub const CONFIG_PATH_ENV_VAR: &str = "ISSUE_SCENARIOS_CONFIG";

pub const DEFAULT_OWNER: &str = "TheLordJuanes";
pub const DEFAULT_REPO: &str = "axios-api-testing-exercise";
pub const DEFAULT_ISSUE_TITLE: &str = "Found a bug";
pub const DEFAULT_NEW_BODY: &str = "This is the new body of the issue";

/// Configuration for a scenario run
#[derive(Clone)]
pub struct ScenarioConfig {
    pub token: String,
    pub base_uri: String,
    pub owner: String,
    pub repo: String,
    /// Title sent by the create scenario
    pub issue_title: String,
    /// Body written by the update scenario
    pub new_body: String,
    pub lock_reason: LockReason,
    pub target: TargetSelector,
}

impl ScenarioConfig {
    /// Compiled-in defaults around the given credential.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_uri: DEFAULT_BASE_URI.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            issue_title: DEFAULT_ISSUE_TITLE.to_string(),
            new_body: DEFAULT_NEW_BODY.to_string(),
            lock_reason: LockReason::Resolved,
            target: TargetSelector::default(),
        }
    }

    /// Read the credential from [`TOKEN_ENV_VAR`] and apply the file named by
    /// [`CONFIG_PATH_ENV_VAR`], if set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR).ok();
        let overrides_path = std::env::var_os(CONFIG_PATH_ENV_VAR);
        Self::from_parts(token, overrides_path.as_deref().map(Path::new))
    }

    /// Same as [`ScenarioConfig::from_env`] with the environment values
    /// passed in.
    pub fn from_parts(
        token: Option<String>,
        overrides_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken { var: TOKEN_ENV_VAR })?;

        let config = Self::new(token);
        match overrides_path {
            Some(path) => Ok(config.apply(ConfigOverrides::from_file(path)?)),
            None => Ok(config),
        }
    }

    /// Overlay every field the overrides set.
    #[must_use]
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(base_uri) = overrides.base_uri {
            self.base_uri = base_uri;
        }
        if let Some(owner) = overrides.owner {
            self.owner = owner;
        }
        if let Some(repo) = overrides.repo {
            self.repo = repo;
        }
        if let Some(title) = overrides.issue_title {
            self.issue_title = title;
        }
        if let Some(body) = overrides.new_body {
            self.new_body = body;
        }
        if let Some(reason) = overrides.lock_reason {
            self.lock_reason = reason;
        }
        if let Some(target) = overrides.target {
            self.target = target;
        }
        self
    }

    #[must_use]
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = uri.into();
        self
    }

    #[must_use]
    pub fn with_repository(mut self, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.repo = repo.into();
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetSelector) -> Self {
        self.target = target;
        self
    }
}

impl fmt::Debug for ScenarioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioConfig")
            .field("token", &"<redacted>")
            .field("base_uri", &self.base_uri)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("issue_title", &self.issue_title)
            .field("new_body", &self.new_body)
            .field("lock_reason", &self.lock_reason)
            .field("target", &self.target)
            .finish()
    }
}

/// Optional overrides read from a TOML file.
///
/// ```toml
/// owner = "octocat"
/// repo = "hello-world"
/// lock_reason = "spam"
///
/// [target]
/// strategy = "by_title"
/// title = "Found a bug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub base_uri: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub issue_title: Option<String>,
    pub new_body: Option<String>,
    pub lock_reason: Option<LockReason>,
    pub target: Option<TargetSelector>,
}

impl ConfigOverrides {
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
