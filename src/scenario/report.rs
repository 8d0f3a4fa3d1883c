//! Aggregate outcome of a scenario run.

use crate::scenario::error::ScenarioResult;
use crate::scenario::kind::ScenarioKind;
use log::{info, warn};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Passed,
    Failed(String),
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub kind: ScenarioKind,
    pub status: OutcomeStatus,
}

/// One outcome per reported scenario, in run order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    /// Record the result of a scenario.
    pub fn record<T>(&mut self, kind: ScenarioKind, result: &ScenarioResult<T>) {
        let status = match result {
            Ok(_) => {
                info!("PASS {kind}");
                OutcomeStatus::Passed
            }
            Err(err) => {
                warn!("FAIL {kind}: {err}");
                OutcomeStatus::Failed(err.to_string())
            }
        };
        self.outcomes.push(ScenarioOutcome { kind, status });
    }

    /// Mark every reported scenario after `after` as skipped.
    pub fn skip_remaining(&mut self, after: ScenarioKind, reason: &str) {
        let remaining = ScenarioKind::ALL
            .iter()
            .skip_while(|k| **k != after)
            .skip(1);
        for kind in remaining {
            warn!("SKIP {kind}: {reason}");
            self.outcomes.push(ScenarioOutcome {
                kind: *kind,
                status: OutcomeStatus::Skipped(reason.to_string()),
            });
        }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn outcome(&self, kind: ScenarioKind) -> Option<&OutcomeStatus> {
        self.outcomes
            .iter()
            .find(|o| o.kind == kind)
            .map(|o| &o.status)
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Passed))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Failed(_)))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Skipped(_)))
    }

    /// True when every scenario ran and passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.outcomes.is_empty() && self.failed() == 0 && self.skipped() == 0
    }

    fn count(&self, pred: impl Fn(&OutcomeStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.status {
                OutcomeStatus::Passed => writeln!(f, "  ok      {}", outcome.kind)?,
                OutcomeStatus::Failed(msg) => {
                    writeln!(f, "  FAILED  {}\n          {msg}", outcome.kind)?
                }
                OutcomeStatus::Skipped(why) => {
                    writeln!(f, "  skipped {} ({why})", outcome.kind)?
                }
            }
        }
        write!(
            f,
            "{} passed; {} failed; {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}
