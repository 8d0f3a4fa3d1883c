//! Sequential execution of the issue flow.

use crate::github::GitHubResult;
use crate::scenario::config::ScenarioConfig;
use crate::scenario::context::SessionContext;
use crate::scenario::kind::ScenarioKind;
use crate::scenario::report::RunReport;
use crate::scenario::steps;
use log::info;

/// Runs every scenario in order, one request at a time.
///
/// A failed identity resolution aborts the run; any other failure is
/// recorded and the run moves on to the next scenario.
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    ctx: SessionContext,
}

impl ScenarioRunner {
    #[must_use]
    pub fn new(ctx: SessionContext) -> Self {
        Self { ctx }
    }

    pub fn from_config(config: ScenarioConfig) -> GitHubResult<Self> {
        SessionContext::from_config(config).map(Self::new)
    }

    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub async fn run(&self) -> RunReport {
        let ctx = &self.ctx;
        let mut report = RunReport::default();
        info!(
            "running issue scenarios against {}/{} at {}",
            ctx.owner(),
            ctx.repo(),
            ctx.config().base_uri
        );

        let identity = steps::resolve_identity(ctx).await;
        report.record(ScenarioKind::ResolveIdentity, &identity);
        let Ok(identity) = identity else {
            report.skip_remaining(
                ScenarioKind::ResolveIdentity,
                "authenticated identity could not be resolved",
            );
            return report;
        };

        let repository = steps::verify_repository(ctx, &identity).await;
        report.record(ScenarioKind::VerifyRepository, &repository);

        let created = steps::create_issue(ctx).await;
        report.record(ScenarioKind::CreateIssue, &created);
        let created_issue = created.ok();
        let created = created_issue.as_ref();

        let updated = async {
            let target = steps::refresh_target(ctx, created).await?;
            steps::update_issue_body(ctx, target).await
        }
        .await;
        report.record(ScenarioKind::UpdateIssueBody, &updated);

        let locked = async {
            let target = steps::refresh_target(ctx, created).await?;
            steps::lock_issue(ctx, target).await
        }
        .await;
        report.record(ScenarioKind::LockIssue, &locked);

        let unlocked = async {
            let target = steps::refresh_target(ctx, created).await?;
            steps::unlock_issue(ctx, target).await
        }
        .await;
        report.record(ScenarioKind::UnlockIssue, &unlocked);

        info!(
            "run finished: {} passed, {} failed",
            report.passed(),
            report.failed()
        );
        report
    }
}
