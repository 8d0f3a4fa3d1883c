//! The scenarios of the issue flow.
//!
//! Each scenario takes what it depends on as arguments and returns what
//! later scenarios need, so ordering requirements are visible in the
//! signatures.

use crate::github::{
    ApiResponse, GitHubError, GitHubResult, IssuePayload, IssueRecord, RepositoryRecord,
    UpdateIssueRequest,
};
use crate::runtime::AsyncTask;
use crate::scenario::context::{CreatedIssue, Identity, IssueNumber, SessionContext};
use crate::scenario::error::{ScenarioError, ScenarioResult};
use crate::scenario::expect::{expect_field, expect_status};
use crate::scenario::kind::ScenarioKind;
use http::StatusCode;
use log::info;

/// Await a spawned API call, folding task cancellation into `GitHubError`.
async fn settle<T>(task: AsyncTask<GitHubResult<T>>) -> ScenarioResult<T>
where
    T: Send + 'static,
{
    Ok(task.await.map_err(GitHubError::from)??)
}

/// `GET /user`, expecting 200. Yields the login for later scenarios.
pub async fn resolve_identity(ctx: &SessionContext) -> ScenarioResult<Identity> {
    let step = ScenarioKind::ResolveIdentity;
    let response = settle(ctx.client().get_me()).await?;
    expect_status(step, &response, StatusCode::OK)?;

    let user = response.json()?;
    info!("{step}: authenticated as {}", user.login);
    Ok(Identity { login: user.login })
}

/// `GET /repos/{login}/{repo}`, expecting 200.
pub async fn verify_repository(
    ctx: &SessionContext,
    identity: &Identity,
) -> ScenarioResult<RepositoryRecord> {
    let step = ScenarioKind::VerifyRepository;
    let response = settle(
        ctx.client()
            .get_repository(identity.login.as_str(), ctx.repo()),
    )
    .await?;
    expect_status(step, &response, StatusCode::OK)?;

    let repository = response.json()?;
    info!("{step}: found {}/{}", identity.login, repository.name);
    Ok(repository)
}

/// `POST /repos/{owner}/{repo}/issues` with only a title, expecting 201 and
/// a created issue with the same title and no body.
pub async fn create_issue(ctx: &SessionContext) -> ScenarioResult<CreatedIssue> {
    let step = ScenarioKind::CreateIssue;
    let title = ctx.config().issue_title.as_str();
    let response = settle(ctx.client().create_issue(
        ctx.owner(),
        ctx.repo(),
        IssuePayload::title(title),
    ))
    .await?;
    expect_status(step, &response, StatusCode::CREATED)?;

    let issue = response.json()?;
    expect_field(step, "title", title, issue.title.as_str())?;
    expect_field(step, "body", &None, &issue.body)?;

    info!("{step}: created issue #{} {:?}", issue.number, issue.title);
    Ok(CreatedIssue {
        number: IssueNumber(issue.number),
    })
}

/// `GET /repos/{owner}/{repo}/issues`, expecting 200 and a non-empty list,
/// then pick the target with the configured selector.
pub async fn refresh_target(
    ctx: &SessionContext,
    created: Option<&CreatedIssue>,
) -> ScenarioResult<IssueNumber> {
    let step = ScenarioKind::RefreshTarget;
    let response = settle(ctx.client().list_issues(ctx.owner(), ctx.repo())).await?;
    expect_status(step, &response, StatusCode::OK)?;

    let issues = response.json()?;
    if issues.is_empty() {
        return Err(ScenarioError::EmptyIssueList {
            owner: ctx.owner().to_string(),
            repo: ctx.repo().to_string(),
        });
    }

    let selector = &ctx.config().target;
    let target = selector
        .select(&issues, created)
        .ok_or_else(|| ScenarioError::TargetNotFound {
            selector: selector.to_string(),
        })?;
    info!("{step}: targeting {target} ({selector})");
    Ok(target)
}

/// Confirmatory read of the target issue, expecting 200.
async fn read_issue(
    ctx: &SessionContext,
    step: ScenarioKind,
    target: IssueNumber,
) -> ScenarioResult<IssueRecord> {
    let response = settle(ctx.client().get_issue(ctx.owner(), ctx.repo(), target.0)).await?;
    expect_status(step, &response, StatusCode::OK)?;
    Ok(response.json()?)
}

/// `PATCH` a new body onto the target, expecting 200; a re-read must show the
/// new body and the title the PATCH returned.
pub async fn update_issue_body(
    ctx: &SessionContext,
    target: IssueNumber,
) -> ScenarioResult<IssueRecord> {
    let step = ScenarioKind::UpdateIssueBody;
    let new_body = ctx.config().new_body.clone();
    let response: ApiResponse<IssueRecord> = settle(ctx.client().update_issue(
        UpdateIssueRequest {
            owner: ctx.owner().to_string(),
            repo: ctx.repo().to_string(),
            issue_number: target.0,
            payload: IssuePayload::body(new_body.as_str()),
        },
    ))
    .await?;
    expect_status(step, &response, StatusCode::OK)?;
    let patched = response.json()?;

    let current = read_issue(ctx, step, target).await?;
    expect_field(step, "title", patched.title.as_str(), current.title.as_str())?;
    expect_field(step, "body", &Some(new_body), &current.body)?;

    info!("{step}: {target} body updated");
    Ok(current)
}

/// `PUT .../lock` with the configured reason, expecting 204; a re-read must
/// show the issue locked with that reason.
pub async fn lock_issue(ctx: &SessionContext, target: IssueNumber) -> ScenarioResult<IssueRecord> {
    let step = ScenarioKind::LockIssue;
    let reason = ctx.config().lock_reason;
    let response = settle(ctx.client().lock_issue(
        ctx.owner(),
        ctx.repo(),
        target.0,
        Some(reason),
    ))
    .await?;
    expect_status(step, &response, StatusCode::NO_CONTENT)?;

    let current = read_issue(ctx, step, target).await?;
    expect_field(step, "locked", &true, &current.locked)?;
    expect_field(
        step,
        "active_lock_reason",
        &Some(reason.as_str()),
        &current.active_lock_reason.as_deref(),
    )?;

    info!("{step}: {target} locked as {reason}");
    Ok(current)
}

/// `DELETE .../lock`, expecting 204; a re-read must show the issue unlocked.
pub async fn unlock_issue(
    ctx: &SessionContext,
    target: IssueNumber,
) -> ScenarioResult<IssueRecord> {
    let step = ScenarioKind::UnlockIssue;
    let response = settle(ctx.client().unlock_issue(ctx.owner(), ctx.repo(), target.0)).await?;
    expect_status(step, &response, StatusCode::NO_CONTENT)?;

    let current = read_issue(ctx, step, target).await?;
    expect_field(step, "locked", &false, &current.locked)?;

    info!("{step}: {target} unlocked");
    Ok(current)
}
