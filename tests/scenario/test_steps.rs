//! Tests for individual scenarios against the fake server.

use crate::common::{FakeGitHub, LOGIN, REPO, TOKEN};
use github_issue_scenarios::scenario::{
    CreatedIssue, Identity, IssueNumber, ScenarioError, ScenarioKind, SessionContext, steps,
};
use github_issue_scenarios::{GitHubError, TargetSelector};
use http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn context(fake: &FakeGitHub) -> SessionContext {
    SessionContext::from_config(fake.config()).unwrap()
}

/// Serve `body` for `GET` on one issue, ahead of the fake's own handler.
async fn override_issue_read(fake: &FakeGitHub, number: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{LOGIN}/{REPO}/issues/{number}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .with_priority(1)
        .mount(&fake.server)
        .await;
}

fn mismatched_field(err: &ScenarioError) -> Option<(ScenarioKind, &'static str)> {
    match err {
        ScenarioError::Mismatch { step, field, .. } => Some((*step, *field)),
        _ => None,
    }
}

#[tokio::test]
async fn test_resolve_identity() {
    let fake = FakeGitHub::start().await;
    let ctx = context(&fake);

    let identity = steps::resolve_identity(&ctx).await.unwrap();
    assert_eq!(identity.login, LOGIN);
    // Resolving again yields the same login.
    assert_eq!(steps::resolve_identity(&ctx).await.unwrap(), identity);
}

#[tokio::test]
async fn test_resolve_identity_with_bad_token() {
    let fake = FakeGitHub::start().await;
    let mut config = fake.config();
    config.token = format!("{TOKEN}-revoked");
    let ctx = SessionContext::from_config(config).unwrap();

    // The fake only answers correctly authenticated requests.
    let err = steps::resolve_identity(&ctx).await.unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::UnexpectedStatus {
            step: ScenarioKind::ResolveIdentity,
            expected,
            actual,
        } if expected == StatusCode::OK && actual == StatusCode::NOT_FOUND
    ));
}

#[tokio::test]
async fn test_verify_repository_uses_resolved_login() {
    let fake = FakeGitHub::start().await;
    let ctx = context(&fake);

    let repo = steps::verify_repository(&ctx, &Identity { login: LOGIN.into() })
        .await
        .unwrap();
    assert_eq!(repo.full_name, format!("{LOGIN}/{REPO}"));

    let err = steps::verify_repository(&ctx, &Identity { login: "someone-else".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ScenarioError::UnexpectedStatus { .. }));
}

#[tokio::test]
async fn test_create_issue_with_title_only() {
    let fake = FakeGitHub::start().await;
    let ctx = context(&fake);

    let created = steps::create_issue(&ctx).await.unwrap();
    let issue = fake.issue(created.number.0).unwrap();
    assert_eq!(issue["title"], json!("Found a bug"));
    assert_eq!(issue["body"], json!(null));
}

#[tokio::test]
async fn test_create_issue_rejects_wrong_status() {
    let fake = FakeGitHub::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/repos/{LOGIN}/{REPO}/issues")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 1, "title": "Found a bug", "body": null
        })))
        .with_priority(1)
        .mount(&fake.server)
        .await;

    let err = steps::create_issue(&context(&fake)).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "create issue: expected HTTP 201 Created, got 200 OK"
    );
}

#[tokio::test]
async fn test_create_issue_rejects_unexpected_body() {
    let fake = FakeGitHub::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/repos/{LOGIN}/{REPO}/issues")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 1, "title": "Found a bug", "body": "template text"
        })))
        .with_priority(1)
        .mount(&fake.server)
        .await;

    let err = steps::create_issue(&context(&fake)).await.unwrap_err();
    match err {
        ScenarioError::Mismatch {
            step,
            field,
            expected,
            actual,
        } => {
            assert_eq!(step, ScenarioKind::CreateIssue);
            assert_eq!(field, "body");
            assert_eq!(expected, "None");
            assert_eq!(actual, "Some(\"template text\")");
        }
        other => panic!("expected Mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_target_on_empty_repository() {
    let fake = FakeGitHub::start().await;

    let err = steps::refresh_target(&context(&fake), None).await.unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::EmptyIssueList { ref owner, ref repo } if owner == LOGIN && repo == REPO
    ));
}

#[tokio::test]
async fn test_refresh_target_uses_selector() {
    let fake = FakeGitHub::start().await;
    let wanted = fake.seed_issue("Found a bug");
    fake.seed_issue("Something newer");

    let ctx = context(&fake);
    assert_eq!(
        steps::refresh_target(&ctx, None).await.unwrap(),
        IssueNumber(wanted + 1)
    );

    let ctx = SessionContext::from_config(fake.config().with_target(TargetSelector::ByTitle {
        title: "Found a bug".into(),
    }))
    .unwrap();
    assert_eq!(
        steps::refresh_target(&ctx, None).await.unwrap(),
        IssueNumber(wanted)
    );

    let ctx = SessionContext::from_config(fake.config().with_target(TargetSelector::Created))
        .unwrap();
    let err = steps::refresh_target(&ctx, None).await.unwrap_err();
    assert!(matches!(err, ScenarioError::TargetNotFound { .. }));

    let created = CreatedIssue {
        number: IssueNumber(wanted),
    };
    assert_eq!(
        steps::refresh_target(&ctx, Some(&created)).await.unwrap(),
        IssueNumber(wanted)
    );
}

#[tokio::test]
async fn test_update_lock_unlock_round_trip() {
    let fake = FakeGitHub::start().await;
    let number = IssueNumber(fake.seed_issue("Found a bug"));
    let ctx = context(&fake);

    let updated = steps::update_issue_body(&ctx, number).await.unwrap();
    assert_eq!(updated.title, "Found a bug");
    assert_eq!(
        updated.body.as_deref(),
        Some("This is the new body of the issue")
    );

    let locked = steps::lock_issue(&ctx, number).await.unwrap();
    assert!(locked.locked);
    assert_eq!(locked.active_lock_reason.as_deref(), Some("resolved"));

    let unlocked = steps::unlock_issue(&ctx, number).await.unwrap();
    assert!(!unlocked.locked);
}

#[tokio::test]
async fn test_lock_detects_unrecorded_reason() {
    let fake = FakeGitHub::start().await;
    let number = fake.seed_issue("Found a bug");
    Mock::given(method("PUT"))
        .and(path(format!("/repos/{LOGIN}/{REPO}/issues/{number}/lock")))
        .respond_with(ResponseTemplate::new(204))
        .with_priority(1)
        .mount(&fake.server)
        .await;

    let err = steps::lock_issue(&context(&fake), IssueNumber(number))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::Mismatch {
            step: ScenarioKind::LockIssue,
            field: "locked",
            ..
        }
    ));
}

#[tokio::test]
async fn test_unlock_rejects_wrong_status() {
    let fake = FakeGitHub::start().await;
    let number = fake.seed_issue("Found a bug");
    Mock::given(method("DELETE"))
        .and(path(format!("/repos/{LOGIN}/{REPO}/issues/{number}/lock")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Must have admin rights to Repository."
        })))
        .with_priority(1)
        .mount(&fake.server)
        .await;

    let err = steps::unlock_issue(&context(&fake), IssueNumber(number))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::UnexpectedStatus {
            expected,
            actual,
            ..
        } if expected == StatusCode::NO_CONTENT && actual == StatusCode::FORBIDDEN
    ));
}

#[tokio::test]
async fn test_update_detects_unchanged_body() {
    let fake = FakeGitHub::start().await;
    let number = fake.seed_issue("Found a bug");
    // Accept the PATCH but leave the issue as it was.
    let stale = fake.issue(number).unwrap();
    Mock::given(method("PATCH"))
        .and(path(format!("/repos/{LOGIN}/{REPO}/issues/{number}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(stale))
        .with_priority(1)
        .mount(&fake.server)
        .await;

    let err = steps::update_issue_body(&context(&fake), IssueNumber(number))
        .await
        .unwrap_err();
    assert_eq!(
        mismatched_field(&err),
        Some((ScenarioKind::UpdateIssueBody, "body"))
    );
}

#[tokio::test]
async fn test_update_detects_title_drift() {
    let fake = FakeGitHub::start().await;
    let number = fake.seed_issue("Found a bug");
    override_issue_read(
        &fake,
        number,
        json!({
            "number": number,
            "title": "Renamed meanwhile",
            "body": "This is the new body of the issue",
            "locked": false,
            "active_lock_reason": null,
        }),
    )
    .await;

    let err = steps::update_issue_body(&context(&fake), IssueNumber(number))
        .await
        .unwrap_err();
    match err {
        ScenarioError::Mismatch {
            step,
            field,
            expected,
            actual,
        } => {
            assert_eq!(step, ScenarioKind::UpdateIssueBody);
            assert_eq!(field, "title");
            assert_eq!(expected, "\"Found a bug\"");
            assert_eq!(actual, "\"Renamed meanwhile\"");
        }
        other => panic!("expected Mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lock_detects_wrong_reason() {
    let fake = FakeGitHub::start().await;
    let number = fake.seed_issue("Found a bug");
    override_issue_read(
        &fake,
        number,
        json!({
            "number": number,
            "title": "Found a bug",
            "body": null,
            "locked": true,
            "active_lock_reason": "spam",
        }),
    )
    .await;

    let err = steps::lock_issue(&context(&fake), IssueNumber(number))
        .await
        .unwrap_err();
    assert_eq!(
        mismatched_field(&err),
        Some((ScenarioKind::LockIssue, "active_lock_reason"))
    );
}

#[tokio::test]
async fn test_unlock_detects_issue_still_locked() {
    let fake = FakeGitHub::start().await;
    let number = IssueNumber(fake.seed_issue("Found a bug"));
    let ctx = context(&fake);
    steps::lock_issue(&ctx, number).await.unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/repos/{LOGIN}/{REPO}/issues/{}/lock", number.0)))
        .respond_with(ResponseTemplate::new(204))
        .with_priority(1)
        .mount(&fake.server)
        .await;

    let err = steps::unlock_issue(&ctx, number).await.unwrap_err();
    assert_eq!(
        mismatched_field(&err),
        Some((ScenarioKind::UnlockIssue, "locked"))
    );
    assert_eq!(fake.issue(number.0).unwrap()["locked"], json!(true));
}

#[tokio::test]
async fn test_unlock_rejects_issue_without_lock_state() {
    let fake = FakeGitHub::start().await;
    let number = fake.seed_issue("Found a bug");
    override_issue_read(&fake, number, json!({ "number": number, "title": "Found a bug" })).await;

    let err = steps::unlock_issue(&context(&fake), IssueNumber(number))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::Api(GitHubError::Decode { ref route, .. })
            if route == &format!("/repos/{LOGIN}/{REPO}/issues/{number}")
    ));
}
