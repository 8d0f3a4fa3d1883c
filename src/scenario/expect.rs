//! Expectations over API responses.

use crate::github::ApiResponse;
use crate::scenario::error::{ScenarioError, ScenarioResult};
use crate::scenario::kind::ScenarioKind;
use http::StatusCode;
use std::fmt::Debug;

/// Fail unless the response carries exactly `expected`.
pub fn expect_status<T>(
    step: ScenarioKind,
    response: &ApiResponse<T>,
    expected: StatusCode,
) -> ScenarioResult<()> {
    let actual = response.status();
    if actual == expected {
        Ok(())
    } else {
        log::debug!("{step}: {} answered {actual}: {}", response.route(), response.text());
        Err(ScenarioError::UnexpectedStatus {
            step,
            expected,
            actual,
        })
    }
}

/// Fail unless `actual == expected`; both values are rendered with `Debug`
/// so `None` and `Some("")` stay distinguishable in the report.
pub fn expect_field<V>(
    step: ScenarioKind,
    field: &'static str,
    expected: &V,
    actual: &V,
) -> ScenarioResult<()>
where
    V: PartialEq + Debug + ?Sized,
{
    if actual == expected {
        Ok(())
    } else {
        Err(ScenarioError::Mismatch {
            step,
            field,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}
