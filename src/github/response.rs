//! Status-preserving API responses.

use crate::github::error::{GitHubError, GitHubResult};
use http::StatusCode;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// A raw GitHub response: the status code and the body text.
///
/// `T` is the shape the body is expected to have on success. Decoding is
/// deferred to [`ApiResponse::json`] so an unexpected status can be reported
/// even when the body is an error document.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    route: String,
    status: StatusCode,
    body: String,
    _shape: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn new(route: impl Into<String>, status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            status,
            body: body.into(),
            _shape: PhantomData,
        }
    }

    /// Route the request was sent to, relative to the base URI.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw body text (empty for `204 No Content`).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode the body into `T`.
    pub fn json(&self) -> GitHubResult<T> {
        serde_json::from_str(&self.body).map_err(|source| GitHubError::Decode {
            route: self.route.clone(),
            source,
        })
    }
}
