// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Error kinds surfaced by query compilation, the search engine collaborator,
//! and response projection.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The request is malformed; retrying it unchanged will fail again.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The search engine could not be reached, timed out, or rejected the call.
    #[error("Search unavailable: {0}")]
    SearchUnavailable(String),

    /// A hit payload did not match the expected document shape.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Stable machine-readable kind, used in HTTP error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidRequest(_) => "invalid_request",
            SearchError::SearchUnavailable(_) => "search_unavailable",
            SearchError::MalformedDocument(_) => "malformed_document",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            SearchError::SearchUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SearchError::MalformedDocument(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// JSON body returned for failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<JsonRejection> for SearchError {
    fn from(rejection: JsonRejection) -> Self {
        SearchError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        tracing::warn!(kind = self.kind(), error = %self, "Request failed");
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SearchError::InvalidRequest("page must be >= 1".to_string());
        assert_eq!(error.to_string(), "Invalid request: page must be >= 1");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SearchError::InvalidRequest(String::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SearchError::SearchUnavailable(String::new()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            SearchError::MalformedDocument(String::new()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_into_response_uses_status_code() {
        let response = SearchError::SearchUnavailable("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
