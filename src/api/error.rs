use crate::validation::Issue;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Every way a request can fail. Each variant maps to one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body failed its schema, 400 with field-level detail
    #[error("{message}")]
    Validation {
        message: &'static str,
        errors: Vec<Issue>,
    },

    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    /// Anything else. Only `message` reaches the client.
    #[error("{message}: {cause:#}")]
    Internal {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    /// For `map_err` on storage calls.
    pub fn internal(message: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |cause| Self::Internal { message, cause }
    }

    pub fn validation(message: &'static str) -> impl FnOnce(Vec<Issue>) -> Self {
        move |errors| Self::Validation { message, errors }
    }

    /// The body was not JSON at all.
    pub fn malformed(message: &'static str) -> impl FnOnce(JsonRejection) -> Self {
        move |rejection| Self::Validation {
            message,
            errors: vec![Issue::new("", rejection.body_text())],
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<Issue>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation { message, errors } => {
                warn!(issues = errors.len(), "{message}");
                ErrorBody {
                    message,
                    errors: Some(errors),
                }
            }
            Self::BadRequest(message) | Self::NotFound(message) => ErrorBody {
                message,
                errors: None,
            },
            Self::Internal { message, cause } => {
                error!(error = %format!("{cause:#}"), "{message}");
                ErrorBody {
                    message,
                    errors: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
