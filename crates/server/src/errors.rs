use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// Category tag for request bodies that failed field validation.
pub const VALIDATION_ERROR: &str = "ValidationError";
/// Category tag for operations whose precondition did not hold (e.g. unknown id).
pub const ILLEGAL_ARGUMENT: &str = "IllegalArgument";
pub const INTERNAL_ERROR: &str = "InternalError";

/// One reported failure. Error responses are a JSON array of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub message: String,
    pub exception_name: String,
}

impl ErrorEntry {
    pub fn field(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_name: Some(field_name.into()), message: message.into(), exception_name: VALIDATION_ERROR.into() }
    }

    /// Validation failure that cannot be tied to a single field (e.g. malformed JSON).
    pub fn unattributed(message: impl Into<String>) -> Self {
        Self { field_name: None, message: message.into(), exception_name: VALIDATION_ERROR.into() }
    }

    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self { field_name: None, message: message.into(), exception_name: ILLEGAL_ARGUMENT.into() }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<ErrorEntry>),
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // not-found stays 400 for wire compatibility with existing clients
            ApiError::Validation(_) | ApiError::IllegalArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn entries(&self) -> Vec<ErrorEntry> {
        match self {
            ApiError::Validation(entries) => entries.clone(),
            ApiError::IllegalArgument(msg) => vec![ErrorEntry::illegal_argument(msg.clone())],
            ApiError::Internal(_) => vec![ErrorEntry {
                field_name: None,
                message: "internal server error".into(),
                exception_name: INTERNAL_ERROR.into(),
            }],
        }
    }
}

/// One entry per violated field, ordered by field name.
impl From<ValidationErrors> for ApiError {
    fn from(errs: ValidationErrors) -> Self {
        let mut entries: Vec<ErrorEntry> = errs
            .field_errors()
            .into_iter()
            .flat_map(|(field, list)| {
                let field = field.to_string();
                list.iter()
                    .map(|e| {
                        let msg = e.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string());
                        ErrorEntry::field(field.clone(), msg)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        entries.sort_by(|a, b| a.field_name.cmp(&b.field_name));
        ApiError::Validation(entries)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::IllegalArgument(msg),
            // the title is the only field the lower layers check
            ServiceError::Validation(msg) | ServiceError::Model(models::errors::ModelError::Validation(msg)) => {
                ApiError::Validation(vec![ErrorEntry::field("title", msg)])
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => error!(error = %detail, "request failed"),
            other => warn!(error = %other, "request rejected"),
        }
        (status, Json(self.entries())).into_response()
    }
}
