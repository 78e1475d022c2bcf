use std::error::Error as _;

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Deserializer};

use crate::errors::{ApiError, ErrorEntry};

/// `axum::Json` whose rejections are reported as error entries.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Path parameters of `/api/contents/:id`.
#[derive(Debug, Deserialize)]
pub struct ContentId {
    pub id: i64,
}

/// `?yearOfRelease=` with no value counts as absent.
pub fn year_param<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("yearOfRelease: {e}"))),
    }
}

/// Split a serde message of the form `field: detail`.
fn field_entry(detail: &str) -> ErrorEntry {
    match detail.split_once(": ") {
        Some((field, message)) if !field.is_empty() && !field.contains(char::is_whitespace) => {
            ErrorEntry::field(field, message)
        }
        _ => ErrorEntry::unattributed(detail),
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        let detail = r.source().map(ToString::to_string).unwrap_or_else(|| r.body_text());
        ApiError::Validation(vec![field_entry(&detail)])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        let detail = r.source().map(ToString::to_string).unwrap_or_else(|| r.body_text());
        ApiError::Validation(vec![field_entry(&detail)])
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        let entry = match &r {
            PathRejection::FailedToDeserializePathParams(e) => match e.kind() {
                ErrorKind::ParseErrorAtKey { key, value, expected_type } => {
                    ErrorEntry::field(key.clone(), format!("cannot parse {value:?} as {expected_type}"))
                }
                ErrorKind::InvalidUtf8InPathParam { key } => ErrorEntry::field(key.clone(), e.kind().to_string()),
                other => ErrorEntry::unattributed(other.to_string()),
            },
            // route and extractor disagree; not the caller's fault
            _ => return ApiError::Internal(r.body_text()),
        };
        ApiError::Validation(vec![entry])
    }
}
