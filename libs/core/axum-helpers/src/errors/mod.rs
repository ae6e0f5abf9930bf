pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Wire format of [`ErrorMessage::timestamp`] (`dd-MM-yyyy hh:mm:ss`, 12-hour clock)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M:%S";

/// Body returned for every failed request.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": 404,
///   "timestamp": "14-10-2026 03:12:45",
///   "message": "User not found for id: 999",
///   "description": ["uri=/api/users/999"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorMessage {
    /// HTTP status code
    pub status: u16,
    #[serde(serialize_with = "serialize_timestamp")]
    #[schema(value_type = String, example = "14-10-2026 03:12:45")]
    pub timestamp: NaiveDateTime,
    pub message: String,
    /// Ordered details, possibly empty
    pub description: Vec<String>,
}

fn serialize_timestamp<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
}

/// Request context attached to 404 and 500 payloads (`uri=/api/users/7`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescription(String);

impl RequestDescription {
    pub fn from_uri(uri: &Uri) -> Self {
        Self(format!("uri={}", uri.path()))
    }
}

impl fmt::Display for RequestDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One rejected field of a request body
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.field, self.message)
    }
}

/// Every failure a request can end in.
///
/// Handlers and extractors return this; [`IntoResponse`] renders it into an
/// [`ErrorMessage`] and [`handlers::translate_errors`] completes the payload
/// with the request description.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{content_type} media type is not supported")]
    UnsupportedMediaType {
        content_type: String,
        supported: Vec<String>,
    },

    #[error("{0}")]
    MalformedBody(String),

    #[error("{} invalid field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("{0} parameter is missing")]
    MissingParameter(String),

    #[error("{0}")]
    TypeMismatch(String),

    #[error("{0}")]
    ConstraintViolation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Could not find the {method} method for URL {url}")]
    NoHandler { method: String, url: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map a body extraction failure, given the `Content-Type` the request carried
    pub fn from_json_rejection(rejection: JsonRejection, content_type: Option<&str>) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType {
                content_type: content_type
                    .unwrap_or(messages::DEFAULT_CONTENT_TYPE)
                    .to_string(),
                supported: messages::SUPPORTED_MEDIA_TYPES
                    .iter()
                    .map(|t| t.to_string())
                    .collect(),
            },
            other => ApiError::MalformedBody(other.body_text()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// The summary line of the rendered payload
    pub fn message(&self) -> String {
        match self {
            ApiError::UnsupportedMediaType { .. } => messages::INVALID_JSON.to_string(),
            ApiError::MalformedBody(_) => messages::MALFORMED_JSON.to_string(),
            ApiError::Validation(_) => messages::VALIDATION_ERRORS.to_string(),
            ApiError::MissingParameter(_) => messages::MISSING_PARAMETERS.to_string(),
            ApiError::TypeMismatch(_) => messages::MISMATCH_TYPE.to_string(),
            ApiError::ConstraintViolation(_) => messages::CONSTRAINT_VIOLATION.to_string(),
            ApiError::NoHandler { .. } => messages::METHOD_NOT_FOUND.to_string(),
            ApiError::NotFound(msg) | ApiError::Internal(msg) => msg.clone(),
        }
    }

    /// Detail lines; 404 and 500 carry the request description when known
    pub fn description(&self, request: Option<&RequestDescription>) -> Vec<String> {
        match self {
            ApiError::UnsupportedMediaType {
                content_type,
                supported,
            } => vec![format!(
                "{} media type is not supported. Supported media types are {}",
                content_type,
                supported.join(", ")
            )],
            ApiError::Validation(violations) => {
                violations.iter().map(|v| v.to_string()).collect()
            }
            ApiError::MalformedBody(_)
            | ApiError::MissingParameter(_)
            | ApiError::TypeMismatch(_)
            | ApiError::ConstraintViolation(_)
            | ApiError::NoHandler { .. } => vec![self.to_string()],
            ApiError::NotFound(_) | ApiError::Internal(_) => {
                request.map(|r| vec![r.to_string()]).unwrap_or_default()
            }
        }
    }

    pub fn to_error_message(&self, request: Option<&RequestDescription>) -> ErrorMessage {
        ErrorMessage {
            status: self.status().as_u16(),
            timestamp: Local::now().naive_local(),
            message: self.message(),
            description: self.description(request),
        }
    }

    /// Render without touching response extensions
    pub fn render(&self, request: Option<&RequestDescription>) -> Response {
        (self.status(), Json(self.to_error_message(request))).into_response()
    }

    fn log(&self) {
        match self {
            ApiError::Internal(msg) => {
                tracing::error!(status = 500, "Internal server error: {}", msg);
            }
            ApiError::NotFound(msg) => {
                tracing::info!(status = 404, "Not found: {}", msg);
            }
            other => {
                tracing::warn!(status = 400, kind = %other.message(), "Bad request: {}", other);
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let mut response = self.render(None);
        // Picked up by `translate_errors`, which knows the request URI
        response.extensions_mut().insert(self);
        response
    }
}

/// JSON key for a Rust field name; request bodies use camelCase keys
fn wire_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !name.is_empty();
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }
    name
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                let field = wire_field_name(field);
                errs.iter().map(move |err| FieldViolation {
                    field: field.clone(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        violations.sort();

        ApiError::Validation(violations)
    }
}
