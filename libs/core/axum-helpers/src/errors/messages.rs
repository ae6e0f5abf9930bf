//! Fixed summaries used in [`ErrorMessage::message`](super::ErrorMessage).

pub const INVALID_JSON: &str = "Invalid JSON";
pub const MALFORMED_JSON: &str = "Malformed JSON request";
pub const VALIDATION_ERRORS: &str = "Validation Errors";
pub const MISSING_PARAMETERS: &str = "Missing Parameters";
pub const MISMATCH_TYPE: &str = "Mismatch Type";
pub const CONSTRAINT_VIOLATION: &str = "Constraint Violation";
pub const METHOD_NOT_FOUND: &str = "Method Not Found";

/// Content type assumed when a request carries no `Content-Type` header
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Body media types accepted by JSON endpoints
pub const SUPPORTED_MEDIA_TYPES: &[&str] = &["application/json", "application/*+json"];
