//! Reusable OpenAPI response types for the error payloads.

use super::ErrorMessage;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "timestamp": "14-10-2026 03:12:45",
        "message": "connection refused",
        "description": ["uri=/api/users"]
    })
)]
pub struct InternalServerErrorResponse(pub ErrorMessage);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "timestamp": "14-10-2026 03:12:45",
        "message": "Validation Errors",
        "description": ["email : must be a well-formed email address"]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorMessage);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed Body",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "timestamp": "14-10-2026 03:12:45",
        "message": "Malformed JSON request",
        "description": ["Failed to parse the request body as JSON: EOF while parsing an object at line 1 column 1"]
    })
)]
pub struct BadRequestMalformedResponse(pub ErrorMessage);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid Id",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "timestamp": "14-10-2026 03:12:45",
        "message": "Mismatch Type",
        "description": ["Failed to convert 'abc' to i64: invalid digit found in string"]
    })
)]
pub struct BadRequestIdResponse(pub ErrorMessage);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "timestamp": "14-10-2026 03:12:45",
        "message": "User not found for id: 999",
        "description": ["uri=/api/users/999"]
    })
)]
pub struct NotFoundResponse(pub ErrorMessage);
