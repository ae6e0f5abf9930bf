//! JSON extractor with automatic validation using the validator crate.

use crate::errors::ApiError;
use axum::{
    extract::{FromRequest, Json, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Body failures map onto [`ApiError`]: a non-JSON content type becomes
/// `UnsupportedMediaType`, a body that does not deserialize becomes
/// `MalformedBody`, and failed constraints become `Validation`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.email)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::from_json_rejection(rejection, content_type.as_deref()))?;

        data.validate()?;

        Ok(ValidatedJson(data))
    }
}
