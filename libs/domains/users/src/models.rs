use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored user record.
///
/// The same shape is the create request body: an `id` sent by the client is
/// ignored, the store assigns it on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_deserializing)]
    #[schema(read_only, example = 1)]
    pub id: Option<i64>,

    #[validate(length(max = 255, message = "size must be between 0 and 255"))]
    #[schema(example = "Ada", max_length = 255)]
    pub first_name: String,

    #[validate(length(max = 255, message = "size must be between 0 and 255"))]
    #[schema(example = "Lovelace", max_length = 255)]
    pub last_name: String,

    #[validate(email(message = "must be a well-formed email address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Body of `PUT /api/users/{id}`.
///
/// Every field is optional. An absent (or `null`) field keeps the stored
/// value; an `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(max = 255, message = "size must be between 0 and 255"))]
    #[schema(example = "Augusta", max_length = 255)]
    pub first_name: Option<String>,

    #[validate(length(max = 255, message = "size must be between 0 and 255"))]
    #[schema(example = "King", max_length = 255)]
    pub last_name: Option<String>,

    #[validate(email(message = "must be a well-formed email address"))]
    #[schema(example = "augusta@example.com")]
    pub email: Option<String>,
}

impl User {
    /// Unsaved user; `id` stays empty until the repository stores it
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Overwrite the fields present in `changes`, keeping `id`
    pub fn apply_update(&mut self, changes: UpdateUser) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::ApiError;
    use serde_json::json;

    #[test]
    fn test_deserialize_ignores_client_id() {
        let user: User = serde_json::from_value(json!({
            "id": 77,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@x.com"
        }))
        .unwrap();

        assert_eq!(user.id, None);
        assert_eq!(user.first_name, "Ada");
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let mut user = User::new("Ada", "Lovelace", "ada@x.com");
        user.id = Some(1);

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@x.com"})
        );
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let result: Result<User, _> =
            serde_json::from_value(json!({"firstName": "Ada", "lastName": "Lovelace"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_body_accepts_partial_fields() {
        let changes: UpdateUser = serde_json::from_value(json!({
            "id": 9,
            "firstName": "Augusta",
            "email": null
        }))
        .unwrap();

        assert_eq!(
            changes,
            UpdateUser {
                first_name: Some("Augusta".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_apply_update_keeps_id_and_absent_fields() {
        let mut user = User::new("Ada", "Lovelace", "ada@x.com");
        user.id = Some(5);

        user.apply_update(UpdateUser {
            first_name: Some("Grace".into()),
            email: Some("grace@x.com".into()),
            ..Default::default()
        });

        assert_eq!(user.id, Some(5));
        assert_eq!(user.first_name, "Grace");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.email, "grace@x.com");
    }

    #[test]
    fn test_validation_errors_use_wire_names() {
        let errors = User::new("a".repeat(256), "Lovelace", "ada@x.com")
            .validate()
            .unwrap_err();
        let err = ApiError::from(errors);

        assert_eq!(
            err.description(None),
            vec!["firstName : size must be between 0 and 255"]
        );
    }

    #[test]
    fn test_validation() {
        assert!(User::new("Ada", "Lovelace", "ada@x.com").validate().is_ok());
        assert!(User::new("Ada", "Lovelace", "not-an-email").validate().is_err());
        assert!(User::new("a".repeat(256), "Lovelace", "ada@x.com").validate().is_err());
        assert!(User::new("", "", "ada@x.com").validate().is_ok());
    }

    #[test]
    fn test_update_validation_skips_absent_fields() {
        assert!(UpdateUser::default().validate().is_ok());

        let changes = UpdateUser {
            last_name: Some("b".repeat(256)),
            email: Some("nope".into()),
            ..Default::default()
        };
        let err = ApiError::from(changes.validate().unwrap_err());
        assert_eq!(
            err.description(None),
            vec![
                "email : must be a well-formed email address",
                "lastName : size must be between 0 and 255",
            ]
        );
    }
}
