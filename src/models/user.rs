// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::no_nul_bytes;

/// A row of the 'users' table.
#[derive(Debug, Clone, FromRow)]
pub struct StoredUser {
    pub id: i64,
    pub name: String,
    pub student_class: String,
    pub email: String,

    /// Argon2 PHC string, never the plaintext.
    pub password_hash: String,
}

/// Signup payload.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(custom(function = no_nul_bytes))]
    pub name: String,
    #[validate(custom(function = no_nul_bytes))]
    pub student_class: String,
    #[validate(
        email(message = "email must be a valid email address"),
        custom(function = no_nul_bytes)
    )]
    pub email: String,
    #[validate(custom(function = no_nul_bytes))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub message: String,
}

/// A user about to be inserted, password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub student_class: String,
    pub email: String,
    pub password_hash: String,
}

/// Login payload. `email` is not checked for shape here because the
/// administrator identifier is not an email address.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom(function = no_nul_bytes))]
    pub email: String,
    #[validate(custom(function = no_nul_bytes))]
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub role: Role,
    pub name: String,

    /// Present for students only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl LoginResponse {
    pub fn admin() -> Self {
        Self {
            role: Role::Admin,
            name: "Administrator".to_string(),
            class: None,
        }
    }

    pub fn student(user: StoredUser) -> Self {
        Self {
            role: Role::Student,
            name: user.name,
            class: Some(user.student_class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signup(email: &str) -> SignupRequest {
        SignupRequest {
            name: "Alice".into(),
            student_class: "7B".into(),
            email: email.into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn email_shape_is_enforced() {
        assert!(signup("alice@school.test").validate().is_ok());
        assert!(signup("not-an-email").validate().is_err());
        assert!(signup("").validate().is_err());
    }

    #[test]
    fn nul_in_any_signup_field_is_rejected() {
        let mut request = signup("alice@school.test");
        request.name = "Al\0ice".into();
        assert!(request.validate().is_err());

        let mut request = signup("alice@school.test");
        request.password = "pw\0".into();
        assert!(request.validate().is_err());
    }

    #[test]
    fn admin_response_omits_class() {
        let value = serde_json::to_value(LoginResponse::admin()).unwrap();
        assert_eq!(value, json!({"role": "admin", "name": "Administrator"}));
    }

    #[test]
    fn student_response_carries_class() {
        let user = StoredUser {
            id: 1,
            name: "Alice".into(),
            student_class: "7B".into(),
            email: "alice@school.test".into(),
            password_hash: String::new(),
        };
        let value = serde_json::to_value(LoginResponse::student(user)).unwrap();
        assert_eq!(value, json!({"role": "student", "name": "Alice", "class": "7B"}));
    }
}
