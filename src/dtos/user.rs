//! User DTOs - Data Transfer Objects per utenti

use super::ResponseStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form fields of `/v1/register` and `/v1/login`.
///
/// Missing fields deserialize to empty strings and are rejected by `validate`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct CredentialsForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// DTO per creare un nuovo utente (password già hashata)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub status: ResponseStatus,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    pub fn authenticated(token: String) -> Self {
        Self {
            status: ResponseStatus::Success,
            description: "ok".to_string(),
            access_token: Some(token),
        }
    }

    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failed,
            description: description.into(),
            access_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        let form = CredentialsForm {
            username: "alice".to_string(),
            password: String::new(),
        };
        let err = form.validate().unwrap_err();
        assert!(err.field_errors().contains_key("password"));
        assert!(!err.field_errors().contains_key("username"));
    }

    #[test]
    fn test_failed_login_omits_token() {
        let body = serde_json::to_value(LoginResponse::failed("wrong password")).unwrap();
        assert_eq!(body["status"], "failed");
        assert!(body.get("access_token").is_none());
    }
}
