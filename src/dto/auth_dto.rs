use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::hr_user::SessionUser;
use crate::utils::validation::trim_in_place;

use super::deserialize_optional_id;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CredentialsPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl CredentialsPayload {
    /// Usernames are case-insensitive and stored lower-case.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.username);
        self.username = self.username.to_lowercase();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfilePayload {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl UpdateProfilePayload {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.username);
        self.username = self.username.to_lowercase();
        // Passwords are kept verbatim, matching what login checks.
        if self.password.as_deref().is_some_and(|p| p.trim().is_empty()) {
            self.password = None;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvatarResponse {
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::crypto::{hash_password, verify_password};

    #[test]
    fn username_is_lowercased_before_validation() {
        let mut p = CredentialsPayload {
            username: "  Admin ".into(),
            password: "x".into(),
        };
        p.normalize();
        assert_eq!(p.username, "admin");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn profile_password_matches_login_byte_for_byte() {
        let mut profile: UpdateProfilePayload = serde_json::from_str(
            r#"{"id":"1","username":"HR","password":" s3cret "}"#,
        )
        .unwrap();
        profile.normalize();
        let hash = hash_password(profile.password.as_deref().unwrap()).unwrap();

        let mut login = CredentialsPayload {
            username: "hr".into(),
            password: " s3cret ".into(),
        };
        login.normalize();
        assert!(verify_password(&login.password, &hash));
    }

    #[test]
    fn blank_profile_password_keeps_the_old_one() {
        let mut profile: UpdateProfilePayload =
            serde_json::from_str(r#"{"id":1,"username":"hr","password":"   "}"#).unwrap();
        profile.normalize();
        assert!(profile.password.is_none());
    }

    #[test]
    fn missing_fields_fail_validation() {
        let mut p: CredentialsPayload = serde_json::from_str(r#"{"username":"hr"}"#).unwrap();
        p.normalize();
        assert!(p.validate().is_err());
    }
}
