use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// User entity - matches SQL schema
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// National identity number (CPF), unique
    pub cpf: String,
    /// Display name
    pub name: String,
    /// Email (unique)
    pub email: String,
    /// WhatsApp phone number (unique, optional)
    pub whatsapp: Option<String>,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password: String,
    /// Sex code (single character)
    pub sex: String,
    /// Birth date
    pub date_birth: NaiveDate,
    /// Account active status
    pub active: bool,
    /// Opt-in for email notifications
    pub notification_email: bool,
    /// Opt-in for WhatsApp notifications
    pub notification_whats: bool,
    /// Creation timestamp
    pub date_created: DateTime<Utc>,
    /// Last login timestamp
    pub date_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new active user (password must already be hashed).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cpf: String,
        name: String,
        email: String,
        whatsapp: Option<String>,
        password_hash: String,
        sex: String,
        date_birth: NaiveDate,
        notification_email: bool,
        notification_whats: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf,
            name,
            email,
            whatsapp,
            password: password_hash,
            sex,
            date_birth,
            active: true,
            notification_email,
            notification_whats,
            date_created: Utc::now(),
            date_login: None,
        }
    }
}

/// Public user view - no password, no address linkage
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPublic {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub sex: String,
    pub date_birth: NaiveDate,
    pub active: bool,
    pub date_created: DateTime<Utc>,
    pub date_login: Option<DateTime<Utc>>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            sex: user.sex,
            date_birth: user.date_birth,
            active: user.active,
            date_created: user.date_created,
            date_login: user.date_login,
        }
    }
}

/// DTO for registering a new user with their address
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(length(equal = 11), custom(function = "validate_digits"))]
    pub cpf: String,
    #[validate(length(min = 7, max = 100))]
    pub name: String,
    #[validate(email, length(max = 45))]
    pub email: String,
    #[validate(length(max = 14))]
    pub whatsapp: Option<String>,
    #[validate(length(min = 8, max = 20))]
    pub password: String,
    #[validate(length(equal = 1))]
    pub sex: String,
    pub date_birth: NaiveDate,
    #[serde(default = "default_true")]
    pub notification_email: bool,
    #[serde(default = "default_true")]
    pub notification_whats: bool,
    /// CEP postal code, 8 digits
    #[validate(length(equal = 8), custom(function = "validate_digits"))]
    pub cep: String,
    /// House/building number
    #[validate(length(max = 10))]
    pub number: Option<String>,
    /// Whether the address is visible to other users
    #[serde(default = "default_true")]
    pub public: bool,
}

fn default_true() -> bool {
    true
}

fn validate_digits(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("digits_only"))
    }
}

/// DTO for email/password authentication
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email, length(max = 45))]
    pub email: String,
    #[validate(length(min = 8, max = 20))]
    pub password: String,
}

/// Bearer token issued after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Query filters for listing users
#[derive(Debug, Clone, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct UserFilter {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// true lists active users, false inactive ones
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Default for UserFilter {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            active: true,
        }
    }
}

fn default_limit() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterUser {
        RegisterUser {
            cpf: "12345678911".to_string(),
            name: "Fulano de Tal".to_string(),
            email: "a@x.com".to_string(),
            whatsapp: Some("5511999998888".to_string()),
            password: "s3cret-pass".to_string(),
            sex: "M".to_string(),
            date_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            notification_email: true,
            notification_whats: true,
            cep: "01001000".to_string(),
            number: Some("42".to_string()),
            public: true,
        }
    }

    #[test]
    fn test_valid_register_passes() {
        assert!(valid_register().validate().is_ok());
    }

    #[test]
    fn test_cpf_must_be_11_digits() {
        let mut input = valid_register();
        input.cpf = "123".to_string();
        assert!(input.validate().is_err());

        input.cpf = "1234567891a".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_cep_must_be_8_digits() {
        let mut input = valid_register();
        input.cep = "01001-00".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_password_length_bounds() {
        let mut input = valid_register();
        input.password = "short".to_string();
        assert!(input.validate().is_err());

        input.password = "x".repeat(21);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_user_public_hides_password() {
        let user = User::new(
            "12345678911".to_string(),
            "Fulano de Tal".to_string(),
            "a@x.com".to_string(),
            None,
            "$argon2id$fake".to_string(),
            "M".to_string(),
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            true,
            true,
        );

        let serialized = serde_json::to_value(UserPublic::from(user)).unwrap();
        assert!(serialized.get("password").is_none());
        assert_eq!(serialized["email"], "a@x.com");
    }
}
