//! JWT configuration, loaded from the environment like the other configs.

use core_config::{env_or_default, env_required, ConfigError, FromEnv};

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
/// - `ACCESS_TOKEN_EXPIRE_MINUTES` - token lifetime, default 30
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// JWT signing secret (minimum 32 characters)
    pub secret: String,
    /// Access token lifetime in minutes
    pub expire_minutes: i64,
}

impl JwtConfig {
    /// Create a new JwtConfig with the given secret and the default lifetime.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            expire_minutes: 30,
        }
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let expire_minutes = env_or_default("ACCESS_TOKEN_EXPIRE_MINUTES", 30i64)?;

        Ok(Self {
            secret,
            expire_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_jwt_config_new_valid() {
        let config = JwtConfig::new(VALID_SECRET);
        assert_eq!(config.secret, VALID_SECRET);
        assert_eq!(config.expire_minutes, 30);
    }

    #[test]
    #[should_panic(expected = "JWT secret must be at least 32 characters")]
    fn test_jwt_config_new_too_short() {
        JwtConfig::new("short");
    }

    #[test]
    fn test_jwt_config_from_env_valid() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(VALID_SECRET)),
                ("ACCESS_TOKEN_EXPIRE_MINUTES", Some("60")),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret, VALID_SECRET);
                assert_eq!(config.expire_minutes, 60);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_default_lifetime() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(VALID_SECRET)),
                ("ACCESS_TOKEN_EXPIRE_MINUTES", None),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.expire_minutes, 30);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_missing() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_jwt_config_from_env_too_short() {
        temp_env::with_var("JWT_SECRET", Some("short"), || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("32 characters"));
        });
    }
}
