//! CEP resolution against the ViaCEP web service.

use async_trait::async_trait;
use core_config::{env_or_default, ConfigError, FromEnv};
use std::time::Duration;

use crate::error::{AddressError, AddressResult};
use crate::models::CepAddress;

pub const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";

/// CEP lookup configuration.
///
/// Loaded from environment variables:
/// - `VIACEP_BASE_URL` - service base URL, default `https://viacep.com.br/ws`
/// - `VIACEP_TIMEOUT_SECS` - request timeout, default 10
#[derive(Clone, Debug)]
pub struct CepConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for CepConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VIACEP_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl FromEnv for CepConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            base_url: env_or_default("VIACEP_BASE_URL", defaults.base_url)?,
            timeout_secs: env_or_default("VIACEP_TIMEOUT_SECS", defaults.timeout_secs)?,
        })
    }
}

/// Resolves a CEP postal code into a full address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CepResolver: Send + Sync {
    async fn resolve(&self, cep: &str) -> AddressResult<CepAddress>;
}

/// HTTP client for the ViaCEP service.
#[derive(Clone)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(config: &CepConfig) -> AddressResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|_| AddressError::CepUnavailable)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CepResolver for ViaCepClient {
    async fn resolve(&self, cep: &str) -> AddressResult<CepAddress> {
        let url = format!("{}/{}/json/", self.base_url, cep);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(cep = %cep, "CEP service request failed: {}", e);
            AddressError::CepUnavailable
        })?;

        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::warn!(cep = %cep, "CEP service returned invalid JSON: {}", e);
            AddressError::CepUnavailable
        })?;

        // ViaCEP signals an unknown code with an "erro" key in the body
        if body.get("erro").is_some() {
            return Err(AddressError::CepNotFound);
        }

        serde_json::from_value(body).map_err(|e| {
            tracing::warn!(cep = %cep, "CEP service returned unexpected payload: {}", e);
            AddressError::CepUnavailable
        })
    }
}
