use crate::{
    api_key::ApiKeyAuth,
    api_token::ApiTokenAuth,
    error::{Error, Result},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Supplies the headers that authenticate a request.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn auth_headers(&self) -> Result<Vec<(String, String)>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub api_token: Option<String>,
    pub api_key: Option<String>,
    pub api_email: Option<String>,
}

/// Builds a provider from `config`. A token wins over key and email.
pub fn create_auth_provider(config: AuthConfig) -> Result<Box<dyn AuthProvider>> {
    if let Some(token) = config.api_token {
        return Ok(Box::new(ApiTokenAuth::new(token)?));
    }

    match (config.api_key, config.api_email) {
        (None, None) => Err(Error::MissingCredentials),
        (key, email) => Ok(Box::new(ApiKeyAuth::new(
            key.unwrap_or_default(),
            email.unwrap_or_default(),
        )?)),
    }
}
