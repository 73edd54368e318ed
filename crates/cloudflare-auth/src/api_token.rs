use crate::{auth_provider::AuthProvider, error::{Error, Result}};
use async_trait::async_trait;

/// Scoped API token, sent as a bearer token.
pub struct ApiTokenAuth {
    token: String,
}

impl ApiTokenAuth {
    pub fn new(token: String) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::EmptyApiToken);
        }
        Ok(Self { token })
    }
}

#[async_trait]
impl AuthProvider for ApiTokenAuth {
    async fn auth_headers(&self) -> Result<Vec<(String, String)>> {
        Ok(vec![(
            "Authorization".to_string(),
            format!("Bearer {}", self.token),
        )])
    }
}
