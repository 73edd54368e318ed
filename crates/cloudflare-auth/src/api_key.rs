use crate::{auth_provider::AuthProvider, error::{Error, Result}};
use async_trait::async_trait;

/// Legacy global API key, sent together with the account email.
pub struct ApiKeyAuth {
    key: String,
    email: String,
}

impl ApiKeyAuth {
    pub fn new(key: String, email: String) -> Result<Self> {
        if key.is_empty() || email.is_empty() {
            return Err(Error::EmptyCredentials);
        }
        Ok(Self { key, email })
    }
}

#[async_trait]
impl AuthProvider for ApiKeyAuth {
    async fn auth_headers(&self) -> Result<Vec<(String, String)>> {
        Ok(vec![
            ("X-Auth-Key".to_string(), self.key.clone()),
            ("X-Auth-Email".to_string(), self.email.clone()),
        ])
    }
}
