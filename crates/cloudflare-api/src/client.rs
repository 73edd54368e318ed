use crate::{
    api_error::{ApiError, CloudflareError},
    error::{Error, Result},
    models::*,
};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Response header carrying the per-request tracing identifier.
pub const RAY_ID_HEADER: &str = "cf-ray";

#[derive(Clone)]
pub struct CloudflareClient {
    client: Client,
    base_url: String,
    auth_headers: Vec<(String, String)>,
}

impl CloudflareClient {
    pub fn new(base_url: impl Into<String>, auth_headers: Vec<(String, String)>) -> Self {
        Self::with_client(Client::new(), base_url, auth_headers)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        auth_headers: Vec<(String, String)>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        let url = self.url(path)?;
        debug!(%method, %url, "sending request");

        let mut request = self.client.request(method, url);
        for (name, value) in &self.auth_headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let ray_id = response
            .headers()
            .get(RAY_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.bytes().await?;

        debug!(status = status.as_u16(), %ray_id, "received response");

        if status.is_success() {
            let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
            if !envelope.success {
                return Err(Error::RequestNotSuccessful(build_error(
                    status.as_u16(),
                    envelope.errors,
                    ray_id,
                )));
            }

            match envelope.result {
                Some(result) => Ok(result),
                None => Ok(serde_json::from_value(serde_json::Value::Null)?),
            }
        } else {
            let errors = match serde_json::from_slice::<ErrorBody>(&body) {
                Ok(parsed) => parsed.errors,
                Err(e) => {
                    if !body.is_empty() {
                        warn!(
                            status = status.as_u16(),
                            %ray_id,
                            error = %e,
                            "error unmarshalling the JSON response error body"
                        );
                    }
                    Vec::new()
                }
            };

            Err(ApiError::classify(build_error(status.as_u16(), errors, ray_id)).into())
        }
    }

    /// Checks that the configured API token is valid.
    pub async fn verify_token(&self) -> Result<TokenVerification> {
        self.request(Method::GET, "/user/tokens/verify").await
    }

    pub async fn zone_details(&self, zone_id: &str) -> Result<Zone> {
        if zone_id.is_empty() {
            return Err(Error::InvalidZoneIdentifier(zone_id.to_string()));
        }
        let path = format!("/zones/{}", zone_id);
        self.request(Method::GET, &path).await
    }

    pub async fn account_details(&self, account_id: &str) -> Result<Account> {
        if account_id.is_empty() {
            return Err(Error::MissingAccountId);
        }
        let path = format!("/accounts/{}", account_id);
        self.request(Method::GET, &path).await
    }

    /// Issues an arbitrary call and returns the envelope's `result` untyped.
    pub async fn raw(&self, method: Method, path: &str) -> Result<serde_json::Value> {
        self.request(method, path).await
    }
}

fn build_error(status: u16, errors: Vec<ResponseInfo>, ray_id: String) -> CloudflareError {
    let error_codes = errors.iter().map(|e| e.code).collect();
    CloudflareError::new(status)
        .with_errors(errors)
        .with_error_codes(error_codes)
        .with_ray_id(ray_id)
}
