//! Classification of failed API calls.
//!
//! [`CloudflareError`] carries what the service reported about a failed call:
//! the HTTP status, the structured error list and the `cf-ray` identifier.
//! [`ApiError`] tags it with the status-code family that produced it, so
//! callers can `match` on the failure category instead of comparing status
//! codes at every call site.

use crate::models::ResponseInfo;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// The error payload of a failed API call.
///
/// Built once per failed response and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudflareError {
    status_code: u16,
    errors: Vec<ResponseInfo>,
    error_codes: Vec<i64>,
    ray_id: String,
}

impl CloudflareError {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    pub fn with_errors(mut self, errors: Vec<ResponseInfo>) -> Self {
        self.errors = errors;
        self
    }

    /// Codes reported outside the error list. Not checked against `errors`.
    pub fn with_error_codes(mut self, error_codes: Vec<i64>) -> Self {
        self.error_codes = error_codes;
        self
    }

    pub fn with_ray_id(mut self, ray_id: impl Into<String>) -> Self {
        self.ray_id = ray_id.into();
        self
    }

    /// The HTTP status of the response that produced this error.
    pub fn http_status_code(&self) -> u16 {
        self.status_code
    }

    pub fn errors(&self) -> &[ResponseInfo] {
        &self.errors
    }

    pub fn error_codes(&self) -> &[i64] {
        &self.error_codes
    }

    /// The `cf-ray` identifier, empty when the response carried none.
    pub fn ray_id(&self) -> &str {
        &self.ray_id
    }

    /// Every reported message in order, empty ones included.
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Every reported code in order, zeroes included.
    pub fn internal_error_codes(&self) -> Vec<i64> {
        self.errors.iter().map(|e| e.code).collect()
    }

    /// Whether the failure happened on the service side (5xx).
    pub fn is_service_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Whether the request itself was at fault (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Whether the service asked the client to slow down (429).
    pub fn is_client_rate_limited(&self) -> bool {
        self.status_code == 429
    }

    pub fn internal_error_code_is(&self, code: i64) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Case-sensitive substring search over the reported messages.
    pub fn error_message_contains(&self, needle: &str) -> bool {
        self.errors.iter().any(|e| e.message.contains(needle))
    }

    /// The rendered message, same as the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CloudflareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, info) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&info.message)?;
            if info.code != 0 {
                write!(f, " ({})", info.code)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for CloudflareError {}

/// A [`CloudflareError`] tagged with the status-code family that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 4xx responses not covered by a more specific variant, generally bad
    /// payloads. Also used for any other non-success status.
    #[error(transparent)]
    Request(CloudflareError),

    /// HTTP 429: the service is telling the client to slow down.
    #[error(transparent)]
    Ratelimit(CloudflareError),

    /// 5xx responses.
    #[error(transparent)]
    Service(CloudflareError),

    /// HTTP 401.
    #[error(transparent)]
    Authentication(CloudflareError),

    /// HTTP 403.
    #[error(transparent)]
    Authorization(CloudflareError),

    /// HTTP 404.
    #[error(transparent)]
    NotFound(CloudflareError),
}

/// Fieldless tag for an [`ApiError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Request,
    Ratelimit,
    Service,
    Authentication,
    Authorization,
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Request => write!(f, "request error"),
            ErrorKind::Ratelimit => write!(f, "rate limit error"),
            ErrorKind::Service => write!(f, "service error"),
            ErrorKind::Authentication => write!(f, "authentication error"),
            ErrorKind::Authorization => write!(f, "authorization error"),
            ErrorKind::NotFound => write!(f, "not found error"),
        }
    }
}

impl ApiError {
    /// Picks the variant for `error` from its HTTP status.
    pub fn classify(error: CloudflareError) -> Self {
        match error.http_status_code() {
            401 => ApiError::Authentication(error),
            403 => ApiError::Authorization(error),
            404 => ApiError::NotFound(error),
            429 => ApiError::Ratelimit(error),
            500..=599 => ApiError::Service(error),
            _ => ApiError::Request(error),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Request(_) => ErrorKind::Request,
            ApiError::Ratelimit(_) => ErrorKind::Ratelimit,
            ApiError::Service(_) => ErrorKind::Service,
            ApiError::Authentication(_) => ErrorKind::Authentication,
            ApiError::Authorization(_) => ErrorKind::Authorization,
            ApiError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    pub fn error(&self) -> &CloudflareError {
        match self {
            ApiError::Request(e)
            | ApiError::Ratelimit(e)
            | ApiError::Service(e)
            | ApiError::Authentication(e)
            | ApiError::Authorization(e)
            | ApiError::NotFound(e) => e,
        }
    }

    pub fn into_inner(self) -> CloudflareError {
        match self {
            ApiError::Request(e)
            | ApiError::Ratelimit(e)
            | ApiError::Service(e)
            | ApiError::Authentication(e)
            | ApiError::Authorization(e)
            | ApiError::NotFound(e) => e,
        }
    }
}

impl From<CloudflareError> for ApiError {
    fn from(error: CloudflareError) -> Self {
        ApiError::classify(error)
    }
}

impl Deref for ApiError {
    type Target = CloudflareError;

    fn deref(&self) -> &CloudflareError {
        self.error()
    }
}
