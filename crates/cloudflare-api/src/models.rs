use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single error entry reported by the API.
///
/// A `code` of `0` means the service did not report one.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ResponseInfo {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl ResponseInfo {
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Reads a missing or `null` list as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ResponseInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ResponseInfo>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The envelope every v4 endpoint wraps its payload in.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<ResponseInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<ResponseInfo>,
    pub result: Option<T>,
}

/// The part of a failed response body that carries the error list.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<ResponseInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenVerification {
    pub id: String,
    pub status: TokenStatus,
    pub not_before: Option<DateTime<Utc>>,
    pub expires_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Active,
    Disabled,
    Expired,
}

impl std::fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenStatus::Active => write!(f, "active"),
            TokenStatus::Disabled => write!(f, "disabled"),
            TokenStatus::Expired => write!(f, "expired"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub name_servers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
}
