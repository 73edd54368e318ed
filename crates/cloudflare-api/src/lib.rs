pub mod api_error;
pub mod client;
pub mod error;
pub mod models;

pub use api_error::{ApiError, CloudflareError, ErrorKind};
pub use client::{CloudflareClient, DEFAULT_BASE_URL, RAY_ID_HEADER};
pub use error::{Error, Result};
pub use reqwest::Method;

// Re-export common types
pub use models::{
    Account, ApiResponse, ErrorBody, ResponseInfo, TokenStatus, TokenVerification, Zone,
};
