pub mod auth_provider;
pub mod api_key;
pub mod api_token;
pub mod error;

pub use auth_provider::{AuthProvider, AuthConfig, create_auth_provider};
pub use error::{Error, Result};
