use crate::api_error::{ApiError, CloudflareError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error from makeRequest: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("error reported by API: {0}")]
    RequestNotSuccessful(CloudflareError),

    #[error("error unmarshalling the JSON response: {0}")]
    Unmarshal(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("account ID is empty and must be provided")]
    MissingAccountId,

    #[error("invalid zone identifier: {0}")]
    InvalidZoneIdentifier(String),
}

impl Error {
    /// The classified API failure, if this error came from a non-success response.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponseInfo;

    #[test]
    fn test_api_error_passes_through_message() {
        let err: Error = ApiError::classify(
            CloudflareError::new(404).with_errors(vec![ResponseInfo::new("Zone not found", 1001)]),
        )
        .into();

        assert_eq!(err.to_string(), "Zone not found (1001)");
        assert!(matches!(err.api_error(), Some(ApiError::NotFound(_))));
    }

    #[test]
    fn test_precondition_messages() {
        assert_eq!(
            Error::MissingAccountId.to_string(),
            "account ID is empty and must be provided"
        );
        assert_eq!(
            Error::InvalidZoneIdentifier(String::new()).to_string(),
            "invalid zone identifier: "
        );
        assert!(Error::MissingAccountId.api_error().is_none());
    }

    #[test]
    fn test_not_successful_message() {
        let err = Error::RequestNotSuccessful(
            CloudflareError::new(200).with_errors(vec![ResponseInfo::new("Invalid request", 6003)]),
        );
        assert_eq!(err.to_string(), "error reported by API: Invalid request (6003)");
    }
}
