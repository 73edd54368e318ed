use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid credentials: key & email must not be empty")]
    EmptyCredentials,

    #[error("invalid credentials: API Token must not be empty")]
    EmptyApiToken,

    #[error("no credentials configured: set an API token or an API key and email")]
    MissingCredentials,
}

pub type Result<T> = std::result::Result<T, Error>;
