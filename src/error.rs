use thiserror::Error;

/// Errors surfaced by the facade.
#[derive(Error, Debug)]
pub enum Error {
    /// An operation was attempted before `configure` succeeded.
    #[error("client is not configured, call configure first")]
    NotConfigured,

    /// A required input was missing or malformed. Raised before any network
    /// call is made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A data operation was attempted with no credential installed.
    #[error("no credential installed, call exchange_code or set_credential first")]
    NotAuthenticated,

    /// A failure from the provider, propagated unmodified.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Failures originating in the provider implementation.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status. `body` is the raw
    /// response text, which carries the provider's own error description.
    #[error("api request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to read client secret file: {0}")]
    SecretIo(#[from] std::io::Error),

    #[error("malformed client secret file: {0}")]
    SecretJson(#[from] serde_json::Error),

    #[error("client secret file has no usable entry: {0}")]
    SecretShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;
