//! Error types for vault-k8s-login

use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for login operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Render the error followed by every underlying cause, on one line
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = StdError::source(self);
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}

/// Vault login errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to login")]
    Transport(#[source] reqwest::Error),

    #[error("failed to get successful response: status {status}, body: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to read login response body")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("empty client token in login response")]
    EmptyClientToken,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing VAULT_ROLE")]
    MissingRole,

    #[error("invalid VAULT_ADDR {value:?}")]
    InvalidAddress {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("VAULT_ADDR {0:?} cannot be used as a base address")]
    CannotBeABase(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
