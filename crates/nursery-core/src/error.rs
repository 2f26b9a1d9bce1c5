//! Error Types
//!
//! Every failure the storefront can hit, grouped the way the UI reports them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered, but not with success
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// A required form field is missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persisted local storage refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Message suitable for showing to the user as-is
    pub fn user_message(&self) -> String {
        match self {
            Error::Network(_) => "Could not reach the server".to_string(),
            Error::Service { message, .. } => message.clone(),
            Error::Validation(msg) => msg.clone(),
            Error::Storage(_) => "Could not save data in the browser".to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    // decode failures are mapped in read_json, where the status is known
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::Service {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        Error::Network(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(format!("Invalid JSON: {}", err))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
