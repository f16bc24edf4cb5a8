//! Normalized errors of the products API client
//!
//! Only two kinds exist. Both are returned as values; the console shows their
//! `Display` text verbatim.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },

    /// No usable response: the request failed or the body could not be read
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status } => Some(*status),
            ApiError::Network(_) => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_contains_status() {
        let err = ApiError::Transport { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_network_message_is_verbatim() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }
}
