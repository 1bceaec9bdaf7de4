//! Error taxonomy for backend calls.

use thiserror::Error;

/// Message shown whenever a request gets no response at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error - server may be down or unreachable. Please check if the backend server is running.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received (DNS, refused connection, CORS, offline).
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    /// The backend answered 401. The persisted token has already been cleared.
    #[error("{}", .message.as_deref().unwrap_or("Your session has expired. Please log in again."))]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx answer, with the backend's `message` when it sent one.
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Api { status: u16, message: Option<String> },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network | ApiError::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text for an inline banner: the backend's own message when present,
    /// the connectivity message for network failures, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Unauthorized {
                message: Some(message),
            }
            | ApiError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Api {
            status: 400,
            message: Some("Restaurant name is required".to_string()),
        };
        assert_eq!(err.user_message("Failed to add order"), "Restaurant name is required");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to add order"), "Failed to add order");
        assert_eq!(
            ApiError::Decode("missing field".into()).user_message("Failed"),
            "Failed"
        );
    }

    #[test]
    fn test_network_message_is_uniform() {
        assert_eq!(ApiError::Network.to_string(), NETWORK_ERROR_MESSAGE);
        assert_eq!(ApiError::Network.user_message("ignored"), NETWORK_ERROR_MESSAGE);
        assert_eq!(ApiError::Network.status(), None);
    }
}
