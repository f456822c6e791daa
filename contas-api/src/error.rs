use serde::{Deserialize, Serialize};
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum ContasApiError {
    /// The backend answered with a non-success status. `message` carries the
    /// `{"error": ...}` text when the body had one.
    Backend {
        status: StatusCode,
        message: Option<String>,
    },
    /// Transport failure or a response that could not be decoded.
    Internal(ApiError),
}

impl ContasApiError {
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ContasApiError::Backend { message, .. } => message.as_deref(),
            ContasApiError::Internal(_) => None,
        }
    }
}

impl From<ApiError> for ContasApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                ContasApiError::Backend {
                    status,
                    message: parse_error_body(&detail),
                }
            }
            e => ContasApiError::Internal(e),
        }
    }
}

/// Extract the message of an `{"error": "..."}` body, if that is what we got
pub(crate) fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|response| response.error)
        .filter(|message| !message.trim().is_empty())
}

impl std::fmt::Display for ContasApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContasApiError::Internal(e) => write!(f, "Internal error: {}", e),
            ContasApiError::Backend {
                status,
                message: Some(message),
            } => write!(f, "({}) {}", status, message),
            ContasApiError::Backend {
                status,
                message: None,
            } => write!(f, "({}) request failed", status),
        }
    }
}

impl std::error::Error for ContasApiError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_error_message() {
        assert_eq!(
            parse_error_body(r#"{"error": "Valor must be positive"}"#),
            Some("Valor must be positive".to_string())
        );
    }

    #[test]
    fn unparsable_body_has_no_message() {
        assert_eq!(parse_error_body("<html>Internal Server Error</html>"), None);
        assert_eq!(parse_error_body(""), None);
        assert_eq!(parse_error_body(r#"{"message": "deleted"}"#), None);
    }

    #[test]
    fn blank_error_message_is_ignored() {
        assert_eq!(parse_error_body(r#"{"error": "  "}"#), None);
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = ContasApiError::Backend {
            status: StatusCode::BAD_REQUEST,
            message: Some("Missing required fields".to_string()),
        };
        assert_eq!(err.to_string(), "(400 Bad Request) Missing required fields");
        assert_eq!(err.backend_message(), Some("Missing required fields"));

        let err = ContasApiError::Backend {
            status: StatusCode::NOT_FOUND,
            message: None,
        };
        assert_eq!(err.to_string(), "(404 Not Found) request failed");
        assert_eq!(err.backend_message(), None);
    }
}
