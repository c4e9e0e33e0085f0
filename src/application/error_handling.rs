// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Logs errors for debugging

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Page fetch failed; the user may retry
    FetchFailed,

    /// Bulk selection count rejected before any fetch
    InvalidCount,

    /// Page outside 1..=last page
    InvalidPage,

    /// Invariant violation
    DomainError,

    /// Bad configuration
    Configuration,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::FetchFailed(reason) => {
                warn!("Fetch failed: {}", reason);

                Self {
                    success: false,
                    error_type: ErrorType::FetchFailed,
                    message: "Could not load artworks, please try again".to_string(),
                    details: Some(reason),
                }
            }

            AppError::InvalidCount(reason) => Self {
                success: false,
                error_type: ErrorType::InvalidCount,
                message: "Enter a whole number of rows, zero or more".to_string(),
                details: Some(reason),
            },

            AppError::InvalidPage(page) => Self {
                success: false,
                error_type: ErrorType::InvalidPage,
                message: format!("Page {} does not exist", page),
                details: None,
            },

            AppError::Domain(domain_error) => {
                error!("Domain invariant violated: {}", domain_error);

                Self {
                    success: false,
                    error_type: ErrorType::DomainError,
                    message: "Selection rules violated".to_string(),
                    details: Some(domain_error.to_string()),
                }
            }

            AppError::Config(reason) => Self {
                success: false,
                error_type: ErrorType::Configuration,
                message: "Invalid configuration".to_string(),
                details: Some(reason),
            },
        }
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_keeps_reason() {
        let error = ErrorResponse::from_app_error(AppError::FetchFailed("timeout".to_string()));
        assert_eq!(error.error_type, ErrorType::FetchFailed);
        assert_eq!(error.details.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_invalid_page_message() {
        let error = ErrorResponse::from_app_error(AppError::InvalidPage(42));
        assert_eq!(error.error_type, ErrorType::InvalidPage);
        assert_eq!(error.message, "Page 42 does not exist");
    }

    #[test]
    fn test_serialization() {
        let result: Result<(), AppError> = Err(AppError::InvalidCount("-1 is negative".to_string()));
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("invalid_count"));
        assert!(json.contains("-1 is negative"));
    }
}
