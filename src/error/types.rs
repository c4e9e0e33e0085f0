// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Invalid row count: {0}")]
    InvalidCount(String),

    #[error("Invalid page: {0}")]
    InvalidPage(u32),

    #[error("Domain error: {0}")]
    Domain(DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCount(message) => AppError::InvalidCount(message),
            other => AppError::Domain(other),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_domain_errors_stay_domain() {
        let err: AppError = DomainError::InvariantViolation("duplicate id".to_string()).into();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[test]
    fn test_invalid_count_keeps_its_kind() {
        let err: AppError = DomainError::InvalidCount("-1 is negative".to_string()).into();
        assert!(matches!(err, AppError::InvalidCount(_)));
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::InvalidPage(0)).unwrap();
        assert_eq!(json, "\"Invalid page: 0\"");
    }
}
