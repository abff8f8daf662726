//! Unified error handling for admin.

use magnet_kit_core::{DateError, RangeError};
use thiserror::Error;

use crate::analytics::AnalyticsError;
use crate::config::ConfigError;
use crate::store::{RepositoryError, SeedError};

/// Application-level error type for the back-office.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),

    /// Seed file could not be loaded.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chart or bucket computation failed.
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    /// A date string did not parse.
    #[error("Invalid date: {0}")]
    Date(#[from] DateError),

    /// A date range is malformed or inverted.
    #[error("Invalid range: {0}")]
    Range(#[from] RangeError),

    /// Bad input from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the error was caused by user input rather than the data or
    /// the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Date(_)
                | Self::Range(_)
                | Self::BadRequest(_)
                | Self::Analytics(
                    AnalyticsError::InvalidBucketId(_) | AnalyticsError::BucketOutsideRange(_)
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_bucket_errors_are_user_errors() {
        let err: AppError = AnalyticsError::InvalidBucketId("Q-1".to_string()).into();
        assert!(err.is_user_error());

        let err: AppError = AnalyticsError::BucketOutsideRange("M-6-2024".to_string()).into();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_conversions_from_layer_errors() {
        let err: AppError = RepositoryError::NotFound.into();
        assert!(matches!(err, AppError::Repository(RepositoryError::NotFound)));
        assert!(!err.is_user_error());

        let range_err = magnet_kit_core::DateRange::from_inputs("2024-02-01", "2024-01-01")
            .expect_err("inverted");
        let err: AppError = range_err.into();
        assert!(err.is_user_error());
        assert!(err.to_string().starts_with("Invalid range: "));
    }
}
