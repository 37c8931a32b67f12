//! Error types for projection construction and lookup.
//!
//! Coordinate conversion itself never fails: out-of-domain input produces
//! NaN or infinite values instead. These errors only cover parsing, registry
//! lookup and net layout validation.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Primary error type for projection setup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("Unknown projection: {0}")]
    UnknownProjection(String),

    #[error("Invalid orientation: {0}. Expected one of 'none', 'upright', 'swapped'")]
    InvalidOrientation(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid net layout: {0}")]
    InvalidLayout(String),
}

impl GeoError {
    /// Shorthand for [`GeoError::InvalidParameter`].
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        GeoError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Process exit code a command-line driver should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GeoError::UnknownProjection(_) | GeoError::InvalidOrientation(_) => 2,
            GeoError::InvalidParameter { .. } => 3,
            GeoError::InvalidLayout(_) => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeoError::UnknownProjection("mercator".to_string());
        assert_eq!(err.to_string(), "Unknown projection: mercator");

        let err = GeoError::invalid_parameter("scale", "must be finite");
        assert_eq!(
            err.to_string(),
            "Invalid parameter value for 'scale': must be finite"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(GeoError::UnknownProjection(String::new()).exit_code(), 2);
        assert_eq!(GeoError::invalid_parameter("w", "").exit_code(), 3);
        assert_eq!(GeoError::InvalidLayout(String::new()).exit_code(), 70);
    }
}
