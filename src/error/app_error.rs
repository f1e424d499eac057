use axum::extract::rejection::JsonRejection;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// This enum provides structured error information for the different failure
/// scenarios, supporting automatic conversion from anyhow and from validator
/// errors, and detailed context for debugging and user feedback.
///
/// Per-channel transport failures are deliberately NOT represented here: a
/// failed email or SMS attempt is contained in a `ChannelOutcome` with
/// `success = false` and never aborts a dispatch call.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Duplicate entry error for unique constraint violations
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors collected from a request body
    #[error("Validation failed for {} field(s)", errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Unauthorized access error with authentication message
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationFieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Validation failed for {}", field)),
                })
            })
            .collect();

        AppError::ValidationErrors { errors }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct TestPayload {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_not_found_display() {
        let error = AppError::NotFound {
            entity: "user".to_string(),
            field: "id".to_string(),
            value: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Resource not found: user with id=42");
    }

    #[test]
    fn test_duplicate_display() {
        let error = AppError::Duplicate {
            entity: "user".to_string(),
            field: "email".to_string(),
            value: "a@x.com".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate entry: user.email = 'a@x.com' already exists"
        );
    }

    #[test]
    fn test_validation_errors_from_validator() {
        let payload = TestPayload {
            email: "not-an-email".to_string(),
        };
        let error: AppError = payload.validate().unwrap_err().into();

        match error {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
                assert_eq!(errors[0].message, "Invalid email format");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_anyhow_conversion() {
        let error: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(error, AppError::Internal { .. }));
    }
}
