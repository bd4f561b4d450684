//! Error types for test-user provisioning.
//!
//! Two failure kinds exist: configuration problems detected before any
//! provider call, and rejections from the identity provider itself. Both are
//! terminal for a run; the library never exits the process. Exit-code mapping
//! belongs to the CLI entry point.

use std::fmt;

/// The identity provider operation that a [`HarnessError::Provider`] error
/// originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderOperation {
    /// The public self-registration call.
    SignUp,
    /// The administrative confirmation call that bypasses email verification.
    AdminConfirm,
}

impl fmt::Display for ProviderOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderOperation::SignUp => write!(f, "sign-up"),
            ProviderOperation::AdminConfirm => write!(f, "admin confirmation"),
        }
    }
}

/// Main error type for provisioning operations.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A required provider configuration field is missing or empty.
    #[error("Configuration error: missing required field '{field}'")]
    MissingConfiguration {
        /// Name of the absent or empty field
        field: String,
    },

    /// The configuration artifact could not be read or parsed.
    #[error("Configuration error: {message}")]
    InvalidConfiguration {
        /// Description of what went wrong while loading configuration
        message: String,
    },

    /// The identity provider rejected a provisioning call.
    #[error("Provider error during {operation}: {message}")]
    Provider {
        /// Which provider operation failed
        operation: ProviderOperation,
        /// The provider's error message, verbatim
        message: String,
    },
}

impl HarnessError {
    /// Creates a missing-configuration error for the named field.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfiguration {
            field: field.into(),
        }
    }

    /// Creates an invalid-configuration error with the given message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Wraps a provider error, recording which operation it came from.
    pub fn provider(
        operation: ProviderOperation,
        source: &(impl std::error::Error + ?Sized),
    ) -> Self {
        Self::Provider {
            operation,
            message: source.to_string(),
        }
    }
}

/// Result type alias for provisioning operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = HarnessError::missing_field("userPoolId");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing required field 'userPoolId'"
        );
    }

    #[test]
    fn provider_error_carries_operation_and_message() {
        let io = std::io::Error::other("connection reset");
        let err = HarnessError::provider(ProviderOperation::SignUp, &io);
        assert_eq!(
            err.to_string(),
            "Provider error during sign-up: connection reset"
        );
    }
}
