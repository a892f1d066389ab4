use crate::domain::model::Operation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{message}")]
    Domain {
        operation: Operation,
        message: String,
    },

    #[error("Invalid input '{input}': expected {expected}")]
    InvalidInput { input: String, expected: String },

    #[error("Invalid choice '{input}'")]
    InvalidChoice { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn domain(operation: Operation, message: impl Into<String>) -> Self {
        CalcError::Domain {
            operation,
            message: message.into(),
        }
    }

    pub fn invalid_input(input: &str, expected: &str) -> Self {
        CalcError::InvalidInput {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Errors the interactive shell reports and then keeps looping on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::Domain { .. } | CalcError::InvalidInput { .. } | CalcError::InvalidChoice { .. }
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::InvalidChoice { .. } => ErrorSeverity::Low,
            CalcError::Domain { .. } | CalcError::InvalidInput { .. } => ErrorSeverity::Medium,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::Domain { message, .. } => format!("Error: {}", message),
            CalcError::InvalidInput { input, expected } => {
                format!("'{}' is not a valid {}", input, expected)
            }
            CalcError::InvalidChoice { input } => format!("'{}' is not a menu option", input),
            CalcError::IoError(e) => format!("Could not read or write the console: {}", e),
            CalcError::SerializationError(e) => format!("Could not format the result: {}", e),
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration field '{}' has an invalid value '{}'", field, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::Domain { operation, .. } => match operation {
                Operation::SquareRoot => "Use a number greater than or equal to zero".to_string(),
                Operation::Factorial => "Use a non-negative integer".to_string(),
                Operation::NaturalLogarithm => "Use a number greater than zero".to_string(),
                Operation::Power => "Check the base and exponent".to_string(),
            },
            CalcError::InvalidInput { expected, .. } => format!("Enter a valid {}", expected),
            CalcError::InvalidChoice { .. } => "Select a number between 1-5".to_string(),
            CalcError::IoError(_) => "Check that the input stream is still open".to_string(),
            CalcError::SerializationError(_) => "Try --format text".to_string(),
            CalcError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            CalcError::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_displays_message_only() {
        let err = CalcError::domain(
            Operation::SquareRoot,
            "Cannot calculate square root of negative number",
        );
        assert_eq!(
            err.to_string(),
            "Cannot calculate square root of negative number"
        );
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_errors_are_not_recoverable() {
        let err = CalcError::InvalidConfigValueError {
            field: "display.precision".to_string(),
            value: "40".to_string(),
            reason: "Value must be between 0 and 17".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.recovery_suggestion(), "Value must be between 0 and 17");
    }

    #[test]
    fn test_invalid_choice_is_low_severity() {
        let err = CalcError::InvalidChoice {
            input: "9".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
        assert_eq!(err.recovery_suggestion(), "Select a number between 1-5");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: CalcError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
