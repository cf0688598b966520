//! Error types for scheduling runs.

use std::fmt;

use crate::validation::ValidationError;

/// Why a scheduling run was rejected.
///
/// Raised before any simulation state exists; a failed run never yields
/// partial results.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Descriptors or parameters are malformed (bad burst, negative
    /// arrival, duplicate id, non-positive quantum).
    InvalidInput(Vec<ValidationError>),
    /// A required parameter is missing or inconsistent.
    Configuration(String),
}

impl ScheduleError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Validation errors carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::Configuration(_) => &[],
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            Self::Configuration(message) => write!(f, "configuration error: {message}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;
    use crate::validation::validate_processes;

    #[test]
    fn test_display_lists_every_problem() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 0),
            ProcessDescriptor::new("A", -1, 2),
        ];
        let err = ScheduleError::from(validate_processes(&processes).unwrap_err());
        let text = err.to_string();
        assert!(text.starts_with("invalid input: "));
        assert!(text.contains("burst"));
        assert!(text.contains("Duplicate"));
        assert!(text.contains("arrival"));
    }

    #[test]
    fn test_configuration_display() {
        let err = ScheduleError::configuration("quantum is required");
        assert_eq!(err.to_string(), "configuration error: quantum is required");
        assert!(err.validation_errors().is_empty());
    }
}
