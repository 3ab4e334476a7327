//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {}", .path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The configuration file could not be read or written.
    #[error("Configuration I/O error for {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The configuration could not be encoded as TOML.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", join_errors(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// No platform configuration directory could be determined.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<ValidationError>);

    impl Validate for Fixed {
        fn validate(&self) -> Vec<ValidationError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::with_rule("analysis.sector_limit", "must be positive", "range");
        assert_eq!(
            err.to_string(),
            "analysis.sector_limit: must be positive (rule: range)"
        );
    }

    #[test]
    fn test_validate_or_error() {
        assert!(Fixed(vec![]).validate_or_error().is_ok());

        let single = Fixed(vec![ValidationError::new("a", "bad")]);
        assert!(matches!(
            single.validate_or_error(),
            Err(ConfigError::Validation { ref field, .. }) if field == "a"
        ));

        let many = Fixed(vec![
            ValidationError::new("a", "bad"),
            ValidationError::new("b", "worse"),
        ]);
        let err = many.validate_or_error().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Multiple validation errors: a: bad; b: worse"
        );
    }
}
