//! Error types for YAML nav configuration.

use navkit_core::ConfigurationError;
use thiserror::Error;

/// Error type for manifest loading.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Declared props form an illegal combination
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field path
        field: String,
        /// Error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidValue {
            field: "nav.links[0].label".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'nav.links[0].label': must not be empty"
        );

        let err = ParseError::from(ConfigurationError::JustifiedNavbar);
        assert_eq!(
            err.to_string(),
            "Configuration error: justify navbar `Nav`s are not supported"
        );
    }

    #[test]
    fn test_parse_error_from_yaml() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("not a number").unwrap_err();
        let err: ParseError = yaml_err.into();
        assert!(matches!(err, ParseError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error"));
    }
}
