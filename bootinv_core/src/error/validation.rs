//! Validation errors for patterns and configuration

use thiserror::Error;

/// Pattern and configuration errors, raised before any traversal starts
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A glob pattern that failed to compile
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Configuration rejected as a whole
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A domain with no search locations configured
    #[error("no search locations configured for '{domain}'")]
    MissingLocations { domain: String },
}

impl ValidationError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    /// Create a missing locations error
    pub fn missing_locations(domain: &str) -> Self {
        Self::MissingLocations {
            domain: domain.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_names_pattern_and_reason() {
        let error = ValidationError::invalid_pattern("*[", "unclosed character class");

        assert!(error.to_string().contains("*["));
        assert!(error.to_string().contains("unclosed character class"));
    }

    #[test]
    fn test_invalid_configuration_carries_message() {
        let error = ValidationError::invalid_configuration("unknown checksum algorithm: sha513");

        assert!(error.to_string().contains("invalid configuration"));
        assert!(error.to_string().contains("sha513"));
    }

    #[test]
    fn test_missing_locations_names_the_domain() {
        let error = ValidationError::missing_locations("images");

        assert!(error.to_string().contains("no search locations"));
        assert!(error.to_string().contains("images"));
    }
}
