//! Error types for mining operations

use thiserror::Error;

/// Errors that can abort a mining run
///
/// An empty result (no frequent itemsets, no rules) is not an error; it is
/// returned as an empty table or rule list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    /// No transactions were supplied
    #[error("Empty input: at least one transaction is required")]
    EmptyInput,

    /// A threshold or limit is outside its valid range
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value as supplied
        value: String,
        /// Valid range or constraint
        reason: String,
    },

    /// Configuration could not be parsed or serialized
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MiningError {
    /// Build an `InvalidParameter` error
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        MiningError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for MiningError {
    fn from(e: toml::de::Error) -> Self {
        MiningError::Config(format!("Failed to parse TOML: {}", e))
    }
}

impl From<toml::ser::Error> for MiningError {
    fn from(e: toml::ser::Error) -> Self {
        MiningError::Config(format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MiningError::EmptyInput.to_string(),
            "Empty input: at least one transaction is required"
        );

        let err = MiningError::invalid_parameter("min_support", 1.5, "must be in (0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid parameter min_support=1.5: must be in (0, 1]"
        );
    }
}
