//! Configuration for mining runs
//!
//! Defines the support and confidence thresholds plus the search limits.

use crate::MiningError;
use serde::{Deserialize, Serialize};

/// Configuration for a basket analysis run
///
/// # Examples
///
/// ```
/// use basket_miner::MiningConfig;
///
/// // Default configuration: 50% support, 70% confidence
/// let config = MiningConfig::default();
/// assert_eq!(config.min_support, 0.5);
/// assert_eq!(config.min_confidence, 0.7);
///
/// // Exploratory: lower thresholds, more itemsets and rules
/// let config = MiningConfig::exploratory();
/// assert!(config.min_support < 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Minimum fraction of transactions an itemset must appear in, in (0, 1]
    /// Default: 0.5
    pub min_support: f64,

    /// Minimum confidence a rule must reach, in (0, 1]
    /// Default: 0.7
    pub min_confidence: f64,

    /// Largest itemset size to mine (None = no limit)
    /// Default: None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,

    /// Count support and enumerate rules on the rayon thread pool
    /// Default: false
    #[serde(default)]
    pub parallel: bool,

    /// Skip consequents whose subsets already failed the confidence threshold
    /// Default: true
    #[serde(default = "default_prune_rules")]
    pub prune_rules: bool,

    /// Number of most frequent items to report alongside the rules
    /// Default: 5
    #[serde(default = "default_top_items")]
    pub top_items: usize,
}

fn default_prune_rules() -> bool {
    true
}

fn default_top_items() -> usize {
    5
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.5,
            min_confidence: 0.7,
            max_len: None,
            parallel: false,
            prune_rules: true,
            top_items: 5,
        }
    }
}

impl MiningConfig {
    /// Exploratory preset: low thresholds for surfacing weak associations
    ///
    /// Expect many more itemsets on large universes.
    pub fn exploratory() -> Self {
        Self {
            min_support: 0.1,
            min_confidence: 0.3,
            max_len: None,
            parallel: true,
            prune_rules: true,
            top_items: 10,
        }
    }

    /// Strict preset: only common itemsets and near-certain rules
    pub fn strict() -> Self {
        Self {
            min_support: 0.6,
            min_confidence: 0.9,
            max_len: Some(3),
            parallel: false,
            prune_rules: true,
            top_items: 5,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), MiningError> {
        check_unit_interval("min_support", self.min_support)?;
        check_unit_interval("min_confidence", self.min_confidence)?;
        check_max_len(self.max_len)?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, MiningError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, MiningError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Reject thresholds outside (0, 1], including NaN
pub(crate) fn check_unit_interval(name: &'static str, value: f64) -> Result<f64, MiningError> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(MiningError::invalid_parameter(name, value, "must be in (0, 1]"))
    }
}

pub(crate) fn check_max_len(max_len: Option<usize>) -> Result<Option<usize>, MiningError> {
    match max_len {
        Some(0) => Err(MiningError::invalid_parameter(
            "max_len",
            0,
            "must be at least 1",
        )),
        other => Ok(other),
    }
}
