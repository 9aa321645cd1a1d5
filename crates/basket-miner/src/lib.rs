//! Basket Miner
//!
//! Frequent itemset mining and association rule generation over in-memory
//! transaction batches.
//!
//! # Overview
//!
//! The miner is a four-stage pipeline. Each stage consumes the previous
//! stage's output and produces a new immutable value:
//!
//! ```text
//! Transactions → Encoder → Apriori → RuleGenerator → Ranker → AnalysisReport
//! ```
//!
//! - **Encoder**: Sorted item universe plus one boolean membership row per transaction
//! - **Apriori**: Level-wise search with downward-closure pruning
//! - **RuleGenerator**: Splits each frequent itemset into antecedent/consequent rules
//! - **Ranker**: Confidence descending, then lift descending, then itemset order
//!
//! # Usage
//!
//! ## Full pipeline
//!
//! ```
//! use basket_miner::{BasketAnalyzer, MiningConfig};
//!
//! # fn main() -> Result<(), basket_miner::MiningError> {
//! let config = MiningConfig {
//!     min_support: 0.5,
//!     min_confidence: 0.6,
//!     ..MiningConfig::default()
//! };
//! let analyzer = BasketAnalyzer::new(config)?;
//!
//! let report = analyzer.analyze_labels(vec![
//!     vec!["Milk", "Eggs"],
//!     vec!["Milk", "Eggs", "Bread"],
//!     vec!["Eggs", "Bread"],
//!     vec!["Milk", "Bread"],
//! ])?;
//!
//! for rule in &report.rules {
//!     println!("{}", rule);
//! }
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Individual stages
//!
//! ```
//! use basket_domain::Transaction;
//! use basket_miner::{encode, rank, Apriori, MiningMetrics, RuleGenerator};
//!
//! # fn main() -> Result<(), basket_miner::MiningError> {
//! let transactions = vec![
//!     Transaction::new(["Milk", "Eggs"]),
//!     Transaction::new(["Milk", "Eggs", "Bread"]),
//! ];
//!
//! let mut metrics = MiningMetrics::new();
//! let encoded = encode(&transactions)?;
//! let table = Apriori::new(0.5)?.mine_encoded(&encoded, &mut metrics);
//! let rules = rank(RuleGenerator::new(0.8)?.generate_with_metrics(&table, &mut metrics));
//!
//! assert_eq!(rules[0].confidence(), 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Thresholds and limits can be loaded from TOML:
//!
//! ```toml
//! min_support = 0.5
//! min_confidence = 0.7
//! max_len = 3
//! parallel = true
//! prune_rules = true
//! top_items = 5
//! ```
//!
//! # Resource use
//!
//! Memory is proportional to the number of frequent itemsets plus the
//! candidates of a single level. Low support thresholds over large item
//! universes can make both grow combinatorially; choose thresholds (or set
//! `max_len`) to fit the dataset.

#![warn(missing_docs)]

mod analyzer;
mod apriori;
mod config;
mod encoder;
mod error;
mod metrics;
mod ranker;
mod rules;

pub use analyzer::{AnalysisReport, BasketAnalyzer};
pub use apriori::{min_count, Apriori};
pub use config::MiningConfig;
pub use encoder::{encode, EncodedTransactions};
pub use error::MiningError;
pub use metrics::{LevelStats, MiningMetrics};
pub use ranker::{compare, rank};
pub use rules::RuleGenerator;
