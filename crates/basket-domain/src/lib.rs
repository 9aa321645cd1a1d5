//! Basket Domain Layer
//!
//! This crate contains the value model for market-basket analysis. It has
//! ZERO external dependencies and defines the concepts and trait interfaces
//! that the mining crate builds on.
//!
//! ## Key Concepts
//!
//! - **Item**: An opaque, totally ordered label
//! - **Transaction**: A set of items bought together
//! - **Itemset**: A non-empty, sorted set of items
//! - **Support**: Fraction of transactions containing an itemset, kept as an exact ratio
//! - **Frequent itemsets**: The table of every itemset meeting a minimum support
//! - **Association rule**: `antecedent -> consequent` with support, confidence and lift
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Immutable values only; every result is rebuilt from scratch per run
//! - Trait definitions for the mining algorithms

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod frequent;
pub mod item;
pub mod itemset;
pub mod rule;
pub mod support;
pub mod traits;
pub mod transaction;

// Re-exports for convenience
pub use frequent::FrequentItemsets;
pub use item::Item;
pub use itemset::Itemset;
pub use rule::AssociationRule;
pub use support::Support;
pub use transaction::Transaction;
