//! Trait definitions for the mining algorithms
//!
//! These traits define the boundaries between the value model and the
//! algorithms that produce it. Implementations live in `basket-miner`.

use crate::{AssociationRule, FrequentItemsets, Transaction};

/// Trait for discovering frequent itemsets
///
/// Implemented by the mining layer (basket-miner)
pub trait ItemsetMiner {
    /// Error type for mining operations
    type Error;

    /// Find every itemset meeting the miner's support threshold
    fn mine(&self, transactions: &[Transaction]) -> Result<FrequentItemsets, Self::Error>;
}

/// Trait for deriving association rules from frequent itemsets
///
/// Implemented by the mining layer (basket-miner)
pub trait RuleMiner {
    /// Error type for rule generation
    type Error;

    /// Split every frequent itemset into rules meeting the generator's threshold
    fn generate(&self, itemsets: &FrequentItemsets) -> Result<Vec<AssociationRule>, Self::Error>;
}
