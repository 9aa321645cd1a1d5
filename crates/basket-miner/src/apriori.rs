//! Level-wise frequent itemset search (Apriori)
//!
//! Candidates of size k are joined from frequent (k-1)-itemsets sharing a
//! (k-2)-prefix, pruned when any (k-1)-subset is infrequent, then counted
//! against every transaction. Itemsets are handled as sorted column indices
//! into the encoded universe until the final table is built.

use crate::config::{check_max_len, check_unit_interval};
use crate::encoder::{encode, EncodedTransactions};
use crate::metrics::{LevelStats, MiningMetrics};
use crate::MiningError;
use basket_domain::traits::ItemsetMiner;
use basket_domain::{FrequentItemsets, Support, Transaction};
use rayon::prelude::*;
use std::collections::HashSet;

/// Sorted column indices of one itemset
type Columns = Vec<usize>;

/// Apriori frequent itemset miner
///
/// # Examples
///
/// ```
/// use basket_domain::{Itemset, Transaction};
/// use basket_domain::traits::ItemsetMiner;
/// use basket_miner::Apriori;
///
/// let transactions = vec![
///     Transaction::new(["Milk", "Eggs"]),
///     Transaction::new(["Milk", "Eggs", "Bread"]),
///     Transaction::new(["Eggs", "Bread"]),
///     Transaction::new(["Milk", "Bread"]),
/// ];
///
/// let table = Apriori::new(0.5).unwrap().mine(&transactions).unwrap();
/// assert_eq!(table.len(), 6);
/// assert_eq!(table.support(&Itemset::new(["Milk", "Eggs"])), Some(0.5));
/// assert!(!table.contains(&Itemset::new(["Milk", "Eggs", "Bread"])));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Apriori {
    min_support: f64,
    max_len: Option<usize>,
    parallel: bool,
}

impl Apriori {
    /// Create a miner with the given minimum support
    ///
    /// # Errors
    /// Returns [`MiningError::InvalidParameter`] unless `min_support` is in (0, 1]
    pub fn new(min_support: f64) -> Result<Self, MiningError> {
        Ok(Self {
            min_support: check_unit_interval("min_support", min_support)?,
            max_len: None,
            parallel: false,
        })
    }

    /// Limit the size of mined itemsets (None = no limit)
    ///
    /// # Errors
    /// Returns [`MiningError::InvalidParameter`] for `Some(0)`
    pub fn with_max_len(mut self, max_len: Option<usize>) -> Result<Self, MiningError> {
        self.max_len = check_max_len(max_len)?;
        Ok(self)
    }

    /// Count candidate support on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configured minimum support
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Configured itemset size limit
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Mine frequent itemsets from already-encoded transactions
    pub fn mine_encoded(
        &self,
        encoded: &EncodedTransactions,
        metrics: &mut MiningMetrics,
    ) -> FrequentItemsets {
        let total = encoded.transaction_count();
        let threshold = min_count(self.min_support, total);
        tracing::debug!(
            "Mining with min_support {} ({} of {} transactions)",
            self.min_support,
            threshold,
            total
        );

        let mut entries = Vec::new();

        // Level 1: every item in the universe is a candidate
        let singletons: Vec<Columns> = (0..encoded.universe().len()).map(|i| vec![i]).collect();
        let mut frequent = self.retain_frequent(encoded, singletons, threshold);
        metrics.record_level(LevelStats {
            size: 1,
            generated: encoded.universe().len(),
            pruned: 0,
            frequent: frequent.len(),
        });
        tracing::debug!("Level 1: {} frequent items", frequent.len());

        let mut k = 2;
        while !frequent.is_empty() && self.max_len.is_none_or(|max| k <= max) {
            let joined = join_candidates(&frequent);
            let generated = joined.len();

            let previous: HashSet<&[usize]> = frequent.iter().map(|(c, _)| c.as_slice()).collect();
            let candidates: Vec<Columns> = joined
                .into_iter()
                .filter(|c| all_subsets_frequent(c, &previous))
                .collect();
            let pruned = generated - candidates.len();

            let next = self.retain_frequent(encoded, candidates, threshold);
            metrics.record_level(LevelStats {
                size: k,
                generated,
                pruned,
                frequent: next.len(),
            });
            tracing::debug!(
                "Level {}: generated {}, pruned {}, frequent {}",
                k,
                generated,
                pruned,
                next.len()
            );

            entries.append(&mut frequent);
            frequent = next;
            k += 1;
        }
        entries.append(&mut frequent);

        FrequentItemsets::from_entries(
            total,
            entries
                .into_iter()
                .map(|(columns, count)| (encoded.to_itemset(&columns), Support::new(count, total))),
        )
    }

    /// Count every candidate and keep those reaching `threshold`
    fn retain_frequent(
        &self,
        encoded: &EncodedTransactions,
        candidates: Vec<Columns>,
        threshold: usize,
    ) -> Vec<(Columns, usize)> {
        let counts: Vec<usize> = if self.parallel {
            candidates.par_iter().map(|c| encoded.support_count(c)).collect()
        } else {
            candidates.iter().map(|c| encoded.support_count(c)).collect()
        };

        candidates
            .into_iter()
            .zip(counts)
            .filter(|(_, count)| *count >= threshold)
            .collect()
    }
}

impl ItemsetMiner for Apriori {
    type Error = MiningError;

    fn mine(&self, transactions: &[Transaction]) -> Result<FrequentItemsets, Self::Error> {
        let encoded = encode(transactions)?;
        Ok(self.mine_encoded(&encoded, &mut MiningMetrics::new()))
    }
}

/// Smallest transaction count whose ratio to `total` reaches `min_support`
///
/// Starts from `ceil(min_support * total)` and corrects for rounding in the
/// product, so the result agrees with the `count / total >= min_support`
/// comparison (0.7 over 10 transactions needs 7, not 8).
pub fn min_count(min_support: f64, total: usize) -> usize {
    let n = total as f64;
    let mut count = ((min_support * n).ceil() as usize).min(total);
    while count > 0 && (count - 1) as f64 / n >= min_support {
        count -= 1;
    }
    while count < total && (count as f64 / n) < min_support {
        count += 1;
    }
    count.max(1)
}

/// Join frequent (k-1)-itemsets sharing their first k-2 columns
///
/// `frequent` must be in lexicographic order, which keeps itemsets with a
/// common prefix adjacent and makes the output lexicographic as well.
fn join_candidates(frequent: &[(Columns, usize)]) -> Vec<Columns> {
    let mut candidates = Vec::new();
    for (i, (left, _)) in frequent.iter().enumerate() {
        let prefix = &left[..left.len() - 1];
        for (right, _) in &frequent[i + 1..] {
            if &right[..right.len() - 1] != prefix {
                break;
            }
            let mut candidate = left.clone();
            candidate.push(right[right.len() - 1]);
            candidates.push(candidate);
        }
    }
    candidates
}

/// Check every (k-1)-subset, not only the two that produced the candidate
fn all_subsets_frequent(candidate: &[usize], previous: &HashSet<&[usize]>) -> bool {
    (0..candidate.len()).all(|skip| {
        let subset: Columns = candidate
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &c)| c)
            .collect();
        previous.contains(subset.as_slice())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_domain::Itemset;

    fn groceries() -> Vec<Transaction> {
        vec![
            Transaction::new(["Milk", "Eggs"]),
            Transaction::new(["Milk", "Eggs", "Bread"]),
            Transaction::new(["Eggs", "Bread"]),
            Transaction::new(["Milk", "Bread"]),
        ]
    }

    #[test]
    fn test_invalid_min_support() {
        for bad in [0.0, -1.0, 1.5, f64::NAN] {
            assert!(matches!(
                Apriori::new(bad),
                Err(MiningError::InvalidParameter { name: "min_support", .. })
            ));
        }
        assert!(Apriori::new(1.0).is_ok());
    }

    #[test]
    fn test_invalid_max_len() {
        let miner = Apriori::new(0.5).unwrap();
        assert!(miner.clone().with_max_len(Some(0)).is_err());
        assert_eq!(miner.with_max_len(Some(2)).unwrap().max_len(), Some(2));
    }

    #[test]
    fn test_empty_input() {
        let miner = Apriori::new(0.5).unwrap();
        assert_eq!(miner.mine(&[]), Err(MiningError::EmptyInput));
    }

    #[test]
    fn test_min_count() {
        assert_eq!(min_count(0.5, 4), 2);
        assert_eq!(min_count(0.7, 10), 7);
        assert_eq!(min_count(0.3, 10), 3);
        assert_eq!(min_count(1.0, 8), 8);
        assert_eq!(min_count(0.01, 8), 1);
        assert_eq!(min_count(0.51, 4), 3);
    }

    #[test]
    fn test_groceries() {
        let table = Apriori::new(0.5).unwrap().mine(&groceries()).unwrap();

        assert_eq!(table.len(), 6);
        assert_eq!(table.support(&Itemset::new(["Milk"])), Some(0.75));
        assert_eq!(table.support(&Itemset::new(["Eggs"])), Some(0.75));
        assert_eq!(table.support(&Itemset::new(["Bread"])), Some(0.75));
        assert_eq!(table.support(&Itemset::new(["Milk", "Eggs"])), Some(0.5));
        assert_eq!(table.support(&Itemset::new(["Milk", "Bread"])), Some(0.5));
        assert_eq!(table.support(&Itemset::new(["Eggs", "Bread"])), Some(0.5));
        assert!(!table.contains(&Itemset::new(["Milk", "Eggs", "Bread"])));
    }

    #[test]
    fn test_metrics_per_level() {
        let encoded = encode(&groceries()).unwrap();
        let mut metrics = MiningMetrics::new();
        Apriori::new(0.5).unwrap().mine_encoded(&encoded, &mut metrics);

        assert_eq!(metrics.levels.len(), 3);
        assert_eq!(metrics.levels[0], LevelStats { size: 1, generated: 3, pruned: 0, frequent: 3 });
        assert_eq!(metrics.levels[1], LevelStats { size: 2, generated: 3, pruned: 0, frequent: 3 });
        // The only triple survives pruning but fails the support count
        assert_eq!(metrics.levels[2], LevelStats { size: 3, generated: 1, pruned: 0, frequent: 0 });
    }

    #[test]
    fn test_max_len_stops_search() {
        let miner = Apriori::new(0.25).unwrap().with_max_len(Some(1)).unwrap();
        let table = miner.mine(&groceries()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.max_size(), 1);

        let unbounded = Apriori::new(0.25).unwrap().mine(&groceries()).unwrap();
        assert_eq!(unbounded.max_size(), 3);
    }

    #[test]
    fn test_threshold_too_high_is_empty() {
        let table = Apriori::new(1.0).unwrap().mine(&groceries()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.transaction_count(), 4);
    }

    #[test]
    fn test_join_shares_prefix() {
        let frequent = vec![
            (vec![0, 1], 0),
            (vec![0, 2], 0),
            (vec![0, 3], 0),
            (vec![1, 2], 0),
            (vec![2, 3], 0),
        ];
        let joined = join_candidates(&frequent);
        assert_eq!(joined, vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3]]);
    }

    #[test]
    fn test_prune_checks_all_subsets() {
        // {0,1,3} was joined from {0,1} and {0,3}, but {1,3} is missing
        let frequent: Vec<Columns> = vec![vec![0, 1], vec![0, 3], vec![1, 2], vec![0, 2]];
        let previous: HashSet<&[usize]> = frequent.iter().map(|c| c.as_slice()).collect();

        assert!(!all_subsets_frequent(&[0, 1, 3], &previous));
        assert!(all_subsets_frequent(&[0, 1, 2], &previous));
    }

    #[test]
    fn test_pruning_is_recorded() {
        // Pairs {A,B}, {A,C} frequent but {B,C} is not, so {A,B,C} is pruned
        let transactions = vec![
            Transaction::new(["A", "B"]),
            Transaction::new(["A", "B"]),
            Transaction::new(["A", "C"]),
            Transaction::new(["A", "C"]),
            Transaction::new(["B", "C"]),
        ];
        let encoded = encode(&transactions).unwrap();
        let mut metrics = MiningMetrics::new();
        let table = Apriori::new(0.4).unwrap().mine_encoded(&encoded, &mut metrics);

        assert!(table.contains(&Itemset::new(["A", "B"])));
        assert!(!table.contains(&Itemset::new(["B", "C"])));
        assert_eq!(metrics.levels[2], LevelStats { size: 3, generated: 1, pruned: 1, frequent: 0 });
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = Apriori::new(0.25).unwrap().mine(&groceries()).unwrap();
        let parallel = Apriori::new(0.25)
            .unwrap()
            .with_parallel(true)
            .mine(&groceries())
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
