//! Frequent itemset table

use crate::{Itemset, Support};
use std::collections::BTreeMap;

/// Table of every itemset whose support met the mining threshold
///
/// Entries iterate in the itemset total order (size ascending, then labels).
/// A table produced by a correct miner is downward closed: every non-empty
/// subset of a member is itself a member.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemsets {
    table: BTreeMap<Itemset, Support>,
    transaction_count: usize,
}

impl FrequentItemsets {
    /// Build the table from mined entries
    ///
    /// # Panics
    /// Panics if any support was computed over a different transaction count
    pub fn from_entries<I>(transaction_count: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (Itemset, Support)>,
    {
        let table: BTreeMap<Itemset, Support> = entries.into_iter().collect();
        assert!(
            table.values().all(|s| s.total() == transaction_count),
            "All supports must share the table's transaction count"
        );

        Self {
            table,
            transaction_count,
        }
    }

    /// Table with no frequent itemsets
    pub fn empty(transaction_count: usize) -> Self {
        Self {
            table: BTreeMap::new(),
            transaction_count,
        }
    }

    /// Number of transactions the supports were computed over
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Look up the support of an itemset
    pub fn get(&self, itemset: &Itemset) -> Option<Support> {
        self.table.get(itemset).copied()
    }

    /// Support of an itemset as a fraction
    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.get(itemset).map(|s| s.value())
    }

    /// Whether the itemset is frequent
    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.table.contains_key(itemset)
    }

    /// Number of frequent itemsets
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no itemset met the threshold
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate entries in itemset order
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, &Support)> {
        self.table.iter()
    }

    /// Iterate the frequent itemsets of exactly `k` members
    pub fn of_size(&self, k: usize) -> impl Iterator<Item = (&Itemset, &Support)> {
        self.table.iter().filter(move |(itemset, _)| itemset.len() == k)
    }

    /// Size of the largest frequent itemset (0 when empty)
    pub fn max_size(&self) -> usize {
        // Itemsets sort by size first, so the last key is a largest one
        self.table.keys().next_back().map_or(0, Itemset::len)
    }

    /// Check the downward-closure invariant
    ///
    /// Checking the (k-1)-subsets of every member is enough: closure of
    /// smaller subsets follows by induction over the table.
    pub fn is_downward_closed(&self) -> bool {
        self.table.keys().filter(|s| s.len() >= 2).all(|itemset| {
            itemset
                .combinations(itemset.len() - 1)
                .iter()
                .all(|subset| self.table.contains_key(subset))
        })
    }
}

impl<'a> IntoIterator for &'a FrequentItemsets {
    type Item = (&'a Itemset, &'a Support);
    type IntoIter = std::collections::btree_map::Iter<'a, Itemset, Support>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}
