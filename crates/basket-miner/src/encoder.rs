//! Item universe encoding
//!
//! Turns transactions into boolean membership rows over a sorted item
//! universe. Column `i` of every row refers to `universe()[i]`.

use crate::MiningError;
use basket_domain::{Item, Itemset, Transaction};
use std::collections::BTreeSet;

/// Transactions encoded as membership rows over a sorted item universe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTransactions {
    universe: Vec<Item>,
    rows: Vec<Vec<bool>>,
}

/// Encode transactions over their sorted universe of distinct items
///
/// # Errors
/// Returns [`MiningError::EmptyInput`] when `transactions` is empty
///
/// # Examples
///
/// ```
/// use basket_domain::Transaction;
/// use basket_miner::encode;
///
/// let encoded = encode(&[
///     Transaction::new(["Milk", "Eggs"]),
///     Transaction::new(["Bread"]),
/// ]).unwrap();
///
/// assert_eq!(encoded.universe().len(), 3);
/// assert_eq!(encoded.rows()[0], vec![false, true, true]); // Bread, Eggs, Milk
/// ```
pub fn encode(transactions: &[Transaction]) -> Result<EncodedTransactions, MiningError> {
    if transactions.is_empty() {
        return Err(MiningError::EmptyInput);
    }

    let universe: Vec<Item> = transactions
        .iter()
        .flat_map(|t| t.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let rows = transactions
        .iter()
        .map(|t| {
            let mut row = vec![false; universe.len()];
            for item in t.iter() {
                if let Ok(index) = universe.binary_search(item) {
                    row[index] = true;
                }
            }
            row
        })
        .collect();

    tracing::debug!(
        "Encoded {} transactions over {} distinct items",
        transactions.len(),
        universe.len()
    );

    Ok(EncodedTransactions { universe, rows })
}

impl EncodedTransactions {
    /// Sorted distinct items
    pub fn universe(&self) -> &[Item] {
        &self.universe
    }

    /// One membership row per transaction, in input order
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of encoded transactions
    pub fn transaction_count(&self) -> usize {
        self.rows.len()
    }

    /// Column index of an item
    pub fn index_of(&self, item: &Item) -> Option<usize> {
        self.universe.binary_search(item).ok()
    }

    /// Item at a column index
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.universe.get(index)
    }

    /// Number of transactions containing every column in `indices`
    pub fn support_count(&self, indices: &[usize]) -> usize {
        self.rows
            .iter()
            .filter(|row| indices.iter().all(|&i| row[i]))
            .count()
    }

    /// Convert sorted column indices back to an itemset
    pub(crate) fn to_itemset(&self, indices: &[usize]) -> Itemset {
        Itemset::new(indices.iter().map(|&i| self.universe[i].clone()))
    }

    /// Number of transactions containing each item, in universe order
    pub fn item_counts(&self) -> Vec<(Item, usize)> {
        let mut counts = vec![0usize; self.universe.len()];
        for row in &self.rows {
            for (count, &present) in counts.iter_mut().zip(row) {
                if present {
                    *count += 1;
                }
            }
        }
        self.universe.iter().cloned().zip(counts).collect()
    }

    /// The `n` most frequent items, count descending, label ascending on ties
    pub fn top_items(&self, n: usize) -> Vec<(Item, usize)> {
        let mut counts = self.item_counts();
        // Stable sort keeps universe (label) order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }
}
