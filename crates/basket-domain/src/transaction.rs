//! Transaction module - one basket of purchased items

use crate::{Item, Itemset};
use std::collections::BTreeSet;

/// A single transaction: the distinct items bought together
///
/// Duplicate items collapse on construction. An empty transaction is valid
/// and still counts toward the total when computing support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Transaction {
    items: BTreeSet<Item>,
}

impl Transaction {
    /// Create a transaction from any collection of items
    ///
    /// # Examples
    ///
    /// ```
    /// use basket_domain::Transaction;
    ///
    /// let t = Transaction::new(["Milk", "Eggs", "Milk"]);
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the basket is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check membership of a single item
    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Check whether the transaction is a superset of `itemset`
    pub fn contains_all(&self, itemset: &Itemset) -> bool {
        itemset.iter().all(|item| self.items.contains(item))
    }

    /// Iterate items in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl<T: Into<Item>> FromIterator<T> for Transaction {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_idempotent() {
        let t = Transaction::new(["Milk", "Milk", "Eggs"]);
        assert_eq!(t, Transaction::new(["Eggs", "Milk"]));
    }

    #[test]
    fn test_contains_all() {
        let t = Transaction::new(["Milk", "Eggs", "Bread"]);
        assert!(t.contains_all(&Itemset::new(["Milk", "Bread"])));
        assert!(!t.contains_all(&Itemset::new(["Milk", "Yogurt"])));
    }

    #[test]
    fn test_empty_transaction() {
        let t: Transaction = Vec::<&str>::new().into_iter().collect();
        assert!(t.is_empty());
        assert!(!t.contains_all(&Itemset::new(["Milk"])));
    }
}
