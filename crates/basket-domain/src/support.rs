//! Support module - exact transaction-frequency ratios

use std::fmt;

/// Support of an itemset, kept as the exact ratio `count / total`
///
/// `count` is the number of transactions containing the itemset and `total`
/// is the number of transactions in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Support {
    count: usize,
    total: usize,
}

impl Support {
    /// Create a new support ratio
    ///
    /// # Panics
    /// Panics if `total` is zero or `count > total`
    pub fn new(count: usize, total: usize) -> Self {
        assert!(total > 0, "Support total must be positive");
        assert!(count <= total, "Support count must not exceed total");

        Self { count, total }
    }

    /// Number of transactions containing the itemset
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of transactions in the dataset
    pub fn total(&self) -> usize {
        self.total
    }

    /// Support as a fraction in [0, 1]
    pub fn value(&self) -> f64 {
        self.count as f64 / self.total as f64
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} ({}/{})", self.value(), self.count, self.total)
    }
}
