//! Itemset module - non-empty sets of items

use crate::Item;
use std::cmp::Ordering;
use std::fmt;

/// An immutable, non-empty set of items
///
/// Members are kept sorted and deduplicated, so two itemsets are equal iff
/// their member sets are equal regardless of construction order.
///
/// Itemsets are totally ordered by size first, then lexicographically by
/// their sorted members. This is the enumeration order used for every
/// reported result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Itemset {
    items: Vec<Item>,
}

impl Itemset {
    /// Create an itemset from any collection of items
    ///
    /// # Panics
    /// Panics if the collection is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use basket_domain::Itemset;
    ///
    /// let a = Itemset::new(["Milk", "Eggs", "Milk"]);
    /// let b = Itemset::new(["Eggs", "Milk"]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 2);
    /// ```
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Self::try_new(items).expect("Itemset must contain at least one item")
    }

    /// Create an itemset, returning `None` if the collection is empty
    pub fn try_new<I, T>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let mut items: Vec<Item> = items.into_iter().map(Into::into).collect();
        items.sort();
        items.dedup();
        Self::from_sorted(items)
    }

    /// Build from members already sorted and deduplicated
    fn from_sorted(items: Vec<Item>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Number of members (always >= 1)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sorted members
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterate members in sorted order
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Check membership of a single item
    pub fn contains(&self, item: &Item) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Check whether every member of `self` is also in `other`
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.items.iter().all(|item| other.contains(item))
    }

    /// Check whether the two itemsets share no members
    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        !self.items.iter().any(|item| other.contains(item))
    }

    /// Union of two itemsets
    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut items = self.items.clone();
        items.extend(other.items.iter().cloned());
        items.sort();
        items.dedup();
        Self { items }
    }

    /// Members of `self` not in `other`; `None` when nothing remains
    pub fn difference(&self, other: &Itemset) -> Option<Itemset> {
        let items = self
            .items
            .iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect();
        Self::from_sorted(items)
    }

    /// All subsets of exactly `k` members, in lexicographic order
    ///
    /// Returns an empty vector when `k == 0` or `k > len()`.
    pub fn combinations(&self, k: usize) -> Vec<Itemset> {
        let n = self.items.len();
        if k == 0 || k > n {
            return Vec::new();
        }

        let mut result = Vec::new();
        let mut positions: Vec<usize> = (0..k).collect();
        loop {
            let items = positions.iter().map(|&p| self.items[p].clone()).collect();
            result.push(Self { items });

            // Advance the rightmost position that still has room
            let Some(i) = (0..k).rev().find(|&i| positions[i] < n - k + i) else {
                break;
            };
            positions[i] += 1;
            for j in i + 1..k {
                positions[j] = positions[j - 1] + 1;
            }
        }
        result
    }
}

impl Ord for Itemset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items
            .len()
            .cmp(&other.items.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for Itemset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemset_is_order_independent() {
        let a = Itemset::new(["Bread", "Milk", "Eggs"]);
        let b = Itemset::new(["Eggs", "Bread", "Milk", "Eggs"]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "{Bread, Eggs, Milk}");
    }

    #[test]
    fn test_try_new_rejects_empty() {
        assert!(Itemset::try_new(Vec::<&str>::new()).is_none());
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_empty() {
        Itemset::new(Vec::<&str>::new());
    }

    #[test]
    fn test_ordering_size_then_labels() {
        let milk = Itemset::new(["Milk"]);
        let yogurt = Itemset::new(["Yogurt"]);
        let apple_eggs = Itemset::new(["Apple", "Eggs"]);

        assert!(milk < yogurt);
        // Larger itemsets sort after smaller ones regardless of labels
        assert!(yogurt < apple_eggs);
    }

    #[test]
    fn test_subset_union_difference() {
        let s = Itemset::new(["A", "B", "C"]);
        let a = Itemset::new(["A", "C"]);

        assert!(a.is_subset_of(&s));
        assert!(!s.is_subset_of(&a));
        assert_eq!(s.difference(&a), Some(Itemset::new(["B"])));
        assert_eq!(s.difference(&s), None);
        assert_eq!(a.union(&Itemset::new(["B"])), s);
        assert!(a.is_disjoint(&Itemset::new(["B"])));
    }

    #[test]
    fn test_combinations() {
        let s = Itemset::new(["A", "B", "C", "D"]);

        let pairs: Vec<String> = s.combinations(2).iter().map(|c| c.to_string()).collect();
        assert_eq!(
            pairs,
            vec!["{A, B}", "{A, C}", "{A, D}", "{B, C}", "{B, D}", "{C, D}"]
        );
        assert_eq!(s.combinations(1).len(), 4);
        assert_eq!(s.combinations(4), vec![s.clone()]);
        assert!(s.combinations(0).is_empty());
        assert!(s.combinations(5).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn labels() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-f]", 1..6)
    }

    proptest! {
        /// Property: number of k-subsets matches the binomial coefficient
        #[test]
        fn test_combination_count(items in labels(), k in 1usize..6) {
            let s = Itemset::new(items);
            let n = s.len();
            let expected = if k > n {
                0
            } else {
                (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
            };
            prop_assert_eq!(s.combinations(k).len(), expected);
        }

        /// Property: every combination is a subset and differs from the rest
        #[test]
        fn test_combination_partition(items in labels(), k in 1usize..6) {
            let s = Itemset::new(items);
            for subset in s.combinations(k) {
                prop_assert!(subset.is_subset_of(&s));
                match s.difference(&subset) {
                    Some(rest) => {
                        prop_assert!(rest.is_disjoint(&subset));
                        prop_assert_eq!(rest.union(&subset), s.clone());
                    }
                    None => prop_assert_eq!(subset, s.clone()),
                }
            }
        }
    }
}
