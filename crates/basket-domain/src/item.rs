//! Item module - the atomic label of a basket

use std::fmt;

/// A single purchasable item
///
/// Items are compared lexicographically by label. That order fixes the item
/// universe, so every downstream result is reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(String);

impl Item {
    /// Create a new item from a label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the item label
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Item {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Item {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ordering_is_lexicographic() {
        let apple = Item::from("Apple");
        let eggs = Item::from("Eggs");
        let kidney = Item::from("Kidney Beans");

        assert!(apple < eggs);
        assert!(eggs < kidney);
    }

    #[test]
    fn test_item_display() {
        assert_eq!(Item::new("Ice Cream").to_string(), "Ice Cream");
    }
}
