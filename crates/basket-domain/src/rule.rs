//! Association rule module

use crate::{Itemset, Support};
use std::fmt;

/// An association rule `antecedent -> consequent`
///
/// Both sides are non-empty and disjoint, and their union is a frequent
/// itemset. Every metric is derived from integer transaction counts, so
/// rules built from the same counts carry bit-identical metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    antecedent: Itemset,
    consequent: Itemset,
    support: Support,
    antecedent_support: Support,
    consequent_support: Support,
}

impl AssociationRule {
    /// Create a rule from the supports of its union and both sides
    ///
    /// # Panics
    /// Panics if the sides overlap, if the supports were taken over
    /// different transaction counts, or if the antecedent count is zero
    pub fn new(
        antecedent: Itemset,
        consequent: Itemset,
        support: Support,
        antecedent_support: Support,
        consequent_support: Support,
    ) -> Self {
        assert!(
            antecedent.is_disjoint(&consequent),
            "Antecedent and consequent must be disjoint"
        );
        assert!(
            support.total() == antecedent_support.total()
                && support.total() == consequent_support.total(),
            "Rule supports must share a transaction count"
        );
        assert!(antecedent_support.count() > 0, "Antecedent must occur at least once");

        Self {
            antecedent,
            consequent,
            support,
            antecedent_support,
            consequent_support,
        }
    }

    /// Left-hand side of the rule
    pub fn antecedent(&self) -> &Itemset {
        &self.antecedent
    }

    /// Right-hand side of the rule
    pub fn consequent(&self) -> &Itemset {
        &self.consequent
    }

    /// The frequent itemset the rule was split from
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }

    /// support(antecedent ∪ consequent)
    pub fn support(&self) -> f64 {
        self.support.value()
    }

    /// Exact support ratio of the whole rule
    pub fn support_ratio(&self) -> Support {
        self.support
    }

    /// support(antecedent)
    pub fn antecedent_support(&self) -> f64 {
        self.antecedent_support.value()
    }

    /// support(consequent)
    pub fn consequent_support(&self) -> f64 {
        self.consequent_support.value()
    }

    /// support(rule) / support(antecedent)
    pub fn confidence(&self) -> f64 {
        // Transaction counts cancel out
        self.support.count() as f64 / self.antecedent_support.count() as f64
    }

    /// confidence(rule) / support(consequent)
    ///
    /// 1.0 means the two sides occur independently.
    pub fn lift(&self) -> f64 {
        let numerator = self.support.count() as f64 * self.support.total() as f64;
        let denominator =
            self.antecedent_support.count() as f64 * self.consequent_support.count() as f64;
        numerator / denominator
    }

    /// support(rule) - support(antecedent) * support(consequent)
    pub fn leverage(&self) -> f64 {
        self.support() - self.antecedent_support() * self.consequent_support()
    }

    /// (1 - support(consequent)) / (1 - confidence)
    ///
    /// Infinite when the rule always holds.
    pub fn conviction(&self) -> f64 {
        let confidence = self.confidence();
        if confidence >= 1.0 {
            return f64::INFINITY;
        }
        (1.0 - self.consequent_support()) / (1.0 - confidence)
    }
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (support={:.4}, confidence={:.4}, lift={:.4})",
            self.antecedent,
            self.consequent,
            self.support(),
            self.confidence(),
            self.lift()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kidney_to_onion() -> AssociationRule {
        // 8 baskets: Kidney Beans in 5, Onion in 4, both in 4
        AssociationRule::new(
            Itemset::new(["Kidney Beans"]),
            Itemset::new(["Onion"]),
            Support::new(4, 8),
            Support::new(5, 8),
            Support::new(4, 8),
        )
    }

    #[test]
    fn test_core_metrics() {
        let rule = kidney_to_onion();
        assert_eq!(rule.support(), 0.5);
        assert_eq!(rule.confidence(), 0.8);
        assert!((rule.lift() - 1.6).abs() < 1e-12);
        assert_eq!(rule.itemset(), Itemset::new(["Kidney Beans", "Onion"]));
    }

    #[test]
    fn test_report_metrics() {
        let rule = kidney_to_onion();
        assert_eq!(rule.antecedent_support(), 0.625);
        assert_eq!(rule.consequent_support(), 0.5);
        assert!((rule.leverage() - (0.5 - 0.625 * 0.5)).abs() < 1e-12);
        assert!((rule.conviction() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_certain_rule_has_infinite_conviction() {
        let rule = AssociationRule::new(
            Itemset::new(["A"]),
            Itemset::new(["B"]),
            Support::new(1, 1),
            Support::new(1, 1),
            Support::new(1, 1),
        );
        assert_eq!(rule.confidence(), 1.0);
        assert_eq!(rule.lift(), 1.0);
        assert!(rule.conviction().is_infinite());
    }

    #[test]
    fn test_display() {
        let rule = kidney_to_onion();
        assert_eq!(
            rule.to_string(),
            "{Kidney Beans} -> {Onion} (support=0.5000, confidence=0.8000, lift=1.6000)"
        );
    }

    #[test]
    #[should_panic]
    fn test_overlapping_sides() {
        AssociationRule::new(
            Itemset::new(["A", "B"]),
            Itemset::new(["B"]),
            Support::new(1, 2),
            Support::new(1, 2),
            Support::new(1, 2),
        );
    }
}
