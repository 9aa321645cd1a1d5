//! Rule ranking

use basket_domain::AssociationRule;
use std::cmp::Ordering;

/// Order rules by confidence, then lift, both descending
///
/// Remaining ties fall back to the antecedent and then the consequent in
/// itemset order, so the output is fully deterministic.
pub fn rank(mut rules: Vec<AssociationRule>) -> Vec<AssociationRule> {
    rules.sort_by(compare);
    rules
}

/// Total order used by [`rank`]
pub fn compare(a: &AssociationRule, b: &AssociationRule) -> Ordering {
    b.confidence()
        .total_cmp(&a.confidence())
        .then_with(|| b.lift().total_cmp(&a.lift()))
        .then_with(|| a.antecedent().cmp(b.antecedent()))
        .then_with(|| a.consequent().cmp(b.consequent()))
}
