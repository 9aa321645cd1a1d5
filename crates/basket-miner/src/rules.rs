//! Association rule generation
//!
//! Every frequent itemset S with |S| >= 2 is split into `S \ H -> H` for
//! non-empty proper subsets H. Confidence only depends on the support of S
//! and of the antecedent, both of which are in the frequent table by
//! downward closure.

use crate::config::check_unit_interval;
use crate::metrics::MiningMetrics;
use crate::MiningError;
use basket_domain::traits::RuleMiner;
use basket_domain::{AssociationRule, FrequentItemsets, Itemset, Support};
use rayon::prelude::*;
use std::collections::HashSet;

/// Generator of association rules meeting a minimum confidence
///
/// With pruning enabled (the default) consequents are grown one item at a
/// time from consequents that already passed: moving items from the
/// antecedent to the consequent can only lower confidence. The retained
/// rules are the same as with exhaustive enumeration.
///
/// # Examples
///
/// ```
/// use basket_domain::{Itemset, Transaction};
/// use basket_domain::traits::{ItemsetMiner, RuleMiner};
/// use basket_miner::{Apriori, RuleGenerator};
///
/// let table = Apriori::new(1.0)
///     .unwrap()
///     .mine(&[Transaction::new(["A", "B"])])
///     .unwrap();
/// let rules = RuleGenerator::new(1.0).unwrap().generate(&table).unwrap();
///
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[0].confidence(), 1.0);
/// assert_eq!(rules[0].lift(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuleGenerator {
    min_confidence: f64,
    prune: bool,
    parallel: bool,
}

impl RuleGenerator {
    /// Create a generator with the given minimum confidence
    ///
    /// # Errors
    /// Returns [`MiningError::InvalidParameter`] unless `min_confidence` is in (0, 1]
    pub fn new(min_confidence: f64) -> Result<Self, MiningError> {
        Ok(Self {
            min_confidence: check_unit_interval("min_confidence", min_confidence)?,
            prune: true,
            parallel: false,
        })
    }

    /// Enable or disable confidence-based consequent pruning
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Enumerate itemsets on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configured minimum confidence
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Generate rules and record the enumeration effort
    ///
    /// Rules are returned grouped by source itemset in table order; use
    /// [`crate::rank`] for the reporting order.
    pub fn generate_with_metrics(
        &self,
        itemsets: &FrequentItemsets,
        metrics: &mut MiningMetrics,
    ) -> Vec<AssociationRule> {
        let sources: Vec<(&Itemset, &Support)> =
            itemsets.iter().filter(|(s, _)| s.len() >= 2).collect();

        let per_itemset: Vec<RuleBatch> = if self.parallel {
            sources
                .par_iter()
                .map(|(itemset, support)| self.rules_for(itemset, **support, itemsets))
                .collect()
        } else {
            sources
                .iter()
                .map(|(itemset, support)| self.rules_for(itemset, **support, itemsets))
                .collect()
        };

        let mut rules = Vec::new();
        for batch in per_itemset {
            metrics.record_rules(batch.evaluated, batch.rules.len());
            rules.extend(batch.rules);
        }

        tracing::debug!(
            "Generated {} rules from {} itemsets (min_confidence {})",
            rules.len(),
            sources.len(),
            self.min_confidence
        );
        rules
    }

    fn rules_for(&self, itemset: &Itemset, support: Support, table: &FrequentItemsets) -> RuleBatch {
        let mut batch = RuleBatch::default();
        if self.prune {
            self.grow_consequents(itemset, support, table, &mut batch);
        } else {
            for size in 1..itemset.len() {
                for consequent in itemset.combinations(size) {
                    self.evaluate(itemset, support, consequent, table, &mut batch);
                }
            }
        }
        batch
    }

    /// Level-wise consequent growth
    ///
    /// If `S \ H -> H` fails, so does every rule whose consequent contains H,
    /// so only passing consequents are joined into the next level.
    fn grow_consequents(
        &self,
        itemset: &Itemset,
        support: Support,
        table: &FrequentItemsets,
        batch: &mut RuleBatch,
    ) {
        let mut consequents = itemset.combinations(1);
        let mut size = 1;
        while !consequents.is_empty() && size < itemset.len() {
            let mut passing = Vec::new();
            for consequent in consequents {
                if self.evaluate(itemset, support, consequent.clone(), table, batch) {
                    passing.push(consequent);
                }
            }
            size += 1;
            consequents = if size < itemset.len() {
                join_consequents(&passing)
            } else {
                Vec::new()
            };
        }
    }

    /// Score one split, keeping it when confidence reaches the threshold
    fn evaluate(
        &self,
        itemset: &Itemset,
        support: Support,
        consequent: Itemset,
        table: &FrequentItemsets,
        batch: &mut RuleBatch,
    ) -> bool {
        let Some(antecedent) = itemset.difference(&consequent) else {
            return false;
        };
        let (Some(antecedent_support), Some(consequent_support)) =
            (table.get(&antecedent), table.get(&consequent))
        else {
            // Only reachable for tables that are not downward closed
            tracing::warn!(
                "Skipping {} -> {}: subset missing from frequent table",
                antecedent,
                consequent
            );
            return false;
        };

        batch.evaluated += 1;
        let rule = AssociationRule::new(
            antecedent,
            consequent,
            support,
            antecedent_support,
            consequent_support,
        );
        if rule.confidence() >= self.min_confidence {
            batch.rules.push(rule);
            true
        } else {
            false
        }
    }
}

impl RuleMiner for RuleGenerator {
    type Error = MiningError;

    fn generate(&self, itemsets: &FrequentItemsets) -> Result<Vec<AssociationRule>, Self::Error> {
        Ok(self.generate_with_metrics(itemsets, &mut MiningMetrics::new()))
    }
}

/// Rules and evaluation count for one source itemset
#[derive(Debug, Default)]
struct RuleBatch {
    rules: Vec<AssociationRule>,
    evaluated: usize,
}

/// Join passing m-item consequents into (m+1)-item candidates
///
/// `passing` is in lexicographic order; a candidate is kept only when all
/// of its m-subsets passed.
fn join_consequents(passing: &[Itemset]) -> Vec<Itemset> {
    let passed: HashSet<&Itemset> = passing.iter().collect();
    let mut candidates = Vec::new();

    for (i, left) in passing.iter().enumerate() {
        let prefix = &left.items()[..left.len() - 1];
        for right in &passing[i + 1..] {
            if &right.items()[..right.len() - 1] != prefix {
                break;
            }
            let candidate = left.union(right);
            let closed = candidate
                .combinations(candidate.len() - 1)
                .iter()
                .all(|subset| passed.contains(subset));
            if closed {
                candidates.push(candidate);
            }
        }
    }
    candidates
}
