//! End-to-end basket analysis pipeline

use crate::{encode, rank, Apriori, MiningConfig, MiningError, MiningMetrics, RuleGenerator};
use basket_domain::{AssociationRule, FrequentItemsets, Item, Transaction};
use std::time::Instant;

/// Result of one analysis run
///
/// An empty rule list is a valid outcome meaning no rule reached the
/// confidence threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Every itemset meeting the support threshold
    pub frequent_itemsets: FrequentItemsets,

    /// Rules meeting the confidence threshold, ranked
    pub rules: Vec<AssociationRule>,

    /// Most frequent single items with their transaction counts
    pub top_items: Vec<(Item, usize)>,

    /// Search and enumeration statistics
    pub metrics: MiningMetrics,
}

impl AnalysisReport {
    /// Whether any rule met the confidence threshold
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Generate a plain-text summary of the run
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Frequent itemsets: {}", self.frequent_itemsets.len()),
            format!("Rules: {}", self.rules.len()),
        ];
        if !self.top_items.is_empty() {
            lines.push("Top items:".to_string());
            for (item, count) in &self.top_items {
                lines.push(format!("  {}: {}", item, count));
            }
        }
        lines.push(String::new());
        lines.push(self.metrics.summary());
        lines.join("\n")
    }
}

/// Runs Encoder -> Apriori -> RuleGenerator -> Ranker over a batch of
/// transactions
///
/// # Examples
///
/// ```
/// use basket_miner::{BasketAnalyzer, MiningConfig};
///
/// # fn main() -> Result<(), basket_miner::MiningError> {
/// let analyzer = BasketAnalyzer::new(MiningConfig::default())?;
/// let report = analyzer.analyze_labels(vec![
///     vec!["Milk", "Eggs"],
///     vec!["Milk", "Eggs", "Bread"],
///     vec!["Eggs", "Bread"],
///     vec!["Milk", "Bread"],
/// ])?;
///
/// assert_eq!(report.frequent_itemsets.len(), 6);
/// // No rule reaches 70% confidence here; that is not an error
/// assert!(!report.has_rules());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BasketAnalyzer {
    config: MiningConfig,
    miner: Apriori,
    rule_generator: RuleGenerator,
}

impl BasketAnalyzer {
    /// Create an analyzer, validating the configuration up front
    pub fn new(config: MiningConfig) -> Result<Self, MiningError> {
        config.validate()?;

        let miner = Apriori::new(config.min_support)?
            .with_max_len(config.max_len)?
            .with_parallel(config.parallel);
        let rule_generator = RuleGenerator::new(config.min_confidence)?
            .with_pruning(config.prune_rules)
            .with_parallel(config.parallel);

        Ok(Self {
            config,
            miner,
            rule_generator,
        })
    }

    /// Get the active configuration
    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Run the full pipeline once
    ///
    /// # Errors
    /// Returns [`MiningError::EmptyInput`] when `transactions` is empty
    pub fn analyze(&self, transactions: &[Transaction]) -> Result<AnalysisReport, MiningError> {
        let start = Instant::now();
        tracing::info!(
            "Analyzing {} transactions (min_support {}, min_confidence {})",
            transactions.len(),
            self.config.min_support,
            self.config.min_confidence
        );

        let encoded = encode(transactions)?;
        let mut metrics = MiningMetrics::new();
        metrics.transactions = encoded.transaction_count();
        metrics.universe_size = encoded.universe().len();

        let frequent_itemsets = self.miner.mine_encoded(&encoded, &mut metrics);
        if frequent_itemsets.is_empty() {
            tracing::warn!(
                "No itemset reached min_support {}; rule generation skipped",
                self.config.min_support
            );
        } else {
            tracing::info!(
                "Found {} frequent itemsets (largest has {} items)",
                frequent_itemsets.len(),
                frequent_itemsets.max_size()
            );
        }

        let rules = rank(
            self.rule_generator
                .generate_with_metrics(&frequent_itemsets, &mut metrics),
        );
        if rules.is_empty() {
            tracing::info!(
                "No rule reached min_confidence {}",
                self.config.min_confidence
            );
        }

        let top_items = encoded.top_items(self.config.top_items);
        metrics.elapsed_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Analysis complete: {} itemsets, {} rules in {}ms",
            frequent_itemsets.len(),
            rules.len(),
            metrics.elapsed_ms
        );

        Ok(AnalysisReport {
            frequent_itemsets,
            rules,
            top_items,
            metrics,
        })
    }

    /// Run the pipeline over baskets given as raw labels
    pub fn analyze_labels<B, I, T>(&self, baskets: B) -> Result<AnalysisReport, MiningError>
    where
        B: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let transactions: Vec<Transaction> = baskets.into_iter().map(Transaction::new).collect();
        self.analyze(&transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_domain::Itemset;

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MiningConfig {
            min_confidence: 0.0,
            ..MiningConfig::default()
        };
        assert!(matches!(
            BasketAnalyzer::new(config),
            Err(MiningError::InvalidParameter { name: "min_confidence", .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let analyzer = BasketAnalyzer::new(MiningConfig::default()).unwrap();
        assert_eq!(analyzer.analyze(&[]), Err(MiningError::EmptyInput));
    }

    #[test]
    fn test_report_contents() {
        let config = MiningConfig {
            min_support: 1.0,
            min_confidence: 1.0,
            top_items: 1,
            ..MiningConfig::default()
        };
        let analyzer = BasketAnalyzer::new(config).unwrap();
        let report = analyzer.analyze_labels(vec![vec!["A", "B"]]).unwrap();

        assert_eq!(report.frequent_itemsets.len(), 3);
        assert!(report.has_rules());
        assert_eq!(report.rules.len(), 2);
        assert_eq!(report.rules[0].antecedent(), &Itemset::new(["A"]));
        assert_eq!(report.top_items, vec![(Item::from("A"), 1)]);

        assert_eq!(report.metrics.transactions, 1);
        assert_eq!(report.metrics.universe_size, 2);
        assert_eq!(report.metrics.rules_retained, 2);
    }

    #[test]
    fn test_summary() {
        let analyzer = BasketAnalyzer::new(MiningConfig::default()).unwrap();
        let report = analyzer
            .analyze_labels(vec![vec!["Milk", "Eggs"], vec!["Milk"]])
            .unwrap();

        let summary = report.summary();
        assert!(summary.contains("Frequent itemsets: 3"));
        assert!(summary.contains("Rules: 1"));
        assert!(summary.contains("  Milk: 2"));
        assert!(summary.contains("Transactions: 2"));
    }
}
