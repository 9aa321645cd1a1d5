//! Metrics collection for mining runs

/// Candidate counts for one level of the Apriori search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Itemset size at this level
    pub size: usize,

    /// Candidates produced by the join step (the whole universe at level 1)
    pub generated: usize,

    /// Candidates discarded because a (k-1)-subset was infrequent
    pub pruned: usize,

    /// Candidates whose support met the threshold
    pub frequent: usize,
}

impl LevelStats {
    /// Candidates whose support was counted against the transactions
    pub fn counted(&self) -> usize {
        self.generated - self.pruned
    }
}

/// Metrics collected during a mining run
///
/// Tracks the search effort per level, the rule enumeration effort and
/// the wall-clock time spent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MiningMetrics {
    /// Transactions in the input
    pub transactions: usize,

    /// Distinct items across all transactions
    pub universe_size: usize,

    /// Per-level search statistics, level 1 first
    pub levels: Vec<LevelStats>,

    /// Candidate rules whose confidence was computed
    pub rules_evaluated: usize,

    /// Rules meeting the confidence threshold
    pub rules_retained: usize,

    /// Total runtime in milliseconds
    pub elapsed_ms: u64,
}

impl MiningMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one Apriori level
    pub fn record_level(&mut self, stats: LevelStats) {
        self.levels.push(stats);
    }

    /// Record rule enumeration for one itemset
    pub fn record_rules(&mut self, evaluated: usize, retained: usize) {
        self.rules_evaluated += evaluated;
        self.rules_retained += retained;
    }

    /// Get total candidates generated across all levels
    pub fn total_generated(&self) -> usize {
        self.levels.iter().map(|l| l.generated).sum()
    }

    /// Get total candidates pruned by downward closure
    pub fn total_pruned(&self) -> usize {
        self.levels.iter().map(|l| l.pruned).sum()
    }

    /// Get total frequent itemsets found
    pub fn total_frequent(&self) -> usize {
        self.levels.iter().map(|l| l.frequent).sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Mining Metrics Summary".to_string(),
            "======================".to_string(),
            format!("Transactions: {}", self.transactions),
            format!("Distinct items: {}", self.universe_size),
            format!("Total runtime: {}ms", self.elapsed_ms),
            String::new(),
        ];

        if !self.levels.is_empty() {
            lines.push("Itemset levels:".to_string());
            for level in &self.levels {
                lines.push(format!(
                    "  k={}: generated {}, pruned {}, frequent {}",
                    level.size, level.generated, level.pruned, level.frequent
                ));
            }
            lines.push(format!("  Total frequent: {}", self.total_frequent()));
            lines.push(String::new());
        }

        lines.push(format!(
            "Rules: evaluated {}, retained {}",
            self.rules_evaluated, self.rules_retained
        ));

        lines.join("\n")
    }
}
