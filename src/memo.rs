//! Insight memo store.
//!
//! An append-only, in-memory log of business insights discovered during
//! analysis, synthesized on demand into the `memo://insights` resource text.
//! Nothing is persisted; the memo starts empty on every process start.

/// Append-only log of free-text insights.
#[derive(Debug, Default)]
pub struct InsightMemo {
    insights: Vec<String>,
}

impl InsightMemo {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an insight verbatim. Insertion order is preserved; entries are
    /// never edited or removed.
    pub fn append(&mut self, insight: impl Into<String>) {
        self.insights.push(insight.into());
    }

    /// Number of insights recorded so far.
    pub fn len(&self) -> usize {
        self.insights.len()
    }

    /// Whether no insights have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    /// Render the memo document from current state.
    ///
    /// Empty memo yields a fixed placeholder sentence. Otherwise: a header,
    /// one bulleted line per insight in insertion order, and a summary line
    /// with the count once there are at least two insights.
    pub fn synthesize(&self) -> String {
        if self.insights.is_empty() {
            return "No business insights have been discovered yet.".to_string();
        }

        let mut memo = String::from("📊 Business Intelligence Memo 📊\n\n");
        memo.push_str("Key Insights Discovered:\n\n");

        let bullets: Vec<String> = self.insights.iter().map(|i| format!("- {}", i)).collect();
        memo.push_str(&bullets.join("\n"));

        if self.insights.len() > 1 {
            memo.push_str("\nSummary:\n");
            memo.push_str(&format!(
                "Analysis has revealed {} key business insights that suggest \
                 opportunities for strategic optimization and growth.",
                self.insights.len()
            ));
        }

        memo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_memo_uses_placeholder() {
        let memo = InsightMemo::new();
        assert_eq!(
            memo.synthesize(),
            "No business insights have been discovered yet."
        );
    }

    #[test]
    fn single_insight_has_no_summary() {
        let mut memo = InsightMemo::new();
        memo.append("Q3 revenue grew 12%");

        let text = memo.synthesize();
        assert!(text.starts_with("📊 Business Intelligence Memo 📊"));
        assert!(text.contains("- Q3 revenue grew 12%"));
        assert!(!text.contains("Summary:"));
    }

    #[test]
    fn two_insights_add_summary_with_count() {
        let mut memo = InsightMemo::new();
        memo.append("first");
        memo.append("second");

        let text = memo.synthesize();
        assert!(text.contains("- first"));
        assert!(text.contains("- second"));
        assert!(text.contains("Summary:"));
        assert!(text.contains("revealed 2 key business insights"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut memo = InsightMemo::new();
        for i in 0..5 {
            memo.append(format!("insight {}", i));
        }

        let text = memo.synthesize();
        let positions: Vec<usize> = (0..5)
            .map(|i| text.find(&format!("- insight {}", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn append_grows_by_one_and_never_shrinks() {
        let mut memo = InsightMemo::new();
        assert!(memo.is_empty());
        for i in 1..=10 {
            memo.append("x");
            assert_eq!(memo.len(), i);
        }
    }

    #[test]
    fn synthesize_is_idempotent() {
        let mut memo = InsightMemo::new();
        memo.append("a");
        memo.append("b");
        assert_eq!(memo.synthesize(), memo.synthesize());
    }

    #[test]
    fn duplicate_insights_are_kept() {
        let mut memo = InsightMemo::new();
        memo.append("same");
        memo.append("same");
        assert_eq!(memo.len(), 2);
        assert!(memo.synthesize().contains("revealed 2 key"));
    }
}
