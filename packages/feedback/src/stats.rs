use producthub_core::{FeedbackItem, Sentiment};
use serde::{Deserialize, Serialize};

/// Sentiment counts shown above the feedback list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl FeedbackStats {
    /// Counts over the whole collection; filters never narrow these numbers.
    pub fn from_items(items: &[FeedbackItem]) -> Self {
        items.iter().fold(
            FeedbackStats {
                total: items.len(),
                ..FeedbackStats::default()
            },
            |mut stats, item| {
                match item.sentiment {
                    Sentiment::Positive => stats.positive += 1,
                    Sentiment::Negative => stats.negative += 1,
                    Sentiment::Neutral => stats.neutral += 1,
                }
                stats
            },
        )
    }

    pub fn count_for(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Positive share of all feedback, rounded half up; 0 when empty
    pub fn positive_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let positive = self.positive as u64;
        let total = self.total as u64;
        u32::try_from((positive * 200 + total) / (total * 2)).unwrap_or(100)
    }
}
