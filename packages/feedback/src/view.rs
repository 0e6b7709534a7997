use std::sync::Arc;

use producthub_core::FeedbackItem;
use tracing::debug;

use crate::filter::FeedbackFilter;
use crate::seed::seed_feedback;
use crate::stats::FeedbackStats;

/// Feedback collection together with the filter the user has chosen
#[derive(Debug, Clone, Default)]
pub struct FeedbackView {
    items: Arc<Vec<FeedbackItem>>,
    filter: FeedbackFilter,
}

impl FeedbackView {
    pub fn new(items: Vec<FeedbackItem>) -> Self {
        Self {
            items: Arc::new(items),
            filter: FeedbackFilter::default(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_feedback())
    }

    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    pub fn snapshot(&self) -> Arc<Vec<FeedbackItem>> {
        Arc::clone(&self.items)
    }

    pub fn filter(&self) -> &FeedbackFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FeedbackFilter) {
        debug!("Feedback filter changed: {:?}", filter);
        self.filter = filter;
    }

    /// Items passing the current filter, in collection order
    pub fn visible(&self) -> Vec<FeedbackItem> {
        let visible = self.filter.apply(&self.items);
        debug!(
            "Feedback filter kept {} of {} items",
            visible.len(),
            self.items.len()
        );
        visible
    }

    /// Statistics over every item, regardless of the filter
    pub fn stats(&self) -> FeedbackStats {
        FeedbackStats::from_items(&self.items)
    }
}
