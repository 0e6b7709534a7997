use producthub_core::{FeedbackCategory, FeedbackItem, ParseEnumError, Selection, Sentiment};

/// Search box plus the product, sentiment and category dropdowns.
///
/// All four conditions must hold for an item to be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFilter {
    /// Matched case-insensitively against the feedback text and product name
    pub search: String,
    /// Product id
    pub product: Selection<String>,
    pub sentiment: Selection<Sentiment>,
    pub category: Selection<FeedbackCategory>,
}

impl FeedbackFilter {
    /// Builds a filter from raw dropdown values, where "all" selects everything
    pub fn from_labels(
        search: &str,
        product: &str,
        sentiment: &str,
        category: &str,
    ) -> Result<Self, ParseEnumError> {
        Ok(FeedbackFilter {
            search: search.to_string(),
            product: Selection::from_label(product),
            sentiment: Selection::parse(sentiment)?,
            category: Selection::parse(category)?,
        })
    }

    pub fn matches(&self, item: &FeedbackItem) -> bool {
        self.matches_search(item)
            && self.product.matches(item.product_id.as_str())
            && self.sentiment.matches(&item.sentiment)
            && self.category.matches(&item.category)
    }

    pub fn apply(&self, items: &[FeedbackItem]) -> Vec<FeedbackItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    fn matches_search(&self, item: &FeedbackItem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.feedback.to_lowercase().contains(&needle)
            || item.product_name.to_lowercase().contains(&needle)
    }
}
