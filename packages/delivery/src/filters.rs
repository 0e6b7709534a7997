use producthub_core::{DeliveryItem, DeliveryPriority, DeliveryStatus, RoadmapFeature, Selection};
use serde::{Deserialize, Serialize};

/// Status and priority dropdowns of the delivery list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryFilter {
    pub status: Selection<DeliveryStatus>,
    pub priority: Selection<DeliveryPriority>,
}

impl DeliveryFilter {
    pub fn matches(&self, item: &DeliveryItem) -> bool {
        self.status.matches(&item.status) && self.priority.matches(&item.priority)
    }

    pub fn apply(&self, items: &[DeliveryItem]) -> Vec<DeliveryItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

/// Narrows deliveries by status and priority, keeping schedule order
pub fn filter_by_status_and_priority(
    items: &[DeliveryItem],
    status: &Selection<DeliveryStatus>,
    priority: &Selection<DeliveryPriority>,
) -> Vec<DeliveryItem> {
    DeliveryFilter {
        status: status.clone(),
        priority: priority.clone(),
    }
    .apply(items)
}

/// Quarter and product dropdowns of the roadmap view.
///
/// Products are matched by display name, the way roadmap features reference them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoadmapFilterLabels", into = "RoadmapFilterLabels")]
pub struct RoadmapFilter {
    pub quarter: Selection<String>,
    pub product: Selection<String>,
}

/// Wire form of [`RoadmapFilter`]: raw dropdown values, "All" selecting everything
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoadmapFilterLabels {
    #[serde(default)]
    quarter: String,
    #[serde(default)]
    product: String,
}

impl From<RoadmapFilterLabels> for RoadmapFilter {
    fn from(labels: RoadmapFilterLabels) -> Self {
        RoadmapFilter::from_labels(&labels.quarter, &labels.product)
    }
}

impl From<RoadmapFilter> for RoadmapFilterLabels {
    fn from(filter: RoadmapFilter) -> Self {
        let label = |selection: Selection<String>| match selection {
            Selection::All => "All".to_string(),
            Selection::Only(value) => value,
        };
        RoadmapFilterLabels {
            quarter: label(filter.quarter),
            product: label(filter.product),
        }
    }
}

impl RoadmapFilter {
    /// Builds a filter from dropdown values such as `("Q3 2024", "All")`
    pub fn from_labels(quarter: &str, product: &str) -> Self {
        RoadmapFilter {
            quarter: Selection::from_label(quarter),
            product: Selection::from_label(product),
        }
    }

    pub fn matches(&self, feature: &RoadmapFeature) -> bool {
        self.quarter.matches(feature.quarter.as_str()) && self.product.matches(feature.product.as_str())
    }

    pub fn apply(&self, features: &[RoadmapFeature]) -> Vec<RoadmapFeature> {
        features
            .iter()
            .filter(|feature| self.matches(feature))
            .cloned()
            .collect()
    }
}
