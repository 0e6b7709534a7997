use std::sync::Arc;

use chrono::NaiveDate;
use producthub_core::RoadmapFeature;
use tracing::debug;

use crate::filters::RoadmapFilter;
use crate::seed::seed_roadmap;
use crate::timeline::{build_timeline, TimelineEntry};

/// Read-only view over the cross-product roadmap
#[derive(Debug, Clone, Default)]
pub struct Roadmap {
    features: Arc<Vec<RoadmapFeature>>,
}

impl Roadmap {
    pub fn new(features: Vec<RoadmapFeature>) -> Self {
        Self {
            features: Arc::new(features),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_roadmap())
    }

    pub fn features(&self) -> &[RoadmapFeature] {
        &self.features
    }

    pub fn snapshot(&self) -> Arc<Vec<RoadmapFeature>> {
        Arc::clone(&self.features)
    }

    /// Distinct quarter labels in first-seen order, for the quarter dropdown
    pub fn quarters(&self) -> Vec<String> {
        distinct(self.features.iter().map(|f| f.quarter.as_str()))
    }

    /// Distinct product names in first-seen order, for the product dropdown
    pub fn products(&self) -> Vec<String> {
        distinct(self.features.iter().map(|f| f.product.as_str()))
    }

    pub fn filter(&self, filter: &RoadmapFilter) -> Vec<RoadmapFeature> {
        let features = filter.apply(&self.features);
        debug!(
            "Roadmap filter kept {} of {} features",
            features.len(),
            self.features.len()
        );
        features
    }

    pub fn timeline(&self, product: &str, today: NaiveDate) -> Vec<TimelineEntry> {
        build_timeline(&self.features, product, today)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
