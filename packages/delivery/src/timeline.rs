use chrono::NaiveDate;
use producthub_core::{
    days_between, parse_date, truncate, FeatureStage, RoadmapFeature, RoadmapPriority,
    ROADMAP_EPOCH, TIMELINE_MIN_DURATION_DAYS, TIMELINE_NAME_MAX_CHARS,
};
use serde::Serialize;
use tracing::warn;

/// One bar of the roadmap timeline chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Label shown on the axis, shortened for long feature names
    pub name: String,
    pub full_name: String,
    /// Offset of the bar from the roadmap epoch, in days
    pub start: i64,
    /// Bar length in days
    pub duration: i64,
    pub progress: u8,
    pub stage: FeatureStage,
    pub target_date: String,
    pub priority: RoadmapPriority,
}

pub fn roadmap_epoch() -> NaiveDate {
    let (year, month, day) = ROADMAP_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Days from `today` until `target_date`; negative once the date has passed
pub fn days_remaining(target_date: &str, today: NaiveDate) -> Option<i64> {
    parse_date(target_date).map(|target| days_between(today, target))
}

/// Lays out the timeline for the features of one product.
///
/// Every bar starts at today's offset from the epoch, counting the current
/// day as begun (so 1 on the epoch itself, never below 0), and
/// runs to the target date, but is at least a month long so overdue items
/// stay visible. Features with an unreadable target date are left out.
pub fn build_timeline(
    features: &[RoadmapFeature],
    product: &str,
    today: NaiveDate,
) -> Vec<TimelineEntry> {
    let start = (days_between(roadmap_epoch(), today) + 1).max(0);

    features
        .iter()
        .filter(|feature| feature.product == product)
        .filter_map(|feature| {
            let Some(remaining) = days_remaining(&feature.target_date, today) else {
                warn!(
                    "Skipping '{}' on the timeline: invalid target date '{}'",
                    feature.feature, feature.target_date
                );
                return None;
            };

            Some(TimelineEntry {
                name: truncate(&feature.feature, TIMELINE_NAME_MAX_CHARS),
                full_name: feature.feature.clone(),
                start,
                duration: remaining.max(TIMELINE_MIN_DURATION_DAYS),
                progress: feature.progress,
                stage: feature.stage,
                target_date: feature.target_date.clone(),
                priority: feature.priority,
            })
        })
        .collect()
}
