// ABOUTME: Delivery schedule management for ProductHub
// ABOUTME: Planned releases, roadmap features, timeline layout and delivery rates

pub mod filters;
pub mod manager;
pub mod rates;
pub mod roadmap;
pub mod seed;
pub mod timeline;

pub use filters::{filter_by_status_and_priority, DeliveryFilter, RoadmapFilter};
pub use manager::DeliveryManager;
pub use rates::DeliveryRate;
pub use roadmap::Roadmap;
pub use seed::{seed_deliveries, seed_delivery_rates, seed_roadmap};
pub use timeline::{build_timeline, days_remaining, roadmap_epoch, TimelineEntry};

// Re-export core types used in this package's API
pub use producthub_core::{
    DeliveryFormInput, DeliveryItem, DeliveryPriority, DeliveryStatus, FeatureStage,
    ManagerError, ManagerResult, RoadmapFeature, RoadmapPriority, Selection,
};
