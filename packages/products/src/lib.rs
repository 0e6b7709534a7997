//! # ProductHub Products
//!
//! Session-scoped management of the product portfolio: adding products,
//! voting, collecting feedback, searching, and the satisfaction aggregates
//! shown on the overview and analytics pages.

pub mod analytics;
pub mod manager;
pub mod satisfaction;
pub mod search;
pub mod seed;

pub use analytics::{
    ranked_by_satisfaction, satisfaction_breakdown, PortfolioSummary, SatisfactionEntry,
    StatusCount,
};
pub use manager::ProductsManager;
pub use satisfaction::{compute_satisfaction, satisfaction_percent};
pub use search::{matches_search, search_products};
pub use seed::seed_products;

// Re-export the entity model so consumers need only this crate
pub use producthub_core::{
    DeliverySchedule, ManagerError, ManagerResult, Product, ProductInput, ProductStatus,
    VoteDirection,
};
