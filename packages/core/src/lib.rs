// ABOUTME: Core types, traits, and utilities for ProductHub
// ABOUTME: Foundational package shared by the product, delivery and feedback managers

pub mod badges;
pub mod constants;
pub mod error;
pub mod selection;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    DeliveryFormInput, DeliveryItem, DeliveryPriority, DeliverySchedule,
    DeliveryStatus, FeatureStage, FeedbackCategory, FeedbackItem, Product, ProductInput,
    ProductStatus, RoadmapFeature, RoadmapPriority, Sentiment, VoteDirection,
};

// Re-export badges
pub use badges::{Badge, BadgeVariant, SatisfactionTier};

// Re-export constants
pub use constants::{
    ALL_SENTINEL, DATE_FORMAT, ROADMAP_EPOCH, SATISFACTION_EXCELLENT_MIN, SATISFACTION_GOOD_MIN,
    TIMELINE_MIN_DURATION_DAYS, TIMELINE_NAME_MAX_CHARS,
};

// Re-export errors
pub use error::{ManagerError, ManagerResult, ParseEnumError};

// Re-export selection
pub use selection::Selection;

// Re-export utilities
pub use utils::{
    days_between, join_features, parse_date, parse_features, truncate, IdGenerator,
    NanoIdGenerator, SequentialIdGenerator,
};

// Re-export validation
pub use validation::{
    validate_delivery_form, validate_feedback_text, validate_product_input, ValidationError,
};
