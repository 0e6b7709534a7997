// ABOUTME: Customer feedback view for ProductHub
// ABOUTME: Search and dropdown filtering plus sentiment statistics

pub mod filter;
pub mod seed;
pub mod stats;
pub mod view;

pub use filter::FeedbackFilter;
pub use seed::seed_feedback;
pub use stats::FeedbackStats;
pub use view::FeedbackView;

// Re-export core types used in this package's API
pub use producthub_core::{FeedbackCategory, FeedbackItem, Selection, Sentiment};
