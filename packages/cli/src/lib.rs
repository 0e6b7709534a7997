//! # ProductHub CLI
//!
//! Configuration, logging setup, notifications and the per-invocation
//! dashboard session used by the `producthub` binary.

pub mod config;
pub mod error;
pub mod logging;
pub mod notification;
pub mod state;

pub use config::{Config, ConfigError, IdStrategy};
pub use error::{AppError, AppResult};
pub use notification::{ConsoleNotifier, Notification, Notifier, RecordingNotifier};
pub use state::{AnalyticsReport, DashboardState, FeedbackPage, Overview};
