// ABOUTME: Shared utility functions for ProductHub
// ABOUTME: ID generation, feature-list parsing, date arithmetic and text truncation

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;

/// Source of fresh record ids.
///
/// Managers take one of these instead of deriving ids from the clock, so
/// tests can assert on ids and rapid sequential creates never collide.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Monotonic counter producing "1", "2", "3", ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

/// Random 21-character URL-safe ids
#[derive(Debug, Clone, Copy, Default)]
pub struct NanoIdGenerator;

impl IdGenerator for NanoIdGenerator {
    fn next_id(&mut self) -> String {
        nanoid::nanoid!()
    }
}

/// Splits comma-separated feature text, trimming each entry and dropping empties.
/// Order and duplicates are preserved.
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_features`] used to pre-fill edit forms
pub fn join_features(features: &[String]) -> String {
    features.join(", ")
}

/// Parses a `YYYY-MM-DD` date string
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Whole days from `from` to `to`; negative when `to` is earlier
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Cuts `text` to `max_chars` characters and appends "..." when it was longer
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
