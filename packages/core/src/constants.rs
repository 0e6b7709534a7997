/// Filter value meaning "do not narrow on this field".
///
/// Compared case-insensitively, so both the roadmap's `"All"` and the
/// feedback view's `"all"` select everything.
pub const ALL_SENTINEL: &str = "all";

/// First day of the roadmap timeline; bar start offsets are measured from it.
pub const ROADMAP_EPOCH: (i32, u32, u32) = (2024, 7, 1);

/// Shortest bar drawn on the roadmap timeline, in days
pub const TIMELINE_MIN_DURATION_DAYS: i64 = 30;

/// Timeline labels longer than this are cut and suffixed with "..."
pub const TIMELINE_NAME_MAX_CHARS: usize = 25;

/// Date format used by every date string in the dashboard
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lowest satisfaction percent rated "Excellent"
pub const SATISFACTION_EXCELLENT_MIN: u8 = 80;

/// Lowest satisfaction percent rated "Good"
pub const SATISFACTION_GOOD_MIN: u8 = 60;
