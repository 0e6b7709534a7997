// ABOUTME: Shared rendering helpers for the producthub commands
// ABOUTME: Table presets, badge colouring, date formatting and JSON output

use chrono::NaiveDate;
use colored::*;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, ContentArrangement, Table,
};
use producthub_cli::AppResult;
use producthub_core::{parse_date, Badge, BadgeVariant};
use serde::Serialize;

/// Output mode selected by the global `--json` flag
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Prints `value` as pretty JSON when requested; returns whether it did
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> AppResult<bool> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(self.json)
    }
}

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn badge_cell(badge: Badge) -> Cell {
    let color = match badge.variant {
        BadgeVariant::Default => Color::Green,
        BadgeVariant::Secondary => Color::Yellow,
        BadgeVariant::Outline => Color::Grey,
        BadgeVariant::Destructive => Color::Red,
    };
    Cell::new(badge.label).fg(color)
}

pub fn badge_text(badge: Badge) -> ColoredString {
    match badge.variant {
        BadgeVariant::Default => badge.label.green(),
        BadgeVariant::Secondary => badge.label.yellow(),
        BadgeVariant::Outline => badge.label.dimmed(),
        BadgeVariant::Destructive => badge.label.red(),
    }
}

/// "2024-04-15" becomes "Apr 15, 2024"; anything unparseable is shown as is
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|date: NaiveDate| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn heading(title: &str) {
    println!("{}", title.blue().bold());
    println!();
}

pub fn empty_notice(message: &str) {
    println!("{}", message.yellow());
}
