use colored::*;
use producthub_cli::{AppResult, DashboardState};
use producthub_core::truncate;
use producthub_feedback::FeedbackFilter;

use super::output::{badge_cell, empty_notice, format_date, heading, new_table, Output};

pub fn show_feedback(
    state: &mut DashboardState,
    filter: FeedbackFilter,
    output: Output,
) -> AppResult<()> {
    let page = state.feedback_page(filter);
    if output.json(&page)? {
        return Ok(());
    }

    heading("Customer Feedback");
    println!(
        "Total: {}  Positive: {}  Neutral: {}  Negative: {}",
        page.stats.total.to_string().cyan(),
        page.stats.positive.to_string().green(),
        page.stats.neutral.to_string().yellow(),
        page.stats.negative.to_string().red()
    );
    println!(
        "{}",
        format!("{}% of total is positive", page.stats.positive_percent()).dimmed()
    );
    println!();

    if page.items.is_empty() {
        empty_notice("No feedback matches the selected filters");
        return Ok(());
    }

    let mut table = new_table(vec![
        "Date", "Product", "Sentiment", "Category", "Feedback", "User",
    ]);
    for item in &page.items {
        table.add_row(vec![
            format_date(&item.date).into(),
            item.product_name.clone().into(),
            badge_cell(item.sentiment.badge()),
            item.category.label().into(),
            truncate(&item.feedback, 60).into(),
            item.user_id.clone().into(),
        ]);
    }

    println!("{}", table);
    println!(
        "Showing {} of {}",
        page.items.len().to_string().cyan(),
        page.stats.total
    );
    Ok(())
}
