use colored::*;
use producthub_cli::{AppResult, DashboardState};
use producthub_core::ProductStatus;
use strum::IntoEnumIterator;

use super::output::{badge_cell, badge_text, empty_notice, heading, new_table, Output};

pub fn show_overview(state: &DashboardState, output: Output) -> AppResult<()> {
    let overview = state.overview();
    if output.json(&overview)? {
        return Ok(());
    }

    heading("ProductHub Overview");

    let summary = &overview.summary;
    println!("{} {}", "Total Products:".bold(), summary.total_products);
    println!(
        "{} {}%",
        "Average Satisfaction:".bold(),
        summary.overall_satisfaction
    );
    println!(
        "{} {} {}",
        "Total User Engagement:".bold(),
        summary.engagement,
        "(upvotes & feedback)".dimmed()
    );
    println!();

    if overview.recent_products.is_empty() {
        empty_notice("No products yet");
        return Ok(());
    }

    let mut table = new_table(vec!["Product", "Satisfaction"]);
    for entry in &overview.recent_products {
        table.add_row(vec![entry.name.clone(), format!("{}%", entry.satisfaction)]);
    }
    println!("{}", table);
    Ok(())
}

pub fn show_analytics(state: &DashboardState, output: Output) -> AppResult<()> {
    let report = state.analytics();
    if output.json(&report)? {
        return Ok(());
    }

    heading("Product Analytics");

    let summary = &report.summary;
    println!(
        "Products: {}  Upvotes: {}  Downvotes: {}  Feedback: {}",
        summary.total_products.to_string().cyan(),
        summary.total_upvotes.to_string().green(),
        summary.total_downvotes.to_string().red(),
        summary.total_feedback.to_string().cyan()
    );
    println!();

    let mut table = new_table(vec![
        "Rank", "Product", "Satisfaction", "Rating", "Votes", "Feedback",
    ]);
    for (rank, entry) in report.ranking.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string().into(),
            entry.name.clone().into(),
            format!("{}%", entry.satisfaction).into(),
            badge_cell(entry.tier.badge()),
            format!("{} / {}", entry.upvotes, entry.downvotes).into(),
            entry.feedback_count.to_string().into(),
        ]);
    }
    println!("{}", table);

    println!("{}", "Status distribution:".bold());
    for status in ProductStatus::iter() {
        println!(
            "  {}: {}",
            badge_text(status.badge()),
            summary.count_for(status)
        );
    }

    println!();
    println!(
        "{} {} positive, {} neutral, {} negative",
        "Feedback sentiment:".bold(),
        report.feedback.positive,
        report.feedback.neutral,
        report.feedback.negative
    );
    Ok(())
}
