use colored::*;
use producthub_cli::{AppResult, DashboardState};
use producthub_delivery::{days_remaining, DeliveryRate, RoadmapFilter};

use super::output::{badge_cell, empty_notice, format_date, heading, new_table, Output};

pub fn show_roadmap(
    state: &DashboardState,
    quarter: &str,
    product: &str,
    output: Output,
) -> AppResult<()> {
    let features = state.roadmap(&RoadmapFilter::from_labels(quarter, product));
    if output.json(&features)? {
        return Ok(());
    }

    if features.is_empty() {
        empty_notice("No roadmap features match the selected filters");
        return Ok(());
    }

    heading("Product Roadmap");

    let today = state.today();
    let mut table = new_table(vec![
        "Feature", "Product", "Quarter", "Stage", "Priority", "Progress", "Target", "Days Left",
    ]);
    for feature in &features {
        let days_left = match days_remaining(&feature.target_date, today) {
            Some(days) if days < 0 => format!("{} overdue", -days),
            Some(days) => days.to_string(),
            None => "—".to_string(),
        };
        table.add_row(vec![
            feature.feature.clone().into(),
            feature.product.clone().into(),
            feature.quarter.clone().into(),
            badge_cell(feature.stage.badge()),
            badge_cell(feature.priority.badge()),
            format!("{}%", feature.progress).into(),
            format_date(&feature.target_date).into(),
            days_left.into(),
        ]);
    }

    println!("{}", table);
    println!(
        "{} {}",
        "Quarters:".dimmed(),
        state.roadmap.quarters().join(", ")
    );
    Ok(())
}

pub fn show_timeline(state: &DashboardState, product: &str, output: Output) -> AppResult<()> {
    let entries = state.timeline(product);
    if output.json(&entries)? {
        return Ok(());
    }

    if entries.is_empty() {
        empty_notice(&format!("No timeline entries for '{}'", product));
        return Ok(());
    }

    heading(&format!("{} - Timeline", product));

    let mut table = new_table(vec![
        "Feature", "Start (day)", "Duration (days)", "Progress", "Stage", "Target",
    ]);
    for entry in &entries {
        table.add_row(vec![
            entry.name.clone().into(),
            entry.start.to_string().into(),
            entry.duration.to_string().into(),
            format!("{}%", entry.progress).into(),
            badge_cell(entry.stage.badge()),
            format_date(&entry.target_date).into(),
        ]);
    }

    println!("{}", table);
    Ok(())
}

pub fn show_rates(state: &DashboardState, output: Output) -> AppResult<()> {
    if output.json(&state.rates)? {
        return Ok(());
    }

    if state.rates.is_empty() {
        empty_notice("No delivery history recorded");
        return Ok(());
    }

    heading("Delivery Performance");

    let mut table = new_table(vec!["Product", "Delivered", "Planned", "Rate", "Velocity"]);
    for rate in &state.rates {
        table.add_row(vec![
            rate.product.clone(),
            rate.delivered.to_string(),
            rate.planned.to_string(),
            format!("{}%", rate.rate_percent()),
            format!("{:.1}", rate.velocity),
        ]);
    }
    println!("{}", table);

    println!("{}", "From the current schedule:".dimmed());
    for product in state.products.products() {
        let derived = DeliveryRate::from_deliveries(&product.name, state.deliveries.deliveries());
        if derived.planned > 0 {
            println!(
                "  {}: {} of {} features released ({}%)",
                product.name,
                derived.delivered,
                derived.planned,
                derived.rate_percent()
            );
        }
    }
    Ok(())
}
