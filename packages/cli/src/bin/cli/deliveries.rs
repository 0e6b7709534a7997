use clap::{Args, Subcommand};
use colored::*;
use inquire::{Confirm, Text};
use producthub_cli::{AppResult, DashboardState, Notifier};
use producthub_core::{
    join_features, DeliveryFormInput, DeliveryItem, DeliveryPriority, DeliveryStatus, Selection,
};

use super::output::{badge_cell, empty_notice, format_date, heading, new_table, Output};

/// Editable delivery fields; on edit, omitted flags keep the current value
#[derive(Args)]
pub struct DeliveryFields {
    /// Product ID (generated when left out on add)
    #[arg(long)]
    product_id: Option<String>,
    /// Product name
    #[arg(long)]
    product: Option<String>,
    #[arg(long)]
    version: Option<String>,
    /// Comma-separated feature list
    #[arg(long)]
    features: Option<String>,
    /// Estimated date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    status: Option<DeliveryStatus>,
    #[arg(long)]
    priority: Option<DeliveryPriority>,
    #[arg(long)]
    description: Option<String>,
}

impl DeliveryFields {
    fn apply_to(self, form: &mut DeliveryFormInput) {
        if let Some(product_id) = self.product_id {
            form.product_id = product_id;
        }
        if let Some(product) = self.product {
            form.product_name = product;
        }
        if let Some(version) = self.version {
            form.version = version;
        }
        if let Some(features) = self.features {
            form.features = features;
        }
        if let Some(date) = self.date {
            form.estimated_date = date;
        }
        if let Some(status) = self.status {
            form.status = status;
        }
        if let Some(priority) = self.priority {
            form.priority = priority;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
    }
}

#[derive(Subcommand)]
pub enum DeliveriesCommands {
    /// List scheduled deliveries
    List {
        /// Status filter, or "all"
        #[arg(long, default_value = "all")]
        status: String,
        /// Priority filter, or "all"
        #[arg(long, default_value = "all")]
        priority: String,
    },
    /// Schedule a new delivery (prompts for required fields not given)
    Add(DeliveryFields),
    /// Edit a scheduled delivery
    Edit {
        id: String,
        #[command(flatten)]
        fields: DeliveryFields,
    },
    /// Delete a scheduled delivery
    Delete {
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn handle_deliveries_command(
    command: DeliveriesCommands,
    state: &mut DashboardState,
    notifier: &mut dyn Notifier,
    output: Output,
) -> AppResult<()> {
    match command {
        DeliveriesCommands::List { status, priority } => {
            let status = Selection::<DeliveryStatus>::parse(&status)?;
            let priority = Selection::<DeliveryPriority>::parse(&priority)?;
            list_deliveries(&state.deliveries(&status, &priority), output)
        }
        DeliveriesCommands::Add(fields) => {
            let mut form = DeliveryFormInput::default();
            fields.apply_to(&mut form);
            prompt_if_blank(&mut form.product_name, "Product name:")?;
            prompt_if_blank(&mut form.version, "Version:")?;
            prompt_if_blank(&mut form.features, "Features (comma-separated):")?;
            prompt_if_blank(&mut form.estimated_date, "Estimated date (YYYY-MM-DD):")?;

            let item = state.add_delivery(form, notifier)?;
            if !output.json(&item)? {
                print_delivery(&item);
            }
            Ok(())
        }
        DeliveriesCommands::Edit { id, fields } => {
            let mut form = state.delivery_form(&id)?;
            fields.apply_to(&mut form);

            let item = state.edit_delivery(&id, form, notifier)?;
            if !output.json(&item)? {
                print_delivery(&item);
            }
            Ok(())
        }
        DeliveriesCommands::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::new(&format!("Delete delivery '{}'?", id))
                    .with_default(false)
                    .prompt()?;
                if !confirmed {
                    eprintln!("{}", "Cancelled".dimmed());
                    return Ok(());
                }
            }

            if !state.delete_delivery(&id, notifier) {
                eprintln!("{}", format!("No delivery with ID '{}'", id).dimmed());
            }
            output.json(state.deliveries.deliveries())?;
            Ok(())
        }
    }
}

fn prompt_if_blank(value: &mut String, prompt: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        *value = Text::new(prompt).prompt()?;
    }
    Ok(())
}

fn list_deliveries(items: &[DeliveryItem], output: Output) -> AppResult<()> {
    if output.json(items)? {
        return Ok(());
    }

    if items.is_empty() {
        empty_notice("No deliveries match the selected filters");
        return Ok(());
    }

    heading("Delivery Schedule");

    let mut table = new_table(vec![
        "ID", "Product", "Version", "Status", "Priority", "Estimated", "Features",
    ]);
    for item in items {
        table.add_row(vec![
            item.id.clone().into(),
            item.product_name.clone().into(),
            item.version.clone().into(),
            badge_cell(item.status.badge()),
            badge_cell(item.priority.badge()),
            format_date(&item.estimated_date).into(),
            join_features(&item.features).into(),
        ]);
    }

    println!("{}", table);
    println!("Total: {} deliveries", items.len().to_string().cyan());
    Ok(())
}

fn print_delivery(item: &DeliveryItem) {
    println!(
        "{} {} {} ({})",
        item.id.cyan(),
        item.product_name.bold(),
        item.version,
        format_date(&item.estimated_date)
    );
    println!("  {}", join_features(&item.features));
    if let Some(description) = &item.description {
        println!("  {}", description.dimmed());
    }
}
