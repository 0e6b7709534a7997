use clap::Subcommand;
use colored::*;
use inquire::Text;
use producthub_cli::{AppResult, DashboardState, Notifier};
use producthub_core::{truncate, Product, ProductInput, ProductStatus, VoteDirection};
use producthub_products::compute_satisfaction;

use super::output::{badge_cell, badge_text, empty_notice, format_date, heading, new_table, Output};

#[derive(Subcommand)]
pub enum ProductsCommands {
    /// List products, optionally narrowed by a search term
    List {
        /// Matches name, description or product manager
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show product details
    Show {
        /// Product ID to show
        id: String,
    },
    /// Add a new product (prompts for anything not given)
    Add {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Product manager
        #[arg(long)]
        pm: Option<String>,
        /// Launch date (YYYY-MM-DD)
        #[arg(long)]
        launch_date: Option<String>,
        #[arg(long, default_value = "Planned")]
        status: ProductStatus,
    },
    /// Vote on a product
    Vote {
        id: String,
        /// up or down
        direction: VoteDirection,
    },
    /// Leave feedback on a product
    Feedback { id: String, text: String },
}

pub fn handle_products_command(
    command: ProductsCommands,
    state: &mut DashboardState,
    notifier: &mut dyn Notifier,
    output: Output,
) -> AppResult<()> {
    match command {
        ProductsCommands::List { search } => list_products(state, search.as_deref(), output),
        ProductsCommands::Show { id } => show_product(state, &id, output),
        ProductsCommands::Add {
            name,
            description,
            pm,
            launch_date,
            status,
        } => {
            let input = ProductInput {
                name: value_or_prompt(name, "Product name:")?,
                description: value_or_prompt(description, "Description:")?,
                pm_name: value_or_prompt(pm, "Product manager:")?,
                launch_date: value_or_prompt(launch_date, "Launch date (YYYY-MM-DD):")?,
                status,
                delivery_schedule: None,
            };
            let product = state.add_product(input, notifier)?;
            if !output.json(&product)? {
                println!("ID: {}", product.id.cyan());
            }
            Ok(())
        }
        ProductsCommands::Vote { id, direction } => {
            let product = state.vote(&id, direction)?;
            if !output.json(&product)? {
                println!(
                    "{} {}  {} {}  {} {}%",
                    "▲".green(),
                    product.upvotes,
                    "▼".red(),
                    product.downvotes,
                    "Satisfaction:".dimmed(),
                    compute_satisfaction(&product)
                );
            }
            Ok(())
        }
        ProductsCommands::Feedback { id, text } => {
            let product = state.submit_feedback(&id, &text, notifier)?;
            output.json(&product)?;
            Ok(())
        }
    }
}

fn value_or_prompt(value: Option<String>, prompt: &str) -> AppResult<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Text::new(prompt).prompt()?),
    }
}

fn list_products(state: &DashboardState, search: Option<&str>, output: Output) -> AppResult<()> {
    let products = state.products.search(search.unwrap_or(""));
    if output.json(&products)? {
        return Ok(());
    }

    if products.is_empty() {
        empty_notice("No products found");
        return Ok(());
    }

    heading("Product Portfolio");

    let mut table = new_table(vec![
        "ID",
        "Name",
        "PM",
        "Status",
        "Votes",
        "Satisfaction",
        "Feedback",
        "Next Release",
    ]);
    for product in &products {
        table.add_row(vec![
            product.id.clone().into(),
            truncate(&product.name, 30).into(),
            product.pm_name.clone().into(),
            badge_cell(product.status.badge()),
            format!("{} / {}", product.upvotes, product.downvotes).into(),
            format!("{}%", compute_satisfaction(product)).into(),
            product.feedback.len().to_string().into(),
            next_release(product).into(),
        ]);
    }

    println!("{}", table);
    println!("Total: {} products", products.len().to_string().cyan());
    Ok(())
}

fn next_release(product: &Product) -> String {
    match &product.delivery_schedule {
        Some(schedule) => format!(
            "{} ({})",
            schedule.next_release,
            format_date(&schedule.estimated_date)
        ),
        None => "—".to_string(),
    }
}

fn show_product(state: &DashboardState, id: &str, output: Output) -> AppResult<()> {
    let product = state.product_detail(id)?;
    if output.json(product)? {
        return Ok(());
    }

    heading(&format!("{} - Product Details", product.name));

    println!("{} {}", "ID:".bold(), product.id);
    println!("{} {}", "Status:".bold(), badge_text(product.status.badge()));
    println!("{} {}", "Product Manager:".bold(), product.pm_name);
    println!("{} {}", "Launch Date:".bold(), format_date(&product.launch_date));
    println!("{} {}", "Description:".bold(), product.description);
    println!(
        "{} {}% ({} up / {} down)",
        "Satisfaction:".bold(),
        compute_satisfaction(product),
        product.upvotes,
        product.downvotes
    );

    if let Some(schedule) = &product.delivery_schedule {
        println!();
        println!(
            "{} {} - {}",
            "Next Release:".bold(),
            schedule.next_release,
            format_date(&schedule.estimated_date)
        );
        for feature in &schedule.features {
            println!("  • {}", feature);
        }
    }

    println!();
    if product.feedback.is_empty() {
        println!("{}", "No feedback yet".dimmed());
    } else {
        println!("{}", "Feedback:".bold());
        for entry in &product.feedback {
            println!("  \"{}\"", entry);
        }
    }

    Ok(())
}
