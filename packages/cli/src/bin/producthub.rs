use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use producthub_cli::{logging, AppResult, Config, ConsoleNotifier, DashboardState, Notifier};
use producthub_feedback::FeedbackFilter;
use std::process;

mod cli;

use cli::deliveries::DeliveriesCommands;
use cli::output::Output;
use cli::products::ProductsCommands;

#[derive(Parser)]
#[command(name = "producthub")]
#[command(about = "ProductHub - product portfolio dashboard")]
#[command(version)]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Portfolio statistics and per-product satisfaction
    Overview,
    /// Manage products
    #[command(subcommand)]
    Products(ProductsCommands),
    /// Manage the delivery schedule
    #[command(subcommand)]
    Deliveries(DeliveriesCommands),
    /// Show upcoming roadmap features
    Roadmap {
        /// Quarter such as "Q3 2024", or "All"
        #[arg(long, default_value = "All")]
        quarter: String,
        /// Product name, or "All"
        #[arg(long, default_value = "All")]
        product: String,
    },
    /// Show the roadmap timeline for one product
    Timeline {
        #[arg(long)]
        product: String,
    },
    /// Show delivery rates per product
    Rates,
    /// Browse customer feedback
    Feedback {
        #[arg(short, long, default_value = "")]
        search: String,
        /// Product ID, or "all"
        #[arg(long, default_value = "all")]
        product: String,
        #[arg(long, default_value = "all")]
        sentiment: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Satisfaction ranking and engagement analytics
    Analytics,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    logging::init(&config.log_level);

    let mut state = DashboardState::from_config(&config);
    let mut notifier = ConsoleNotifier::new();
    let output = Output { json: cli.json };

    if let Err(e) = handle_command(cli.command, &mut state, &mut notifier, output) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }

    Ok(())
}

fn handle_command(
    command: Commands,
    state: &mut DashboardState,
    notifier: &mut dyn Notifier,
    output: Output,
) -> AppResult<()> {
    match command {
        Commands::Overview => cli::analytics::show_overview(state, output),
        Commands::Products(cmd) => {
            cli::products::handle_products_command(cmd, state, notifier, output)
        }
        Commands::Deliveries(cmd) => {
            cli::deliveries::handle_deliveries_command(cmd, state, notifier, output)
        }
        Commands::Roadmap { quarter, product } => {
            cli::roadmap::show_roadmap(state, &quarter, &product, output)
        }
        Commands::Timeline { product } => cli::roadmap::show_timeline(state, &product, output),
        Commands::Rates => cli::roadmap::show_rates(state, output),
        Commands::Feedback {
            search,
            product,
            sentiment,
            category,
        } => {
            let filter = FeedbackFilter::from_labels(&search, &product, &sentiment, &category)?;
            cli::feedback::show_feedback(state, filter, output)
        }
        Commands::Analytics => cli::analytics::show_analytics(state, output),
    }
}
