use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;


use commands::create::CreateArgs;

#[derive(Debug, Parser)]
#[command(name = "tienda")]
#[command(about = "Catalog import and storefront tooling for the product store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a spreadsheet and push the resulting catalog to the store
    Import {
        /// Path to the .xlsx, .xls, or .csv file to import
        file: PathBuf,
        /// Parse and summarize without contacting the store
        #[arg(long)]
        dry_run: bool,
    },
    /// Create a single product directly, without a spreadsheet
    Create(CreateArgs),
    /// Write an empty import template spreadsheet
    Template {
        /// Output path for the template workbook
        #[arg(default_value = "plantilla_productos.xlsx")]
        out: PathBuf,
    },
    /// Search the remote catalog
    Search {
        /// Free-text query; empty lists the unfiltered catalog page
        #[arg(default_value = "")]
        query: String,
        /// Restrict results to these product types (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Show one product with its compatibility relations
    Show {
        /// Product code to look up
        code: String,
    },
    /// Manage the local shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Debug, Subcommand)]
enum CartAction {
    /// Add a product to the cart, fetching its details from the store
    Add {
        code: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove { code: String },
    /// Set the exact quantity of a product (0 removes it)
    Set { code: String, quantity: u32 },
    /// List the cart contents and total
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Store configuration is loaded by the commands that need it, so fully
    // offline commands (template, dry-run import) run without any env vars.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(std::env::var("TIENDA_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned()))
        }))
        .init();

    match cli.command {
        Commands::Import { file, dry_run } => commands::import::run_import(&file, dry_run).await,
        Commands::Create(args) => commands::create::run_create(args).await,
        Commands::Template { out } => commands::template::run_template(&out),
        Commands::Search {
            query,
            categories,
            page,
            limit,
        } => commands::search::run_search(query, categories, page, limit).await,
        Commands::Show { code } => commands::show::run_show(&code).await,
        Commands::Cart { action } => match action {
            CartAction::Add { code, quantity } => commands::cart::run_add(&code, quantity).await,
            CartAction::Remove { code } => commands::cart::run_remove(&code),
            CartAction::Set { code, quantity } => commands::cart::run_set(&code, quantity),
            CartAction::List => commands::cart::run_list(),
        },
    }
}
