//! Luz CLI - Command line storefront for Luz de Nuit.
//!
//! Commands:
//! - `luz catalog` - Search, filter and page through the catalog
//! - `luz scents` - List the scent filter options
//! - `luz product` - Show a product's detail page
//! - `luz buy` - Build the WhatsApp purchase link for a product
//! - `luz promos` - List running promotions
//! - `luz home` - Show the landing page
//! - `luz route` - Resolve a site path to its page
//! - `luz contact` - Compose a PQRS request
//! - `luz config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    BuyArgs, CatalogArgs, ConfigArgs, ContactArgs, HomeArgs, ProductArgs, PromosArgs, RouteArgs,
};

/// Luz CLI - Browse the Luz de Nuit catalog and build purchase links
#[derive(Parser)]
#[command(name = "luz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and page through the catalog
    Catalog(CatalogArgs),

    /// List the scent filter options
    Scents,

    /// Show a product's detail page
    Product(ProductArgs),

    /// Build the WhatsApp purchase link for a product
    Buy(BuyArgs),

    /// List promotions
    Promos(PromosArgs),

    /// Show the landing page
    Home(HomeArgs),

    /// Resolve a site path to its page
    Route(RouteArgs),

    /// Compose a PQRS request (petition, complaint, claim, suggestion)
    Contact(ContactArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    ctx.init_logging();

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Scents => commands::catalog::run_scents(&ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Buy(args) => commands::product::run_buy(args, &ctx),
        Commands::Promos(args) => commands::promos::run(args, &ctx),
        Commands::Home(args) => commands::home::run(args, &ctx),
        Commands::Route(args) => commands::route::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
