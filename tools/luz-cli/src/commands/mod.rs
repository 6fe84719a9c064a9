//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod home;
pub mod product;
pub mod promos;
pub mod route;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Free-text search over name, description, scent notes and tags.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category (Aromaterapia, Masaje, Decorativa, Personalizada or All).
    #[arg(short = 't', long = "type")]
    pub product_type: Option<String>,

    /// Scent note, matched by containment.
    #[arg(long)]
    pub scent: Option<String>,

    /// Minimum nominal price. Non-numeric input is ignored.
    #[arg(long)]
    pub min: Option<String>,

    /// Maximum nominal price. Non-numeric input is ignored.
    #[arg(long)]
    pub max: Option<String>,

    /// Page to show (pages revealed, in cumulative mode).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Pagination mode override: discrete or cumulative.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Products per page override.
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product slug (e.g. vela-lavanda).
    pub slug: String,
}

/// Arguments for the buy command.
#[derive(Args)]
pub struct BuyArgs {
    /// Product slug (e.g. vela-lavanda).
    pub slug: String,

    /// Print only the message, not the link.
    #[arg(long)]
    pub message_only: bool,
}

/// Arguments for the promos command.
#[derive(Args)]
pub struct PromosArgs {
    /// Only promotions still running on this date (YYYY-MM-DD).
    #[arg(long, conflicts_with = "active")]
    pub on: Option<String>,

    /// Only promotions still running today.
    #[arg(long)]
    pub active: bool,
}

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Slogan rotations elapsed.
    #[arg(long, default_value = "0", conflicts_with = "elapsed_ms")]
    pub tick: usize,

    /// Time on the page in milliseconds; picks the slogan showing then.
    #[arg(long)]
    pub elapsed_ms: Option<u64>,

    /// Hide promotions that ended before this date (YYYY-MM-DD).
    #[arg(long)]
    pub on: Option<String>,
}

/// Arguments for the route command.
#[derive(Args)]
pub struct RouteArgs {
    /// Site path, e.g. /catalogo/vela-lavanda.
    pub path: String,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Petition, complaint, claim or suggestion.
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Your name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Your email.
    #[arg(short, long)]
    pub email: Option<String>,

    /// The request itself.
    #[arg(short = 'M', long)]
    pub message: Option<String>,

    /// Never prompt; blank fields get placeholders.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Parse a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(raw: &str) -> anyhow::Result<chrono::NaiveDate> {
    use anyhow::Context as _;
    chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}
