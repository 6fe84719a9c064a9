//! CLI configuration (`luz.toml`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use luz_commerce::outbound::MessagingTarget;
use luz_commerce::search::{PageMode, Paginator, DEFAULT_PAGE_SIZE};
use luz_commerce::Currency;
use luz_observability::{LogFormat, LogLevel};
use luz_storefront::StoreSettings;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store identity and outbound channels.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog browsing.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config file: {}", path))
    }

    /// Parse config text, JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Storefront settings described by this config.
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            name: self.store.name.clone(),
            target: MessagingTarget::new(
                self.store.whatsapp_host.clone(),
                self.store.whatsapp_recipient.clone(),
            ),
            currency: self.catalog.currency,
            contact_email: self.store.contact_email.clone(),
            paginator: Paginator::new(self.catalog.mode, self.catalog.page_size),
        }
    }
}

/// Store identity and outbound channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Messaging host (default: wa.me).
    #[serde(default = "default_whatsapp_host")]
    pub whatsapp_host: String,

    /// Phone number in international format, digits only.
    #[serde(default = "default_whatsapp_recipient")]
    pub whatsapp_recipient: String,

    /// Address for the PQRS mail fallback.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

fn default_store_name() -> String {
    "Luz de Nuit".to_string()
}

fn default_whatsapp_host() -> String {
    MessagingTarget::DEFAULT_HOST.to_string()
}

fn default_whatsapp_recipient() -> String {
    MessagingTarget::DEFAULT_RECIPIENT.to_string()
}

fn default_contact_email() -> String {
    "hola@luzdenuit.co".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            whatsapp_host: default_whatsapp_host(),
            whatsapp_recipient: default_whatsapp_recipient(),
            contact_email: default_contact_email(),
        }
    }
}

/// Catalog browsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per page (default: 6).
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// `discrete` pages or `cumulative` load-more.
    #[serde(default)]
    pub mode: PageMode,

    /// `COP` or `USD`.
    #[serde(default)]
    pub currency: Currency,

    /// Catalog JSON to use instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            mode: PageMode::default(),
            currency: Currency::default(),
            path: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default luz.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Luz de Nuit storefront configuration

[store]
name = "{name}"
whatsapp_host = "wa.me"
whatsapp_recipient = "{recipient}"
contact_email = "hola@luzdenuit.co"

[catalog]
page_size = 6
mode = "discrete"   # or "cumulative"
currency = "COP"    # or "USD"
# path = "catalog.json"

[logging]
level = "info"
format = "human"    # or "json"
"#,
        name = name,
        recipient = MessagingTarget::DEFAULT_RECIPIENT,
    )
}
