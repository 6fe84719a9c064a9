//! Configuration management commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use luz_commerce::search::PageMode;
use luz_commerce::Currency;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.line("");
    ctx.output.line("[store]");
    ctx.output.kv("name", &store.name);
    ctx.output.kv("whatsapp_host", &store.whatsapp_host);
    ctx.output.kv("whatsapp_recipient", &store.whatsapp_recipient);
    ctx.output.kv("contact_email", &store.contact_email);

    let catalog = &ctx.config.catalog;
    ctx.output.line("");
    ctx.output.line("[catalog]");
    ctx.output.kv("page_size", &catalog.page_size.to_string());
    ctx.output.kv("mode", catalog.mode.as_str());
    ctx.output.kv("currency", catalog.currency.code());
    if let Some(ref path) = catalog.path {
        ctx.output.kv("path", &path.display().to_string());
    }

    ctx.output.line("");
    ctx.output.line("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_str());
    ctx.output.kv("format", &ctx.config.logging.format.to_string());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match &ctx.config_path {
        Some(path) => path.clone(),
        None => find_config_file(&ctx.cwd)?,
    };
    let path = config_path.to_string_lossy();

    let mut config = CliConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(&ctx.config.store.name))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = config_errors(&ctx.config);
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.catalog.page_size > 24 {
        warnings.push(format!(
            "catalog.page_size {} is large for a product grid",
            ctx.config.catalog.page_size
        ));
    }
    if let Err(e) = ctx.storefront() {
        warnings.push(format!("catalog does not load: {:#}", e));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");
    Ok(())
}

fn config_errors(config: &CliConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.store.name.trim().is_empty() {
        errors.push("store.name is required".to_string());
    }
    let recipient = &config.store.whatsapp_recipient;
    if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
        errors.push("store.whatsapp_recipient must be digits only (e.g. 573196791189)".to_string());
    }
    if config.store.whatsapp_host.trim().is_empty() {
        errors.push("store.whatsapp_host is required".to_string());
    }
    if !config.store.contact_email.contains('@') {
        errors.push("store.contact_email must be an email address".to_string());
    }
    if config.catalog.page_size == 0 {
        errors.push("catalog.page_size must be greater than 0".to_string());
    }

    errors
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["store", "name"] => Ok(config.store.name.clone()),
        ["store", "whatsapp_host"] => Ok(config.store.whatsapp_host.clone()),
        ["store", "whatsapp_recipient"] => Ok(config.store.whatsapp_recipient.clone()),
        ["store", "contact_email"] => Ok(config.store.contact_email.clone()),
        ["catalog", "page_size"] => Ok(config.catalog.page_size.to_string()),
        ["catalog", "mode"] => Ok(config.catalog.mode.to_string()),
        ["catalog", "currency"] => Ok(config.catalog.currency.code().to_string()),
        ["catalog", "path"] => Ok(config
            .catalog
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        ["logging", "level"] => Ok(config.logging.level.as_str().to_string()),
        ["logging", "format"] => Ok(config.logging.format.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["store", "name"] => config.store.name = value.to_string(),
        ["store", "whatsapp_host"] => config.store.whatsapp_host = value.to_string(),
        ["store", "whatsapp_recipient"] => config.store.whatsapp_recipient = value.to_string(),
        ["store", "contact_email"] => config.store.contact_email = value.to_string(),
        ["catalog", "page_size"] => config.catalog.page_size = value.parse()?,
        ["catalog", "mode"] => {
            config.catalog.mode = value.parse::<PageMode>()?
        }
        ["catalog", "currency"] => {
            config.catalog.currency = Currency::from_code(value)
                .ok_or_else(|| anyhow!("Unknown currency '{}' (COP or USD)", value))?
        }
        ["catalog", "path"] => {
            config.catalog.path = if value.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            }
        }
        ["logging", "level"] => config.logging.level = value.parse()?,
        ["logging", "format"] => config.logging.format = value.parse()?,
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &Path) -> Result<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|name| cwd.join(name))
        .find(|path| path.exists())
        .ok_or_else(|| anyhow!("No config file found. Run `luz config init` to create one."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luz_observability::LogLevel;

    #[test]
    fn test_get_and_set_round_trip() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "catalog.mode", "load-more").unwrap();
        set_config_value(&mut config, "catalog.currency", "usd").unwrap();
        set_config_value(&mut config, "logging.level", "warning").unwrap();

        assert_eq!(get_config_value(&config, "catalog.mode").unwrap(), "cumulative");
        assert_eq!(get_config_value(&config, "catalog.currency").unwrap(), "USD");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let mut config = CliConfig::default();
        assert!(get_config_value(&config, "store.phone").is_err());
        assert!(set_config_value(&mut config, "catalog", "x").is_err());
        assert!(set_config_value(&mut config, "catalog.page_size", "six").is_err());
    }

    #[test]
    fn test_blank_path_clears_override() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "catalog.path", "velas.json").unwrap();
        assert_eq!(get_config_value(&config, "catalog.path").unwrap(), "velas.json");
        set_config_value(&mut config, "catalog.path", "").unwrap();
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_default_config_has_no_errors() {
        assert!(config_errors(&CliConfig::default()).is_empty());
    }

    #[test]
    fn test_config_errors() {
        let mut config = CliConfig::default();
        config.store.whatsapp_recipient = "+57 319".to_string();
        config.store.contact_email = "hola".to_string();
        config.catalog.page_size = 0;
        assert_eq!(config_errors(&config).len(), 3);
    }
}
