//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use luz_observability::{init_logging, LogLevel, SessionId, StructuredLogger};
use luz_storefront::{Route, Storefront};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["luz.toml", ".luz.toml", "luz.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Effective log level. `--verbose` raises it to debug.
    pub fn log_level(&self) -> LogLevel {
        if self.output.is_verbose() {
            LogLevel::Debug.min(self.config.logging.level)
        } else {
            self.config.logging.level
        }
    }

    /// Install the tracing subscriber.
    pub fn init_logging(&self) {
        if let Err(e) = init_logging(self.config.logging.format, self.log_level()) {
            self.output.debug(&format!("logging not initialised: {}", e));
        }
    }

    /// Build the storefront from the configured catalog.
    pub fn storefront(&self) -> Result<Storefront> {
        let settings = self.config.store_settings();
        let store = match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Storefront::from_json(&json, settings)
                    .with_context(|| format!("Invalid catalog: {}", path.display()))?
            }
            None => Storefront::builtin(settings).context("Built-in catalog failed to load")?,
        };
        tracing::debug!(products = store.catalog().len(), config = ?self.config_path, "storefront ready");
        Ok(store)
    }

    /// Structured logger for one command, tagged with the route it serves.
    pub fn logger(&self, session: &SessionId, route: &Route) -> StructuredLogger {
        StructuredLogger::new(session.clone())
            .with_route(route.path())
            .with_min_level(self.log_level())
    }

    /// Resolve a path relative to the config file, or the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        let base = self
            .config_path
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone());
        base.join(path)
    }
}
