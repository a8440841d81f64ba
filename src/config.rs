//! CLI configuration.
//!
//! Values come from, in increasing priority: built-in defaults, the
//! configuration file (`insightfeed.toml` in the working directory, or the
//! file given with `--config`), `INSIGHTFEED_*` environment variables, and
//! finally the command line arguments.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use common::DashboardCatalog;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, error, info};
use validator::Validate;

use crate::cli::commands::ExportFormat;

pub const DEFAULT_CONFIG: &str = "insightfeed";
pub const DEFAULT_OUT_DIR: &str = "charts";

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct AppConfig {
    /// Directory `render` writes SVG files into
    #[validate(length(min = 1))]
    pub out_dir: String,
    /// Catalog JSON replacing the bundled one
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    pub strict: bool,
    pub format: ExportFormat,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                debug!("Using configuration file {}", path.display());
                File::from(path).required(true)
            }
            None => File::with_name(DEFAULT_CONFIG).required(false),
        };

        let config: AppConfig = Config::builder()
            .set_default("out_dir", DEFAULT_OUT_DIR)?
            .set_default("strict", false)?
            .set_default("format", "json")?
            .add_source(file)
            .add_source(Environment::with_prefix("INSIGHTFEED"))
            .build()?
            .try_deserialize()?;

        if let Err(e) = config.validate() {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
        debug!("Configuration: {:?}", config);
        Ok(config)
    }
}

/// Loads and validates the catalog at `path`, or the bundled one.
pub fn load_catalog(path: Option<&Path>) -> Result<DashboardCatalog> {
    let catalog = match path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            DashboardCatalog::from_json(&json)?
        }
        None => DashboardCatalog::builtin()?,
    };

    match catalog.validate() {
        Ok(()) => Ok(catalog),
        Err(e) => {
            error!("Catalog failed validation: {}", e);
            Err(e.into())
        }
    }
}
