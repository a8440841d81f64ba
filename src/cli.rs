use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

pub mod commands;

use crate::config::{AppConfig, load_catalog};
use commands::{ExportFormat, ask, check, explain, export_catalog, render};

#[derive(Parser)]
#[command(name = "insightfeed")]
#[command(about = "InsightFeed dashboard tools: chart export, catalog checks and the canned assistant")]
#[command(version)]
pub struct Cli {
    /// Configuration file
    ///
    /// Defaults to `insightfeed.toml` in the working directory when present.
    /// Any key can also be set as an `INSIGHTFEED_<KEY>` environment variable.
    #[arg(long, global = true, env = "INSIGHTFEED_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every catalog chart to an SVG file
    ///
    /// Chat charts are written as `chat-<id>.svg` (the fallback chart as
    /// `chat-default.svg`), report trend charts as `report-<slug>.svg`.
    Render {
        /// Catalog JSON to render instead of the bundled one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output directory, created when missing
        #[arg(short, long, env = "INSIGHTFEED_OUT_DIR")]
        out: Option<PathBuf>,

        /// Fail when any chart has invalid data
        #[arg(long)]
        strict: bool,
    },
    /// Print the assistant's reply to a question
    Ask {
        query: String,

        /// Catalog JSON to take the assistant rules from
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the prompt sent for a clicked report value and its reply
    ///
    /// Examples:
    ///   insightfeed explain '$287M' --context 'Total Revenue'
    ///   insightfeed explain 2,847
    Explain {
        value: String,

        /// Label the value is shown under
        #[arg(short = 'x', long)]
        context: Option<String>,

        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Write the catalog as JSON or YAML
    ExportCatalog {
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Validate the catalog and every chart in it
    Check {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;
        debug!("Running command with out_dir={}", config.out_dir);

        let catalog_path = |arg: Option<PathBuf>| arg.or_else(|| config.catalog.clone());
        let mut stdout = io::stdout().lock();

        match self.command {
            Commands::Render { catalog, out, strict } => {
                let catalog = load_catalog(catalog_path(catalog).as_deref())?;
                let out = out.unwrap_or_else(|| PathBuf::from(&config.out_dir));
                render(&catalog, &out, strict || config.strict)?;
            }
            Commands::Ask { query, catalog } => {
                let catalog = load_catalog(catalog_path(catalog).as_deref())?;
                ask(&catalog.report.assistant, &query, &mut stdout)?;
            }
            Commands::Explain { value, context, catalog } => {
                let catalog = load_catalog(catalog_path(catalog).as_deref())?;
                explain(&catalog.report.assistant, &value, context.as_deref(), &mut stdout)?;
            }
            Commands::ExportCatalog { format, out, catalog } => {
                let catalog = load_catalog(catalog_path(catalog).as_deref())?;
                let format = format.unwrap_or(config.format);
                match out {
                    Some(path) => export_catalog(&catalog, format, &mut std::fs::File::create(&path)?)?,
                    None => export_catalog(&catalog, format, &mut stdout)?,
                }
            }
            Commands::Check { catalog } => {
                let catalog = load_catalog(catalog_path(catalog).as_deref())?;
                check(&catalog, &mut stdout)?;
            }
        }
        Ok(())
    }
}
