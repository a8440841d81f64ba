use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use common::DashboardCatalog;
use serde::Deserialize;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Yaml,
}

pub fn export_catalog(catalog: &DashboardCatalog, format: ExportFormat, out: &mut impl Write) -> Result<()> {
    info!("Exporting catalog as {:?}", format);

    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(catalog).map_err(anyhow::Error::from),
        ExportFormat::Yaml => serde_yaml::to_string(catalog).map_err(anyhow::Error::from),
    };
    let text = match text {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to serialize catalog: {}", e);
            return Err(e);
        }
    };

    debug!("Serialized catalog is {} bytes", text.len());
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_json_reloads() {
        let catalog = DashboardCatalog::builtin().unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");

        export_catalog(&catalog, ExportFormat::Json, &mut fs::File::create(&path).unwrap()).unwrap();

        let reloaded = DashboardCatalog::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded.feed, catalog.feed);
        assert_eq!(reloaded.report.trends.len(), 4);
        reloaded.validate().unwrap();
    }

    #[test]
    fn test_export_yaml() {
        let catalog = DashboardCatalog::builtin().unwrap();
        let mut out = Vec::new();
        export_catalog(&catalog, ExportFormat::Yaml, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("teamAvatars:"));
        assert!(text.contains("type: radial"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["company"]["name"].as_str(), Some(catalog.company.name.as_str()));
    }
}
