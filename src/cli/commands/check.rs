use std::io::Write;

use anyhow::{Result, bail};
use common::DashboardCatalog;
use tracing::{error, info};

/// Lists every chart as `ok` or `invalid` and fails when any is invalid.
/// Structural catalog problems are caught earlier, when it is loaded.
pub fn check(catalog: &DashboardCatalog, out: &mut impl Write) -> Result<()> {
    info!("Checking catalog charts");

    let mut invalid = 0;
    for chart in catalog.charts() {
        match &chart.problem {
            None => writeln!(out, "ok       {}", chart.name)?,
            Some(problem) => {
                invalid += 1;
                writeln!(out, "invalid  {}: {}", chart.name, problem)?;
            }
        }
    }

    if invalid > 0 {
        error!("{} chart(s) failed validation", invalid);
        bail!("{} chart(s) have invalid data", invalid);
    }

    info!("Catalog is valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts::{ChartData, ChartDescriptor, DisplayMeta, Series};

    #[test]
    fn test_builtin_catalog_passes() {
        let catalog = DashboardCatalog::builtin().unwrap();
        let mut out = Vec::new();
        check(&catalog, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 11);
        assert!(text.lines().all(|line| line.starts_with("ok")));
    }

    #[test]
    fn test_invalid_chart_is_listed() {
        let mut catalog = DashboardCatalog::builtin().unwrap();
        catalog.chats.fallback.chart = ChartDescriptor::new(
            ChartData::Line { data: Series::new(vec![4.0]), labels: None },
            DisplayMeta::default(),
        );

        let mut out = Vec::new();
        assert!(check(&catalog, &mut out).is_err());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("invalid  chat-default:"));
        assert_eq!(text.lines().filter(|line| line.starts_with("invalid")).count(), 1);
    }
}
