use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use common::DashboardCatalog;
use tracing::{debug, error, info, trace, warn};

/// Writes one SVG per catalog chart into `out_dir` and returns how many were
/// written. With `strict` nothing is written when a chart has invalid data.
pub fn render(catalog: &DashboardCatalog, out_dir: &Path, strict: bool) -> Result<usize> {
    trace!("Entering render function");
    info!("Rendering catalog charts");
    debug!("Output directory: {}", out_dir.display());

    let charts = catalog.charts();

    let problems: Vec<_> = charts
        .iter()
        .filter_map(|chart| chart.problem.as_ref().map(|problem| (&chart.name, problem)))
        .collect();
    for (name, problem) in &problems {
        warn!("Chart {} has invalid data: {}", name, problem);
    }
    if strict && !problems.is_empty() {
        error!("{} chart(s) failed validation in strict mode", problems.len());
        bail!("{} chart(s) have invalid data", problems.len());
    }

    if let Err(e) = fs::create_dir_all(out_dir) {
        error!("Failed to create output directory '{}': {}", out_dir.display(), e);
        return Err(e.into());
    }

    for chart in &charts {
        let path = out_dir.join(format!("{}.svg", chart.name));
        trace!("Writing {}", path.display());
        match fs::write(&path, chart.scene.to_svg()) {
            Ok(()) => debug!("Wrote {}", path.display()),
            Err(e) => {
                error!("Failed to write '{}': {}", path.display(), e);
                return Err(e.into());
            }
        }
    }

    info!("Rendered {} charts into {}", charts.len(), out_dir.display());
    trace!("render function completed");

    Ok(charts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts::{ChartData, ChartDescriptor, DisplayMeta, Series};
    use tempfile::TempDir;

    fn broken_catalog() -> DashboardCatalog {
        let mut catalog = DashboardCatalog::builtin().unwrap();
        catalog.chats.fallback.chart = ChartDescriptor::new(
            ChartData::Donut { data: Series::new(vec![0.0, 0.0]), labels: None, colors: None },
            DisplayMeta::default(),
        );
        catalog
    }

    #[test]
    fn test_render_writes_every_chart() {
        let catalog = DashboardCatalog::builtin().unwrap();
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/svg");

        let written = render(&catalog, &out, true).unwrap();
        assert_eq!(written, 11);

        let mut names: Vec<String> = fs::read_dir(&out)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"chat-1.svg".to_string()));
        assert!(names.contains(&"chat-default.svg".to_string()));
        assert!(names.contains(&"report-quarterly-revenue.svg".to_string()));

        let svg = fs::read_to_string(out.join("report-gross-margin.svg")).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("linearGradient"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let catalog = DashboardCatalog::builtin().unwrap();
        let dir = TempDir::new().unwrap();

        render(&catalog, dir.path(), false).unwrap();
        let first = fs::read_to_string(dir.path().join("chat-3.svg")).unwrap();
        render(&catalog, dir.path(), false).unwrap();
        let second = fs::read_to_string(dir.path().join("chat-3.svg")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_chart_still_rendered() {
        let dir = TempDir::new().unwrap();
        assert_eq!(render(&broken_catalog(), dir.path(), false).unwrap(), 11);
        assert!(dir.path().join("chat-default.svg").exists());
    }

    #[test]
    fn test_strict_render_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        assert!(render(&broken_catalog(), &out, true).is_err());
        assert!(!out.exists());
    }
}
