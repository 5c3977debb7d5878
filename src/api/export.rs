use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::Viewport;
use crate::dataset::Film;
use crate::error::{ArcError, ArcResult};
use crate::render::SvgRenderer;

use super::{
    CorrelationChart, CorrelationChartConfig, DatasetSummary, LineChart, LineChartConfig,
    MultiLineChart, MultiLineChartConfig, Theme,
};

#[cfg(feature = "parallel-export")]
use rayon::prelude::*;

/// What [`export_catalog`] writes and how each view is sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub theme: Theme,
    pub viewport: Viewport,
    /// Animation sample time; `None` renders every view settled.
    pub elapsed_ms: Option<f64>,
    /// Restricts the per-film snapshots to one film.
    pub only: Option<Film>,
}

impl ExportOptions {
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            theme: Theme::Dark,
            viewport: Viewport::new(1200, 600),
            elapsed_ms: None,
            only: None,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_elapsed_ms(mut self, elapsed_ms: Option<f64>) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    #[must_use]
    pub fn with_only(mut self, film: Option<Film>) -> Self {
        self.only = film;
        self
    }

    fn films(&self) -> Vec<Film> {
        match self.only {
            Some(film) => vec![film],
            None => Film::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub files_written: Vec<PathBuf>,
}

/// Single-film chart as an SVG document.
pub fn render_film_svg(film: Film, options: &ExportOptions) -> ArcResult<String> {
    let config = LineChartConfig::for_film(options.viewport, film).with_theme(options.theme);
    let mut chart = LineChart::for_film(SvgRenderer::new(), config, film)?;
    chart.mount_at(0.0);
    let sample_ms = options.elapsed_ms.unwrap_or_else(|| chart.settle_time_ms());
    chart.render(sample_ms)?;
    Ok(chart.into_renderer().into_document())
}

/// Compare overlay with `active` highlighted.
pub fn render_compare_svg(active: Film, options: &ExportOptions) -> ArcResult<String> {
    let config = MultiLineChartConfig::new(options.viewport).with_theme(options.theme);
    let mut chart = MultiLineChart::new(SvgRenderer::new(), config, active)?;
    chart.mount_at(0.0);
    let sample_ms = options.elapsed_ms.unwrap_or_else(|| chart.settle_time_ms());
    chart.render(sample_ms)?;
    Ok(chart.into_renderer().into_document())
}

/// RMSD / revenue scatter for the whole catalog.
pub fn render_correlation_svg(options: &ExportOptions) -> ArcResult<String> {
    let config = CorrelationChartConfig::new(options.viewport).with_theme(options.theme);
    let mut chart = CorrelationChart::for_catalog(SvgRenderer::new(), config)?;
    chart.mount_at(0.0);
    let sample_ms = options.elapsed_ms.unwrap_or_else(|| chart.settle_time_ms());
    chart.render(sample_ms)?;
    Ok(chart.into_renderer().into_document())
}

/// Writes every view plus `report.json` under `options.out_dir`.
pub fn export_catalog(options: &ExportOptions) -> ArcResult<ExportSummary> {
    let films_dir = options.out_dir.join("films");
    fs::create_dir_all(&films_dir).map_err(|e| io_error(&films_dir, &e))?;

    let films = options.films();
    #[cfg(feature = "parallel-export")]
    let documents: Vec<ArcResult<(Film, String)>> = films
        .par_iter()
        .map(|&film| render_film_svg(film, options).map(|svg| (film, svg)))
        .collect();
    #[cfg(not(feature = "parallel-export"))]
    let documents: Vec<ArcResult<(Film, String)>> = films
        .iter()
        .map(|&film| render_film_svg(film, options).map(|svg| (film, svg)))
        .collect();

    let mut summary = ExportSummary::default();
    for document in documents {
        let (film, svg) = document?;
        let path = films_dir.join(format!("{}.svg", film.slug()));
        write_file(&path, &svg)?;
        debug!(film = film.title(), path = %path.display(), "wrote film snapshot");
        summary.files_written.push(path);
    }

    let active = films.first().copied().unwrap_or(Film::ALL[0]);
    let compare_path = options.out_dir.join("compare.svg");
    write_file(&compare_path, &render_compare_svg(active, options)?)?;
    summary.files_written.push(compare_path);

    let correlation_path = options.out_dir.join("correlation.svg");
    write_file(&correlation_path, &render_correlation_svg(options)?)?;
    summary.files_written.push(correlation_path);

    let report_path = options.out_dir.join("report.json");
    let report = DatasetSummary::for_catalog().to_json_contract_v1_pretty()?;
    write_file(&report_path, &report)?;
    summary.files_written.push(report_path);

    info!(
        files = summary.files_written.len(),
        out_dir = %options.out_dir.display(),
        "catalog export finished"
    );
    Ok(summary)
}

fn write_file(path: &Path, contents: &str) -> ArcResult<()> {
    fs::write(path, contents).map_err(|e| io_error(path, &e))
}

fn io_error(path: &Path, err: &std::io::Error) -> ArcError {
    ArcError::Backend(format!("failed to write `{}`: {err}", path.display()))
}
