use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, extent};
use crate::dataset::{BASELINE_ARC, Film, total_beats};

use super::CorrelationReport;

/// Figures quoted by the methodology screen, derived from the compiled-in data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub film_count: usize,
    pub total_points: usize,
    pub beats_per_film: usize,
    pub baseline_points: usize,
    /// Lowest valence across every film arc.
    pub valence_min: f64,
    /// Highest valence across every film arc.
    pub valence_max: f64,
    pub correlation: CorrelationReport,
}

impl DatasetSummary {
    #[must_use]
    pub fn compute(films: &[Film], baseline: &[DataPoint]) -> Self {
        let values = films
            .iter()
            .flat_map(|film| film.beats().iter().map(|beat| beat.point.value));
        let (valence_min, valence_max) = extent(values).unwrap_or((0.0, 0.0));
        let total_points = films.iter().map(|film| film.beats().len()).sum();
        let summary = Self {
            film_count: films.len(),
            total_points,
            beats_per_film: if films.is_empty() {
                0
            } else {
                total_points / films.len()
            },
            baseline_points: baseline.len(),
            valence_min,
            valence_max,
            correlation: CorrelationReport::compute(films, baseline),
        };
        debug!(
            films = summary.film_count,
            points = summary.total_points,
            "computed dataset summary"
        );
        summary
    }

    #[must_use]
    pub fn for_catalog() -> Self {
        let summary = Self::compute(&Film::ALL, &BASELINE_ARC);
        debug_assert_eq!(summary.total_points, total_beats());
        summary
    }

    /// Short sentences for the methodology screen.
    #[must_use]
    pub fn highlights(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "{} films, {} beats each, {} data points in total.",
                self.film_count, self.beats_per_film, self.total_points
            ),
            format!(
                "Valence ranges from {:+} to {:+}.",
                self.valence_min, self.valence_max
            ),
        ];
        if let Some(fit) = self.correlation.fit {
            lines.push(format!(
                "Each point of RMSD moves predicted revenue by ${:.0}M.",
                fit.slope / 1e6
            ));
        }
        if let Some(r) = self.correlation.pearson_r {
            lines.push(format!("Pearson r between deviation and revenue: {r:.2}."));
        }
        lines
    }
}
