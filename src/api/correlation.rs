use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataPoint, LinearFit, extent, linear_regression, pearson_correlation, rmsd};
use crate::dataset::{BASELINE_ARC, Film};
use crate::render::Color;

/// One film's deviation from the baseline next to its box office.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    pub film: Film,
    pub rmsd: f64,
    pub revenue_usd: f64,
    pub color: Color,
}

/// RMSD / revenue pairs for a set of films plus the fitted trend.
///
/// Entries are keyed by film title and keep insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub entries: IndexMap<String, CorrelationEntry>,
    /// Least-squares fit of revenue on RMSD.
    pub fit: Option<LinearFit>,
    pub pearson_r: Option<f64>,
}

impl CorrelationReport {
    /// Scores `films` against `baseline`. Films with no overlapping beats
    /// are skipped.
    #[must_use]
    pub fn compute(films: &[Film], baseline: &[DataPoint]) -> Self {
        let mut entries = IndexMap::with_capacity(films.len());
        for &film in films {
            let Some(deviation) = rmsd(film.beats(), baseline) else {
                warn!(film = film.title(), "no overlapping beats with baseline, skipping");
                continue;
            };
            entries.insert(
                film.title().to_owned(),
                CorrelationEntry {
                    film,
                    rmsd: deviation,
                    revenue_usd: film.metadata().box_office(),
                    color: film.color(),
                },
            );
        }

        let samples: Vec<(f64, f64)> = entries
            .values()
            .map(|entry| (entry.rmsd, entry.revenue_usd))
            .collect();
        let fit = linear_regression(&samples);
        let pearson_r = pearson_correlation(&samples);
        debug!(films = entries.len(), ?fit, ?pearson_r, "computed correlation report");

        Self {
            entries,
            fit,
            pearson_r,
        }
    }

    /// Every catalog film against the catalog baseline.
    #[must_use]
    pub fn for_catalog() -> Self {
        Self::compute(&Film::ALL, &BASELINE_ARC)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, film: Film) -> Option<&CorrelationEntry> {
        self.entries.get(film.title())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorrelationEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn max_rmsd(&self) -> Option<f64> {
        extent(self.iter().map(|entry| entry.rmsd)).map(|(_, hi)| hi)
    }

    #[must_use]
    pub fn max_revenue(&self) -> Option<f64> {
        extent(self.iter().map(|entry| entry.revenue_usd)).map(|(_, hi)| hi)
    }

    /// End points of the trend line across the observed RMSD extent.
    #[must_use]
    pub fn trend_segment(&self) -> Option<((f64, f64), (f64, f64))> {
        let fit = self.fit?;
        let (lo, hi) = extent(self.iter().map(|entry| entry.rmsd))?;
        Some(((lo, fit.predict(lo)), (hi, fit.predict(hi))))
    }
}

#[cfg(test)]
mod tests {
    use super::CorrelationReport;
    use crate::core::DataPoint;
    use crate::dataset::{BASELINE_ARC, Film};

    #[test]
    fn empty_baseline_skips_every_film() {
        let report = CorrelationReport::compute(&Film::ALL, &[] as &[DataPoint]);
        assert!(report.is_empty());
        assert_eq!(report.fit, None);
        assert_eq!(report.trend_segment(), None);
    }

    #[test]
    fn entries_follow_input_order() {
        let report = CorrelationReport::compute(&[Film::Tenet, Film::Memento], &BASELINE_ARC);
        let titles: Vec<&str> = report.entries.keys().map(String::as_str).collect();
        assert_eq!(titles, ["Tenet", "Memento"]);
        assert!(report.get(Film::Inception).is_none());
    }
}
