use serde::{Deserialize, Serialize};

use crate::core::curve::{PathGeometry, close_against_baseline};
use crate::core::line_series::{LineGeometry, project_line};
use crate::core::{DataPoint, LinearScale};

/// Deterministic geometry for an area series.
///
/// `line` follows the mapped beats; `fill` is the same curve explicitly closed
/// against a horizontal baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line: LineGeometry,
    pub fill: PathGeometry,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line: LineGeometry::empty(),
            fill: PathGeometry::new(),
        }
    }
}

/// Projects beats into line + fill geometry filled down to `baseline_y`
/// (the plot bottom for the story charts).
#[must_use]
pub fn project_area(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    baseline_y: f64,
) -> AreaGeometry {
    let line = project_line(points, x_scale, y_scale);
    let Some(first) = line.vertices.first() else {
        return AreaGeometry::empty();
    };
    let fill = close_against_baseline(&line.path, first.x, baseline_y);
    AreaGeometry { line, fill }
}
