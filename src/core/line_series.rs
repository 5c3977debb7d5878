use serde::{Deserialize, Serialize};

use crate::core::curve::{PathGeometry, PathVertex, monotone_x_path};
use crate::core::{DataPoint, LinearScale};

/// Pixel projection of one valence series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub vertices: Vec<PathVertex>,
    pub path: PathGeometry,
}

impl LineGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            path: PathGeometry::new(),
        }
    }
}

/// Projects beats through the two scales and interpolates a monotone curve.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
#[must_use]
pub fn project_line(points: &[DataPoint], x_scale: LinearScale, y_scale: LinearScale) -> LineGeometry {
    if points.is_empty() {
        return LineGeometry::empty();
    }

    let vertices: Vec<PathVertex> = points
        .iter()
        .map(|point| PathVertex::new(x_scale.map(f64::from(point.x)), y_scale.map(point.value)))
        .collect();
    let path = monotone_x_path(&vertices);
    LineGeometry { vertices, path }
}
