use crate::core::curve::{PathCommand, PathGeometry, PathVertex};

const CUBIC_SUBDIVISIONS: usize = 24;

/// Arc-length parameterization of a [`PathGeometry`].
///
/// Cubic segments are flattened into a fixed number of chords; the result is
/// accurate to well under a pixel for chart-sized curves and keeps the dot
/// tween and the dash-offset line reveal in lockstep.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSampler {
    vertices: Vec<PathVertex>,
    cumulative: Vec<f64>,
}

impl PathSampler {
    #[must_use]
    pub fn new(path: &PathGeometry) -> Self {
        let mut vertices: Vec<PathVertex> = Vec::new();
        let mut subpath_start: Option<PathVertex> = None;

        for command in &path.commands {
            match *command {
                PathCommand::MoveTo(v) => {
                    subpath_start = Some(v);
                    if vertices.is_empty() {
                        vertices.push(v);
                    }
                }
                PathCommand::LineTo(v) => vertices.push(v),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    let Some(&from) = vertices.last() else {
                        vertices.push(to);
                        continue;
                    };
                    for step in 1..=CUBIC_SUBDIVISIONS {
                        let t = step as f64 / CUBIC_SUBDIVISIONS as f64;
                        vertices.push(cubic_point(from, ctrl1, ctrl2, to, t));
                    }
                }
                PathCommand::Close => {
                    if let Some(start) = subpath_start {
                        vertices.push(start);
                    }
                }
            }
        }

        let mut cumulative = Vec::with_capacity(vertices.len());
        let mut total = 0.0;
        for (idx, vertex) in vertices.iter().enumerate() {
            if idx > 0 {
                total += vertices[idx - 1].distance_to(*vertex);
            }
            cumulative.push(total);
        }

        Self {
            vertices,
            cumulative,
        }
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Point located `length` pixels along the path, clamped to its ends.
    #[must_use]
    pub fn point_at_length(&self, length: f64) -> Option<PathVertex> {
        let first = *self.vertices.first()?;
        if length <= 0.0 || self.vertices.len() == 1 {
            return Some(first);
        }
        let total = self.total_length();
        if length >= total {
            return self.vertices.last().copied();
        }

        let idx = self.cumulative.partition_point(|&acc| acc < length);
        let (start, end) = (self.vertices[idx - 1], self.vertices[idx]);
        let segment = self.cumulative[idx] - self.cumulative[idx - 1];
        if segment <= 0.0 {
            return Some(end);
        }
        let t = (length - self.cumulative[idx - 1]) / segment;
        Some(PathVertex::new(
            start.x + (end.x - start.x) * t,
            start.y + (end.y - start.y) * t,
        ))
    }

    /// Point at `fraction` (0..=1) of the total length.
    #[must_use]
    pub fn point_at_fraction(&self, fraction: f64) -> Option<PathVertex> {
        self.point_at_length(fraction.clamp(0.0, 1.0) * self.total_length())
    }
}

fn cubic_point(p0: PathVertex, p1: PathVertex, p2: PathVertex, p3: PathVertex, t: f64) -> PathVertex {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    PathVertex::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}
