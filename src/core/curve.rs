use serde::{Deserialize, Serialize};

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

impl PathVertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// One drawing command of a 2D path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PathVertex),
    LineTo(PathVertex),
    CubicTo {
        ctrl1: PathVertex,
        ctrl2: PathVertex,
        to: PathVertex,
    },
    Close,
}

/// Backend-agnostic path description in absolute pixel coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathGeometry {
    pub commands: Vec<PathCommand>,
}

impl PathGeometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo(PathVertex::new(x, y)));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo(PathVertex::new(x, y)));
    }

    pub fn cubic_to(&mut self, ctrl1: PathVertex, ctrl2: PathVertex, to: PathVertex) {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Last on-curve vertex, if any.
    #[must_use]
    pub fn end_point(&self) -> Option<PathVertex> {
        self.commands.iter().rev().find_map(|command| match *command {
            PathCommand::MoveTo(v) | PathCommand::LineTo(v) => Some(v),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo(v) | PathCommand::LineTo(v) => v.x.is_finite() && v.y.is_finite(),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => [ctrl1, ctrl2, to]
                .iter()
                .all(|v| v.x.is_finite() && v.y.is_finite()),
            PathCommand::Close => true,
        })
    }
}

/// Builds a monotone-in-x cubic curve through `points`.
///
/// Tangents follow Steffen's method, which guarantees the curve never
/// overshoots between two samples: a flat pair of samples stays flat and a
/// local extremum is always located at a sample. Fewer than three points
/// degrade to straight segments.
#[must_use]
pub fn monotone_x_path(points: &[PathVertex]) -> PathGeometry {
    let mut path = PathGeometry::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.move_to(first.x, first.y);

    match points.len() {
        1 => return path,
        2 => {
            path.line_to(points[1].x, points[1].y);
            return path;
        }
        _ => {}
    }

    let tangents = monotone_tangents(points);
    for (idx, pair) in points.windows(2).enumerate() {
        let (p0, p1) = (pair[0], pair[1]);
        let dx = (p1.x - p0.x) / 3.0;
        path.cubic_to(
            PathVertex::new(p0.x + dx, p0.y + dx * tangents[idx]),
            PathVertex::new(p1.x - dx, p1.y - dx * tangents[idx + 1]),
            p1,
        );
    }
    path
}

fn monotone_tangents(points: &[PathVertex]) -> Vec<f64> {
    let n = points.len();
    let mut tangents = vec![0.0; n];
    for idx in 1..n - 1 {
        tangents[idx] = interior_slope(points[idx - 1], points[idx], points[idx + 1]);
    }
    tangents[0] = endpoint_slope(points[0], points[1], tangents[1]);
    tangents[n - 1] = endpoint_slope(points[n - 2], points[n - 1], tangents[n - 2]);
    tangents
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

fn interior_slope(p0: PathVertex, p1: PathVertex, p2: PathVertex) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() { slope } else { 0.0 }
}

/// One-sided tangent at a curve end, from the neighbouring interior tangent.
fn endpoint_slope(p0: PathVertex, p1: PathVertex, neighbour_tangent: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        return neighbour_tangent;
    }
    (3.0 * (p1.y - p0.y) / h - neighbour_tangent) / 2.0
}

/// Closes `line` against a horizontal baseline at `baseline_y`, producing the
/// fill outline of an area series.
#[must_use]
pub fn close_against_baseline(line: &PathGeometry, first_x: f64, baseline_y: f64) -> PathGeometry {
    let mut area = line.clone();
    if let Some(end) = line.end_point() {
        area.line_to(end.x, baseline_y);
        area.line_to(first_x, baseline_y);
        area.close();
    }
    area
}
