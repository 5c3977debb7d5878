use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{ArcError, ArcResult};

/// First beat index of every arc.
pub const BEAT_FIRST: u32 = 1;
/// Last beat index of every arc.
pub const BEAT_LAST: u32 = 24;
/// Number of beats in a complete arc.
pub const BEAT_COUNT: usize = 24;
/// Lower bound of the valence scale.
pub const VALENCE_MIN: f64 = -10.0;
/// Upper bound of the valence scale.
pub const VALENCE_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> ArcResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ArcError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Outer spacing between the viewport edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Inner plotting rectangle in absolute viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Resolves the plot rectangle left after applying `margin` to `viewport`.
    pub fn from_viewport(viewport: Viewport, margin: Margin) -> ArcResult<Self> {
        let viewport = viewport.ensure_valid()?;
        let width = f64::from(viewport.width) - margin.left - margin.right;
        let height = f64::from(viewport.height) - margin.top - margin.bottom;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ArcError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            left: margin.left,
            top: margin.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// One narrative beat: position on the 1..=24 axis, valence and a short label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: u32,
    pub value: f64,
    #[serde(default)]
    pub label: Cow<'static, str>,
}

impl DataPoint {
    #[must_use]
    pub const fn new_static(x: u32, value: f64, label: &'static str) -> Self {
        Self {
            x,
            value,
            label: Cow::Borrowed(label),
        }
    }

    #[must_use]
    pub fn new(x: u32, value: f64, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            x,
            value,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

/// A beat annotated with a short mood tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedDataPoint {
    #[serde(flatten)]
    pub point: DataPoint,
    pub emotion: Cow<'static, str>,
}

impl DetailedDataPoint {
    #[must_use]
    pub const fn new_static(
        x: u32,
        value: f64,
        label: &'static str,
        emotion: &'static str,
    ) -> Self {
        Self {
            point: DataPoint::new_static(x, value, label),
            emotion: Cow::Borrowed(emotion),
        }
    }

    #[must_use]
    pub fn x(&self) -> u32 {
        self.point.x
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.point.value
    }
}

/// Anything that carries a valence sample.
pub trait Valence {
    fn valence(&self) -> f64;
}

impl Valence for f64 {
    fn valence(&self) -> f64 {
        *self
    }
}

impl Valence for DataPoint {
    fn valence(&self) -> f64 {
        self.value
    }
}

impl Valence for DetailedDataPoint {
    fn valence(&self) -> f64 {
        self.point.value
    }
}

/// Checks that `points` is a complete arc: 24 beats, x = 1..=24 in order,
/// every value finite and inside [-10, 10].
pub fn validate_complete_arc(points: &[DataPoint]) -> ArcResult<()> {
    if points.len() != BEAT_COUNT {
        return Err(ArcError::InvalidSeries(format!(
            "expected {BEAT_COUNT} beats, got {}",
            points.len()
        )));
    }
    for (idx, point) in points.iter().enumerate() {
        let expected_x = BEAT_FIRST + idx as u32;
        if point.x != expected_x {
            return Err(ArcError::InvalidSeries(format!(
                "beat #{idx} has x={}, expected {expected_x}",
                point.x
            )));
        }
        validate_value(point)?;
    }
    Ok(())
}

/// Checks that `points` is a (possibly partial) arc: strictly increasing x
/// inside 1..=24 and in-range values.
pub fn validate_partial_arc(points: &[DataPoint]) -> ArcResult<()> {
    let mut previous_x: Option<u32> = None;
    for point in points {
        if !(BEAT_FIRST..=BEAT_LAST).contains(&point.x) {
            return Err(ArcError::InvalidSeries(format!(
                "beat x={} outside {BEAT_FIRST}..={BEAT_LAST}",
                point.x
            )));
        }
        if previous_x.is_some_and(|prev| point.x <= prev) {
            return Err(ArcError::InvalidSeries(format!(
                "beat x={} is not strictly increasing",
                point.x
            )));
        }
        validate_value(point)?;
        previous_x = Some(point.x);
    }
    Ok(())
}

fn validate_value(point: &DataPoint) -> ArcResult<()> {
    if !point.value.is_finite() || !(VALENCE_MIN..=VALENCE_MAX).contains(&point.value) {
        return Err(ArcError::InvalidSeries(format!(
            "beat x={} has valence {} outside [{VALENCE_MIN}, {VALENCE_MAX}]",
            point.x, point.value
        )));
    }
    Ok(())
}
