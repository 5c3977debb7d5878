use serde::{Deserialize, Serialize};

use crate::animation::EntranceTimeline;
use crate::core::{Margin, PlotArea, Viewport};
use crate::dataset::Film;
use crate::error::{ArcError, ArcResult};
use crate::interaction::TooltipStyle;
use crate::render::{Color, LinearGradient, Paint};

use super::theme::{DEFAULT_ACCENT, Theme};

/// Setup for a single-film [`LineChart`](super::LineChart).
///
/// Serializable so hosts can persist chart setup as JSON; every field except
/// the viewport has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_line_margin")]
    pub margin: Margin,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_accent")]
    pub line_color: Color,
    /// One color draws a solid stroke, two or more an evenly spaced
    /// horizontal gradient. Empty falls back to the theme gradient ending in
    /// `line_color`.
    #[serde(default)]
    pub stroke_colors: Vec<Color>,
    /// Top and bottom colors of the area fill. `None` derives them from
    /// `line_color`.
    #[serde(default)]
    pub area_colors: Option<(Color, Color)>,
    #[serde(default = "default_true")]
    pub animate: bool,
    /// Dot opacity once the pointer has left the plot.
    #[serde(default = "default_resting_dot_opacity")]
    pub resting_dot_opacity: f64,
    #[serde(default = "default_true")]
    pub paint_background: bool,
    #[serde(default)]
    pub tooltip: TooltipStyle,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: default_line_margin(),
            theme: Theme::default(),
            line_color: default_accent(),
            stroke_colors: Vec::new(),
            area_colors: None,
            animate: true,
            resting_dot_opacity: default_resting_dot_opacity(),
            paint_background: true,
            tooltip: TooltipStyle::default(),
        }
    }

    /// Config colored with `film`'s accent.
    #[must_use]
    pub fn for_film(viewport: Viewport, film: Film) -> Self {
        Self::new(viewport).with_line_color(film.color())
    }

    /// Copy of this config recolored for `film`. Only the film-derived colors
    /// change: the accent, a genre gradient stroke (when one is set) and the
    /// area fill, which falls back to the new accent.
    #[must_use]
    pub fn recolored_for(&self, film: Film) -> Self {
        let mut config = self.clone().with_line_color(film.color());
        if !config.stroke_colors.is_empty() {
            config.stroke_colors = film.genre_colors();
        }
        config.area_colors = None;
        config
    }

    /// Thumbnail config used by carousel cards: light, static and stroked
    /// with the film's genre gradient.
    #[must_use]
    pub fn card_thumbnail(viewport: Viewport, film: Film) -> Self {
        Self::for_film(viewport, film)
            .with_theme(Theme::Light)
            .with_animation(false)
            .with_stroke_colors(film.genre_colors())
            .with_background(false)
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_stroke_colors(mut self, colors: Vec<Color>) -> Self {
        self.stroke_colors = colors;
        self
    }

    #[must_use]
    pub fn with_area_colors(mut self, top: Color, bottom: Color) -> Self {
        self.area_colors = Some((top, bottom));
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn with_resting_dot_opacity(mut self, opacity: f64) -> Self {
        self.resting_dot_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_background(mut self, paint_background: bool) -> Self {
        self.paint_background = paint_background;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn timeline(&self) -> EntranceTimeline {
        if self.animate {
            EntranceTimeline::animated()
        } else {
            EntranceTimeline::disabled()
        }
    }

    /// Paint of the main stroke.
    #[must_use]
    pub fn stroke_paint(&self) -> Paint {
        Paint::from_colors(&self.stroke_colors).unwrap_or_else(|| {
            Paint::Linear(LinearGradient::horizontal(&[
                self.theme.palette().line_gradient_start,
                self.line_color,
            ]))
        })
    }

    /// Vertical gradient under the curve, top to bottom.
    #[must_use]
    pub fn area_paint(&self) -> Paint {
        let (top, bottom) = self
            .area_colors
            .unwrap_or((self.line_color.with_alpha(0.4), self.line_color.with_alpha(0.0)));
        Paint::Linear(LinearGradient::vertical(&[top, bottom]))
    }

    pub fn validate(&self) -> ArcResult<()> {
        PlotArea::from_viewport(self.viewport, self.margin)?;
        self.line_color.validate()?;
        for color in &self.stroke_colors {
            color.validate()?;
        }
        if let Some((top, bottom)) = self.area_colors {
            top.validate()?;
            bottom.validate()?;
        }
        validate_opacity("resting dot opacity", self.resting_dot_opacity)
    }
}

/// Setup for the RMSD / box-office [`CorrelationChart`](super::CorrelationChart).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_correlation_margin")]
    pub margin: Margin,
    #[serde(default = "default_light_theme")]
    pub theme: Theme,
    #[serde(default = "default_x_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    /// Multiplier applied to the largest observed value before rounding the
    /// axis domain.
    #[serde(default = "default_headroom")]
    pub headroom: f64,
    #[serde(default = "default_true")]
    pub animate: bool,
    #[serde(default = "default_true")]
    pub paint_background: bool,
}

impl CorrelationChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: default_correlation_margin(),
            theme: default_light_theme(),
            x_tick_count: default_x_tick_count(),
            y_tick_count: default_y_tick_count(),
            headroom: default_headroom(),
            animate: true,
            paint_background: true,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, x_tick_count: usize, y_tick_count: usize) -> Self {
        self.x_tick_count = x_tick_count;
        self.y_tick_count = y_tick_count;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn validate(&self) -> ArcResult<()> {
        PlotArea::from_viewport(self.viewport, self.margin)?;
        if !self.headroom.is_finite() || self.headroom < 1.0 {
            return Err(ArcError::InvalidData(
                "correlation headroom must be finite and >= 1".to_owned(),
            ));
        }
        if self.x_tick_count == 0 || self.y_tick_count == 0 {
            return Err(ArcError::InvalidData(
                "tick counts must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Setup for the all-films [`MultiLineChart`](super::MultiLineChart).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiLineChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_multi_line_margin")]
    pub margin: Margin,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_true")]
    pub animate: bool,
    #[serde(default = "default_true")]
    pub paint_background: bool,
}

impl MultiLineChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: default_multi_line_margin(),
            theme: Theme::default(),
            animate: true,
            paint_background: true,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn validate(&self) -> ArcResult<()> {
        PlotArea::from_viewport(self.viewport, self.margin).map(|_| ())
    }
}

fn validate_opacity(name: &str, value: f64) -> ArcResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ArcError::InvalidData(format!(
            "{name} must be within [0, 1]"
        )));
    }
    Ok(())
}

fn default_line_margin() -> Margin {
    Margin::new(40.0, 30.0, 80.0, 140.0)
}

fn default_correlation_margin() -> Margin {
    Margin::new(40.0, 60.0, 80.0, 100.0)
}

fn default_multi_line_margin() -> Margin {
    Margin::new(40.0, 30.0, 80.0, 80.0)
}

fn default_accent() -> Color {
    DEFAULT_ACCENT
}

fn default_light_theme() -> Theme {
    Theme::Light
}

fn default_true() -> bool {
    true
}

fn default_resting_dot_opacity() -> f64 {
    0.6
}

fn default_x_tick_count() -> usize {
    5
}

fn default_y_tick_count() -> usize {
    6
}

fn default_headroom() -> f64 {
    1.1
}
