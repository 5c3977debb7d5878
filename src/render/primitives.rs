use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PathGeometry;
use crate::error::{ArcError, ArcResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(input: &str) -> ArcResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(ArcError::InvalidData(format!(
                    "color `{input}` must be #rgb or #rrggbb"
                )));
            }
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|_| ArcError::InvalidData(format!("color `{input}` is not hexadecimal")))
        };
        Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Multiplies the current alpha by `factor`.
    #[must_use]
    pub fn fade(self, factor: f64) -> Self {
        self.with_alpha(self.alpha * factor.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b] = [self.red, self.green, self.blue].map(to_byte);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// CSS color string; opaque colors are emitted as hex.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.alpha >= 1.0 {
            return self.to_hex();
        }
        let [r, g, b] = [self.red, self.green, self.blue].map(to_byte);
        format!("rgba({r},{g},{b},{:.3})", self.alpha.clamp(0.0, 1.0))
    }

    pub fn validate(self) -> ArcResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ArcError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient axis in 0..=1.
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient expressed in the bounding box of the painted shape
/// (`0,0` top-left, `1,1` bottom-right).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl LinearGradient {
    /// Left-to-right gradient with `colors` evenly spaced from 0 to 1.
    #[must_use]
    pub fn horizontal(colors: &[Color]) -> Self {
        Self::evenly_spaced(colors, (0.0, 0.0), (1.0, 0.0))
    }

    /// Top-to-bottom gradient with `colors` evenly spaced from 0 to 1.
    #[must_use]
    pub fn vertical(colors: &[Color]) -> Self {
        Self::evenly_spaced(colors, (0.0, 0.0), (0.0, 1.0))
    }

    #[must_use]
    pub fn evenly_spaced(colors: &[Color], from: (f64, f64), to: (f64, f64)) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(idx, color)| GradientStop {
                offset: if colors.len() == 1 { 0.0 } else { idx as f64 / last },
                color: *color,
            })
            .collect();
        Self {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            stops,
        }
    }

    pub fn validate(&self) -> ArcResult<()> {
        if self.stops.is_empty() {
            return Err(ArcError::InvalidData(
                "gradient must have at least one stop".to_owned(),
            ));
        }
        let mut previous = 0.0;
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(previous..=1.0).contains(&stop.offset) {
                return Err(ArcError::InvalidData(
                    "gradient stop offsets must be ascending within [0, 1]".to_owned(),
                ));
            }
            previous = stop.offset;
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Fill or stroke source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
}

impl Paint {
    /// Solid paint for a single color, horizontal gradient otherwise.
    #[must_use]
    pub fn from_colors(colors: &[Color]) -> Option<Self> {
        match colors {
            [] => None,
            [single] => Some(Paint::Solid(*single)),
            many => Some(Paint::Linear(LinearGradient::horizontal(many))),
        }
    }

    /// First color of the paint, used where only one color can be drawn.
    #[must_use]
    pub fn primary_color(&self) -> Color {
        match self {
            Paint::Solid(color) => *color,
            Paint::Linear(gradient) => gradient
                .stops
                .first()
                .map_or(Color::TRANSPARENT, |stop| stop.color),
        }
    }

    pub fn validate(&self) -> ArcResult<()> {
        match self {
            Paint::Solid(color) => color.validate(),
            Paint::Linear(gradient) => gradient.validate(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    /// Repeating dash pattern: `on` pixels drawn, `off` pixels skipped.
    Dashed { on: f64, off: f64 },
}

impl LineStrokeStyle {
    #[must_use]
    pub const fn dashed(on: f64, off: f64) -> Self {
        LineStrokeStyle::Dashed { on, off }
    }

    pub fn validate(self) -> ArcResult<()> {
        if let LineStrokeStyle::Dashed { on, off } = self {
            if !on.is_finite() || !off.is_finite() || on < 0.0 || off < 0.0 || on + off <= 0.0 {
                return Err(ArcError::InvalidData(
                    "dash pattern must be finite, non-negative and non-empty".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    #[serde(default)]
    pub style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ArcResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ArcError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ArcError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.style.validate()?;
        self.color.validate()
    }
}

/// Draw command for a filled, optionally rounded and bordered rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, width: f64, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn validate(self) -> ArcResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ArcError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ArcError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ArcError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ArcError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextHAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

impl FontWeight {
    #[must_use]
    pub const fn css_value(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        }
    }
}

/// Draw command for one label in pixel space. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    #[serde(default)]
    pub weight: FontWeight,
    /// Clockwise rotation in degrees around `(x, y)`.
    #[serde(default)]
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            weight: FontWeight::Normal,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn validate(&self) -> ArcResult<()> {
        if self.text.is_empty() {
            return Err(ArcError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ArcError::InvalidData(
                "text coordinates and rotation must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ArcError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for a circle marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color,
            stroke_width: 0.0,
            stroke_color: Color::TRANSPARENT,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, width: f64, color: Color) -> Self {
        self.stroke_width = width;
        self.stroke_color = color;
        self
    }

    pub fn validate(self) -> ArcResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ArcError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ArcError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ArcError::InvalidData(
                "circle stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}

/// Stroke settings for a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStroke {
    pub paint: Paint,
    pub width: f64,
    #[serde(default)]
    pub style: LineStrokeStyle,
    /// Shift applied to the dash pattern; used to reveal a path progressively.
    #[serde(default)]
    pub dash_offset: f64,
    #[serde(default)]
    pub round_joins: bool,
}

impl PathStroke {
    #[must_use]
    pub fn new(paint: impl Into<Paint>, width: f64) -> Self {
        Self {
            paint: paint.into(),
            width,
            style: LineStrokeStyle::Solid,
            dash_offset: 0.0,
            round_joins: false,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_round_joins(mut self) -> Self {
        self.round_joins = true;
        self
    }

    /// Draws only the first `visible` pixels of a path of length `total`.
    #[must_use]
    pub fn revealed(mut self, visible: f64, total: f64) -> Self {
        if total > 0.0 {
            self.style = LineStrokeStyle::dashed(total, total);
            self.dash_offset = total - visible.clamp(0.0, total);
        }
        self
    }
}

/// Axis-aligned clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Blurred, offset copy of a shape painted below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropShadow {
    pub dx: f64,
    pub dy: f64,
    pub blur: f64,
    pub color: Color,
}

/// Draw command for an arbitrary path with optional fill and stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub geometry: PathGeometry,
    pub fill: Option<Paint>,
    pub stroke: Option<PathStroke>,
    pub clip: Option<ClipRect>,
    pub shadow: Option<DropShadow>,
    pub opacity: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(geometry: PathGeometry, stroke: PathStroke) -> Self {
        Self {
            geometry,
            fill: None,
            stroke: Some(stroke),
            clip: None,
            shadow: None,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn filled(geometry: PathGeometry, fill: impl Into<Paint>) -> Self {
        Self {
            geometry,
            fill: Some(fill.into()),
            stroke: None,
            clip: None,
            shadow: None,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_clip(mut self, clip: ClipRect) -> Self {
        self.clip = Some(clip);
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: DropShadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> ArcResult<()> {
        if !self.geometry.is_finite() {
            return Err(ArcError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ArcError::InvalidData(
                "path opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        if let Some(fill) = &self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = &self.stroke {
            if !stroke.width.is_finite() || stroke.width <= 0.0 {
                return Err(ArcError::InvalidData(
                    "path stroke width must be finite and > 0".to_owned(),
                ));
            }
            if !stroke.dash_offset.is_finite() {
                return Err(ArcError::InvalidData(
                    "path dash offset must be finite".to_owned(),
                ));
            }
            stroke.style.validate()?;
            stroke.paint.validate()?;
        }
        if let Some(shadow) = self.shadow {
            if !shadow.blur.is_finite() || shadow.blur < 0.0 {
                return Err(ArcError::InvalidData(
                    "shadow blur must be finite and >= 0".to_owned(),
                ));
            }
            shadow.color.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinearGradient, Paint, PathStroke};

    #[test]
    fn hex_parsing_accepts_short_and_long_forms() {
        let long = Color::from_hex("#10b981").expect("long hex");
        let short = Color::from_hex("fff").expect("short hex");
        assert_eq!(long.to_hex(), "#10b981");
        assert_eq!(short, Color::WHITE);
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn gradient_stops_are_evenly_spaced() {
        let colors = [Color::WHITE, Color::rgb8(0, 0, 0), Color::rgb8(255, 0, 0)];
        let gradient = LinearGradient::horizontal(&colors);
        let offsets: Vec<f64> = gradient.stops.iter().map(|stop| stop.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert!(matches!(Paint::from_colors(&colors[..1]), Some(Paint::Solid(_))));
        assert!(Paint::from_colors(&[]).is_none());
    }

    #[test]
    fn reveal_hides_the_unrevealed_tail() {
        let stroke = PathStroke::new(Color::WHITE, 2.0).revealed(30.0, 100.0);
        assert_eq!(stroke.dash_offset, 70.0);
    }
}
