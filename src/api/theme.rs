use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArcError, ArcResult};
use crate::render::Color;

/// Light or dark chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    #[must_use]
    pub const fn palette(self) -> ThemePalette {
        match self {
            Theme::Dark => ThemePalette::DARK,
            Theme::Light => ThemePalette::LIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

impl FromStr for Theme {
    type Err = ArcError;

    fn from_str(input: &str) -> ArcResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ArcError::InvalidData(format!("unknown theme `{other}`"))),
        }
    }
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: Color,
    pub axis_text: Color,
    /// Dashed act-break gridlines.
    pub grid: Color,
    /// Horizontal reference gridlines.
    pub reference_grid: Color,
    pub zero_line: Color,
    pub baseline: Color,
    /// Left end of the default line gradient.
    pub line_gradient_start: Color,
    pub tooltip_fill: Color,
    pub tooltip_border: Color,
    pub tooltip_story_text: Color,
    pub tooltip_film_text: Color,
    /// Text color of the zero-valence pill.
    pub neutral_pill_text: Color,
    pub pill_fill_alpha: f64,
    /// Opacity of non-highlighted lines in the compare overlay.
    pub inactive_series_opacity: f64,
}

const SLATE_100: Color = Color::rgb8(0xf1, 0xf5, 0xf9);
const SLATE_200: Color = Color::rgb8(0xe2, 0xe8, 0xf0);
const SLATE_300: Color = Color::rgb8(0xcb, 0xd5, 0xe1);
const SLATE_400: Color = Color::rgb8(0x94, 0xa3, 0xb8);
const SLATE_500: Color = Color::rgb8(0x64, 0x74, 0x8b);
const SLATE_600: Color = Color::rgb8(0x47, 0x55, 0x69);
const SLATE_700: Color = Color::rgb8(0x33, 0x41, 0x55);
const SLATE_800: Color = Color::rgb8(0x1e, 0x29, 0x3b);
const SLATE_900: Color = Color::rgb8(0x0f, 0x17, 0x2a);
const SLATE_50: Color = Color::rgb8(0xf8, 0xfa, 0xfc);

impl ThemePalette {
    pub const DARK: ThemePalette = ThemePalette {
        background: SLATE_900,
        axis_text: SLATE_400,
        grid: SLATE_600,
        reference_grid: SLATE_400,
        zero_line: SLATE_500,
        baseline: SLATE_500,
        line_gradient_start: Color::rgb8(0xa5, 0xb4, 0xfc),
        tooltip_fill: SLATE_800,
        tooltip_border: SLATE_600,
        tooltip_story_text: SLATE_400,
        tooltip_film_text: SLATE_100,
        neutral_pill_text: SLATE_500,
        pill_fill_alpha: 0.2,
        inactive_series_opacity: 0.2,
    };

    pub const LIGHT: ThemePalette = ThemePalette {
        background: SLATE_50,
        axis_text: SLATE_600,
        grid: SLATE_300,
        reference_grid: SLATE_300,
        zero_line: SLATE_400,
        baseline: SLATE_400,
        line_gradient_start: Color::rgb8(0x81, 0x8c, 0xf8),
        tooltip_fill: Color::rgba(1.0, 1.0, 1.0, 0.95),
        tooltip_border: SLATE_200,
        tooltip_story_text: SLATE_500,
        tooltip_film_text: SLATE_800,
        neutral_pill_text: SLATE_700,
        pill_fill_alpha: 0.15,
        inactive_series_opacity: 0.3,
    };
}

/// Pill colors for positive, negative and zero valence.
pub const POSITIVE_VALENCE: Color = Color::rgb8(0x10, 0xb9, 0x81);
pub const NEGATIVE_VALENCE: Color = Color::rgb8(0xf4, 0x3f, 0x5e);
pub const NEUTRAL_VALENCE: Color = SLATE_500;

/// Default accent when no film color is configured.
pub const DEFAULT_ACCENT: Color = Color::rgb8(0x63, 0x66, 0xf1);

#[must_use]
pub fn valence_color(level: i32) -> Color {
    match level.signum() {
        1 => POSITIVE_VALENCE,
        -1 => NEGATIVE_VALENCE,
        _ => NEUTRAL_VALENCE,
    }
}
