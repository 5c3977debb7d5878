//! Compiled-in story-arc catalog.
//!
//! Every table here is a `static`: the baseline arc is shared by reference by
//! every view and nothing is created or mutated at runtime.

mod baseline;
mod films;
mod genre;
mod metadata;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DetailedDataPoint, validate_complete_arc};
use crate::error::{ArcError, ArcResult};
use crate::render::Color;

pub use baseline::BASELINE_ARC;
pub use genre::Genre;
pub use metadata::FilmMetadata;

/// Label used when the baseline has no beat at the hovered index.
pub const UNKNOWN_STAGE_LABEL: &str = "Unknown Stage";

/// Closed set of films in the catalog, in release order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Film {
    Following,
    Memento,
    Insomnia,
    #[serde(rename = "Batman Begins")]
    BatmanBegins,
    #[serde(rename = "The Prestige")]
    ThePrestige,
    #[serde(rename = "The Dark Knight")]
    TheDarkKnight,
    Inception,
    #[serde(rename = "The Dark Knight Rises")]
    TheDarkKnightRises,
    Interstellar,
    Dunkirk,
    Tenet,
    Oppenheimer,
}

impl Film {
    pub const ALL: [Film; 12] = [
        Film::Following,
        Film::Memento,
        Film::Insomnia,
        Film::BatmanBegins,
        Film::ThePrestige,
        Film::TheDarkKnight,
        Film::Inception,
        Film::TheDarkKnightRises,
        Film::Interstellar,
        Film::Dunkirk,
        Film::Tenet,
        Film::Oppenheimer,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Film::Following => "Following",
            Film::Memento => "Memento",
            Film::Insomnia => "Insomnia",
            Film::BatmanBegins => "Batman Begins",
            Film::ThePrestige => "The Prestige",
            Film::TheDarkKnight => "The Dark Knight",
            Film::Inception => "Inception",
            Film::TheDarkKnightRises => "The Dark Knight Rises",
            Film::Interstellar => "Interstellar",
            Film::Dunkirk => "Dunkirk",
            Film::Tenet => "Tenet",
            Film::Oppenheimer => "Oppenheimer",
        }
    }

    /// Lowercase, hyphen-separated title usable in file names and element ids.
    #[must_use]
    pub fn slug(self) -> String {
        self.title()
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Position in [`Film::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Film::ALL.get(index).copied()
    }

    /// The 24 annotated beats of this film.
    #[must_use]
    pub fn beats(self) -> &'static [DetailedDataPoint; 24] {
        match self {
            Film::Following => &films::FOLLOWING,
            Film::Memento => &films::MEMENTO,
            Film::Insomnia => &films::INSOMNIA,
            Film::BatmanBegins => &films::BATMAN_BEGINS,
            Film::ThePrestige => &films::THE_PRESTIGE,
            Film::TheDarkKnight => &films::THE_DARK_KNIGHT,
            Film::Inception => &films::INCEPTION,
            Film::TheDarkKnightRises => &films::THE_DARK_KNIGHT_RISES,
            Film::Interstellar => &films::INTERSTELLAR,
            Film::Dunkirk => &films::DUNKIRK,
            Film::Tenet => &films::TENET,
            Film::Oppenheimer => &films::OPPENHEIMER,
        }
    }

    /// Beats without mood tags, ready to feed a chart.
    #[must_use]
    pub fn series(self) -> Vec<DataPoint> {
        self.beats().iter().map(|beat| beat.point.clone()).collect()
    }

    #[must_use]
    pub fn metadata(self) -> &'static FilmMetadata {
        match self {
            Film::Following => &metadata::FOLLOWING,
            Film::Memento => &metadata::MEMENTO,
            Film::Insomnia => &metadata::INSOMNIA,
            Film::BatmanBegins => &metadata::BATMAN_BEGINS,
            Film::ThePrestige => &metadata::THE_PRESTIGE,
            Film::TheDarkKnight => &metadata::THE_DARK_KNIGHT,
            Film::Inception => &metadata::INCEPTION,
            Film::TheDarkKnightRises => &metadata::THE_DARK_KNIGHT_RISES,
            Film::Interstellar => &metadata::INTERSTELLAR,
            Film::Dunkirk => &metadata::DUNKIRK,
            Film::Tenet => &metadata::TENET,
            Film::Oppenheimer => &metadata::OPPENHEIMER,
        }
    }

    /// Accent color used for this film's line, dot and scatter point.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Film::Following => Color::rgb8(0xf1, 0xf5, 0xf9),
            Film::Memento => Color::rgb8(0x34, 0xd3, 0x99),
            Film::Insomnia => Color::rgb8(0x7d, 0xd3, 0xfc),
            Film::BatmanBegins => Color::rgb8(0x94, 0xa3, 0xb8),
            Film::ThePrestige => Color::rgb8(0x14, 0xb8, 0xa6),
            Film::TheDarkKnight => Color::rgb8(0x3b, 0x82, 0xf6),
            Film::Inception => Color::rgb8(0xef, 0x44, 0x44),
            Film::TheDarkKnightRises => Color::rgb8(0xf9, 0x73, 0x16),
            Film::Interstellar => Color::rgb8(0x63, 0x66, 0xf1),
            Film::Dunkirk => Color::rgb8(0x06, 0xb6, 0xd4),
            Film::Tenet => Color::rgb8(0xea, 0xb3, 0x08),
            Film::Oppenheimer => Color::rgb8(0xa8, 0x55, 0xf7),
        }
    }

    /// One color per genre of the film, in metadata order.
    #[must_use]
    pub fn genre_colors(self) -> Vec<Color> {
        self.metadata().genres.iter().map(|g| g.color()).collect()
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Film {
    type Err = ArcError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let needle = input.trim();
        Film::ALL
            .into_iter()
            .find(|film| film.title().eq_ignore_ascii_case(needle) || film.slug() == needle)
            .ok_or_else(|| ArcError::UnknownFilm(needle.to_owned()))
    }
}

/// The baseline arc as an owned series.
#[must_use]
pub fn baseline_series() -> Vec<DataPoint> {
    BASELINE_ARC.to_vec()
}

/// Baseline label at beat `x`, or the placeholder when the beat is missing.
#[must_use]
pub fn stage_label(baseline: &[DataPoint], x: u32) -> &str {
    baseline
        .iter()
        .find(|point| point.x == x)
        .filter(|point| point.has_label())
        .map_or(UNKNOWN_STAGE_LABEL, |point| point.label.as_ref())
}

/// Mood word attached to an integer valence level on the chart's y axis.
#[must_use]
pub fn valence_caption(level: i32) -> Option<&'static str> {
    let caption = match level {
        10 => "Elation",
        9 => "Celebration",
        8 => "Triumph",
        7 => "Happiness",
        6 => "Achievement",
        5 => "Joy",
        4 => "Victory",
        3 => "Confidence",
        2 => "Hope",
        1 => "Relief",
        0 => "Neutral",
        -1 => "Hesitation",
        -2 => "Unease",
        -3 => "Conflict",
        -4 => "Frustration",
        -5 => "Tension",
        -6 => "Sadness",
        -7 => "Anxiety",
        -8 => "Betrayal",
        -9 => "Devastation",
        -10 => "Despair",
        _ => return None,
    };
    Some(caption)
}

/// Validates the baseline and every film arc.
pub fn validate_catalog() -> ArcResult<()> {
    validate_complete_arc(&BASELINE_ARC)
        .map_err(|err| ArcError::InvalidSeries(format!("baseline: {err}")))?;
    for film in Film::ALL {
        validate_complete_arc(&film.series())
            .map_err(|err| ArcError::InvalidSeries(format!("{film}: {err}")))?;
    }
    Ok(())
}

/// Total number of beats across all films.
#[must_use]
pub fn total_beats() -> usize {
    Film::ALL.iter().map(|film| film.beats().len()).sum()
}
