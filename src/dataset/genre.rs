use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Genre tags used by film metadata and card decoration.
///
/// Declaration order is the palette order: card backgrounds split a full turn
/// into one equal sector per genre in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    #[serde(rename = "Film-Noir")]
    FilmNoir,
    History,
    Horror,
    Music,
    Musical,
    Mystery,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Sport,
    Thriller,
    War,
    Western,
}

impl Genre {
    pub const ALL: [Genre; 22] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Biography,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::FilmNoir,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Musical,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Sport,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Biography => "Biography",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film-Noir",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Music => "Music",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Sport => "Sport",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Genre::Action => Color::rgb8(0xef, 0x44, 0x44),
            Genre::Adventure => Color::rgb8(0xf9, 0x73, 0x16),
            Genre::Animation => Color::rgb8(0xf5, 0x9e, 0x0b),
            Genre::Biography => Color::rgb8(0xa1, 0x62, 0x07),
            Genre::Comedy => Color::rgb8(0xea, 0xb3, 0x08),
            Genre::Crime => Color::rgb8(0x64, 0x74, 0x8b),
            Genre::Documentary => Color::rgb8(0x84, 0xcc, 0x16),
            Genre::Drama => Color::rgb8(0x8b, 0x5c, 0xf6),
            Genre::Family => Color::rgb8(0x22, 0xc5, 0x5e),
            Genre::Fantasy => Color::rgb8(0xd9, 0x46, 0xef),
            Genre::FilmNoir => Color::rgb8(0x33, 0x41, 0x55),
            Genre::History => Color::rgb8(0xb4, 0x53, 0x09),
            Genre::Horror => Color::rgb8(0x7f, 0x1d, 0x1d),
            Genre::Music => Color::rgb8(0xec, 0x48, 0x99),
            Genre::Musical => Color::rgb8(0xf4, 0x72, 0xb6),
            Genre::Mystery => Color::rgb8(0x63, 0x66, 0xf1),
            Genre::Romance => Color::rgb8(0xfb, 0x71, 0x85),
            Genre::SciFi => Color::rgb8(0x06, 0xb6, 0xd4),
            Genre::Sport => Color::rgb8(0x10, 0xb9, 0x81),
            Genre::Thriller => Color::rgb8(0x0e, 0xa5, 0xe9),
            Genre::War => Color::rgb8(0x57, 0x53, 0x4e),
            Genre::Western => Color::rgb8(0xc2, 0x41, 0x0c),
        }
    }

    /// Position of this genre in the palette order.
    #[must_use]
    pub fn palette_index(self) -> usize {
        Genre::ALL
            .iter()
            .position(|genre| *genre == self)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
