use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::Genre;

/// Release facts shown on film cards and used by the correlation view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilmMetadata {
    /// Original release date as `(year, month, day)`.
    pub release: (i32, u32, u32),
    /// Worldwide box office gross in US dollars.
    pub box_office_usd: u64,
    pub imdb_rating: f64,
    pub genres: &'static [Genre],
}

impl FilmMetadata {
    #[must_use]
    pub fn release_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.release;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.release_date()
            .map_or(self.release.0, |date| date.year())
    }

    #[must_use]
    pub fn box_office(&self) -> f64 {
        self.box_office_usd as f64
    }

    #[must_use]
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}

pub(super) static FOLLOWING: FilmMetadata = FilmMetadata {
    release: (1998, 9, 12),
    box_office_usd: 48_482,
    imdb_rating: 7.5,
    genres: &[Genre::Crime, Genre::Mystery, Genre::Thriller],
};

pub(super) static MEMENTO: FilmMetadata = FilmMetadata {
    release: (2000, 9, 5),
    box_office_usd: 39_723_096,
    imdb_rating: 8.4,
    genres: &[Genre::Mystery, Genre::Thriller],
};

pub(super) static INSOMNIA: FilmMetadata = FilmMetadata {
    release: (2002, 5, 24),
    box_office_usd: 113_758_770,
    imdb_rating: 7.2,
    genres: &[Genre::Crime, Genre::Drama, Genre::Mystery, Genre::Thriller],
};

pub(super) static BATMAN_BEGINS: FilmMetadata = FilmMetadata {
    release: (2005, 6, 15),
    box_office_usd: 373_672_993,
    imdb_rating: 8.2,
    genres: &[Genre::Action, Genre::Crime, Genre::Drama],
};

pub(super) static THE_PRESTIGE: FilmMetadata = FilmMetadata {
    release: (2006, 10, 20),
    box_office_usd: 109_676_311,
    imdb_rating: 8.5,
    genres: &[Genre::Drama, Genre::Mystery, Genre::SciFi, Genre::Thriller],
};

pub(super) static THE_DARK_KNIGHT: FilmMetadata = FilmMetadata {
    release: (2008, 7, 18),
    box_office_usd: 1_006_234_167,
    imdb_rating: 9.0,
    genres: &[Genre::Action, Genre::Crime, Genre::Drama, Genre::Thriller],
};

pub(super) static INCEPTION: FilmMetadata = FilmMetadata {
    release: (2010, 7, 16),
    box_office_usd: 839_030_630,
    imdb_rating: 8.8,
    genres: &[Genre::Action, Genre::Adventure, Genre::SciFi, Genre::Thriller],
};

pub(super) static THE_DARK_KNIGHT_RISES: FilmMetadata = FilmMetadata {
    release: (2012, 7, 20),
    box_office_usd: 1_081_142_612,
    imdb_rating: 8.4,
    genres: &[Genre::Action, Genre::Crime, Genre::Drama, Genre::Thriller],
};

pub(super) static INTERSTELLAR: FilmMetadata = FilmMetadata {
    release: (2014, 11, 7),
    box_office_usd: 677_471_339,
    imdb_rating: 8.7,
    genres: &[Genre::Adventure, Genre::Drama, Genre::SciFi],
};

pub(super) static DUNKIRK: FilmMetadata = FilmMetadata {
    release: (2017, 7, 21),
    box_office_usd: 527_016_307,
    imdb_rating: 7.8,
    genres: &[Genre::Action, Genre::Drama, Genre::History, Genre::War],
};

pub(super) static TENET: FilmMetadata = FilmMetadata {
    release: (2020, 8, 26),
    box_office_usd: 365_304_105,
    imdb_rating: 7.3,
    genres: &[Genre::Action, Genre::SciFi, Genre::Thriller],
};

pub(super) static OPPENHEIMER: FilmMetadata = FilmMetadata {
    release: (2023, 7, 21),
    box_office_usd: 975_811_333,
    imdb_rating: 8.3,
    genres: &[Genre::Biography, Genre::Drama, Genre::History],
};
