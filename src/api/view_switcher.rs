use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Film;

use super::carousel::{CarouselState, WheelOutcome};
use super::counter::{AnimatedCounter, CounterKind};

/// How the compare view lays out the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareLayout {
    /// Every arc on one grid.
    #[default]
    Overlay,
    /// The 3D card stack.
    Stack,
}

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "view", content = "layout", rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Single,
    Compare(CompareLayout),
    Methodology,
}

/// Input routed through [`AppState::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    ShowSingle,
    ShowCompare,
    SetCompareLayout(CompareLayout),
    ShowMethodology,
    Back,
    SelectFilm(Film),
    /// Card click in the stack; the index is clamped to the catalog.
    SelectCard(usize),
    Wheel { delta_y: f64, now_ms: f64 },
    NextFilm,
    PrevFilm,
}

/// Screen routing plus the film every view agrees on.
///
/// The carousel and the header counters follow the selected film; wheel
/// input is honored only while the stack is on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    view: ViewMode,
    last_compare_layout: CompareLayout,
    active_film: Film,
    carousel: CarouselState,
    box_office: AnimatedCounter,
    rating: AnimatedCounter,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        let film = Film::ALL[0];
        let metadata = film.metadata();
        Self {
            view: ViewMode::Single,
            last_compare_layout: CompareLayout::default(),
            active_film: film,
            carousel: CarouselState::for_catalog(),
            box_office: AnimatedCounter::new(metadata.box_office(), CounterKind::Currency),
            rating: AnimatedCounter::new(metadata.imdb_rating, CounterKind::Rating),
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewMode {
        self.view
    }

    #[must_use]
    pub fn active_film(&self) -> Film {
        self.active_film
    }

    #[must_use]
    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    #[must_use]
    pub fn box_office_counter(&self) -> &AnimatedCounter {
        &self.box_office
    }

    #[must_use]
    pub fn rating_counter(&self) -> &AnimatedCounter {
        &self.rating
    }

    /// Applies one action. Returns whether anything visible changed.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::ShowSingle => self.switch_view(ViewMode::Single),
            ViewAction::ShowCompare => {
                self.switch_view(ViewMode::Compare(self.last_compare_layout))
            }
            ViewAction::SetCompareLayout(layout) => {
                self.last_compare_layout = layout;
                self.switch_view(ViewMode::Compare(layout))
            }
            ViewAction::ShowMethodology => self.switch_view(ViewMode::Methodology),
            ViewAction::Back => self.back(),
            ViewAction::SelectFilm(film) => self.select_film(film),
            ViewAction::SelectCard(index) => {
                let moved = self.carousel.select(index);
                moved && self.sync_from_carousel()
            }
            ViewAction::Wheel { delta_y, now_ms } => {
                if self.view != ViewMode::Compare(CompareLayout::Stack) {
                    return false;
                }
                match self.carousel.on_wheel(delta_y, now_ms) {
                    WheelOutcome::Stepped { .. } => self.sync_from_carousel(),
                    WheelOutcome::Ignored | WheelOutcome::Clamped => false,
                }
            }
            ViewAction::NextFilm => {
                let moved = self.carousel.next();
                moved && self.sync_from_carousel()
            }
            ViewAction::PrevFilm => {
                let moved = self.carousel.prev();
                moved && self.sync_from_carousel()
            }
        }
    }

    /// Advances the header counters and returns their labels.
    pub fn tick_counters(&mut self, delta_seconds: f64) -> (String, String) {
        (
            self.box_office.tick(delta_seconds),
            self.rating.tick(delta_seconds),
        )
    }

    fn switch_view(&mut self, view: ViewMode) -> bool {
        if view == self.view {
            return false;
        }
        debug!(from = ?self.view, to = ?view, "view changed");
        self.view = view;
        true
    }

    fn back(&mut self) -> bool {
        let target = match self.view {
            ViewMode::Methodology => ViewMode::Compare(self.last_compare_layout),
            ViewMode::Compare(_) => ViewMode::Single,
            ViewMode::Single => return false,
        };
        self.switch_view(target)
    }

    fn select_film(&mut self, film: Film) -> bool {
        self.carousel.select_film(film);
        if film == self.active_film {
            return false;
        }
        debug!(film = film.title(), "active film selected");
        self.active_film = film;
        let metadata = film.metadata();
        self.box_office.set_value(metadata.box_office());
        self.rating.set_value(metadata.imdb_rating);
        true
    }

    fn sync_from_carousel(&mut self) -> bool {
        match self.carousel.active_film() {
            Some(film) => self.select_film(film),
            None => false,
        }
    }
}
