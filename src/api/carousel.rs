use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::animation::{Easing, Tween, lerp};
use crate::core::Viewport;
use crate::dataset::{Film, Genre};
use crate::render::{Color, LinearGradient, Paint};

use super::LineChartConfig;
use super::counter::{AnimatedCounter, CounterKind};

pub const CARD_WIDTH: f64 = 750.0;
pub const CARD_HEIGHT: f64 = 520.0;
pub const PERSPECTIVE_PX: f64 = 2000.0;
/// Cards at offsets `0..=CHART_WINDOW` draw their embedded chart.
pub const CHART_WINDOW: isize = 2;

const SPACING_X: f64 = 40.0;
const SPACING_Z: f64 = -400.0;
const TILT_X_DEG: f64 = 10.0;
const TILT_Y_DEG: f64 = -15.0;
const TRANSFORM_TRANSITION: Tween = Tween::new(0.0, 800.0, Easing::CARD_GLIDE);
const OPACITY_TRANSITION: Tween = Tween::new(0.0, 600.0, Easing::CSS_EASE);
const PILL_FALLBACK: Color = Color::rgb8(0x64, 0x74, 0x8b);
const LEGEND_FALLBACK: Color = Color::rgb8(0x94, 0xa3, 0xb8);

/// Wheel filtering for the card stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelPolicy {
    /// Events closer than this to the last accepted step are dropped.
    pub debounce_ms: f64,
    /// Deltas with magnitude at or below this are dropped.
    pub min_delta: f64,
}

impl Default for WheelPolicy {
    fn default() -> Self {
        Self {
            debounce_ms: 50.0,
            min_delta: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Debounced or too small.
    Ignored,
    /// Accepted but already at the first or last card.
    Clamped,
    Stepped { from: usize, to: usize },
}

/// 3D placement of one card, as CSS would apply it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub rotate_z_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl CardTransform {
    /// Resting transform of a card `offset` positions from the active one.
    ///
    /// Cards ahead recede and fade; cards already passed fly up and past the
    /// viewer, fully transparent.
    #[must_use]
    pub fn for_offset(offset: isize) -> Self {
        let distance = offset as f64;
        let mut transform = Self {
            translate_x: distance * SPACING_X,
            translate_y: 0.0,
            translate_z: distance * SPACING_Z,
            rotate_x_deg: TILT_X_DEG,
            rotate_y_deg: TILT_Y_DEG,
            rotate_z_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
        };
        match offset {
            0 => transform.scale = 1.05,
            o if o > 0 => transform.opacity = (1.0 - distance * 0.15).max(0.2),
            _ => {
                transform.translate_z = 800.0 + distance.abs() * 400.0;
                transform.translate_y = -200.0;
                transform.opacity = 0.0;
            }
        }
        if offset > 8 {
            transform.opacity = 0.0;
        }
        transform
    }

    /// Blend toward `to`, with separate progress for geometry and opacity.
    #[must_use]
    pub fn blend(self, to: Self, transform_t: f64, opacity_t: f64) -> Self {
        Self {
            translate_x: lerp(self.translate_x, to.translate_x, transform_t),
            translate_y: lerp(self.translate_y, to.translate_y, transform_t),
            translate_z: lerp(self.translate_z, to.translate_z, transform_t),
            rotate_x_deg: lerp(self.rotate_x_deg, to.rotate_x_deg, transform_t),
            rotate_y_deg: lerp(self.rotate_y_deg, to.rotate_y_deg, transform_t),
            rotate_z_deg: lerp(self.rotate_z_deg, to.rotate_z_deg, transform_t),
            scale: lerp(self.scale, to.scale, transform_t),
            opacity: lerp(self.opacity, to.opacity, opacity_t),
        }
    }

    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, {}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg) scale({})",
            self.translate_x,
            self.translate_y,
            self.translate_z,
            self.rotate_x_deg,
            self.rotate_y_deg,
            self.rotate_z_deg,
            self.scale
        )
    }

    #[must_use]
    pub fn css_transition() -> String {
        format!(
            "transform {}s {}, opacity {}s {}",
            TRANSFORM_TRANSITION.duration_ms / 1000.0,
            TRANSFORM_TRANSITION.easing.css(),
            OPACITY_TRANSITION.duration_ms / 1000.0,
            OPACITY_TRANSITION.easing.css()
        )
    }
}

/// In-flight move of one card between two resting transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CardMotion {
    from: CardTransform,
    to: CardTransform,
    started_ms: Option<f64>,
    current: CardTransform,
}

impl CardMotion {
    fn resting(transform: CardTransform) -> Self {
        Self {
            from: transform,
            to: transform,
            started_ms: Some(f64::NEG_INFINITY),
            current: transform,
        }
    }

    fn retarget(&mut self, to: CardTransform) {
        self.from = self.current;
        self.to = to;
        self.started_ms = None;
    }

    fn sample(&mut self, now_ms: f64) -> CardTransform {
        let started = *self.started_ms.get_or_insert(now_ms);
        let elapsed = now_ms - started;
        self.current = self.from.blend(
            self.to,
            TRANSFORM_TRANSITION.progress(elapsed),
            OPACITY_TRANSITION.progress(elapsed),
        );
        self.current
    }

    fn is_moving(&self, now_ms: f64) -> bool {
        self.started_ms
            .is_none_or(|started| now_ms - started < TRANSFORM_TRANSITION.end_ms())
    }
}

/// Where and how one card is drawn in the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub index: usize,
    pub offset: isize,
    pub transform: CardTransform,
    pub z_index: i32,
    /// Only the active card receives pointer input.
    pub interactive: bool,
    pub renders_chart: bool,
}

/// Active index of the card stack plus per-card transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    len: usize,
    active: usize,
    policy: WheelPolicy,
    last_step_ms: Option<f64>,
    motions: Vec<CardMotion>,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_policy(len, WheelPolicy::default())
    }

    #[must_use]
    pub fn with_policy(len: usize, policy: WheelPolicy) -> Self {
        let motions = (0..len)
            .map(|index| CardMotion::resting(CardTransform::for_offset(index as isize)))
            .collect();
        Self {
            len,
            active: 0,
            policy,
            last_step_ms: None,
            motions,
        }
    }

    /// One card per catalog film, in release order.
    #[must_use]
    pub fn for_catalog() -> Self {
        Self::new(Film::ALL.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_film(&self) -> Option<Film> {
        Film::from_index(self.active)
    }

    #[must_use]
    pub fn offset_of(&self, index: usize) -> isize {
        index as isize - self.active as isize
    }

    /// Feeds one wheel event. Positive `delta_y` moves forward.
    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) -> WheelOutcome {
        if self
            .last_step_ms
            .is_some_and(|last| now_ms - last < self.policy.debounce_ms)
        {
            return WheelOutcome::Ignored;
        }
        if !delta_y.is_finite() || delta_y.abs() <= self.policy.min_delta {
            return WheelOutcome::Ignored;
        }
        self.last_step_ms = Some(now_ms);

        let from = self.active;
        let moved = if delta_y > 0.0 { self.next() } else { self.prev() };
        trace!(delta_y, from, to = self.active, "carousel wheel step");
        if moved {
            WheelOutcome::Stepped {
                from,
                to: self.active,
            }
        } else {
            WheelOutcome::Clamped
        }
    }

    /// Sets the active card, clamped to the valid range. Returns whether the
    /// index changed.
    pub fn select(&mut self, index: usize) -> bool {
        let target = index.min(self.len.saturating_sub(1));
        if target == self.active || self.len == 0 {
            return false;
        }
        debug!(from = self.active, to = target, "carousel active card changed");
        self.active = target;
        for (idx, motion) in self.motions.iter_mut().enumerate() {
            let offset = idx as isize - target as isize;
            motion.retarget(CardTransform::for_offset(offset));
        }
        true
    }

    pub fn select_film(&mut self, film: Film) -> bool {
        self.select(film.index())
    }

    pub fn next(&mut self) -> bool {
        self.select(self.active + 1)
    }

    pub fn prev(&mut self) -> bool {
        match self.active.checked_sub(1) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Whether the card at `index` draws its embedded chart.
    #[must_use]
    pub fn renders_chart(&self, index: usize) -> bool {
        (0..=CHART_WINDOW).contains(&self.offset_of(index))
    }

    /// Samples every card at `now_ms`, back to front.
    pub fn placements(&mut self, now_ms: f64) -> Vec<CardPlacement> {
        let active = self.active;
        let mut placements: Vec<CardPlacement> = self
            .motions
            .iter_mut()
            .enumerate()
            .map(|(index, motion)| CardPlacement {
                index,
                offset: index as isize - active as isize,
                transform: motion.sample(now_ms),
                z_index: 100 - index as i32,
                interactive: index == active,
                renders_chart: (0..=CHART_WINDOW).contains(&(index as isize - active as isize)),
            })
            .collect();
        placements.sort_by_key(|placement| placement.z_index);
        placements
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.motions.iter().any(|motion| motion.is_moving(now_ms))
    }
}

/// Genre badge on a card header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenrePill {
    pub label: String,
    pub color: Color,
    pub fill: Color,
    pub border: Color,
}

impl GenrePill {
    #[must_use]
    pub fn new(genre: Genre) -> Self {
        Self::colored(genre.label().to_owned(), genre.color())
    }

    /// Pill for a free-form genre name; unknown names get a neutral slate.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let color = Genre::from_label(label).map_or(PILL_FALLBACK, Genre::color);
        Self::colored(label.trim().to_owned(), color)
    }

    fn colored(label: String, color: Color) -> Self {
        Self {
            label,
            color,
            fill: color.with_alpha(f64::from(0x15_u8) / 255.0),
            border: color.with_alpha(f64::from(0x50_u8) / 255.0),
        }
    }
}

/// One slice of a card's conic background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConicSector {
    pub genre: Genre,
    pub start_deg: f64,
    pub end_deg: f64,
    /// `None` when the film lacks the genre.
    pub color: Option<Color>,
}

/// Everything a host needs to draw one film card.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmCard {
    pub film: Film,
    pub caption: &'static str,
    pub title: &'static str,
    pub year: i32,
    pub accent: Color,
    pub box_office: AnimatedCounter,
    pub rating: AnimatedCounter,
    pub genres: Vec<GenrePill>,
}

impl FilmCard {
    #[must_use]
    pub fn new(film: Film) -> Self {
        let metadata = film.metadata();
        Self {
            film,
            caption: "MOVIE ARC",
            title: film.title(),
            year: metadata.year(),
            accent: film.color(),
            box_office: AnimatedCounter::new(metadata.box_office(), CounterKind::Currency),
            rating: AnimatedCounter::new(metadata.imdb_rating, CounterKind::Rating),
            genres: metadata.genres.iter().copied().map(GenrePill::new).collect(),
        }
    }

    /// Equal slices for every palette genre, colored where the film has it.
    #[must_use]
    pub fn conic_sectors(&self) -> Vec<ConicSector> {
        let metadata = self.film.metadata();
        let count = Genre::ALL.len() as f64;
        Genre::ALL
            .into_iter()
            .enumerate()
            .map(|(idx, genre)| ConicSector {
                genre,
                start_deg: idx as f64 / count * 360.0,
                end_deg: (idx + 1) as f64 / count * 360.0,
                color: metadata.has_genre(genre).then(|| genre.color()),
            })
            .collect()
    }

    #[must_use]
    pub fn conic_gradient_css(&self) -> String {
        let mut css = String::from("conic-gradient(from 0deg");
        for sector in self.conic_sectors() {
            let color = sector
                .color
                .map_or_else(|| "transparent".to_owned(), Color::to_hex);
            let _ = write!(css, ", {color} {}deg {}deg", sector.start_deg, sector.end_deg);
        }
        css.push(')');
        css
    }

    /// Legend dot fill: the genre colors along a 135° diagonal, or a single
    /// color when the film has one genre.
    #[must_use]
    pub fn legend_paint(&self) -> Paint {
        let colors = self.film.genre_colors();
        match colors.as_slice() {
            [] => Paint::Solid(LEGEND_FALLBACK),
            [single] => Paint::Solid(*single),
            many => Paint::Linear(LinearGradient::evenly_spaced(many, (0.0, 0.0), (1.0, 1.0))),
        }
    }

    #[must_use]
    pub fn legend_css(&self) -> String {
        match self.legend_paint() {
            Paint::Solid(color) => color.to_hex(),
            Paint::Linear(gradient) => {
                let stops: Vec<String> = gradient.stops.iter().map(|s| s.color.to_hex()).collect();
                format!("linear-gradient(135deg, {})", stops.join(", "))
            }
        }
    }

    /// Config of the embedded thumbnail chart.
    #[must_use]
    pub fn chart_config(&self, viewport: Viewport) -> LineChartConfig {
        LineChartConfig::card_thumbnail(viewport, self.film)
    }

    /// Header labels as currently displayed.
    #[must_use]
    pub fn header_labels(&self) -> (String, String) {
        (self.box_office.label(), self.rating.label())
    }
}

/// Cards for every catalog film.
#[must_use]
pub fn catalog_cards() -> Vec<FilmCard> {
    Film::ALL.into_iter().map(FilmCard::new).collect()
}
