use serde::{Deserialize, Serialize};

use super::{Easing, Stagger, Tween};

/// Staged entrance of a line chart, measured from the moment it was laid out.
///
/// Everything keys off one start delay: the reveal (area clip, line dash and
/// indicator dot) runs with cubic-out, the decorations fade in with the
/// default cubic-in-out and per-element stagger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntranceTimeline {
    pub enabled: bool,
    pub start_delay_ms: f64,
    pub draw_duration_ms: f64,
}

impl Default for EntranceTimeline {
    fn default() -> Self {
        Self::animated()
    }
}

impl EntranceTimeline {
    pub const START_DELAY_MS: f64 = 600.0;
    pub const DRAW_DURATION_MS: f64 = 2000.0;

    #[must_use]
    pub const fn animated() -> Self {
        Self {
            enabled: true,
            start_delay_ms: Self::START_DELAY_MS,
            draw_duration_ms: Self::DRAW_DURATION_MS,
        }
    }

    /// Every element already in its final state.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            start_delay_ms: 0.0,
            draw_duration_ms: 0.0,
        }
    }

    /// Area clip growth, line dash reveal and the dot riding the path.
    #[must_use]
    pub fn reveal(self) -> Tween {
        self.gate(Tween::new(
            self.start_delay_ms,
            self.draw_duration_ms,
            Easing::CubicOut,
        ))
    }

    /// Act-break gridlines at x = 6, 12, 18.
    #[must_use]
    pub fn vertical_grid(self) -> Stagger {
        self.gate_stagger(Stagger::new(self.fade(0.0, 1000.0), 100.0))
    }

    /// Reference gridlines at y = -10, -5, 5, 10.
    #[must_use]
    pub fn horizontal_grid(self) -> Stagger {
        self.gate_stagger(Stagger::new(self.fade(0.0, 1000.0), 100.0))
    }

    #[must_use]
    pub fn zero_line(self) -> Tween {
        self.gate(self.fade(0.0, 1000.0))
    }

    #[must_use]
    pub fn baseline(self) -> Tween {
        self.gate(self.fade(0.0, 1500.0))
    }

    /// Beat numbers under the axis; they also slide up while fading in.
    #[must_use]
    pub fn x_labels(self) -> Stagger {
        self.gate_stagger(Stagger::new(self.fade(800.0, 800.0), 50.0))
    }

    #[must_use]
    pub fn structure_labels(self) -> Stagger {
        self.gate_stagger(Stagger::new(self.fade(1000.0, 1000.0), 100.0))
    }

    #[must_use]
    pub fn valence_pills(self) -> Stagger {
        self.gate_stagger(Stagger::new(self.fade(500.0, 600.0), 30.0))
    }

    /// Time after which no entrance tween is still running.
    #[must_use]
    pub fn settle_ms(self) -> f64 {
        [
            self.reveal().end_ms(),
            self.vertical_grid().end_ms(3),
            self.horizontal_grid().end_ms(4),
            self.zero_line().end_ms(),
            self.baseline().end_ms(),
            self.x_labels().end_ms(5),
            self.structure_labels().end_ms(2),
            self.valence_pills().end_ms(21),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn is_settled(self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.settle_ms()
    }

    fn fade(self, offset_ms: f64, duration_ms: f64) -> Tween {
        Tween::new(self.start_delay_ms + offset_ms, duration_ms, Easing::CubicInOut)
    }

    fn gate(self, tween: Tween) -> Tween {
        if self.enabled {
            tween
        } else {
            Tween::immediate()
        }
    }

    fn gate_stagger(self, stagger: Stagger) -> Stagger {
        if self.enabled {
            stagger
        } else {
            Stagger::new(Tween::immediate(), 0.0)
        }
    }
}

/// Hover guide and tooltip fade-out after the pointer leaves.
pub const HOVER_FADE_OUT: Tween = Tween::new(0.0, 200.0, Easing::CubicInOut);
/// Indicator dot gliding back to the last beat after the pointer leaves.
pub const DOT_RETURN: Tween = Tween::new(0.0, 500.0, Easing::CubicInOut);
/// Active series fade-in on the compare overlay.
pub const ACTIVE_SERIES_FADE_IN: Tween = Tween::new(0.0, 500.0, Easing::CubicInOut);
/// Scatter point growth, staggered per film.
pub const SCATTER_POINT_GROW: Stagger =
    Stagger::new(Tween::new(0.0, 1000.0, Easing::CubicInOut), 100.0);
/// Scatter point labels, staggered per film.
pub const SCATTER_LABEL_FADE: Stagger =
    Stagger::new(Tween::new(500.0, 1000.0, Easing::CubicInOut), 100.0);
/// Scatter point enlarging or shrinking on hover.
pub const SCATTER_HOVER_RESIZE: Tween = Tween::new(0.0, 200.0, Easing::CubicInOut);

#[cfg(test)]
mod tests {
    use super::EntranceTimeline;

    #[test]
    fn disabled_timeline_is_settled_immediately() {
        let timeline = EntranceTimeline::disabled();
        assert_eq!(timeline.settle_ms(), 0.0);
        assert_eq!(timeline.reveal().progress(0.0), 1.0);
        assert_eq!(timeline.valence_pills().progress(20, 0.0), 1.0);
    }

    #[test]
    fn animated_timeline_settles_after_the_slowest_stage() {
        let timeline = EntranceTimeline::animated();
        // reveal ends at 600 + 2000; structure labels at 600 + 1000 + 100 + 1000.
        assert_eq!(timeline.settle_ms(), 2700.0);
        assert!(!timeline.is_settled(2600.0));
        assert!(timeline.is_settled(2700.0));
    }
}
