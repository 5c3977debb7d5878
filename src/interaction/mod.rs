mod hit_test;
mod tooltip;

pub use hit_test::{marker_at, nearest_beat_index};
pub use tooltip::{TooltipBox, TooltipLine, TooltipStyle};

use serde::{Deserialize, Serialize};

/// Hover target resolved from the pointer position, in plot-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverSnap {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HoverPhase {
    Idle,
    Tracking(HoverSnap),
    /// Pointer left; guide and tooltip are fading out. The start instant is
    /// stamped by the next frame build.
    Leaving {
        from: HoverSnap,
        started_ms: Option<f64>,
    },
}

/// Pointer-driven inspection state shared by the chart engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    phase: HoverPhase,
    cursor_x: f64,
    cursor_y: f64,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            phase: HoverPhase::Idle,
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }
}

impl HoverState {
    #[must_use]
    pub fn phase(self) -> HoverPhase {
        self.phase
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    /// Active target while the pointer is inside the plot.
    #[must_use]
    pub fn snap(self) -> Option<HoverSnap> {
        match self.phase {
            HoverPhase::Tracking(snap) => Some(snap),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_tracking(self) -> bool {
        matches!(self.phase, HoverPhase::Tracking(_))
    }

    /// Records a pointer move. Returns `true` when the hovered index changed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, snap: Option<HoverSnap>) -> bool {
        self.cursor_x = x;
        self.cursor_y = y;
        let previous = self.snap().map(|snap| snap.index);
        match snap {
            Some(snap) => {
                self.phase = HoverPhase::Tracking(snap);
                previous != Some(snap.index)
            }
            None => {
                self.on_pointer_leave();
                previous.is_some()
            }
        }
    }

    pub fn on_pointer_leave(&mut self) {
        if let HoverPhase::Tracking(from) = self.phase {
            self.phase = HoverPhase::Leaving {
                from,
                started_ms: None,
            };
        }
    }

    /// Stamps a pending leave transition with `now_ms` and returns the
    /// milliseconds elapsed since the pointer left, if leaving.
    pub fn leave_elapsed(&mut self, now_ms: f64) -> Option<f64> {
        match &mut self.phase {
            HoverPhase::Leaving { started_ms, .. } => {
                let started = *started_ms.get_or_insert(now_ms);
                Some((now_ms - started).max(0.0))
            }
            _ => None,
        }
    }

    /// Drops a finished leave transition back to idle.
    pub fn settle(&mut self, now_ms: f64, fade_ms: f64) {
        if let HoverPhase::Leaving {
            started_ms: Some(started),
            ..
        } = self.phase
        {
            if now_ms - started >= fade_ms {
                self.phase = HoverPhase::Idle;
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = HoverPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverPhase, HoverSnap, HoverState};

    fn snap(index: usize) -> HoverSnap {
        HoverSnap {
            index,
            x: index as f64 * 10.0,
            y: 5.0,
        }
    }

    #[test]
    fn move_reports_only_index_changes() {
        let mut state = HoverState::default();
        assert!(state.on_pointer_move(1.0, 1.0, Some(snap(0))));
        assert!(!state.on_pointer_move(2.0, 1.0, Some(snap(0))));
        assert!(state.on_pointer_move(12.0, 1.0, Some(snap(1))));
        assert_eq!(state.cursor(), (12.0, 1.0));
    }

    #[test]
    fn leave_is_stamped_lazily_and_settles() {
        let mut state = HoverState::default();
        state.on_pointer_move(1.0, 1.0, Some(snap(3)));
        state.on_pointer_leave();
        assert!(matches!(
            state.phase(),
            HoverPhase::Leaving {
                started_ms: None,
                ..
            }
        ));
        assert_eq!(state.leave_elapsed(1000.0), Some(0.0));
        assert_eq!(state.leave_elapsed(1150.0), Some(150.0));
        state.settle(1150.0, 500.0);
        assert!(matches!(state.phase(), HoverPhase::Leaving { .. }));
        state.settle(1500.0, 500.0);
        assert_eq!(state.phase(), HoverPhase::Idle);
    }

    #[test]
    fn leaving_while_idle_is_a_no_op() {
        let mut state = HoverState::default();
        state.on_pointer_leave();
        assert_eq!(state.phase(), HoverPhase::Idle);
        assert_eq!(state.leave_elapsed(10.0), None);
    }
}
