use serde::{Deserialize, Serialize};

use super::Easing;

/// One delayed, eased transition measured in milliseconds from a start instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub const fn new(delay_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            delay_ms,
            duration_ms,
            easing,
        }
    }

    /// Zero-length tween: already complete at `elapsed >= 0`.
    #[must_use]
    pub const fn immediate() -> Self {
        Self::new(0.0, 0.0, Easing::Linear)
    }

    #[must_use]
    pub const fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Linear progress in 0..=1 before easing.
    #[must_use]
    pub fn raw_progress(self, elapsed_ms: f64) -> f64 {
        if elapsed_ms.is_nan() {
            return 0.0;
        }
        let local = elapsed_ms - self.delay_ms;
        if local <= 0.0 {
            return if self.duration_ms <= 0.0 && local == 0.0 { 1.0 } else { 0.0 };
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (local / self.duration_ms).min(1.0)
    }

    /// Eased progress in 0..=1.
    #[must_use]
    pub fn progress(self, elapsed_ms: f64) -> f64 {
        self.easing.apply(self.raw_progress(elapsed_ms))
    }

    /// Interpolates between `from` and `to` at `elapsed_ms`.
    #[must_use]
    pub fn sample(self, from: f64, to: f64, elapsed_ms: f64) -> f64 {
        lerp(from, to, self.progress(elapsed_ms))
    }

    #[must_use]
    pub fn end_ms(self) -> f64 {
        self.delay_ms + self.duration_ms.max(0.0)
    }

    #[must_use]
    pub fn is_finished(self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.end_ms()
    }
}

/// Per-element delay offset for a group of tweens sharing one template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub template: Tween,
    pub step_ms: f64,
}

impl Stagger {
    #[must_use]
    pub const fn new(template: Tween, step_ms: f64) -> Self {
        Self { template, step_ms }
    }

    #[must_use]
    pub fn tween(self, index: usize) -> Tween {
        self.template
            .with_delay(self.template.delay_ms + index as f64 * self.step_ms)
    }

    #[must_use]
    pub fn progress(self, index: usize, elapsed_ms: f64) -> f64 {
        self.tween(index).progress(elapsed_ms)
    }

    /// End time of the last of `count` elements.
    #[must_use]
    pub fn end_ms(self, count: usize) -> f64 {
        if count == 0 {
            return self.template.delay_ms;
        }
        self.tween(count - 1).end_ms()
    }
}

#[inline]
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::{Stagger, Tween};
    use crate::animation::Easing;

    #[test]
    fn tween_holds_before_delay_and_saturates_after_duration() {
        let tween = Tween::new(600.0, 2000.0, Easing::Linear);
        assert_eq!(tween.progress(0.0), 0.0);
        assert_eq!(tween.progress(600.0), 0.0);
        assert!((tween.progress(1600.0) - 0.5).abs() <= 1e-12);
        assert_eq!(tween.progress(5000.0), 1.0);
        assert!(tween.is_finished(2600.0));
    }

    #[test]
    fn immediate_tween_is_complete_at_zero() {
        assert_eq!(Tween::immediate().progress(0.0), 1.0);
    }

    #[test]
    fn stagger_offsets_each_element() {
        let stagger = Stagger::new(Tween::new(600.0, 1000.0, Easing::Linear), 100.0);
        assert_eq!(stagger.tween(2).delay_ms, 800.0);
        assert_eq!(stagger.end_ms(3), 1800.0);
    }
}
