use serde::{Deserialize, Serialize};

use crate::animation::SpringValue;

use super::label_format::{format_box_office, format_rating};

/// How an [`AnimatedCounter`] renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterKind {
    /// Abbreviated dollars: `1.01B`, `839M`, `48k`.
    Currency,
    /// One decimal.
    Rating,
    /// Whole number.
    Number,
}

/// Numeric label that springs toward new values instead of jumping.
///
/// A fresh counter shows its value immediately; only later changes animate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedCounter {
    kind: CounterKind,
    spring: SpringValue,
}

impl AnimatedCounter {
    #[must_use]
    pub fn new(value: f64, kind: CounterKind) -> Self {
        Self {
            kind,
            spring: SpringValue::new(value),
        }
    }

    #[must_use]
    pub fn kind(&self) -> CounterKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.spring.value()
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.spring.target()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    pub fn set_value(&mut self, value: f64) {
        self.spring.set_target(value);
    }

    /// Advances the spring and returns the label to display.
    pub fn tick(&mut self, delta_seconds: f64) -> String {
        self.spring.step(delta_seconds);
        self.label()
    }

    #[must_use]
    pub fn label(&self) -> String {
        let value = self.spring.value();
        match self.kind {
            CounterKind::Currency => format_box_office(value),
            CounterKind::Rating => format_rating(value),
            CounterKind::Number => format!("{value:.0}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimatedCounter, CounterKind};

    #[test]
    fn new_counter_shows_its_value_at_once() {
        let counter = AnimatedCounter::new(839_000_000.0, CounterKind::Currency);
        assert!(counter.is_settled());
        assert_eq!(counter.label(), "839M");
    }

    #[test]
    fn changed_value_passes_through_intermediate_labels() {
        let mut counter = AnimatedCounter::new(7.0, CounterKind::Rating);
        counter.set_value(9.0);
        let first = counter.tick(0.1);
        assert_ne!(first, "9.0");
        for _ in 0..600 {
            counter.tick(1.0 / 60.0);
        }
        assert_eq!(counter.label(), "9.0");
    }
}
