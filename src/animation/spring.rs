use serde::{Deserialize, Serialize};

/// Physical tuning for [`SpringValue`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Settling tolerance as a fraction of the last jump.
    pub rest_fraction: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_fraction: 1e-4,
        }
    }
}

/// Scalar that eases toward a target with damped-spring dynamics.
///
/// Stepping is deterministic: callers pass elapsed seconds and the value is
/// integrated with fixed sub-steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringValue {
    config: SpringConfig,
    value: f64,
    target: f64,
    velocity: f64,
    span: f64,
    settled: bool,
}

impl SpringValue {
    const SUB_STEP_SECONDS: f64 = 1.0 / 240.0;

    /// A spring resting at `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::with_config(value, SpringConfig::default())
    }

    #[must_use]
    pub fn with_config(value: f64, config: SpringConfig) -> Self {
        Self {
            config,
            value,
            target: value,
            velocity: 0.0,
            span: 1.0,
            settled: true,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.span = (target - self.value).abs().max(1.0);
        self.target = target;
        self.settled = false;
    }

    /// Places the spring at `value` with no motion.
    pub fn jump_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Advances the simulation by `delta_seconds` and returns the new value.
    pub fn step(&mut self, delta_seconds: f64) -> f64 {
        if self.settled || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return self.value;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_fraction,
        } = self.config;
        let mass = if mass > 0.0 { mass } else { 1.0 };

        let mut remaining = delta_seconds;
        while remaining > 0.0 {
            let dt = remaining.min(Self::SUB_STEP_SECONDS);
            let displacement = self.value - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }

        let tolerance = rest_fraction * self.span;
        if (self.value - self.target).abs() <= tolerance && self.velocity.abs() <= tolerance {
            self.jump_to(self.target);
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::SpringValue;

    #[test]
    fn spring_converges_monotonically_when_overdamped() {
        let mut spring = SpringValue::new(0.0);
        spring.set_target(100.0);
        let mut previous = 0.0;
        for _ in 0..600 {
            let value = spring.step(1.0 / 60.0);
            assert!(value >= previous - 1e-9);
            assert!(value <= 100.0 + 1e-9);
            previous = value;
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn non_positive_steps_do_not_move_the_spring() {
        let mut spring = SpringValue::new(1.0);
        spring.set_target(2.0);
        assert_eq!(spring.step(0.0), 1.0);
        assert_eq!(spring.step(-1.0), 1.0);
        assert!(!spring.is_settled());
    }
}
