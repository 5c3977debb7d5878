use serde::{Deserialize, Serialize};

/// Timing curve mapping linear progress `t` in 0..=1 to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^3`; used by the line reveal.
    CubicOut,
    /// Symmetric cubic; the default for staggered fades.
    #[default]
    CubicInOut,
    QuadOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)` with fixed end points `(0,0)` and `(1,1)`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    /// CSS `ease`.
    pub const CSS_EASE: Easing = Easing::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    /// Snappy deceleration used by card transforms.
    pub const CARD_GLIDE: Easing = Easing::CubicBezier {
        x1: 0.2,
        y1: 0.8,
        x2: 0.2,
        y2: 1.0,
    };

    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::CubicOut => ease_out_cubic(t),
            Easing::CubicInOut => ease_in_out_cubic(t),
            Easing::QuadOut => ease_out_quad(t),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// CSS timing-function text for this curve.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Easing::Linear => "linear".to_owned(),
            Easing::CubicOut => "cubic-bezier(0.215, 0.61, 0.355, 1)".to_owned(),
            Easing::CubicInOut => "cubic-bezier(0.645, 0.045, 0.355, 1)".to_owned(),
            Easing::QuadOut => "cubic-bezier(0.25, 0.46, 0.45, 0.94)".to_owned(),
            Easing::CubicBezier { .. } if self == Easing::CSS_EASE => "ease".to_owned(),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

#[inline(always)]
fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[inline(always)]
fn ease_in_out_cubic(t: f64) -> f64 {
    let doubled = t * 2.0;
    if doubled <= 1.0 {
        doubled * doubled * doubled / 2.0
    } else {
        let shifted = doubled - 2.0;
        (shifted * shifted * shifted + 2.0) / 2.0
    }
}

#[inline(always)]
fn ease_out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let s = solve_curve_x(x1, x2, x);
    bezier_component(y1, y2, s)
}

fn bezier_component(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds the curve parameter whose x equals `x`: Newton first, bisection if
/// the slope flattens out.
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let error = bezier_component(x1, x2, s) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_derivative(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
    }

    let (mut low, mut high) = (0.0, 1.0);
    s = x;
    while high - low > EPSILON {
        let value = bezier_component(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn cubic_out_matches_closed_form() {
        assert!((Easing::CubicOut.apply(0.5) - 0.875).abs() <= 1e-12);
        assert_eq!(Easing::CubicOut.apply(0.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(1.0), 1.0);
    }

    #[test]
    fn cubic_in_out_is_symmetric_around_half() {
        let easing = Easing::CubicInOut;
        assert!((easing.apply(0.5) - 0.5).abs() <= 1e-12);
        assert!((easing.apply(0.25) + easing.apply(0.75) - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let easing = Easing::CubicBezier {
            x1: 0.25,
            y1: 0.25,
            x2: 0.75,
            y2: 0.75,
        };
        for step in 0..=10 {
            let t = f64::from(step) / 10.0;
            assert!((easing.apply(t) - t).abs() <= 1e-5);
        }
    }

    #[test]
    fn css_ease_reaches_most_of_the_way_by_half_time() {
        let mid = Easing::CSS_EASE.apply(0.5);
        assert!(mid > 0.75 && mid < 0.85, "got {mid}");
        assert_eq!(Easing::CSS_EASE.css(), "ease");
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::QuadOut.apply(-3.0), 0.0);
        assert_eq!(Easing::QuadOut.apply(7.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }
}
