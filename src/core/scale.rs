use serde::{Deserialize, Serialize};

use crate::error::{ArcError, ArcResult};

/// Continuous linear mapping from a data domain to a pixel range.
///
/// Ranges may be inverted (`range_start > range_end`) to model a Y axis that
/// grows downwards in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ArcResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ArcError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ArcResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ArcError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to pixels. Values outside the domain extrapolate.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel back to the domain. A collapsed range maps everything to
    /// the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Extends the domain outwards so both ends land on round tick steps.
    #[must_use]
    pub fn nice(mut self, count: usize) -> Self {
        let (start, end) = nice_domain(self.domain_start, self.domain_end, count);
        self.domain_start = start;
        self.domain_end = end;
        self
    }

    /// Round tick values covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain_start, self.domain_end, count)
    }

    /// Spacing between consecutive ticks produced by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        tick_step(lo, hi, count)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Signed tick increment: positive values are the step itself, negative values
/// encode a step of `1 / -increment` so small steps stay exact.
pub(crate) fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let step = (stop - start) / count;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

pub(crate) fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let increment = tick_increment(start, stop, count);
    if increment < 0.0 {
        1.0 / -increment
    } else {
        increment
    }
}

fn nice_domain(start: f64, end: f64, count: usize) -> (f64, f64) {
    let reversed = end < start;
    let (mut lo, mut hi) = ordered(start, end);
    let mut previous_step: Option<f64> = None;

    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if step == 0.0 || previous_step == Some(step) {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        }
        previous_step = Some(step);
    }

    if reversed { (hi, lo) } else { (lo, hi) }
}

fn linear_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = ordered(start, end);
    if count == 0 || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }

    let increment = tick_increment(lo, hi, count);
    if increment == 0.0 {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    if increment > 0.0 {
        let first = (lo / increment).ceil() as i64;
        let last = (hi / increment).floor() as i64;
        for i in first..=last {
            ticks.push(i as f64 * increment);
        }
    } else {
        let inverse = -increment;
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        for i in first..=last {
            ticks.push(i as f64 / inverse);
        }
    }

    if end < start {
        ticks.reverse();
    }
    ticks
}
