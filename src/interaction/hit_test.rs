use ordered_float::OrderedFloat;

use crate::core::DataPoint;

/// Index of the beat closest to `x_value` along the x axis only.
///
/// Bisects for the first beat at or after `x_value` (never before index 1)
/// and compares it with its predecessor. An exact midpoint resolves to the
/// earlier beat; values outside the data resolve to the first or last beat.
/// `points` must be sorted by `x`.
#[must_use]
pub fn nearest_beat_index(points: &[DataPoint], x_value: f64) -> Option<usize> {
    if points.is_empty() || x_value.is_nan() {
        return None;
    }
    let right = 1 + points
        .get(1..)
        .map_or(0, |tail| tail.partition_point(|p| f64::from(p.x) < x_value));
    let left = right - 1;
    let Some(next) = points.get(right) else {
        return Some(left);
    };
    let before = x_value - f64::from(points[left].x);
    let after = f64::from(next.x) - x_value;
    Some(if before > after { right } else { left })
}

/// Index of the marker whose center is closest to `(x, y)` and no further
/// than its own `radius` from it. Ties go to the later marker, which is the
/// one painted on top.
#[must_use]
pub fn marker_at(markers: &[(f64, f64, f64)], x: f64, y: f64) -> Option<usize> {
    markers
        .iter()
        .enumerate()
        .filter_map(|(idx, &(cx, cy, radius))| {
            let distance = (cx - x).hypot(cy - y);
            (distance.is_finite() && distance <= radius).then_some((idx, distance))
        })
        .min_by_key(|&(idx, distance)| (OrderedFloat(distance), std::cmp::Reverse(idx)))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::{marker_at, nearest_beat_index};
    use crate::core::DataPoint;

    fn beats(xs: &[u32]) -> Vec<DataPoint> {
        xs.iter().map(|&x| DataPoint::new(x, 0.0, "")).collect()
    }

    #[test]
    fn single_beat_always_wins() {
        let points = beats(&[5]);
        assert_eq!(nearest_beat_index(&points, -100.0), Some(0));
        assert_eq!(nearest_beat_index(&points, 100.0), Some(0));
    }

    #[test]
    fn midpoint_prefers_earlier_beat() {
        let points = beats(&[1, 2, 3]);
        assert_eq!(nearest_beat_index(&points, 1.5), Some(0));
        assert_eq!(nearest_beat_index(&points, 1.51), Some(1));
        assert_eq!(nearest_beat_index(&points, 2.5), Some(1));
    }

    #[test]
    fn empty_series_has_no_nearest_beat() {
        assert_eq!(nearest_beat_index(&[], 3.0), None);
    }

    #[test]
    fn overlapping_markers_resolve_to_the_topmost() {
        let markers = [(10.0, 10.0, 10.0), (10.0, 10.0, 10.0), (40.0, 40.0, 10.0)];
        assert_eq!(marker_at(&markers, 12.0, 10.0), Some(1));
        assert_eq!(marker_at(&markers, 41.0, 41.0), Some(2));
        assert_eq!(marker_at(&markers, 25.0, 25.0), None);
    }
}
