use proptest::prelude::*;
use story_arcs::dataset::Film;
use story_arcs::interaction::{marker_at, nearest_beat_index};

proptest! {
    #[test]
    fn nearest_beat_is_never_beaten_by_another_beat(x in -5.0f64..30.0) {
        let series = Film::Interstellar.series();
        let index = nearest_beat_index(&series, x).expect("non-empty series");
        prop_assert!(index < series.len());
        let best = (f64::from(series[index].x) - x).abs();
        for point in &series {
            prop_assert!(best <= (f64::from(point.x) - x).abs() + 1e-12);
        }
    }

    #[test]
    fn nearest_beat_clamps_outside_the_data(offset in 0.0f64..1e6) {
        let series = Film::Tenet.series();
        prop_assert_eq!(nearest_beat_index(&series, 1.0 - offset), Some(0));
        prop_assert_eq!(nearest_beat_index(&series, 24.0 + offset), Some(23));
    }

    #[test]
    fn marker_hit_lies_within_its_radius(
        markers in prop::collection::vec((0.0f64..200.0, 0.0f64..200.0, 1.0f64..20.0), 1..16),
        x in 0.0f64..200.0,
        y in 0.0f64..200.0,
    ) {
        match marker_at(&markers, x, y) {
            Some(index) => {
                let (cx, cy, radius) = markers[index];
                let distance = (cx - x).hypot(cy - y);
                prop_assert!(distance <= radius);
                for &(ox, oy, other_radius) in &markers {
                    let other = (ox - x).hypot(oy - y);
                    if other <= other_radius {
                        prop_assert!(distance <= other);
                    }
                }
            }
            None => {
                for &(cx, cy, radius) in &markers {
                    prop_assert!((cx - x).hypot(cy - y) > radius);
                }
            }
        }
    }

    #[test]
    fn marker_center_always_hits(
        markers in prop::collection::vec((0.0f64..200.0, 0.0f64..200.0, 1.0f64..20.0), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let (cx, cy, _) = markers[pick.index(markers.len())];
        prop_assert!(marker_at(&markers, cx, cy).is_some());
    }
}
