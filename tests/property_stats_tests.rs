use proptest::prelude::*;
use story_arcs::core::{linear_regression, pearson_correlation, rmsd};

proptest! {
    #[test]
    fn rmsd_is_symmetric_and_non_negative(
        a in proptest::collection::vec(-10.0f64..=10.0, 1..30),
        b in proptest::collection::vec(-10.0f64..=10.0, 1..30)
    ) {
        let forward = rmsd(&a, &b).expect("non-empty overlap");
        let backward = rmsd(&b, &a).expect("non-empty overlap");
        prop_assert!(forward >= 0.0);
        prop_assert!((forward - backward).abs() <= 1e-12);
        prop_assert!(forward <= 20.0 + 1e-9);
    }

    #[test]
    fn rmsd_of_a_series_with_itself_is_zero(
        a in proptest::collection::vec(-10.0f64..=10.0, 1..30)
    ) {
        prop_assert_eq!(rmsd(&a, &a), Some(0.0));
    }

    #[test]
    fn regression_recovers_generated_lines(
        slope in -1_000.0f64..1_000.0,
        intercept in -1_000.0f64..1_000.0,
        count in 2usize..20
    ) {
        let samples: Vec<(f64, f64)> = (0..count)
            .map(|i| {
                let x = i as f64;
                (x, slope * x + intercept)
            })
            .collect();
        let fit = linear_regression(&samples).expect("distinct x values");
        prop_assert!((fit.slope - slope).abs() <= 1e-6 * (1.0 + slope.abs()));
        prop_assert!((fit.intercept - intercept).abs() <= 1e-6 * (1.0 + intercept.abs() + slope.abs() * count as f64));
    }

    #[test]
    fn pearson_stays_within_unit_interval(
        samples in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..40)
    ) {
        if let Some(r) = pearson_correlation(&samples) {
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }
}
