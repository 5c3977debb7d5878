use approx::assert_relative_eq;
use story_arcs::core::{
    DataPoint, extent, linear_regression, pearson_correlation, rmsd,
};
use story_arcs::dataset::{BASELINE_ARC, Film};

#[test]
fn rmsd_of_identical_series_is_zero() {
    for film in Film::ALL {
        assert_eq!(rmsd(film.beats(), film.beats()), Some(0.0), "{film}");
    }
    assert_eq!(rmsd(&BASELINE_ARC, &BASELINE_ARC), Some(0.0));
}

#[test]
fn rmsd_is_symmetric_for_every_film() {
    for film in Film::ALL {
        let forward = rmsd(film.beats(), &BASELINE_ARC).expect("overlap");
        let backward = rmsd(&BASELINE_ARC, film.beats()).expect("overlap");
        assert_relative_eq!(forward, backward);
    }
}

#[test]
fn rmsd_truncates_to_the_shorter_series() {
    let film = Film::Inception.series();
    let truncated: Vec<DataPoint> = film.iter().take(20).cloned().collect();

    let full_prefix = rmsd(&film[..20], &BASELINE_ARC[..20]).expect("overlap");
    let truncated_vs_full = rmsd(&truncated, &BASELINE_ARC).expect("overlap");
    assert_relative_eq!(full_prefix, truncated_vs_full);
}

#[test]
fn matching_beat_contributes_nothing() {
    let film = [DataPoint::new(16, -8.0, "Despair")];
    assert_eq!(rmsd(&film, &BASELINE_ARC[15..16]), Some(0.0));
}

#[test]
fn rmsd_matches_hand_computed_value() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [1.0, 0.0, 3.0, 8.0];
    // (0 + 4 + 0 + 16) / 4 = 5
    assert_relative_eq!(rmsd(&a, &b).expect("overlap"), 5f64.sqrt());
}

#[test]
fn regression_recovers_an_exact_line() {
    let samples: Vec<(f64, f64)> = (0..10)
        .map(|i| {
            let x = f64::from(i) * 0.7 + 1.5;
            (x, -120_000_000.0 * x + 900_000_000.0)
        })
        .collect();
    let fit = linear_regression(&samples).expect("fit");
    assert_relative_eq!(fit.slope, -120_000_000.0, max_relative = 1e-9);
    assert_relative_eq!(fit.intercept, 900_000_000.0, max_relative = 1e-9);
    assert_relative_eq!(
        pearson_correlation(&samples).expect("r"),
        -1.0,
        epsilon = 1e-12
    );
}

#[test]
fn degenerate_inputs_have_no_fit() {
    assert_eq!(linear_regression(&[]), None);
    assert_eq!(linear_regression(&[(1.0, 2.0)]), None);
    assert_eq!(linear_regression(&[(3.0, 1.0), (3.0, 5.0)]), None);
    assert_eq!(pearson_correlation(&[(1.0, 4.0), (2.0, 4.0), (3.0, 4.0)]), None);
}

#[test]
fn extent_skips_non_finite_values() {
    assert_eq!(extent([3.0, f64::NAN, -2.0, 7.5]), Some((-2.0, 7.5)));
    assert_eq!(extent([f64::INFINITY]), None);
    assert_eq!(extent(Vec::<f64>::new()), None);
}
