use approx::assert_relative_eq;
use story_arcs::core::{
    DataPoint, LinearScale, Margin, PathCommand, PathSampler, PathVertex, PlotArea, Viewport,
    monotone_x_path, project_area, project_line,
};
use story_arcs::dataset::Film;

fn story_scales() -> (LinearScale, LinearScale) {
    let x = LinearScale::new(1.0, 24.0)
        .and_then(|scale| scale.with_range(140.0, 1170.0))
        .expect("x scale");
    let y = LinearScale::new(-10.0, 10.0)
        .and_then(|scale| scale.with_range(520.0, 40.0))
        .expect("y scale");
    (x, y)
}

#[test]
fn scale_maps_and_inverts_with_inverted_range() {
    let (x, y) = story_scales();
    assert_relative_eq!(x.map(1.0), 140.0);
    assert_relative_eq!(x.map(24.0), 1170.0);
    assert_relative_eq!(y.map(10.0), 40.0);
    assert_relative_eq!(y.map(0.0), 280.0);
    assert_relative_eq!(y.invert(280.0), 0.0);
    assert_relative_eq!(x.invert(x.map(12.5)), 12.5, epsilon = 1e-12);
}

#[test]
fn degenerate_domains_are_rejected() {
    assert!(LinearScale::new(3.0, 3.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    assert!(
        LinearScale::new(0.0, 1.0)
            .expect("scale")
            .with_range(0.0, f64::INFINITY)
            .is_err()
    );
}

#[test]
fn nice_rounds_domain_outwards_and_ticks_are_round() {
    let scale = LinearScale::new(0.13, 9.87).expect("scale").nice(10);
    assert_eq!(scale.domain(), (0.0, 10.0));
    assert_eq!(scale.ticks(5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_relative_eq!(scale.tick_step(5), 2.0);

    let revenue = LinearScale::new(0.0, 1_111_000_000.0).expect("scale").nice(10);
    assert_eq!(revenue.domain(), (0.0, 1_200_000_000.0));
}

#[test]
fn plot_area_respects_margins() {
    let plot = PlotArea::from_viewport(Viewport::new(1200, 600), Margin::new(40.0, 30.0, 80.0, 140.0))
        .expect("plot");
    assert_relative_eq!(plot.left, 140.0);
    assert_relative_eq!(plot.top, 40.0);
    assert_relative_eq!(plot.right(), 1170.0);
    assert_relative_eq!(plot.bottom(), 520.0);
    assert!(plot.contains(600.0, 300.0));
    assert!(!plot.contains(100.0, 300.0));

    let cramped = PlotArea::from_viewport(Viewport::new(100, 100), Margin::new(40.0, 30.0, 80.0, 140.0));
    assert!(cramped.is_err());
}

#[test]
fn monotone_curve_passes_through_every_sample() {
    let samples = [
        PathVertex::new(0.0, 0.0),
        PathVertex::new(10.0, 5.0),
        PathVertex::new(20.0, 5.0),
        PathVertex::new(30.0, -5.0),
    ];
    let path = monotone_x_path(&samples);
    assert_eq!(path.commands.len(), 4);
    assert_eq!(path.commands[0], PathCommand::MoveTo(samples[0]));
    let ends: Vec<PathVertex> = path
        .commands
        .iter()
        .filter_map(|command| match command {
            PathCommand::CubicTo { to, .. } => Some(*to),
            _ => None,
        })
        .collect();
    assert_eq!(ends, samples[1..].to_vec());
}

#[test]
fn flat_pair_of_samples_stays_flat() {
    let samples = [
        PathVertex::new(0.0, 0.0),
        PathVertex::new(10.0, 5.0),
        PathVertex::new(20.0, 5.0),
        PathVertex::new(30.0, 0.0),
    ];
    let path = monotone_x_path(&samples);
    let PathCommand::CubicTo { ctrl1, ctrl2, .. } = path.commands[2] else {
        panic!("expected cubic segment");
    };
    assert_relative_eq!(ctrl1.y, 5.0);
    assert_relative_eq!(ctrl2.y, 5.0);
}

#[test]
fn short_inputs_degrade_gracefully() {
    assert!(monotone_x_path(&[]).is_empty());
    let single = monotone_x_path(&[PathVertex::new(1.0, 2.0)]);
    assert_eq!(single.commands.len(), 1);
    let pair = monotone_x_path(&[PathVertex::new(0.0, 0.0), PathVertex::new(3.0, 4.0)]);
    assert_eq!(pair.commands[1], PathCommand::LineTo(PathVertex::new(3.0, 4.0)));
}

#[test]
fn sampler_measures_straight_segments_exactly() {
    let path = monotone_x_path(&[PathVertex::new(0.0, 0.0), PathVertex::new(3.0, 4.0)]);
    let sampler = PathSampler::new(&path);
    assert_relative_eq!(sampler.total_length(), 5.0);
    let middle = sampler.point_at_length(2.5).expect("point");
    assert_relative_eq!(middle.x, 1.5);
    assert_relative_eq!(middle.y, 2.0);
    let clamped = sampler.point_at_length(100.0).expect("point");
    assert_eq!(clamped, PathVertex::new(3.0, 4.0));
    assert_eq!(sampler.point_at_fraction(0.0), Some(PathVertex::new(0.0, 0.0)));
}

#[test]
fn sampler_ends_on_the_last_beat_of_a_film() {
    let (x, y) = story_scales();
    let line = project_line(&Film::Dunkirk.series(), x, y);
    let sampler = PathSampler::new(&line.path);
    assert!(sampler.total_length() > 1030.0);
    let end = sampler.point_at_fraction(1.0).expect("end");
    let last = *line.vertices.last().expect("vertex");
    assert_relative_eq!(end.x, last.x, epsilon = 1e-9);
    assert_relative_eq!(end.y, last.y, epsilon = 1e-9);
}

#[test]
fn area_fill_closes_against_plot_bottom() {
    let (x, y) = story_scales();
    let points = vec![
        DataPoint::new(1, 0.0, ""),
        DataPoint::new(2, 5.0, ""),
        DataPoint::new(3, -5.0, ""),
    ];
    let area = project_area(&points, x, y, 520.0);
    let tail = &area.fill.commands[area.fill.commands.len() - 3..];
    assert_eq!(tail[0], PathCommand::LineTo(PathVertex::new(x.map(3.0), 520.0)));
    assert_eq!(tail[1], PathCommand::LineTo(PathVertex::new(140.0, 520.0)));
    assert_eq!(tail[2], PathCommand::Close);

    assert!(project_area(&[], x, y, 520.0).fill.is_empty());
}
