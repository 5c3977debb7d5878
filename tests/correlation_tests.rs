use approx::assert_relative_eq;
use story_arcs::api::{CorrelationChart, CorrelationChartConfig, CorrelationReport};
use story_arcs::core::Viewport;
use story_arcs::dataset::{BASELINE_ARC, Film};
use story_arcs::render::{CanvasLayerKind, LineStrokeStyle, NullRenderer, Primitive};

fn static_chart() -> CorrelationChart<NullRenderer> {
    let config = CorrelationChartConfig::new(Viewport::new(1000, 600)).with_animation(false);
    CorrelationChart::for_catalog(NullRenderer::default(), config).expect("chart")
}

fn marker(chart: &mut CorrelationChart<NullRenderer>, film: Film) -> (f64, f64) {
    let index = chart
        .report()
        .entries
        .get_index_of(film.title())
        .expect("film in report");
    let layout = chart.layout().expect("layout");
    let vertex = layout.markers[index];
    (vertex.x, vertex.y)
}

#[test]
fn catalog_report_scores_every_film_in_catalog_order() {
    let report = CorrelationReport::for_catalog();
    assert_eq!(report.len(), Film::ALL.len());
    for (entry, film) in report.iter().zip(Film::ALL) {
        assert_eq!(entry.film, film);
        assert!(entry.rmsd >= 0.0);
        assert_relative_eq!(entry.revenue_usd, film.metadata().box_office());
        assert_eq!(entry.color, film.color());
    }
    let r = report.pearson_r.expect("pearson defined for the catalog");
    assert!((-1.0..=1.0).contains(&r));
    assert!(report.fit.is_some());
}

#[test]
fn trend_segment_spans_observed_rmsd_extent() {
    let report = CorrelationReport::compute(&Film::ALL, &BASELINE_ARC);
    let ((x1, y1), (x2, y2)) = report.trend_segment().expect("trend");
    let fit = report.fit.expect("fit");
    assert!(x1 <= x2);
    assert_relative_eq!(x2, report.max_rmsd().expect("max"));
    assert_relative_eq!(y1, fit.predict(x1), epsilon = 1e-6);
    assert_relative_eq!(y2, fit.predict(x2), epsilon = 1e-6);
}

#[test]
fn layout_domains_start_at_zero_and_cover_every_marker() {
    let mut chart = static_chart();
    let max_rmsd = chart.report().max_rmsd().expect("max rmsd");
    let max_revenue = chart.report().max_revenue().expect("max revenue");
    let layout = chart.layout().expect("layout");

    let (x0, x1) = layout.x.domain();
    let (y0, y1) = layout.y.domain();
    assert_relative_eq!(x0, 0.0);
    assert_relative_eq!(y0, 0.0);
    assert!(x1 >= max_rmsd * 1.1);
    assert!(y1 >= max_revenue * 1.1);

    assert_eq!(layout.markers.len(), 12);
    for vertex in &layout.markers {
        assert!(layout.plot.contains(vertex.x, vertex.y));
    }
    assert_relative_eq!(layout.x_ticks[0], 0.0);
    assert_relative_eq!(layout.y_ticks[0], 0.0);
    assert!(layout.x_ticks.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn pointer_over_marker_reports_film_and_tooltip() {
    let mut chart = static_chart();
    chart.build_frame(0.0).expect("first frame");
    let (x, y) = marker(&mut chart, Film::Inception);

    let hit = chart.pointer_move(x, y).expect("move");
    assert_eq!(hit, Some(Film::Inception));

    let entry = *chart.report().get(Film::Inception).expect("entry");
    let frame = chart.build_layered_frame(10.0).expect("frame");
    let tooltip = frame.layer(CanvasLayerKind::Tooltip).expect("tooltip layer");
    let texts: Vec<&str> = tooltip
        .primitives
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts[0], "MOVIE ANALYSIS");
    assert_eq!(texts[1], "Inception");
    assert_eq!(texts[2], format!("RMSD: {:.2}", entry.rmsd));
    assert_eq!(
        texts[3],
        format!("Revenue: ${:.0}M", entry.revenue_usd / 1e6)
    );
}

#[test]
fn pointer_off_markers_hides_tooltip_immediately() {
    let mut chart = static_chart();
    chart.build_frame(0.0).expect("frame");
    let (x, y) = marker(&mut chart, Film::Tenet);
    chart.pointer_move(x, y).expect("move");
    assert_eq!(chart.hovered_film(), Some(Film::Tenet));

    assert_eq!(chart.pointer_move(1.0, 1.0).expect("move"), None);
    let frame = chart.build_frame(20.0).expect("frame");
    assert!(frame.find_text("MOVIE ANALYSIS").is_none());

    chart.pointer_move(x, y).expect("move");
    chart.pointer_leave();
    assert_eq!(chart.hovered_film(), None);
}

#[test]
fn hovered_marker_grows_then_shrinks_back() {
    let mut chart = static_chart();
    chart.build_frame(0.0).expect("frame");
    let index = Film::Memento.index();
    let (x, y) = marker(&mut chart, Film::Memento);

    chart.pointer_move(x, y).expect("move");
    chart.build_frame(100.0).expect("stamp tween");
    assert!(chart.is_animating(150.0));
    let grown = chart.build_frame(400.0).expect("frame");
    let radius = grown.circles().nth(index).expect("circle").radius;
    assert_relative_eq!(radius, 14.0);

    chart.pointer_leave();
    chart.build_frame(500.0).expect("stamp tween");
    let shrunk = chart.build_frame(800.0).expect("frame");
    let radius = shrunk.circles().nth(index).expect("circle").radius;
    assert_relative_eq!(radius, 10.0);
    assert!(!chart.is_animating(800.0));
}

#[test]
fn tooltip_stays_inside_viewport_near_right_edge() {
    let mut chart = static_chart();
    chart.build_frame(0.0).expect("frame");
    let rightmost = chart
        .report()
        .iter()
        .max_by(|a, b| a.rmsd.total_cmp(&b.rmsd))
        .map(|entry| entry.film)
        .expect("entries");
    let (x, y) = marker(&mut chart, rightmost);
    chart.pointer_move(x, y).expect("move");

    let frame = chart.build_layered_frame(1.0).expect("frame");
    let tooltip = frame.layer(CanvasLayerKind::Tooltip).expect("layer");
    let rect = tooltip
        .primitives
        .iter()
        .find_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(*rect),
            _ => None,
        })
        .expect("tooltip box");
    assert!(rect.x >= 0.0);
    assert!(rect.y >= 0.0);
    assert!(rect.x + rect.width <= 1000.0 + 1e-9);
}

#[test]
fn entrance_grows_points_then_fades_labels() {
    let config = CorrelationChartConfig::new(Viewport::new(1000, 600));
    let mut chart =
        CorrelationChart::for_catalog(NullRenderer::default(), config).expect("chart");
    chart.mount_at(0.0);

    let start = chart.build_frame(0.0).expect("frame");
    assert_eq!(start.circles().count(), 0);
    assert!(start.find_text("Inception").is_none());
    assert!(chart.pointer_move(500.0, 300.0).expect("move").is_none());

    let settle = chart.settle_time_ms();
    assert_relative_eq!(settle, 2_600.0);
    let settled = chart.build_frame(settle).expect("frame");
    assert_eq!(settled.circles().count(), 12);
    assert!(settled.circles().all(|circle| (circle.radius - 10.0).abs() < 1e-9));
    let label = settled.find_text("Inception").expect("label");
    assert_relative_eq!(label.color.alpha, 0.7, epsilon = 1e-9);
    assert!(!chart.is_animating(settle));
}

#[test]
fn axes_titles_and_trend_line_are_drawn() {
    let mut chart = static_chart();
    let frame = chart.build_layered_frame(0.0).expect("frame");
    let flat = frame.flatten();

    assert!(flat.find_text("ARC DEVIATION (RMSD)").is_some());
    let y_title = flat.find_text("REVENUE (USD)").expect("y title");
    assert_relative_eq!(y_title.rotation_deg, -90.0);
    assert!(flat.find_text("$0").is_some());

    let trend = frame
        .layer(CanvasLayerKind::Baseline)
        .expect("baseline layer")
        .primitives
        .iter()
        .find_map(|primitive| match primitive {
            Primitive::Line(line) => Some(*line),
            _ => None,
        })
        .expect("trend line");
    assert_eq!(trend.style, LineStrokeStyle::dashed(5.0, 5.0));
    assert!(trend.x1 < trend.x2);
}

#[test]
fn resize_recomputes_layout() {
    let mut chart = static_chart();
    let before = chart.layout().expect("layout").plot;
    chart
        .set_viewport(Viewport::new(800, 500))
        .expect("resize");
    let after = chart.layout().expect("layout").plot;
    assert!(after.width < before.width);
    assert!(chart.set_viewport(Viewport::new(50, 50)).is_err());
}
