#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use story_arcs::ArcError;
use story_arcs::api::{LineChart, LineChartConfig};
use story_arcs::core::Viewport;
use story_arcs::dataset::Film;
use story_arcs::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ArcError::InvalidData(_)));
}

#[test]
fn external_context_is_left_balanced_after_a_full_frame() {
    let viewport = Viewport::new(1200, 600);
    let renderer = CairoRenderer::new(1200, 600).expect("renderer");
    let config = LineChartConfig::for_film(viewport, Film::Inception);
    let mut chart = LineChart::for_film(renderer, config, Film::Inception).expect("chart");
    chart.mount_at(0.0);
    let mid_reveal = 1_600.0;

    let surface = ImageSurface::create(Format::ARgb32, 1200, 600).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context, mid_reveal)
        .expect("render on context");

    let stats = chart.renderer().last_stats();
    assert!(stats.paths_drawn >= 2, "area and line paths are drawn");
    assert!(stats.texts_drawn > 0);

    let matrix = context.matrix();
    assert_eq!((matrix.x0(), matrix.y0()), (0.0, 0.0));
    assert_eq!(
        context.clip_extents().expect("clip extents"),
        (0.0, 0.0, 1200.0, 600.0)
    );
    assert!(context.restore().is_err(), "every save was restored");
}
