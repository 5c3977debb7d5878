use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use story_arcs::api::{
    CorrelationChart, CorrelationChartConfig, CorrelationReport, LineChart, LineChartConfig,
};
use story_arcs::core::{LinearScale, PathSampler, Viewport, linear_regression, project_line, rmsd};
use story_arcs::dataset::{BASELINE_ARC, Film};
use story_arcs::render::{NullRenderer, Renderer, SvgRenderer};

fn bench_rmsd_catalog(c: &mut Criterion) {
    c.bench_function("rmsd_catalog", |b| {
        b.iter(|| {
            for film in Film::ALL {
                let _ = rmsd(black_box(film.beats()), black_box(&BASELINE_ARC));
            }
        })
    });
}

fn bench_regression_10k(c: &mut Criterion) {
    let samples: Vec<(f64, f64)> = (0..10_000)
        .map(|i| {
            let x = i as f64 * 0.001;
            (x, 3.0 * x + if i % 2 == 0 { 0.5 } else { -0.5 })
        })
        .collect();

    c.bench_function("regression_10k", |b| {
        b.iter(|| {
            let _ = linear_regression(black_box(&samples)).expect("regression should succeed");
        })
    });
}

fn bench_monotone_path_and_sampler(c: &mut Criterion) {
    let x = LinearScale::new(1.0, 24.0)
        .and_then(|scale| scale.with_range(140.0, 1170.0))
        .expect("valid x scale");
    let y = LinearScale::new(-10.0, 10.0)
        .and_then(|scale| scale.with_range(520.0, 40.0))
        .expect("valid y scale");
    let series = Film::Interstellar.series();

    c.bench_function("monotone_path_and_sampler", |b| {
        b.iter(|| {
            let line = project_line(black_box(&series), x, y);
            let sampler = PathSampler::new(&line.path);
            let _ = sampler.point_at_length(sampler.total_length() * 0.5);
        })
    });
}

fn bench_line_chart_frame(c: &mut Criterion) {
    let config = LineChartConfig::for_film(Viewport::new(1200, 600), Film::Inception);
    let mut chart = LineChart::for_film(NullRenderer::default(), config, Film::Inception)
        .expect("chart init");
    chart.mount_at(0.0);

    c.bench_function("line_chart_frame_mid_reveal", |b| {
        b.iter(|| {
            let _ = chart
                .build_frame(black_box(1_600.0))
                .expect("frame should build");
        })
    });
}

fn bench_correlation_svg(c: &mut Criterion) {
    let report = CorrelationReport::for_catalog();
    let config = CorrelationChartConfig::new(Viewport::new(1000, 600))
        .with_animation(false);
    let mut chart = CorrelationChart::new(SvgRenderer::new(), config, report)
        .expect("chart init");
    let frame = chart.build_frame(0.0).expect("frame");
    let mut renderer = SvgRenderer::new();

    c.bench_function("correlation_svg", |b| {
        b.iter(|| {
            renderer
                .render(black_box(&frame))
                .expect("svg render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_rmsd_catalog,
    bench_regression_10k,
    bench_monotone_path_and_sampler,
    bench_line_chart_frame,
    bench_correlation_svg
);
criterion_main!(benches);
