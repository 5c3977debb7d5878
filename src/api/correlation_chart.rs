use tracing::{debug, trace};

use crate::animation::{SCATTER_HOVER_RESIZE, SCATTER_LABEL_FADE, SCATTER_POINT_GROW, lerp};
use crate::core::{LinearScale, PathVertex, PlotArea, Viewport};
use crate::dataset::Film;
use crate::error::ArcResult;
use crate::interaction::marker_at;
use crate::render::{
    ApproximateTextMetrics, CanvasLayerKind, CirclePrimitive, Color, FontWeight,
    LayeredRenderFrame, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextMetrics, TextPrimitive,
};

use super::label_format::{
    format_linear_tick, format_revenue_axis, format_revenue_millions, format_rmsd,
};
use super::{CorrelationChartConfig, CorrelationReport};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

const POINT_RADIUS: f64 = 10.0;
const HOVER_RADIUS: f64 = 14.0;
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 15.0;
const AXIS_INK: Color = Color::rgb8(0x94, 0xa3, 0xb8);
const TICK_INK: Color = Color::rgb8(0xe2, 0xe8, 0xf0);
const LABEL_INK: Color = Color::rgb8(0x64, 0x74, 0x8b);
const TREND_INK: Color = Color::rgb8(0x63, 0x66, 0xf1);
const TOOLTIP_FILL: Color = Color::rgba(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0, 0.95);
const TOOLTIP_PADDING_X: f64 = 14.0;
const TOOLTIP_HEIGHT: f64 = 92.0;
const TOOLTIP_OFFSET_X: f64 = 20.0;
const TOOLTIP_OFFSET_Y: f64 = 80.0;
const FALLBACK_MAX_RMSD: f64 = 10.0;
const FALLBACK_MAX_REVENUE: f64 = 1e9;

/// Scatter plot of arc deviation against box office with a trend line.
pub struct CorrelationChart<R: Renderer> {
    renderer: R,
    config: CorrelationChartConfig,
    report: CorrelationReport,
    layout: Option<ScatterLayout>,
    mounted_at_ms: Option<f64>,
    hovered: Option<usize>,
    cursor: (f64, f64),
    radius_tweens: Vec<Option<RadiusTween>>,
    last_radius: Vec<f64>,
    metrics: Box<dyn TextMetrics>,
}

/// Axis scales, ticks and marker centers for the current viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub plot: PlotArea,
    pub x: LinearScale,
    pub y: LinearScale,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub x_tick_step: f64,
    pub markers: Vec<PathVertex>,
}

impl ScatterLayout {
    fn compute(config: &CorrelationChartConfig, report: &CorrelationReport) -> ArcResult<Self> {
        let plot = PlotArea::from_viewport(config.viewport, config.margin)?;
        let max_rmsd = report
            .max_rmsd()
            .filter(|v| *v > 0.0)
            .unwrap_or(FALLBACK_MAX_RMSD);
        let max_revenue = report
            .max_revenue()
            .filter(|v| *v > 0.0)
            .unwrap_or(FALLBACK_MAX_REVENUE);

        let x = LinearScale::new(0.0, max_rmsd * config.headroom)?
            .nice(10)
            .with_range(plot.left, plot.right())?;
        let y = LinearScale::new(0.0, max_revenue * config.headroom)?
            .nice(10)
            .with_range(plot.bottom(), plot.top)?;

        let markers = report
            .iter()
            .map(|entry| PathVertex::new(x.map(entry.rmsd), y.map(entry.revenue_usd)))
            .collect();

        Ok(Self {
            plot,
            x,
            y,
            x_ticks: x.ticks(config.x_tick_count),
            y_ticks: y.ticks(config.y_tick_count),
            x_tick_step: x.tick_step(config.x_tick_count),
            markers,
        })
    }
}

/// Radius transition of one marker after a hover change.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RadiusTween {
    from: f64,
    to: f64,
    started_ms: Option<f64>,
}

impl<R: Renderer> CorrelationChart<R> {
    pub fn new(
        renderer: R,
        config: CorrelationChartConfig,
        report: CorrelationReport,
    ) -> ArcResult<Self> {
        config.validate()?;
        let count = report.len();
        let initial_radius = if config.animate { 0.0 } else { POINT_RADIUS };
        Ok(Self {
            renderer,
            config,
            report,
            layout: None,
            mounted_at_ms: None,
            hovered: None,
            cursor: (0.0, 0.0),
            radius_tweens: vec![None; count],
            last_radius: vec![initial_radius; count],
            metrics: Box::new(ApproximateTextMetrics::default()),
        })
    }

    /// Chart over every catalog film.
    pub fn for_catalog(renderer: R, config: CorrelationChartConfig) -> ArcResult<Self> {
        Self::new(renderer, config, CorrelationReport::for_catalog())
    }

    #[must_use]
    pub fn with_text_metrics(mut self, metrics: Box<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn report(&self) -> &CorrelationReport {
        &self.report
    }

    #[must_use]
    pub fn config(&self) -> &CorrelationChartConfig {
        &self.config
    }

    /// Layout for the current viewport, computing it if needed.
    pub fn layout(&mut self) -> ArcResult<&ScatterLayout> {
        let layout = match self.layout.take() {
            Some(layout) => layout,
            None => ScatterLayout::compute(&self.config, &self.report)?,
        };
        Ok(self.layout.insert(layout))
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ArcResult<()> {
        if viewport == self.config.viewport {
            return Ok(());
        }
        let candidate = self.config.with_viewport(viewport);
        candidate.validate()?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "correlation chart resized, redrawing"
        );
        self.config = candidate;
        self.layout = None;
        self.restart_animation();
        Ok(())
    }

    pub fn mount_at(&mut self, now_ms: f64) {
        self.mounted_at_ms = Some(now_ms);
    }

    pub fn restart_animation(&mut self) {
        let initial_radius = if self.config.animate { 0.0 } else { POINT_RADIUS };
        self.mounted_at_ms = None;
        self.hovered = None;
        self.radius_tweens.fill(None);
        self.last_radius.fill(initial_radius);
    }

    /// Hover at viewport pixel `(x, y)`; returns the film under the pointer.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ArcResult<Option<Film>> {
        self.layout()?;
        let markers: Vec<(f64, f64, f64)> = self
            .layout
            .iter()
            .flat_map(|layout| layout.markers.iter())
            .zip(&self.last_radius)
            .map(|(center, radius)| (center.x, center.y, *radius))
            .collect();
        self.cursor = (x, y);
        let hit = marker_at(&markers, x, y);
        if hit != self.hovered {
            trace!(index = hit, "correlation hover target changed");
            if let Some(previous) = self.hovered {
                self.start_radius_tween(previous, POINT_RADIUS);
            }
            if let Some(next) = hit {
                self.start_radius_tween(next, HOVER_RADIUS);
            }
            self.hovered = hit;
        }
        Ok(self.hovered_film())
    }

    pub fn pointer_leave(&mut self) {
        if let Some(previous) = self.hovered.take() {
            self.start_radius_tween(previous, POINT_RADIUS);
        }
    }

    #[must_use]
    pub fn hovered_film(&self) -> Option<Film> {
        let index = self.hovered?;
        self.report.iter().nth(index).map(|entry| entry.film)
    }

    /// Whether frames built at `now_ms` still change over time.
    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        let count = self.report.len();
        let entrance = match self.mounted_at_ms {
            None => self.config.animate,
            Some(mounted) => {
                self.config.animate && now_ms - mounted < SCATTER_LABEL_FADE.end_ms(count)
            }
        };
        let resizing = self.radius_tweens.iter().flatten().any(|tween| {
            tween
                .started_ms
                .is_none_or(|started| now_ms - started < SCATTER_HOVER_RESIZE.end_ms())
        });
        entrance || resizing
    }

    #[must_use]
    pub fn settle_time_ms(&self) -> f64 {
        if self.config.animate {
            SCATTER_LABEL_FADE.end_ms(self.report.len())
        } else {
            0.0
        }
    }

    pub fn build_layered_frame(&mut self, now_ms: f64) -> ArcResult<LayeredRenderFrame> {
        self.layout()?;
        let mounted = *self.mounted_at_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - mounted).max(0.0);
        self.sample_radii(now_ms, elapsed);

        let Some(layout) = &self.layout else {
            return Ok(LayeredRenderFrame::canonical(self.config.viewport));
        };
        let palette = self.config.theme.palette();
        let mut frame = LayeredRenderFrame::canonical(self.config.viewport)
            .with_background(self.config.paint_background.then_some(palette.background));

        push_scatter_grid(&mut frame, layout);
        push_scatter_axes(&mut frame, layout);
        if let Some(((x1, y1), (x2, y2))) = self.report.trend_segment() {
            frame.push(
                CanvasLayerKind::Baseline,
                LinePrimitive::new(
                    layout.x.map(x1),
                    layout.y.map(y1),
                    layout.x.map(x2),
                    layout.y.map(y2),
                    2.0,
                    TREND_INK.with_alpha(0.4),
                )
                .with_style(LineStrokeStyle::dashed(5.0, 5.0)),
            );
        }
        self.push_points(&mut frame, layout, elapsed);
        self.push_tooltip(&mut frame);
        Ok(frame)
    }

    pub fn build_frame(&mut self, now_ms: f64) -> ArcResult<RenderFrame> {
        Ok(self.build_layered_frame(now_ms)?.flatten())
    }

    pub fn render(&mut self, now_ms: f64) -> ArcResult<()> {
        let frame = self.build_frame(now_ms)?;
        self.renderer.render(&frame)
    }

    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        now_ms: f64,
    ) -> ArcResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame(now_ms)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn start_radius_tween(&mut self, index: usize, to: f64) {
        let from = self.last_radius.get(index).copied().unwrap_or(POINT_RADIUS);
        if let Some(slot) = self.radius_tweens.get_mut(index) {
            *slot = Some(RadiusTween {
                from,
                to,
                started_ms: None,
            });
        }
    }

    fn sample_radii(&mut self, now_ms: f64, elapsed_ms: f64) {
        let animate = self.config.animate;
        for (idx, (tween, radius)) in self
            .radius_tweens
            .iter_mut()
            .zip(self.last_radius.iter_mut())
            .enumerate()
        {
            *radius = match tween {
                Some(tween) => {
                    let started = *tween.started_ms.get_or_insert(now_ms);
                    lerp(
                        tween.from,
                        tween.to,
                        SCATTER_HOVER_RESIZE.progress(now_ms - started),
                    )
                }
                None if animate => POINT_RADIUS * SCATTER_POINT_GROW.progress(idx, elapsed_ms),
                None => POINT_RADIUS,
            };
        }
    }

    fn push_points(&self, frame: &mut LayeredRenderFrame, layout: &ScatterLayout, elapsed_ms: f64) {
        for (idx, ((entry, center), radius)) in self
            .report
            .iter()
            .zip(&layout.markers)
            .zip(&self.last_radius)
            .enumerate()
        {
            if *radius > 0.0 {
                frame.push(
                    CanvasLayerKind::Series,
                    CirclePrimitive::new(center.x, center.y, *radius, entry.color)
                        .with_stroke(3.0, Color::WHITE),
                );
            }

            let label_opacity = if self.config.animate {
                0.7 * SCATTER_LABEL_FADE.progress(idx, elapsed_ms)
            } else {
                0.7
            };
            if label_opacity > 0.0 {
                frame.push(
                    CanvasLayerKind::Series,
                    TextPrimitive::new(
                        entry.film.title(),
                        center.x + 14.0,
                        center.y + 4.0,
                        9.0,
                        LABEL_INK.with_alpha(label_opacity),
                        TextHAlign::Left,
                    )
                    .with_weight(FontWeight::Bold),
                );
            }
        }
    }

    fn push_tooltip(&self, frame: &mut LayeredRenderFrame) {
        let Some(entry) = self.hovered.and_then(|idx| self.report.iter().nth(idx)) else {
            return;
        };
        let rmsd_line = format!("RMSD: {}", format_rmsd(entry.rmsd));
        let revenue_line = format!("Revenue: {}", format_revenue_millions(entry.revenue_usd));
        let lines = [
            ("MOVIE ANALYSIS", 10.0, FontWeight::Bold, 22.0, 0.6),
            (entry.film.title(), 14.0, FontWeight::Bold, 42.0, 1.0),
            (rmsd_line.as_str(), 12.0, FontWeight::Normal, 62.0, 0.9),
            (revenue_line.as_str(), 12.0, FontWeight::Normal, 80.0, 0.9),
        ];

        let text_width = lines
            .iter()
            .map(|(text, size, weight, _, _)| self.metrics.text_width(text, *size, *weight))
            .fold(0.0, f64::max);
        let width = text_width + 2.0 * TOOLTIP_PADDING_X;
        let viewport_width = f64::from(self.config.viewport.width);
        let x = (self.cursor.0 + TOOLTIP_OFFSET_X)
            .min(viewport_width - width)
            .max(0.0);
        let y = (self.cursor.1 - TOOLTIP_OFFSET_Y).max(0.0);

        frame.push(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(x, y, width, TOOLTIP_HEIGHT, TOOLTIP_FILL).with_corner_radius(12.0),
        );
        for (text, size, weight, baseline, alpha) in lines {
            frame.push(
                CanvasLayerKind::Tooltip,
                TextPrimitive::new(
                    text,
                    x + TOOLTIP_PADDING_X,
                    y + baseline,
                    size,
                    Color::WHITE.with_alpha(alpha),
                    TextHAlign::Left,
                )
                .with_weight(weight),
            );
        }
    }
}

fn push_scatter_grid(frame: &mut LayeredRenderFrame, layout: &ScatterLayout) {
    let plot = layout.plot;
    let ink = TICK_INK.with_alpha(0.05);
    for &tick in &layout.x_ticks {
        let x = layout.x.map(tick);
        frame.push(
            CanvasLayerKind::Grid,
            LinePrimitive::new(x, plot.top, x, plot.bottom(), 1.0, ink),
        );
    }
    for &tick in &layout.y_ticks {
        let y = layout.y.map(tick);
        frame.push(
            CanvasLayerKind::Grid,
            LinePrimitive::new(plot.left, y, plot.right(), y, 1.0, ink),
        );
    }
}

fn push_scatter_axes(frame: &mut LayeredRenderFrame, layout: &ScatterLayout) {
    let plot = layout.plot;
    for &tick in &layout.x_ticks {
        let x = layout.x.map(tick);
        frame.push(
            CanvasLayerKind::Axis,
            LinePrimitive::new(x, plot.bottom(), x, plot.bottom() + TICK_SIZE, 1.0, TICK_INK),
        );
        frame.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_linear_tick(tick, layout.x_tick_step),
                x,
                plot.bottom() + TICK_SIZE + TICK_PADDING + 7.0,
                10.0,
                AXIS_INK,
                TextHAlign::Center,
            )
            .with_weight(FontWeight::Bold),
        );
    }
    for &tick in &layout.y_ticks {
        let y = layout.y.map(tick);
        frame.push(
            CanvasLayerKind::Axis,
            LinePrimitive::new(plot.left - TICK_SIZE, y, plot.left, y, 1.0, TICK_INK),
        );
        frame.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_revenue_axis(tick),
                plot.left - TICK_SIZE - TICK_PADDING,
                y + 3.2,
                10.0,
                AXIS_INK,
                TextHAlign::Right,
            )
            .with_weight(FontWeight::Bold),
        );
    }

    frame.push(
        CanvasLayerKind::Axis,
        TextPrimitive::new(
            "ARC DEVIATION (RMSD)",
            plot.left + plot.width / 2.0,
            plot.bottom() + 60.0,
            11.0,
            AXIS_INK,
            TextHAlign::Center,
        )
        .with_weight(FontWeight::Bold),
    );
    frame.push(
        CanvasLayerKind::Axis,
        TextPrimitive::new(
            "REVENUE (USD)",
            plot.left - 75.0,
            plot.top + plot.height / 2.0,
            11.0,
            AXIS_INK,
            TextHAlign::Center,
        )
        .with_weight(FontWeight::Bold)
        .with_rotation(-90.0),
    );
}
