use tracing::{debug, trace};

use crate::animation::{DOT_RETURN, EntranceTimeline};
use crate::core::{
    AreaGeometry, DataPoint, LineGeometry, PathSampler, PathVertex, Viewport, project_area,
    project_line, validate_complete_arc, validate_partial_arc,
};
use crate::dataset::{Film, baseline_series};
use crate::error::ArcResult;
use crate::interaction::{HoverPhase, HoverSnap, HoverState, nearest_beat_index};
use crate::render::{
    ApproximateTextMetrics, LayeredRenderFrame, RenderFrame, Renderer, TextMetrics,
};

use super::LineChartConfig;
use super::story_axes::StoryScales;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Single-film valence chart.
///
/// The chart owns its data, configuration and pointer state and produces one
/// deterministic frame per `now_ms`. The entrance animation starts at the
/// first frame built after construction, a resize or [`restart_animation`].
///
/// [`restart_animation`]: LineChart::restart_animation
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LineChartConfig,
    pub(super) series: Vec<DataPoint>,
    pub(super) baseline: Vec<DataPoint>,
    pub(super) layout: Option<LineLayout>,
    pub(super) mounted_at_ms: Option<f64>,
    pub(super) hover: HoverState,
    /// Set once the pointer has left; the dot then rests at the last beat.
    pub(super) dot_resting: bool,
    pub(super) metrics: Box<dyn TextMetrics>,
}

/// Pixel geometry derived from the viewport and the two series.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct LineLayout {
    pub(super) scales: StoryScales,
    pub(super) area: AreaGeometry,
    pub(super) baseline: LineGeometry,
    pub(super) sampler: PathSampler,
}

impl LineLayout {
    fn compute(
        config: &LineChartConfig,
        series: &[DataPoint],
        baseline: &[DataPoint],
    ) -> ArcResult<Self> {
        let scales = StoryScales::new(config.viewport, config.margin)?;
        let area = project_area(series, scales.x, scales.y, scales.plot.bottom());
        let baseline = project_line(baseline, scales.x, scales.y);
        let sampler = PathSampler::new(&area.line.path);
        Ok(Self {
            scales,
            area,
            baseline,
            sampler,
        })
    }

    pub(super) fn last_vertex(&self) -> Option<PathVertex> {
        self.area.line.vertices.last().copied()
    }
}

impl<R: Renderer> LineChart<R> {
    /// Creates an empty chart. Axes render immediately; the curve appears
    /// once a series is set.
    pub fn new(renderer: R, config: LineChartConfig) -> ArcResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            series: Vec::new(),
            baseline: Vec::new(),
            layout: None,
            mounted_at_ms: None,
            hover: HoverState::default(),
            dot_resting: false,
            metrics: Box::new(ApproximateTextMetrics::default()),
        })
    }

    /// Chart showing `film` against the catalog baseline.
    pub fn for_film(renderer: R, config: LineChartConfig, film: Film) -> ArcResult<Self> {
        let mut chart = Self::new(renderer, config)?;
        chart.set_series(film.series())?;
        chart.set_baseline(baseline_series())?;
        Ok(chart)
    }

    #[must_use]
    pub fn with_text_metrics(mut self, metrics: Box<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &[DataPoint] {
        &self.series
    }

    #[must_use]
    pub fn baseline(&self) -> &[DataPoint] {
        &self.baseline
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Replaces the plotted series. Only complete 24-beat arcs are accepted.
    pub fn set_series(&mut self, points: Vec<DataPoint>) -> ArcResult<()> {
        validate_complete_arc(&points)?;
        debug!(points = points.len(), "set line chart series");
        self.series = points;
        self.invalidate_layout();
        self.hover.reset();
        self.dot_resting = false;
        Ok(())
    }

    /// Switches the plotted film, keeping every host setting except the
    /// film's colors. The entrance animation replays.
    pub fn show_film(&mut self, film: Film) -> ArcResult<()> {
        let config = self.config.recolored_for(film);
        config.validate()?;
        self.set_series(film.series())?;
        debug!(film = film.title(), "line chart film switched");
        self.config = config;
        self.restart_animation();
        Ok(())
    }

    /// Replaces the reference arc. Partial arcs are allowed; missing beats
    /// show a placeholder in the tooltip.
    pub fn set_baseline(&mut self, points: Vec<DataPoint>) -> ArcResult<()> {
        validate_partial_arc(&points)?;
        debug!(points = points.len(), "set line chart baseline");
        self.baseline = points;
        self.invalidate_layout();
        Ok(())
    }

    pub fn clear_baseline(&mut self) {
        self.baseline.clear();
        self.invalidate_layout();
    }

    pub fn set_config(&mut self, config: LineChartConfig) -> ArcResult<()> {
        config.validate()?;
        let resized = config.viewport != self.config.viewport;
        self.config = config;
        self.invalidate_layout();
        if resized {
            self.restart_animation();
        }
        Ok(())
    }

    /// Applies a new container size. Any size change redraws the chart from
    /// scratch, entrance animation included.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ArcResult<()> {
        if viewport == self.config.viewport {
            return Ok(());
        }
        let candidate = self.config.clone().with_viewport(viewport);
        candidate.validate()?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "line chart resized, redrawing"
        );
        self.config = candidate;
        self.invalidate_layout();
        self.restart_animation();
        Ok(())
    }

    /// Pins the entrance animation start to `now_ms`.
    pub fn mount_at(&mut self, now_ms: f64) {
        self.mounted_at_ms = Some(now_ms);
    }

    /// Replays the entrance from the next built frame.
    pub fn restart_animation(&mut self) {
        self.mounted_at_ms = None;
        self.hover.reset();
        self.dot_resting = false;
    }

    /// Tracks the pointer at viewport pixel `(x, y)`.
    ///
    /// Inside the plot the hover snaps to the nearest beat along x; outside
    /// it behaves like a pointer leave.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ArcResult<Option<HoverSnap>> {
        self.ensure_layout()?;
        let snap = self.layout.as_ref().and_then(|layout| {
            let plot = layout.scales.plot;
            if !plot.contains(x, y) {
                return None;
            }
            let index = nearest_beat_index(&self.series, layout.scales.x.invert(x))?;
            let vertex = layout.area.line.vertices.get(index)?;
            Some(HoverSnap {
                index,
                x: vertex.x - plot.left,
                y: vertex.y - plot.top,
            })
        });

        if snap.is_some() {
            self.dot_resting = false;
        } else if self.hover.is_tracking() {
            self.dot_resting = true;
        }
        if self.hover.on_pointer_move(x, y, snap) {
            trace!(index = snap.map(|s| s.index), "line chart hover target changed");
        }
        Ok(snap)
    }

    pub fn pointer_leave(&mut self) {
        if self.hover.is_tracking() {
            trace!("line chart pointer left");
            self.dot_resting = true;
        }
        self.hover.on_pointer_leave();
    }

    #[must_use]
    pub fn hover_snap(&self) -> Option<HoverSnap> {
        self.hover.snap()
    }

    #[must_use]
    pub fn hover_phase(&self) -> HoverPhase {
        self.hover.phase()
    }

    /// Story-stage and film labels for the beat at `index`.
    #[must_use]
    pub fn tooltip_labels(&self, index: usize) -> Option<(&str, &str)> {
        let point = self.series.get(index)?;
        Some((
            crate::dataset::stage_label(&self.baseline, point.x),
            point.label.as_ref(),
        ))
    }

    /// Milliseconds after mount at which the entrance animation is complete.
    #[must_use]
    pub fn settle_time_ms(&self) -> f64 {
        self.timeline().settle_ms()
    }

    /// Whether frames built at `now_ms` still change over time.
    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        let entrance = match self.mounted_at_ms {
            None => self.config.animate,
            Some(mounted) => !self.timeline().is_settled(now_ms - mounted),
        };
        let leaving = match self.hover.phase() {
            HoverPhase::Leaving {
                started_ms: Some(started),
                ..
            } => now_ms - started < DOT_RETURN.end_ms(),
            HoverPhase::Leaving { started_ms: None, .. } => true,
            _ => false,
        };
        entrance || leaving
    }

    /// Materializes the layered frame at `now_ms`.
    pub fn build_layered_frame(&mut self, now_ms: f64) -> ArcResult<LayeredRenderFrame> {
        self.ensure_layout()?;
        let mounted = *self.mounted_at_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - mounted).max(0.0);
        let leave_elapsed = self.hover.leave_elapsed(now_ms);
        self.hover.settle(now_ms, DOT_RETURN.end_ms());

        let frame = match &self.layout {
            Some(layout) => self.compose_frame(layout, elapsed, leave_elapsed),
            None => LayeredRenderFrame::canonical(self.config.viewport),
        };
        Ok(frame)
    }

    pub fn build_frame(&mut self, now_ms: f64) -> ArcResult<RenderFrame> {
        Ok(self.build_layered_frame(now_ms)?.flatten())
    }

    pub fn render(&mut self, now_ms: f64) -> ArcResult<()> {
        let frame = self.build_frame(now_ms)?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context, e.g. from a GTK
    /// draw callback.
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

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn timeline(&self) -> EntranceTimeline {
        self.config.timeline()
    }

    fn invalidate_layout(&mut self) {
        self.layout = None;
    }

    fn ensure_layout(&mut self) -> ArcResult<()> {
        if self.layout.is_none() {
            self.layout = Some(LineLayout::compute(
                &self.config,
                &self.series,
                &self.baseline,
            )?);
        }
        Ok(())
    }
}
