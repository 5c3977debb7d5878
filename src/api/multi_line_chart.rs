use tracing::debug;

use crate::animation::ACTIVE_SERIES_FADE_IN;
use crate::core::{LineGeometry, Viewport, project_line};
use crate::dataset::Film;
use crate::error::ArcResult;
use crate::render::{
    CanvasLayerKind, DropShadow, LayeredRenderFrame, PathPrimitive, PathStroke, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

use super::MultiLineChartConfig;
use super::story_axes::{
    StoryScales, push_act_grid, push_beat_labels, push_reference_grid, push_structure_labels,
    push_zero_line,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

const Y_TICKS: [i32; 5] = [-10, -5, 0, 5, 10];
const Y_TICK_OFFSET: f64 = 16.0;

/// Every film on one grid, with one highlighted.
pub struct MultiLineChart<R: Renderer> {
    renderer: R,
    config: MultiLineChartConfig,
    active: Film,
    active_since_ms: Option<f64>,
    layout: Option<MultiLineLayout>,
}

#[derive(Debug, Clone, PartialEq)]
struct MultiLineLayout {
    scales: StoryScales,
    lines: Vec<(Film, LineGeometry)>,
}

impl MultiLineLayout {
    fn compute(config: &MultiLineChartConfig) -> ArcResult<Self> {
        let scales = StoryScales::new(config.viewport, config.margin)?;
        let lines = Film::ALL
            .into_iter()
            .map(|film| (film, project_line(&film.series(), scales.x, scales.y)))
            .collect();
        Ok(Self { scales, lines })
    }
}

impl<R: Renderer> MultiLineChart<R> {
    pub fn new(renderer: R, config: MultiLineChartConfig, active: Film) -> ArcResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            active,
            active_since_ms: None,
            layout: None,
        })
    }

    #[must_use]
    pub fn active_film(&self) -> Film {
        self.active
    }

    /// Highlights `film`; its line fades in again from the next frame.
    pub fn set_active_film(&mut self, film: Film) {
        if film == self.active {
            return;
        }
        debug!(film = film.title(), "compare overlay active film changed");
        self.active = film;
        self.active_since_ms = None;
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
            "compare overlay resized, redrawing"
        );
        self.config = candidate;
        self.layout = None;
        self.active_since_ms = None;
        Ok(())
    }

    /// Pins the fade-in of the highlighted line to `now_ms`.
    pub fn mount_at(&mut self, now_ms: f64) {
        self.active_since_ms = Some(now_ms);
    }

    #[must_use]
    pub fn settle_time_ms(&self) -> f64 {
        if self.config.animate {
            ACTIVE_SERIES_FADE_IN.end_ms()
        } else {
            0.0
        }
    }

    /// Opacity of the highlighted line at `now_ms`.
    #[must_use]
    pub fn active_opacity(&self, now_ms: f64) -> f64 {
        match self.active_since_ms {
            _ if !self.config.animate => 1.0,
            Some(since) => ACTIVE_SERIES_FADE_IN.progress(now_ms - since),
            None => 0.0,
        }
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.active_opacity(now_ms) < 1.0
    }

    pub fn build_layered_frame(&mut self, now_ms: f64) -> ArcResult<LayeredRenderFrame> {
        if self.layout.is_none() {
            self.layout = Some(MultiLineLayout::compute(&self.config)?);
        }
        self.active_since_ms.get_or_insert(now_ms);
        let active_opacity = self.active_opacity(now_ms);

        let palette = self.config.theme.palette();
        let mut frame = LayeredRenderFrame::canonical(self.config.viewport)
            .with_background(self.config.paint_background.then_some(palette.background));
        let Some(layout) = &self.layout else {
            return Ok(frame);
        };
        let scales = layout.scales;

        push_act_grid(&mut frame, scales, palette.grid, |_| 0.3);
        push_reference_grid(&mut frame, scales, palette.reference_grid, |_| 0.3);
        push_zero_line(&mut frame, scales, palette.zero_line, 0.8);
        push_beat_labels(&mut frame, scales, palette.axis_text, |_| 1.0);
        push_structure_labels(&mut frame, scales, palette.axis_text, |_| 1.0);
        for level in Y_TICKS {
            frame.push(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    level.to_string(),
                    scales.plot.left - Y_TICK_OFFSET,
                    scales.y.map(f64::from(level)) + 4.0,
                    12.0,
                    palette.axis_text,
                    TextHAlign::Right,
                ),
            );
        }

        for (film, line) in &layout.lines {
            if *film == self.active || line.path.is_empty() {
                continue;
            }
            frame.push(
                CanvasLayerKind::Series,
                PathPrimitive::stroked(
                    line.path.clone(),
                    PathStroke::new(film.color(), 1.5).with_round_joins(),
                )
                .with_opacity(palette.inactive_series_opacity),
            );
        }
        let active_line = layout
            .lines
            .iter()
            .find(|(film, line)| *film == self.active && !line.path.is_empty());
        if let Some((film, line)) = active_line.filter(|_| active_opacity > 0.0) {
            frame.push(
                CanvasLayerKind::Series,
                PathPrimitive::stroked(
                    line.path.clone(),
                    PathStroke::new(film.color(), 4.0).with_round_joins(),
                )
                .with_shadow(DropShadow {
                    dx: 0.0,
                    dy: 0.0,
                    blur: 3.0,
                    color: film.color(),
                })
                .with_opacity(active_opacity),
            );
        }
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
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
