use crate::animation::{DOT_RETURN, HOVER_FADE_OUT, lerp};
use crate::core::PathVertex;
use crate::dataset::stage_label;
use crate::interaction::{HoverPhase, HoverSnap, TooltipLine};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, ClipRect, Color, DropShadow, FontWeight, LayeredRenderFrame,
    LinePrimitive, LineStrokeStyle, PathPrimitive, PathStroke, RectPrimitive, Renderer,
    TextHAlign, TextPrimitive,
};

use super::label_format::format_valence_pill;
use super::line_chart::LineLayout;
use super::story_axes::{
    push_act_grid, push_beat_labels, push_reference_grid, push_structure_labels, push_zero_line,
};
use super::theme::valence_color;
use super::{LineChart, ThemePalette};

const PILL_GROUP_OFFSET: f64 = 15.0;
const PILL_WIDTH: f64 = 110.0;
const PILL_HEIGHT: f64 = 16.0;
const DOT_RADIUS: f64 = 6.0;
const LINE_WIDTH: f64 = 4.0;
const AREA_OPACITY: f64 = 0.8;

impl<R: Renderer> LineChart<R> {
    pub(super) fn compose_frame(
        &self,
        layout: &LineLayout,
        elapsed_ms: f64,
        leave_elapsed_ms: Option<f64>,
    ) -> LayeredRenderFrame {
        let palette = self.config.theme.palette();
        let mut frame = LayeredRenderFrame::canonical(self.config.viewport)
            .with_background(self.config.paint_background.then_some(palette.background));

        self.push_grid(&mut frame, layout, &palette, elapsed_ms);
        self.push_baseline(&mut frame, layout, &palette, elapsed_ms);
        self.push_series(&mut frame, layout, elapsed_ms);
        self.push_axes(&mut frame, layout, &palette, elapsed_ms);
        self.push_hover(&mut frame, layout, &palette, leave_elapsed_ms);
        self.push_dot(&mut frame, layout, elapsed_ms, leave_elapsed_ms);
        frame
    }

    fn push_grid(
        &self,
        frame: &mut LayeredRenderFrame,
        layout: &LineLayout,
        palette: &ThemePalette,
        elapsed_ms: f64,
    ) {
        let timeline = self.timeline();
        let scales = layout.scales;
        push_act_grid(frame, scales, palette.grid, |idx| {
            0.3 * timeline.vertical_grid().progress(idx, elapsed_ms)
        });
        push_reference_grid(frame, scales, palette.reference_grid, |idx| {
            0.4 * timeline.horizontal_grid().progress(idx, elapsed_ms)
        });
        push_zero_line(
            frame,
            scales,
            palette.zero_line,
            0.8 * timeline.zero_line().progress(elapsed_ms),
        );
    }

    fn push_baseline(
        &self,
        frame: &mut LayeredRenderFrame,
        layout: &LineLayout,
        palette: &ThemePalette,
        elapsed_ms: f64,
    ) {
        let opacity = 0.5 * self.timeline().baseline().progress(elapsed_ms);
        if layout.baseline.path.is_empty() || opacity <= 0.0 {
            return;
        }
        let stroke = PathStroke::new(palette.baseline, 2.0)
            .with_style(LineStrokeStyle::dashed(4.0, 6.0))
            .with_round_joins();
        frame.push(
            CanvasLayerKind::Baseline,
            PathPrimitive::stroked(layout.baseline.path.clone(), stroke).with_opacity(opacity),
        );
    }

    fn push_series(&self, frame: &mut LayeredRenderFrame, layout: &LineLayout, elapsed_ms: f64) {
        if layout.area.line.path.is_empty() {
            return;
        }
        let reveal = self.timeline().reveal().progress(elapsed_ms);
        if reveal <= 0.0 {
            return;
        }
        let plot = layout.scales.plot;

        let mut area = PathPrimitive::filled(layout.area.fill.clone(), self.config.area_paint())
            .with_opacity(AREA_OPACITY);
        if reveal < 1.0 {
            area = area.with_clip(ClipRect {
                x: plot.left,
                y: 0.0,
                width: reveal * (plot.width + self.config.margin.left),
                height: f64::from(self.config.viewport.height),
            });
        }
        frame.push(CanvasLayerKind::Series, area);

        let mut stroke =
            PathStroke::new(self.config.stroke_paint(), LINE_WIDTH).with_round_joins();
        if reveal < 1.0 {
            let total = layout.sampler.total_length();
            stroke = stroke.revealed(reveal * total, total);
        }
        let line = PathPrimitive::stroked(layout.area.line.path.clone(), stroke).with_shadow(
            DropShadow {
                dx: 0.0,
                dy: 4.0,
                blur: 4.0,
                color: self.config.line_color.with_alpha(0.4),
            },
        );
        frame.push(CanvasLayerKind::Series, line);
    }

    fn push_axes(
        &self,
        frame: &mut LayeredRenderFrame,
        layout: &LineLayout,
        palette: &ThemePalette,
        elapsed_ms: f64,
    ) {
        let timeline = self.timeline();
        let scales = layout.scales;
        push_beat_labels(frame, scales, palette.axis_text, |idx| {
            timeline.x_labels().progress(idx, elapsed_ms)
        });
        push_structure_labels(frame, scales, palette.axis_text, |idx| {
            timeline.structure_labels().progress(idx, elapsed_ms)
        });

        let group_x = scales.plot.left - PILL_GROUP_OFFSET;
        let pills = timeline.valence_pills();
        for (idx, level) in (-10..=10).enumerate() {
            let p = pills.progress(idx, elapsed_ms);
            if p <= 0.0 {
                continue;
            }
            let y = scales.y.map(f64::from(level));
            let color = valence_color(level);
            let text_color = if level == 0 && !self.config.theme.is_dark() {
                palette.neutral_pill_text
            } else {
                color
            };

            frame.push(
                CanvasLayerKind::Axis,
                RectPrimitive::new(
                    group_x - PILL_WIDTH,
                    y - PILL_HEIGHT / 2.0,
                    PILL_WIDTH,
                    PILL_HEIGHT,
                    color.with_alpha(palette.pill_fill_alpha * p),
                )
                .with_corner_radius(PILL_HEIGHT / 2.0),
            );
            frame.push(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    format_valence_pill(level),
                    group_x - 10.0,
                    y + 3.5,
                    10.0,
                    text_color.fade(p),
                    TextHAlign::Right,
                )
                .with_weight(FontWeight::Bold),
            );
            frame.push(
                CanvasLayerKind::Axis,
                LinePrimitive::new(group_x + 5.0, y, group_x + 15.0, y, 1.0, color.with_alpha(0.3 * p)),
            );
        }
    }

    fn push_hover(
        &self,
        frame: &mut LayeredRenderFrame,
        layout: &LineLayout,
        palette: &ThemePalette,
        leave_elapsed_ms: Option<f64>,
    ) {
        let (snap, opacity) = match self.hover.phase() {
            HoverPhase::Tracking(snap) => (snap, 1.0),
            HoverPhase::Leaving { from, .. } => (
                from,
                1.0 - HOVER_FADE_OUT.progress(leave_elapsed_ms.unwrap_or(0.0)),
            ),
            HoverPhase::Idle => return,
        };
        if opacity <= 0.0 {
            return;
        }
        let plot = layout.scales.plot;
        let guide_x = plot.left + snap.x;
        frame.push(
            CanvasLayerKind::Overlay,
            LinePrimitive::new(guide_x, plot.top, guide_x, plot.bottom(), 1.0, palette.axis_text.fade(opacity))
                .with_style(LineStrokeStyle::dashed(4.0, 4.0)),
        );
        self.push_tooltip(frame, layout, palette, snap, opacity);
    }

    fn push_tooltip(
        &self,
        frame: &mut LayeredRenderFrame,
        layout: &LineLayout,
        palette: &ThemePalette,
        snap: HoverSnap,
        opacity: f64,
    ) {
        let Some(point) = self.series.get(snap.index) else {
            return;
        };
        let story = stage_label(&self.baseline, point.x).to_uppercase();
        let film = point.label.as_ref();
        let lines = [
            TooltipLine {
                text: &story,
                font_size_px: 10.0,
                weight: FontWeight::Bold,
            },
            TooltipLine {
                text: film,
                font_size_px: 12.0,
                weight: FontWeight::Medium,
            },
        ];

        let style = self.config.tooltip;
        let plot = layout.scales.plot;
        let placed = style.layout(snap.x, snap.y, &lines, self.metrics.as_ref(), plot.width);
        let x = plot.left + placed.x;
        let y = plot.top + placed.y;

        frame.push(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(x, y, placed.width, placed.height, palette.tooltip_fill.fade(opacity))
                .with_border(1.0, palette.tooltip_border.fade(opacity))
                .with_corner_radius(style.corner_radius),
        );
        frame.push(
            CanvasLayerKind::Tooltip,
            TextPrimitive::new(
                story,
                x + style.padding_x,
                y + 22.0,
                10.0,
                palette.tooltip_story_text.fade(opacity),
                TextHAlign::Left,
            )
            .with_weight(FontWeight::Bold),
        );
        if !film.is_empty() {
            frame.push(
                CanvasLayerKind::Tooltip,
                TextPrimitive::new(
                    film,
                    x + style.padding_x,
                    y + 42.0,
                    12.0,
                    palette.tooltip_film_text.fade(opacity),
                    TextHAlign::Left,
                )
                .with_weight(FontWeight::Medium),
            );
        }
    }

    fn push_dot(
        &self,
        frame: &mut LayeredRenderFrame,
        layout: &LineLayout,
        elapsed_ms: f64,
        leave_elapsed_ms: Option<f64>,
    ) {
        let Some((position, opacity)) = self.dot_state(layout, elapsed_ms, leave_elapsed_ms) else {
            return;
        };
        if opacity <= 0.0 {
            return;
        }
        frame.push(
            CanvasLayerKind::Overlay,
            CirclePrimitive::new(position.x, position.y, DOT_RADIUS, Color::WHITE.fade(opacity))
                .with_stroke(3.0, self.config.line_color.fade(opacity)),
        );
    }

    /// Dot position (viewport pixels) and opacity for the current phase.
    pub(super) fn dot_state(
        &self,
        layout: &LineLayout,
        elapsed_ms: f64,
        leave_elapsed_ms: Option<f64>,
    ) -> Option<(PathVertex, f64)> {
        let last = layout.last_vertex()?;
        let plot = layout.scales.plot;
        let resting = self.config.resting_dot_opacity;

        match self.hover.phase() {
            HoverPhase::Tracking(snap) => {
                Some((PathVertex::new(plot.left + snap.x, plot.top + snap.y), 1.0))
            }
            HoverPhase::Leaving { from, .. } => {
                let t = DOT_RETURN.progress(leave_elapsed_ms.unwrap_or(0.0));
                let x = lerp(plot.left + from.x, last.x, t);
                let y = lerp(plot.top + from.y, last.y, t);
                Some((PathVertex::new(x, y), lerp(1.0, resting, t)))
            }
            HoverPhase::Idle if self.dot_resting => Some((last, resting)),
            HoverPhase::Idle => {
                let timeline = self.timeline();
                if !timeline.enabled {
                    return Some((last, 1.0));
                }
                let reveal = timeline.reveal();
                if elapsed_ms < reveal.delay_ms {
                    return None;
                }
                let length = reveal.progress(elapsed_ms) * layout.sampler.total_length();
                layout
                    .sampler
                    .point_at_length(length)
                    .map(|vertex| (vertex, 1.0))
            }
        }
    }
}
