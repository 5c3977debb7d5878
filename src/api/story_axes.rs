use crate::core::{
    BEAT_FIRST, BEAT_LAST, LinearScale, Margin, PlotArea, VALENCE_MAX, VALENCE_MIN, Viewport,
};
use crate::error::ArcResult;
use crate::render::{
    CanvasLayerKind, Color, FontWeight, LayeredRenderFrame, LinePrimitive, LineStrokeStyle,
    TextHAlign, TextPrimitive,
};

/// Beats where the second, third and fourth acts begin.
pub(super) const ACT_BREAKS: [u32; 3] = [6, 12, 18];
pub(super) const REFERENCE_LEVELS: [f64; 4] = [-10.0, -5.0, 5.0, 10.0];
pub(super) const LABELED_BEATS: [u32; 5] = [1, 6, 12, 18, 24];
pub(super) const STRUCTURE_LABELS: [(u32, &str); 2] = [(6, "ACT II ⟶"), (12, "ACT III ⟶")];

const BEAT_LABEL_OFFSET: f64 = 24.0;
const BEAT_LABEL_SLIDE: f64 = 10.0;
const STRUCTURE_LABEL_OFFSET: f64 = 50.0;

/// Plot rectangle and the fixed beat/valence scales of a story chart.
///
/// Both domains are fixed so every film is drawn on the same grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct StoryScales {
    pub(super) plot: PlotArea,
    pub(super) x: LinearScale,
    pub(super) y: LinearScale,
}

impl StoryScales {
    pub(super) fn new(viewport: Viewport, margin: Margin) -> ArcResult<Self> {
        let plot = PlotArea::from_viewport(viewport, margin)?;
        let x = LinearScale::new(f64::from(BEAT_FIRST), f64::from(BEAT_LAST))?
            .with_range(plot.left, plot.right())?;
        let y = LinearScale::new(VALENCE_MIN, VALENCE_MAX)?.with_range(plot.bottom(), plot.top)?;
        Ok(Self { plot, x, y })
    }

    pub(super) fn beat_x(self, beat: u32) -> f64 {
        self.x.map(f64::from(beat))
    }
}

pub(super) fn push_act_grid(
    frame: &mut LayeredRenderFrame,
    scales: StoryScales,
    color: Color,
    opacity: impl Fn(usize) -> f64,
) {
    for (idx, beat) in ACT_BREAKS.into_iter().enumerate() {
        let alpha = opacity(idx);
        if alpha <= 0.0 {
            continue;
        }
        let x = scales.beat_x(beat);
        frame.push(
            CanvasLayerKind::Grid,
            LinePrimitive::new(x, scales.plot.top, x, scales.plot.bottom(), 1.0, color.fade(alpha))
                .with_style(LineStrokeStyle::dashed(4.0, 4.0)),
        );
    }
}

pub(super) fn push_reference_grid(
    frame: &mut LayeredRenderFrame,
    scales: StoryScales,
    color: Color,
    opacity: impl Fn(usize) -> f64,
) {
    for (idx, level) in REFERENCE_LEVELS.into_iter().enumerate() {
        let alpha = opacity(idx);
        if alpha <= 0.0 {
            continue;
        }
        let y = scales.y.map(level);
        frame.push(
            CanvasLayerKind::Grid,
            LinePrimitive::new(scales.plot.left, y, scales.plot.right(), y, 0.5, color.fade(alpha)),
        );
    }
}

pub(super) fn push_zero_line(
    frame: &mut LayeredRenderFrame,
    scales: StoryScales,
    color: Color,
    opacity: f64,
) {
    if opacity <= 0.0 {
        return;
    }
    let y = scales.y.map(0.0);
    frame.push(
        CanvasLayerKind::Grid,
        LinePrimitive::new(scales.plot.left, y, scales.plot.right(), y, 2.0, color.fade(opacity)),
    );
}

/// Beat numbers under the plot. `progress(i)` drives both the fade and a
/// short upward slide.
pub(super) fn push_beat_labels(
    frame: &mut LayeredRenderFrame,
    scales: StoryScales,
    color: Color,
    progress: impl Fn(usize) -> f64,
) {
    for (idx, beat) in LABELED_BEATS.into_iter().enumerate() {
        let p = progress(idx);
        if p <= 0.0 {
            continue;
        }
        let y = scales.plot.bottom() + BEAT_LABEL_OFFSET + BEAT_LABEL_SLIDE * (1.0 - p);
        frame.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                beat.to_string(),
                scales.beat_x(beat),
                y,
                12.0,
                color.fade(p),
                TextHAlign::Center,
            )
            .with_weight(FontWeight::Medium),
        );
    }
}

pub(super) fn push_structure_labels(
    frame: &mut LayeredRenderFrame,
    scales: StoryScales,
    color: Color,
    opacity: impl Fn(usize) -> f64,
) {
    for (idx, (beat, text)) in STRUCTURE_LABELS.into_iter().enumerate() {
        let alpha = opacity(idx);
        if alpha <= 0.0 {
            continue;
        }
        frame.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                text,
                scales.beat_x(beat),
                scales.plot.bottom() + STRUCTURE_LABEL_OFFSET,
                10.0,
                color.fade(alpha),
                TextHAlign::Center,
            )
            .with_weight(FontWeight::Medium),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::StoryScales;
    use crate::core::{Margin, Viewport};

    #[test]
    fn scales_span_the_plot_with_valence_growing_upwards() {
        let scales = StoryScales::new(Viewport::new(400, 300), Margin::new(40.0, 30.0, 80.0, 140.0))
            .expect("valid viewport");
        assert_eq!(scales.beat_x(1), 140.0);
        assert_eq!(scales.beat_x(24), 370.0);
        assert_eq!(scales.y.map(10.0), 40.0);
        assert_eq!(scales.y.map(-10.0), 220.0);
    }
}
