use serde::{Deserialize, Serialize};

use crate::render::{FontWeight, TextMetrics};

/// One line of tooltip text with its font.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine<'a> {
    pub text: &'a str,
    pub font_size_px: f64,
    pub weight: FontWeight,
}

/// Sizing and placement rules for a hover tooltip anchored above a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub height: f64,
    pub padding_x: f64,
    pub corner_radius: f64,
    /// Distance from the anchor to the box top when placed above.
    pub offset_above: f64,
    /// Distance from the anchor to the box top when flipped below.
    pub offset_below: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            height: 60.0,
            padding_x: 12.0,
            corner_radius: 6.0,
            offset_above: 75.0,
            offset_below: 20.0,
        }
    }
}

/// Resolved tooltip rectangle relative to the plot origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub flipped_below: bool,
}

impl TooltipStyle {
    /// Places a box wide enough for the widest line, centered over
    /// `(anchor_x, anchor_y)` and kept inside `[0, plot_width]`.
    ///
    /// When the box is wider than the plot it is pinned to the left edge.
    /// A box that would cross the plot top flips below the anchor.
    #[must_use]
    pub fn layout(
        &self,
        anchor_x: f64,
        anchor_y: f64,
        lines: &[TooltipLine<'_>],
        metrics: &dyn TextMetrics,
        plot_width: f64,
    ) -> TooltipBox {
        let text_width = lines
            .iter()
            .map(|line| metrics.text_width(line.text, line.font_size_px, line.weight))
            .fold(0.0, f64::max);
        let width = text_width + 2.0 * self.padding_x;

        let x = (anchor_x - width / 2.0).min(plot_width - width).max(0.0);
        let above = anchor_y - self.offset_above;
        let (y, flipped_below) = if above < 0.0 {
            (anchor_y + self.offset_below, true)
        } else {
            (above, false)
        };

        TooltipBox {
            x,
            y,
            width,
            height: self.height,
            flipped_below,
        }
    }
}
