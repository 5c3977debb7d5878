mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod svg_renderer;
mod text_metrics;

pub use frame::{Primitive, RenderFrame};
pub use layer_stack::{CanvasLayerKind, LayerStack};
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, ClipRect, Color, DropShadow, FontWeight, GradientStop, LinePrimitive,
    LineStrokeStyle, LinearGradient, Paint, PathPrimitive, PathStroke, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use svg_renderer::{SvgRenderStats, SvgRenderer, path_data};
pub use text_metrics::{ApproximateTextMetrics, TextMetrics};

use crate::error::ArcResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ArcResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
