use cairo::{Context, Format, ImageSurface, LineCap, LineJoin, LinearGradient as CairoGradient};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::{PathCommand, PathGeometry};
use crate::error::{ArcError, ArcResult};
use crate::render::{
    CirclePrimitive, Color, FontWeight, LinePrimitive, LineStrokeStyle, Paint, PathPrimitive,
    Primitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextMetrics, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub circles_drawn: usize,
    pub paths_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> ArcResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// Drop shadows are approximated by one offset, unblurred pass at the shadow
/// color.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ArcResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ArcError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ArcResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the offscreen surface as PNG.
    pub fn write_png(&self, out: &mut impl std::io::Write) -> ArcResult<()> {
        self.surface
            .write_to_png(out)
            .map_err(|err| ArcError::Backend(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ArcResult<()> {
        frame.validate()?;

        apply_color(context, frame.background.unwrap_or(self.clear_color));
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for primitive in &frame.primitives {
            match primitive {
                Primitive::Line(line) => {
                    draw_line(context, line)?;
                    stats.lines_drawn += 1;
                }
                Primitive::Rect(rect) => {
                    draw_rect(context, rect)?;
                    stats.rects_drawn += 1;
                }
                Primitive::Text(text) => {
                    draw_text(context, text)?;
                    stats.texts_drawn += 1;
                }
                Primitive::Circle(circle) => {
                    draw_circle(context, circle)?;
                    stats.circles_drawn += 1;
                }
                Primitive::Path(path) => {
                    draw_path(context, path)?;
                    stats.paths_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ArcResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ArcResult<()> {
        self.render_with_context(context, frame)
    }
}

impl TextMetrics for CairoRenderer {
    fn text_width(&self, text: &str, font_size_px: f64, weight: FontWeight) -> f64 {
        let Ok(context) = Context::new(&self.surface) else {
            return 0.0;
        };
        let layout = pangocairo::functions::create_layout(&context);
        layout.set_font_description(Some(&font_description(font_size_px, weight)));
        layout.set_text(text);
        let (width, _height) = layout.pixel_size();
        f64::from(width)
    }
}

fn draw_line(context: &Context, line: &LinePrimitive) -> ArcResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    apply_dash(context, line.style, 0.0);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))?;
    context.set_dash(&[], 0.0);
    Ok(())
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> ArcResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    }
    Ok(())
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ArcResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description(text.font_size_px, text.weight)));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    with_saved_state(context, |context| {
        context.translate(text.x, text.y);
        if text.rotation_deg != 0.0 {
            context.rotate(text.rotation_deg.to_radians());
        }
        apply_color(context, text.color);
        context.move_to(dx, -baseline);
        pangocairo::functions::show_layout(context, &layout);
        context
            .status()
            .map_err(|err| map_backend_error("failed to draw text", err))
    })
}

fn draw_circle(context: &Context, circle: &CirclePrimitive) -> ArcResult<()> {
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    apply_color(context, circle.fill_color);
    if circle.stroke_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        apply_color(context, circle.stroke_color);
        context.set_line_width(circle.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
    }
    Ok(())
}

fn draw_path(context: &Context, path: &PathPrimitive) -> ArcResult<()> {
    with_saved_state(context, |context| {
        if let Some(clip) = path.clip {
            context.rectangle(clip.x, clip.y, clip.width, clip.height);
            context.clip();
        }

        if let (Some(shadow), Some(stroke)) = (path.shadow, &path.stroke) {
            with_saved_state(context, |context| {
                context.translate(shadow.dx, shadow.dy);
                append_geometry(context, &path.geometry);
                apply_color(context, shadow.color.fade(path.opacity));
                context.set_line_width(stroke.width + shadow.blur / 2.0);
                apply_dash(context, stroke.style, stroke.dash_offset);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke shadow", err))
            })?;
        }

        if let Some(fill) = &path.fill {
            append_geometry(context, &path.geometry);
            apply_paint(context, fill, &path.geometry, path.opacity)?;
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill path", err))?;
        }
        if let Some(stroke) = &path.stroke {
            append_geometry(context, &path.geometry);
            apply_paint(context, &stroke.paint, &path.geometry, path.opacity)?;
            context.set_line_width(stroke.width);
            if stroke.round_joins {
                context.set_line_cap(LineCap::Round);
                context.set_line_join(LineJoin::Round);
            }
            apply_dash(context, stroke.style, stroke.dash_offset);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))?;
        }
        Ok(())
    })
}

/// Runs `draw` between `save` and `restore`. `restore` runs even when `draw`
/// fails; the first error wins.
fn with_saved_state<F>(context: &Context, draw: F) -> ArcResult<()>
where
    F: FnOnce(&Context) -> ArcResult<()>,
{
    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    let drawn = draw(context);
    let restored = context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err));
    drawn.and(restored)
}

fn append_geometry(context: &Context, geometry: &PathGeometry) {
    context.new_path();
    for command in &geometry.commands {
        match *command {
            PathCommand::MoveTo(v) => context.move_to(v.x, v.y),
            PathCommand::LineTo(v) => context.line_to(v.x, v.y),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                context.curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
            }
            PathCommand::Close => context.close_path(),
        }
    }
}

fn apply_paint(
    context: &Context,
    paint: &Paint,
    geometry: &PathGeometry,
    opacity: f64,
) -> ArcResult<()> {
    match paint {
        Paint::Solid(color) => {
            apply_color(context, color.fade(opacity));
            Ok(())
        }
        Paint::Linear(gradient) => {
            let (left, top, right, bottom) = bounding_box(geometry);
            let width = right - left;
            let height = bottom - top;
            let pattern = CairoGradient::new(
                left + gradient.x1 * width,
                top + gradient.y1 * height,
                left + gradient.x2 * width,
                top + gradient.y2 * height,
            );
            for stop in &gradient.stops {
                let color = stop.color.fade(opacity);
                pattern.add_color_stop_rgba(
                    stop.offset,
                    color.red,
                    color.green,
                    color.blue,
                    color.alpha,
                );
            }
            context
                .set_source(&pattern)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn bounding_box(geometry: &PathGeometry) -> (f64, f64, f64, f64) {
    let mut bounds = (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for command in &geometry.commands {
        let vertices: &[_] = match command {
            PathCommand::MoveTo(v) | PathCommand::LineTo(v) => std::slice::from_ref(v),
            PathCommand::CubicTo { to, .. } => std::slice::from_ref(to),
            PathCommand::Close => &[],
        };
        for v in vertices {
            bounds.0 = bounds.0.min(v.x);
            bounds.1 = bounds.1.min(v.y);
            bounds.2 = bounds.2.max(v.x);
            bounds.3 = bounds.3.max(v.y);
        }
    }
    if bounds.0.is_finite() {
        bounds
    } else {
        (0.0, 0.0, 0.0, 0.0)
    }
}

fn apply_dash(context: &Context, style: LineStrokeStyle, offset: f64) {
    match style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { on, off } => context.set_dash(&[on, off], offset),
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn font_description(font_size_px: f64, weight: FontWeight) -> FontDescription {
    let weight = match weight {
        FontWeight::Normal => "",
        FontWeight::Medium => " Medium",
        FontWeight::Bold => " Bold",
    };
    FontDescription::from_string(&format!("Sans{weight} {font_size_px}px"))
}

fn append_rect_path(context: &Context, rect: &RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ArcError {
    ArcError::Backend(format!("{prefix}: {err}"))
}
