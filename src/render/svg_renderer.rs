use std::fmt::Write as _;

use crate::core::{PathCommand, PathGeometry};
use crate::error::ArcResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, LineStrokeStyle, LinearGradient, Paint, PathPrimitive,
    Primitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const FONT_FAMILY: &str = "Inter, Segoe UI, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub circles_drawn: usize,
    pub paths_drawn: usize,
    pub defs_written: usize,
}

/// Serializes frames into standalone SVG documents.
///
/// Gradients, clips and shadow filters are emitted as `<defs>` next to the
/// element that references them, with ids unique within one document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    next_def_id: usize,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    /// Renders `frame` with a fresh renderer and returns the document.
    pub fn render_to_string(frame: &RenderFrame) -> ArcResult<String> {
        let mut renderer = Self::new();
        renderer.render(frame)?;
        Ok(renderer.into_document())
    }

    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{}", self.next_def_id);
        self.next_def_id += 1;
        self.last_stats.defs_written += 1;
        id
    }

    fn write_line(&mut self, svg: &mut String, line: &LinePrimitive) {
        let _ = writeln!(
            svg,
            "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='{}' stroke-width='{}'{}/>",
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            line.color.to_css(),
            fmt_num(line.stroke_width),
            dash_attrs(line.style, 0.0)
        );
        self.last_stats.lines_drawn += 1;
    }

    fn write_rect(&mut self, svg: &mut String, rect: &RectPrimitive) {
        let mut attrs = String::new();
        if rect.corner_radius > 0.0 {
            let _ = write!(attrs, " rx='{}'", fmt_num(rect.corner_radius));
        }
        if rect.border_width > 0.0 {
            let _ = write!(
                attrs,
                " stroke='{}' stroke-width='{}'",
                rect.border_color.to_css(),
                fmt_num(rect.border_width)
            );
        }
        let _ = writeln!(
            svg,
            "  <rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' fill='{}'{attrs}/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            rect.fill_color.to_css()
        );
        self.last_stats.rects_drawn += 1;
    }

    fn write_text(&mut self, svg: &mut String, text: &TextPrimitive) {
        let anchor = match text.h_align {
            TextHAlign::Left => "",
            TextHAlign::Center => " text-anchor='middle'",
            TextHAlign::Right => " text-anchor='end'",
        };
        let rotation = if text.rotation_deg == 0.0 {
            String::new()
        } else {
            format!(
                " transform='rotate({} {:.2} {:.2})'",
                fmt_num(text.rotation_deg),
                text.x,
                text.y
            )
        };
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' fill='{}' font-family='{FONT_FAMILY}' font-size='{}' font-weight='{}'{anchor}{rotation}>{}</text>",
            text.x,
            text.y,
            text.color.to_css(),
            fmt_num(text.font_size_px),
            text.weight.css_value(),
            escape_text(&text.text)
        );
        self.last_stats.texts_drawn += 1;
    }

    fn write_circle(&mut self, svg: &mut String, circle: &CirclePrimitive) {
        let stroke = if circle.stroke_width > 0.0 {
            format!(
                " stroke='{}' stroke-width='{}'",
                circle.stroke_color.to_css(),
                fmt_num(circle.stroke_width)
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            svg,
            "  <circle cx='{:.2}' cy='{:.2}' r='{:.2}' fill='{}'{stroke}/>",
            circle.cx,
            circle.cy,
            circle.radius,
            circle.fill_color.to_css()
        );
        self.last_stats.circles_drawn += 1;
    }

    fn write_path(&mut self, svg: &mut String, path: &PathPrimitive) {
        let mut attrs = String::new();

        match &path.fill {
            Some(paint) => {
                let fill = self.paint_ref(svg, paint);
                let _ = write!(attrs, " fill='{fill}'");
            }
            None => attrs.push_str(" fill='none'"),
        }
        if let Some(stroke) = &path.stroke {
            let paint = self.paint_ref(svg, &stroke.paint);
            let _ = write!(
                attrs,
                " stroke='{paint}' stroke-width='{}'{}",
                fmt_num(stroke.width),
                dash_attrs(stroke.style, stroke.dash_offset)
            );
            if stroke.round_joins {
                attrs.push_str(" stroke-linecap='round' stroke-linejoin='round'");
            }
        }
        if let Some(clip) = path.clip {
            let id = self.next_id("clip");
            let _ = writeln!(
                svg,
                "  <defs><clipPath id='{id}'><rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}'/></clipPath></defs>",
                clip.x, clip.y, clip.width, clip.height
            );
            let _ = write!(attrs, " clip-path='url(#{id})'");
        }
        if let Some(shadow) = path.shadow {
            let id = self.next_id("shadow");
            let _ = writeln!(
                svg,
                "  <defs><filter id='{id}' x='-20%' y='-20%' width='140%' height='140%'><feDropShadow dx='{}' dy='{}' stdDeviation='{}' flood-color='{}' flood-opacity='{:.3}'/></filter></defs>",
                fmt_num(shadow.dx),
                fmt_num(shadow.dy),
                fmt_num(shadow.blur),
                shadow.color.with_alpha(1.0).to_hex(),
                shadow.color.alpha
            );
            let _ = write!(attrs, " filter='url(#{id})'");
        }
        if path.opacity < 1.0 {
            let _ = write!(attrs, " opacity='{:.3}'", path.opacity);
        }

        let _ = writeln!(svg, "  <path d='{}'{attrs}/>", path_data(&path.geometry));
        self.last_stats.paths_drawn += 1;
    }

    fn paint_ref(&mut self, svg: &mut String, paint: &Paint) -> String {
        match paint {
            Paint::Solid(color) => color.to_css(),
            Paint::Linear(gradient) => {
                let id = self.next_id("grad");
                write_gradient(svg, &id, gradient);
                format!("url(#{id})")
            }
        }
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ArcResult<()> {
        frame.validate()?;
        self.next_def_id = 0;
        self.last_stats = SvgRenderStats::default();

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}' role='img'>"
        );
        if let Some(background) = frame.background {
            let _ = writeln!(
                svg,
                "  <rect width='{width}' height='{height}' fill='{}'/>",
                background.to_css()
            );
        }

        for primitive in &frame.primitives {
            match primitive {
                Primitive::Line(line) => self.write_line(&mut svg, line),
                Primitive::Rect(rect) => self.write_rect(&mut svg, rect),
                Primitive::Text(text) => self.write_text(&mut svg, text),
                Primitive::Circle(circle) => self.write_circle(&mut svg, circle),
                Primitive::Path(path) => self.write_path(&mut svg, path),
            }
        }
        svg.push_str("</svg>\n");

        self.document = svg;
        Ok(())
    }
}

fn write_gradient(svg: &mut String, id: &str, gradient: &LinearGradient) {
    let _ = writeln!(
        svg,
        "  <defs><linearGradient id='{id}' x1='{}' y1='{}' x2='{}' y2='{}'>",
        fmt_num(gradient.x1),
        fmt_num(gradient.y1),
        fmt_num(gradient.x2),
        fmt_num(gradient.y2)
    );
    for stop in &gradient.stops {
        let _ = writeln!(
            svg,
            "    <stop offset='{:.1}%' stop-color='{}' stop-opacity='{:.3}'/>",
            stop.offset * 100.0,
            stop.color.with_alpha(1.0).to_hex(),
            stop.color.alpha
        );
    }
    let _ = writeln!(svg, "  </linearGradient></defs>");
}

fn dash_attrs(style: LineStrokeStyle, offset: f64) -> String {
    match style {
        LineStrokeStyle::Solid => String::new(),
        LineStrokeStyle::Dashed { on, off } => {
            let mut attrs = format!(" stroke-dasharray='{} {}'", fmt_num(on), fmt_num(off));
            if offset != 0.0 {
                let _ = write!(attrs, " stroke-dashoffset='{}'", fmt_num(offset));
            }
            attrs
        }
    }
}

/// SVG path data (`d` attribute) for `geometry`.
#[must_use]
pub fn path_data(geometry: &PathGeometry) -> String {
    let mut data = String::new();
    for command in &geometry.commands {
        if !data.is_empty() {
            data.push(' ');
        }
        let _ = match *command {
            PathCommand::MoveTo(v) => write!(data, "M{:.2},{:.2}", v.x, v.y),
            PathCommand::LineTo(v) => write!(data, "L{:.2},{:.2}", v.x, v.y),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => write!(
                data,
                "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            PathCommand::Close => write!(data, "Z"),
        };
    }
    data
}

fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::{escape_text, fmt_num, path_data};
    use crate::core::PathGeometry;

    #[test]
    fn path_data_uses_absolute_commands() {
        let mut path = PathGeometry::new();
        path.move_to(1.0, 2.0);
        path.line_to(3.5, 4.25);
        path.close();
        assert_eq!(path_data(&path), "M1.00,2.00 L3.50,4.25 Z");
    }

    #[test]
    fn numbers_and_text_are_svg_safe() {
        assert_eq!(fmt_num(4.0), "4");
        assert_eq!(fmt_num(0.5), "0.50");
        assert_eq!(escape_text("Q&A <now>"), "Q&amp;A &lt;now&gt;");
    }
}
