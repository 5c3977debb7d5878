use crate::error::ArcResult;
use crate::render::{Primitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_path_count: usize,
    pub last_circle_count: usize,
    pub last_rect_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ArcResult<()> {
        frame.validate()?;
        self.last_line_count = 0;
        self.last_text_count = 0;
        self.last_path_count = 0;
        self.last_circle_count = 0;
        self.last_rect_count = 0;
        for primitive in &frame.primitives {
            match primitive {
                Primitive::Line(_) => self.last_line_count += 1,
                Primitive::Text(_) => self.last_text_count += 1,
                Primitive::Path(_) => self.last_path_count += 1,
                Primitive::Circle(_) => self.last_circle_count += 1,
                Primitive::Rect(_) => self.last_rect_count += 1,
            }
        }
        self.frames_rendered += 1;
        Ok(())
    }
}
