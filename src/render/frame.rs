use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ArcError, ArcResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// One draw command of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Circle(CirclePrimitive),
    Path(PathPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ArcResult<()> {
        match self {
            Primitive::Line(line) => line.validate(),
            Primitive::Rect(rect) => rect.validate(),
            Primitive::Text(text) => text.validate(),
            Primitive::Circle(circle) => circle.validate(),
            Primitive::Path(path) => path.validate(),
        }
    }
}

impl From<LinePrimitive> for Primitive {
    fn from(value: LinePrimitive) -> Self {
        Primitive::Line(value)
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(value: RectPrimitive) -> Self {
        Primitive::Rect(value)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(value: TextPrimitive) -> Self {
        Primitive::Text(value)
    }
}

impl From<CirclePrimitive> for Primitive {
    fn from(value: CirclePrimitive) -> Self {
        Primitive::Circle(value)
    }
}

impl From<PathPrimitive> for Primitive {
    fn from(value: PathPrimitive) -> Self {
        Primitive::Path(value)
    }
}

/// Backend-agnostic scene for one chart draw pass, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Option<Color>,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: None,
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn with(mut self, primitive: impl Into<Primitive>) -> Self {
        self.primitives.push(primitive.into());
        self
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn validate(&self) -> ArcResult<()> {
        if !self.viewport.is_valid() {
            return Err(ArcError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(background) = self.background {
            background.validate()?;
        }
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path(path) => Some(path),
            _ => None,
        })
    }

    /// Finds the first text primitive whose content equals `text`.
    #[must_use]
    pub fn find_text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts().find(|primitive| primitive.text == text)
    }
}
