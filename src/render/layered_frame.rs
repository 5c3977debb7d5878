use crate::core::Viewport;

use super::{CanvasLayerKind, Color, LayerStack, Primitive, RenderFrame};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub primitives: Vec<Primitive>,
}

/// Frame under construction: primitives are bucketed per layer so builders
/// can emit them in any order while paint order stays canonical.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub background: Option<Color>,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: LayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                primitives: Vec::new(),
            })
            .collect();
        Self {
            viewport,
            background: None,
            layers,
        }
    }

    #[must_use]
    pub fn canonical(viewport: Viewport) -> Self {
        Self::from_stack(viewport, LayerStack::canonical())
    }

    #[must_use]
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Appends `primitive` to `kind`. Primitives for layers absent from the
    /// stack are dropped.
    pub fn push(&mut self, kind: CanvasLayerKind, primitive: impl Into<Primitive>) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.primitives.push(primitive.into());
        }
    }

    pub fn extend<I, P>(&mut self, kind: CanvasLayerKind, primitives: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Primitive>,
    {
        if let Some(layer) = self.layer_mut(kind) {
            layer.primitives.extend(primitives.into_iter().map(Into::into));
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        frame.background = self.background;
        for layer in &self.layers {
            frame.primitives.extend(layer.primitives.iter().cloned());
        }
        frame
    }

    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[CanvasLayerKind]) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        frame.background = self.background;
        for layer in &self.layers {
            if !include_layers.contains(&layer.kind) {
                continue;
            }
            frame.primitives.extend(layer.primitives.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
