use serde::{Deserialize, Serialize};

/// Named draw layer. Declaration order is back-to-front paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Baseline,
    Series,
    Axis,
    Overlay,
    Tooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Background,
                CanvasLayerKind::Grid,
                CanvasLayerKind::Baseline,
                CanvasLayerKind::Series,
                CanvasLayerKind::Axis,
                CanvasLayerKind::Overlay,
                CanvasLayerKind::Tooltip,
            ],
        }
    }

    /// Stack without pointer-driven layers, used by static thumbnails.
    #[must_use]
    pub fn without_overlays() -> Self {
        let mut stack = Self::canonical();
        stack
            .layers
            .retain(|kind| !matches!(kind, CanvasLayerKind::Overlay | CanvasLayerKind::Tooltip));
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasLayerKind, LayerStack};

    #[test]
    fn canonical_stack_paints_grid_before_series_and_tooltip_last() {
        let stack = LayerStack::canonical();
        assert_eq!(stack.layers.first(), Some(&CanvasLayerKind::Background));
        assert_eq!(stack.layers.last(), Some(&CanvasLayerKind::Tooltip));
        let grid = stack.layers.iter().position(|k| *k == CanvasLayerKind::Grid);
        let series = stack.layers.iter().position(|k| *k == CanvasLayerKind::Series);
        assert!(grid < series);
    }

    #[test]
    fn thumbnail_stack_drops_pointer_layers() {
        let stack = LayerStack::without_overlays();
        assert!(!stack.layers.contains(&CanvasLayerKind::Tooltip));
        assert!(!stack.layers.contains(&CanvasLayerKind::Overlay));
        assert_eq!(stack.layers.len(), 5);
    }
}
