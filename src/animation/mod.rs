//! Time-based animation helpers.
//!
//! Nothing here owns a clock. Chart engines stamp a start instant and sample
//! tweens with the elapsed milliseconds of the frame being built, which keeps
//! every frame reproducible from `(state, now_ms)`.

mod easing;
mod spring;
mod timeline;
mod tween;

pub use easing::Easing;
pub use spring::{SpringConfig, SpringValue};
pub use timeline::{
    ACTIVE_SERIES_FADE_IN, DOT_RETURN, EntranceTimeline, HOVER_FADE_OUT, SCATTER_HOVER_RESIZE,
    SCATTER_LABEL_FADE, SCATTER_POINT_GROW,
};
pub use tween::{Stagger, Tween, lerp};
