//! story-arcs: emotional story-arc charts.
//!
//! Each film is a 24-beat valence series compared against a canonical
//! baseline arc. The crate builds deterministic render frames for the
//! single-film line chart, the all-films overlay and the RMSD / box-office
//! scatter, and models the 3D card carousel and view routing as plain state
//! machines. Drawing goes through the backend-agnostic [`render::Renderer`]
//! contract (SVG, Cairo, null).

pub mod animation;
pub mod api;
pub mod core;
pub mod dataset;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{
    AppState, CorrelationChart, CorrelationReport, LineChart, LineChartConfig, MultiLineChart,
    Theme,
};
pub use dataset::Film;
pub use error::{ArcError, ArcResult};
