pub mod area_series;
pub mod curve;
pub mod line_series;
pub mod path_sampler;
pub mod scale;
pub mod stats;
pub mod types;

pub use area_series::{AreaGeometry, project_area};
pub use curve::{PathCommand, PathGeometry, PathVertex, monotone_x_path};
pub use line_series::{LineGeometry, project_line};
pub use path_sampler::PathSampler;
pub use scale::LinearScale;
pub use stats::{LinearFit, extent, linear_regression, pearson_correlation, rmsd};
pub use types::{
    BEAT_COUNT, BEAT_FIRST, BEAT_LAST, DataPoint, DetailedDataPoint, Margin, PlotArea,
    VALENCE_MAX, VALENCE_MIN, Valence, Viewport, validate_complete_arc, validate_partial_arc,
};
