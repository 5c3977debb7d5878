//! Chart engines, their configuration, and the view-level state machines.

mod carousel;
mod chart_config;
mod correlation;
mod correlation_chart;
mod counter;
mod export;
mod json_contract;
mod label_format;
mod line_chart;
mod line_chart_scene;
mod methodology;
mod multi_line_chart;
mod story_axes;
mod theme;
mod view_switcher;

pub use carousel::{
    CARD_HEIGHT, CARD_WIDTH, CHART_WINDOW, CardPlacement, CardTransform, CarouselState,
    ConicSector, FilmCard, GenrePill, PERSPECTIVE_PX, WheelOutcome, WheelPolicy, catalog_cards,
};
pub use chart_config::{CorrelationChartConfig, LineChartConfig, MultiLineChartConfig};
pub use correlation::{CorrelationEntry, CorrelationReport};
pub use correlation_chart::{CorrelationChart, ScatterLayout};
pub use counter::{AnimatedCounter, CounterKind};
pub use export::{
    ExportOptions, ExportSummary, export_catalog, render_compare_svg, render_correlation_svg,
    render_film_svg,
};
pub use json_contract::{
    CORRELATION_REPORT_JSON_SCHEMA_V1, CorrelationReportJsonContractV1,
    DATASET_SUMMARY_JSON_SCHEMA_V1, DatasetSummaryJsonContractV1,
};
pub use label_format::{
    format_box_office, format_linear_tick, format_rating, format_revenue_axis,
    format_revenue_millions, format_rmsd, format_valence_pill,
};
pub use line_chart::LineChart;
pub use methodology::DatasetSummary;
pub use multi_line_chart::MultiLineChart;
pub use theme::{
    DEFAULT_ACCENT, NEGATIVE_VALENCE, NEUTRAL_VALENCE, POSITIVE_VALENCE, Theme, ThemePalette,
    valence_color,
};
pub use view_switcher::{AppState, CompareLayout, ViewAction, ViewMode};
