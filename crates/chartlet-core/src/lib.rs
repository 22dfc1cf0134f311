// File: crates/chartlet-core/src/lib.rs
// Summary: Core library entry point; exports the chart-layout API.

pub mod axis;
pub mod bar;
pub mod error;
pub mod geometry;
pub mod label;
pub mod series;
pub mod series_label;
pub mod style;
pub mod surface;
pub mod theme;

pub use axis::{category_axis, value_axis_style, AxisKind, AxisSpec, CategoryAxis, Tick};
pub use bar::{draw_bar, BarStyle};
pub use error::ChartError;
pub use geometry::Rect;
pub use label::{label_formatter, pie_label_formatter, value_label_formatter, LabelFormatter};
pub use series::{
    pie_series_list, points_from_values, LabelSpec, MarkKind, MarkLine, MarkPoint,
    PieSeriesOption, Series, SeriesKind, SeriesList, SeriesPoint, SeriesSummary,
};
pub use series_label::{LabelValue, SeriesLabelPainter};
pub use style::{Color, Style};
pub use surface::Surface;
pub use theme::Theme;
