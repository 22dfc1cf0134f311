// File: crates/chartlet-core/src/series.rs
// Summary: Series model: points, labels, marks, and derived statistics.

use crate::style::{Color, Style};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeriesKind {
    #[default]
    Line,
    Bar,
    Pie,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesPoint {
    pub value: f64,
    /// Per-point style override; `None` inherits the series style.
    pub style: Option<Style>,
}

/// Data label configuration for a series.
#[derive(Clone, Debug, Default)]
pub struct LabelSpec {
    /// Template over `{b}` (name), `{c}` (value), `{d}` (percent, pie).
    pub formatter: String,
    /// Font color override; `None` uses the theme text color.
    pub color: Option<Color>,
    pub show: bool,
    /// Distance to the host graphic element in pixels; 0 means the
    /// default of 5.
    pub distance: i32,
}

/// Statistic a mark point or mark line is pinned to. `Average` is used
/// by mark lines only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkKind {
    Max,
    Min,
    Average,
}

#[derive(Clone, Debug)]
pub struct MarkPoint {
    /// Width of the mark symbol in pixels.
    pub symbol_size: i32,
    pub data: Vec<MarkKind>,
}

impl Default for MarkPoint {
    fn default() -> Self {
        Self { symbol_size: 30, data: Vec::new() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MarkLine {
    pub data: Vec<MarkKind>,
}

/// One named sequence of data points rendered as one visual trace.
/// Immutable once handed to rendering; all derived state is recomputed
/// on demand.
#[derive(Clone, Debug, Default)]
pub struct Series {
    pub kind: SeriesKind,
    pub points: Vec<SeriesPoint>,
    /// Y axis slot, 0 or 1.
    pub y_axis_index: usize,
    pub style: Option<Style>,
    pub label: LabelSpec,
    pub name: String,
    /// Radius for pie series, e.g. "40%"; empty means the consumer's
    /// default of "40%".
    pub radius: String,
    pub mark_point: MarkPoint,
    pub mark_line: MarkLine,
}

/// Derived min/max/average over a series' point values. Recomputed fresh
/// per call, never cached, so caller-side point edits cannot go stale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSummary {
    pub max_index: Option<usize>,
    pub max_value: f64,
    pub min_index: Option<usize>,
    pub min_value: f64,
    pub average_value: f64,
}

impl Series {
    pub fn from_values(values: &[f64], kind: SeriesKind) -> Self {
        Self {
            kind,
            points: points_from_values(values),
            ..Self::default()
        }
    }

    /// Single scan over the points. Strict comparisons, so ties keep the
    /// earliest index. An empty series yields a NaN average and `None`
    /// indices; callers are expected to supply non-empty series.
    pub fn summary(&self) -> SeriesSummary {
        let mut min_index = None;
        let mut max_index = None;
        let mut min_value = f64::MAX;
        let mut max_value = -f64::MAX;
        let mut sum = 0.0;
        for (j, item) in self.points.iter().enumerate() {
            if item.value < min_value {
                min_index = Some(j);
                min_value = item.value;
            }
            if item.value > max_value {
                max_index = Some(j);
                max_value = item.value;
            }
            sum += item.value;
        }
        SeriesSummary {
            max_index,
            max_value,
            min_index,
            min_value,
            average_value: sum / self.points.len() as f64,
        }
    }
}

pub fn points_from_values(values: &[f64]) -> Vec<SeriesPoint> {
    values
        .iter()
        .map(|&value| SeriesPoint { value, style: None })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct SeriesList(pub Vec<Series>);

impl SeriesList {
    /// Series names in list order.
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|s| s.name.clone()).collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PieSeriesOption {
    pub radius: String,
    pub label: LabelSpec,
    pub names: Vec<String>,
}

/// Build one single-point pie series per value, mirroring input order.
/// Slices without a matching entry in `names` get an empty name.
pub fn pie_series_list(values: &[f64], opt: PieSeriesOption) -> SeriesList {
    let list = values
        .iter()
        .enumerate()
        .map(|(index, &v)| Series {
            kind: SeriesKind::Pie,
            points: vec![SeriesPoint { value: v, style: None }],
            radius: opt.radius.clone(),
            label: opt.label.clone(),
            name: opt.names.get(index).cloned().unwrap_or_default(),
            ..Series::default()
        })
        .collect();
    SeriesList(list)
}
