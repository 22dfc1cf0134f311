// File: crates/chartlet-core/src/axis.rs
// Summary: Categorical axis builder: index-positioned ticks plus per-theme styling.

use crate::style::Style;
use crate::theme::{Theme, AXIS_COLOR_LIGHT, GRID_COLOR_LIGHT, HIDDEN_COLOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// Continuous numeric axis.
    Value,
    /// Discrete category axis; the only kind computed here. Categories
    /// come from the axis data.
    Category,
    /// Time axis; tick derivation is owned by the composing layer.
    Time,
    /// Logarithmic axis.
    Log,
}

#[derive(Clone, Debug)]
pub struct AxisSpec {
    pub kind: AxisKind,
    pub categories: Vec<String>,
}

/// A labeled position marker on an axis. `position` is the zero-based
/// category index, so downstream plotting can treat categorical axes
/// uniformly with numeric ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

const AXIS_STROKE_WIDTH: f64 = 1.0;

#[derive(Clone, Debug, Default)]
pub struct CategoryAxis {
    pub ticks: Vec<Tick>,
    /// `None` defers styling to the global palette (dark theme).
    pub style: Option<Style>,
}

/// Build the ticks and the parallel value array for a category axis.
/// `values[i] == ticks[i].position == i`; empty input yields empty arrays.
pub fn category_axis(spec: &AxisSpec, theme: Theme) -> (CategoryAxis, Vec<f64>) {
    let mut values = Vec::with_capacity(spec.categories.len());
    let mut ticks = Vec::with_capacity(spec.categories.len());
    for (index, key) in spec.categories.iter().enumerate() {
        let f = index as f64;
        values.push(f);
        ticks.push(Tick {
            position: f,
            label: key.clone(),
        });
    }
    let style = match theme {
        Theme::Dark => None,
        Theme::Light => Some(Style {
            font_color: Some(AXIS_COLOR_LIGHT),
            stroke_color: Some(AXIS_COLOR_LIGHT),
            stroke_width: AXIS_STROKE_WIDTH,
            ..Style::default()
        }),
    };
    (CategoryAxis { ticks, style }, values)
}

/// Styling for the secondary value axis: visible major/minor grid lines,
/// hidden axis stroke.
#[derive(Clone, Debug, Default)]
pub struct ValueAxisStyle {
    pub style: Option<Style>,
    pub grid_major: Option<Style>,
    pub grid_minor: Option<Style>,
}

pub fn value_axis_style(theme: Theme) -> ValueAxisStyle {
    match theme {
        Theme::Dark => ValueAxisStyle::default(),
        Theme::Light => {
            let grid = Style {
                stroke_color: Some(GRID_COLOR_LIGHT),
                stroke_width: AXIS_STROKE_WIDTH,
                ..Style::default()
            };
            ValueAxisStyle {
                style: Some(Style {
                    font_color: Some(AXIS_COLOR_LIGHT),
                    // alpha 0: keeps the stroke slot without painting it
                    stroke_color: Some(HIDDEN_COLOR),
                    stroke_width: AXIS_STROKE_WIDTH,
                    ..Style::default()
                }),
                grid_major: Some(grid.clone()),
                grid_minor: Some(grid),
            }
        }
    }
}
