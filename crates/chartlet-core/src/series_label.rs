// File: crates/chartlet-core/src/series_label.rs
// Summary: Two-phase series label painter: measure on add, draw on render.

use crate::error::ChartError;
use crate::geometry::Rect;
use crate::label::{value_label_formatter, LabelFormatter};
use crate::series::LabelSpec;
use crate::style::Style;
use crate::surface::Surface;
use crate::theme::{Theme, LABEL_FONT_SIZE};

/// Anchor for one label: the data-point index/value plus the pixel
/// coordinate the label is positioned relative to.
#[derive(Clone, Copy, Debug)]
pub struct LabelValue {
    pub index: usize,
    pub value: f64,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug)]
struct LabelRenderValue {
    text: String,
    style: Style,
    x: i32,
    y: i32,
}

/// Accumulates positioned labels, then flushes them in one pass. The
/// split keeps every measurement query ahead of every text-style
/// mutation on the shared surface.
pub struct SeriesLabelPainter<'a, S: Surface> {
    surface: &'a mut S,
    formatter: LabelFormatter,
    label: LabelSpec,
    theme: Theme,
    values: Vec<LabelRenderValue>,
}

impl<'a, S: Surface> SeriesLabelPainter<'a, S> {
    pub fn new(surface: &'a mut S, series_names: &[String], label: LabelSpec, theme: Theme) -> Self {
        let formatter = value_label_formatter(series_names, &label.formatter);
        Self {
            surface,
            formatter,
            label,
            theme,
            values: Vec::new(),
        }
    }

    /// Format, measure, and position one label. Entries are independent
    /// and kept in insertion order.
    pub fn add(&mut self, value: LabelValue) {
        let mut distance = self.label.distance;
        if distance == 0 {
            distance = 5;
        }
        // Value-only path: percent carries the "absent" sentinel.
        let text = (self.formatter)(value.index, value.value, -1.0);
        let style = Style {
            font_color: Some(self.label.color.unwrap_or_else(|| self.theme.text_color())),
            font_size: LABEL_FONT_SIZE,
            ..Style::default()
        };
        self.surface.override_drawing_style(&style);
        let text_box = self.surface.measure_text(&text);
        let width = text_box.width();
        let mut x = value.x - width / 2;
        // Odd widths bias half a pixel right. Keep exactly as is; chart
        // output compatibility depends on it.
        if width % 2 != 0 {
            x += 1;
        }
        self.values.push(LabelRenderValue {
            text,
            style,
            x,
            y: value.y - distance,
        });
    }

    /// Flush the buffered labels in accumulation order. Labels do not
    /// contribute to parent layout sizing, so the box is always zero.
    pub fn render(&mut self) -> Result<Rect, ChartError> {
        for item in &self.values {
            self.surface.override_text_style(&item.style);
            self.surface.text(&item.text, item.x, item.y);
        }
        Ok(Rect::ZERO)
    }
}
