// File: crates/chartlet-core/src/bar.rs
// Summary: Bar primitive: style resolution plus a closed rectangle trace.

use crate::geometry::Rect;
use crate::style::{Color, Style};
use crate::surface::Surface;

/// Resolved bar appearance. One color serves both fill and stroke.
#[derive(Clone, Debug, Default)]
pub struct BarStyle {
    pub class_name: String,
    pub stroke_dash_array: Vec<f64>,
    pub fill_color: Color,
}

impl BarStyle {
    pub fn style(&self) -> Style {
        Style {
            class_name: self.class_name.clone(),
            stroke_dash_array: self.stroke_dash_array.clone(),
            stroke_color: Some(self.fill_color),
            stroke_width: 1.0,
            fill_color: Some(self.fill_color),
            ..Style::default()
        }
    }
}

/// Render one bar: resolve style, trace the rectangle as a closed
/// five-point path (last point repeats the first), commit one combined
/// fill and stroke. Every shape primitive follows this idiom.
pub fn draw_bar<S: Surface>(surface: &mut S, b: Rect, style: &BarStyle) {
    surface.set_fill_stroke(&style.style());
    surface.move_to(b.left, b.top);
    surface.line_to(b.right, b.top);
    surface.line_to(b.right, b.bottom);
    surface.line_to(b.left, b.bottom);
    surface.line_to(b.left, b.top);
    surface.fill_stroke();
}
