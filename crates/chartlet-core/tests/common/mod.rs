// File: crates/chartlet-core/tests/common/mod.rs
// Purpose: Recording Surface mock with deterministic text metrics.

#![allow(dead_code)]

use chartlet_core::{Rect, Style, Surface};

/// One recorded surface call, in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetFillStroke(Style),
    OverrideDrawingStyle(Style),
    OverrideTextStyle(Style),
    MoveTo(i32, i32),
    LineTo(i32, i32),
    FillStroke,
    Text(String, i32, i32),
}

/// Surface mock. Text measurement is `char_width` pixels per character,
/// or a forced `fixed_width` when set (for exercising odd/even widths).
pub struct RecordingSurface {
    pub char_width: i32,
    pub char_height: i32,
    pub fixed_width: Option<i32>,
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new(char_width: i32) -> Self {
        Self {
            char_width,
            char_height: 12,
            fixed_width: None,
            calls: Vec::new(),
        }
    }

    pub fn with_fixed_width(width: i32) -> Self {
        let mut s = Self::new(1);
        s.fixed_width = Some(width);
        s
    }

    pub fn texts(&self) -> Vec<(String, i32, i32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(t, x, y) => Some((t.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_stroke(&mut self, style: &Style) {
        self.calls.push(Call::SetFillStroke(style.clone()));
    }
    fn override_drawing_style(&mut self, style: &Style) {
        self.calls.push(Call::OverrideDrawingStyle(style.clone()));
    }
    fn override_text_style(&mut self, style: &Style) {
        self.calls.push(Call::OverrideTextStyle(style.clone()));
    }
    fn move_to(&mut self, x: i32, y: i32) {
        self.calls.push(Call::MoveTo(x, y));
    }
    fn line_to(&mut self, x: i32, y: i32) {
        self.calls.push(Call::LineTo(x, y));
    }
    fn fill_stroke(&mut self) {
        self.calls.push(Call::FillStroke);
    }
    fn measure_text(&mut self, text: &str) -> Rect {
        let width = self
            .fixed_width
            .unwrap_or(text.chars().count() as i32 * self.char_width);
        Rect::from_ltwh(0, 0, width, self.char_height)
    }
    fn text(&mut self, text: &str, x: i32, y: i32) {
        self.calls.push(Call::Text(text.to_string(), x, y));
    }
}
