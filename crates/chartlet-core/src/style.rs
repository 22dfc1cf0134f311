// File: crates/chartlet-core/src/style.rs
// Summary: Backend-agnostic RGBA color and the flat drawing style record.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Resolved drawing attributes for one primitive. A flat value object:
/// every primitive resolves its own `Style` from theme defaults plus
/// overrides, so there is no inheritance and no shared mutable state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub class_name: String,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
    pub stroke_dash_array: Vec<f64>,
    pub font_family: String,
    pub font_size: f64,
    pub font_color: Option<Color>,
}
