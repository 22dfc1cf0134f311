// File: crates/chartlet-core/src/theme.rs
// Summary: Enumerated light/dark theming with a per-theme color table.

use crate::style::Color;

/// Fixed light-palette axis color, used for both font and stroke.
pub const AXIS_COLOR_LIGHT: Color = Color::from_argb(255, 110, 112, 121);
/// Fixed light-palette grid line color.
pub const GRID_COLOR_LIGHT: Color = Color::from_argb(255, 224, 230, 241);
/// Fully transparent white; hides a stroke without removing the slot.
pub const HIDDEN_COLOR: Color = Color::from_argb(0, 255, 255, 255);
/// Font size shared by series data labels.
pub const LABEL_FONT_SIZE: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Resolve a theme identifier. Unknown names fall back to `Light`.
    pub fn from_name(name: &str) -> Self {
        if name == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub const fn text_color(self) -> Color {
        match self {
            Theme::Dark => Color::from_argb(255, 238, 238, 238),
            Theme::Light => Color::from_argb(255, 70, 70, 70),
        }
    }
}
