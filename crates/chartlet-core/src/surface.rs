// File: crates/chartlet-core/src/surface.rs
// Summary: Abstract 2D drawing surface consumed by primitives and painters.

use crate::geometry::Rect;
use crate::style::Style;

/// The drawing backend contract. Implementations rasterize; the core only
/// positions. All coordinates are device pixels.
pub trait Surface {
    /// Apply fill and stroke attributes for the next path commit.
    fn set_fill_stroke(&mut self, style: &Style);
    /// Replace the active drawing attributes used by `measure_text`.
    fn override_drawing_style(&mut self, style: &Style);
    /// Replace the active text attributes used by `text`.
    fn override_text_style(&mut self, style: &Style);
    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
    /// Commit the traced path with one combined fill and stroke.
    fn fill_stroke(&mut self);
    /// Bounding box of `text` under the active drawing style.
    fn measure_text(&mut self, text: &str) -> Rect;
    /// Draw `text` anchored at (x, y) under the active text style.
    fn text(&mut self, text: &str, x: i32, y: i32);
}
