// File: crates/chartlet-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the core Surface trait.

use chartlet_core::{ChartError, Color, Rect, Style, Surface};
use skia_safe as skia;
use skia_safe::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// A headless raster surface. Holds the active drawing/text styles and
/// the path being traced, mirroring the stateful contract the core
/// primitives expect.
pub struct SkiaSurface {
    surface: skia::Surface,
    fonts: FontCollection,
    path: skia::Path,
    draw_style: Style,
    text_style: Style,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self, ChartError> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::Surface("failed to create raster surface".to_string()))?;
        let mut fonts = FontCollection::new();
        // Use system manager fallback
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Ok(Self {
            surface,
            fonts,
            path: skia::Path::new(),
            draw_style: Style::default(),
            text_style: Style::default(),
        })
    }

    pub fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn layout(&self, text: &str, style: &Style) -> Paragraph {
        let size = if style.font_size > 0.0 { style.font_size as f32 } else { 10.0 };
        let color = style.font_color.unwrap_or(Color::from_argb(255, 0, 0, 0));
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(to_skia(color));
        if style.font_family.is_empty() {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        } else {
            ts.set_font_families(&[style.font_family.as_str()]);
        }
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Snapshot the surface and encode it as PNG bytes.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>, ChartError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("encode PNG failed".to_string()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), ChartError> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::Encode(e.to_string()))?;
        }
        std::fs::write(path, bytes).map_err(|e| ChartError::Encode(e.to_string()))
    }
}

impl Surface for SkiaSurface {
    fn set_fill_stroke(&mut self, style: &Style) {
        self.draw_style = style.clone();
    }

    fn override_drawing_style(&mut self, style: &Style) {
        self.draw_style = style.clone();
    }

    fn override_text_style(&mut self, style: &Style) {
        self.text_style = style.clone();
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.path.line_to((x as f32, y as f32));
    }

    fn fill_stroke(&mut self) {
        let style = self.draw_style.clone();
        if let Some(c) = style.fill_color {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(to_skia(c));
            let canvas = self.surface.canvas();
            canvas.draw_path(&self.path, &fill);
        }
        if let Some(c) = style.stroke_color {
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(style.stroke_width.max(1.0) as f32);
            stroke.set_color(to_skia(c));
            if !style.stroke_dash_array.is_empty() {
                let intervals: Vec<f32> =
                    style.stroke_dash_array.iter().map(|&v| v as f32).collect();
                if let Some(effect) = skia::dash_path_effect::new(&intervals, 0.0) {
                    stroke.set_path_effect(effect);
                }
            }
            let canvas = self.surface.canvas();
            canvas.draw_path(&self.path, &stroke);
        }
        self.path = skia::Path::new();
    }

    fn measure_text(&mut self, text: &str) -> Rect {
        let style = self.draw_style.clone();
        let paragraph = self.layout(text, &style);
        let width = paragraph.longest_line().ceil() as i32;
        let height = paragraph.height().ceil() as i32;
        Rect::from_ltwh(0, 0, width, height)
    }

    fn text(&mut self, text: &str, x: i32, y: i32) {
        let style = self.text_style.clone();
        let size = if style.font_size > 0.0 { style.font_size as f32 } else { 10.0 };
        let mut paragraph = self.layout(text, &style);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        paragraph.paint(self.surface.canvas(), (x as f32, y as f32 - size * 0.8));
    }
}
