// File: crates/chartlet-examples/src/bin/bars.rs
// Summary: Minimal example that renders a labeled bar chart to PNG.

use anyhow::Result;
use chartlet_core::{
    category_axis, draw_bar, AxisKind, AxisSpec, BarStyle, Color, LabelSpec, LabelValue, Rect,
    Series, SeriesKind, SeriesLabelPainter, Theme,
};
use chartlet_render_skia::SkiaSurface;

const WIDTH: i32 = 600;
const HEIGHT: i32 = 400;
const MARGIN: i32 = 40;

fn main() -> Result<()> {
    let theme = Theme::Light;
    let axis = AxisSpec {
        kind: AxisKind::Category,
        categories: vec![
            "Mon".to_string(),
            "Tue".to_string(),
            "Wed".to_string(),
            "Thu".to_string(),
            "Fri".to_string(),
            "Sat".to_string(),
            "Sun".to_string(),
        ],
    };
    let (x_axis, x_values) = category_axis(&axis, theme);

    let mut series = Series::from_values(
        &[120.0, 200.0, 150.0, 80.0, 70.0, 110.0, 130.0],
        SeriesKind::Bar,
    );
    series.name = "pv".to_string();
    let summary = series.summary();

    let mut surface = SkiaSurface::new(WIDTH, HEIGHT)?;
    surface.clear(Color::from_argb(255, 255, 255, 255));

    // Plot geometry: one slot per tick, bars scaled to the series max.
    let plot_w = WIDTH - 2 * MARGIN;
    let plot_h = HEIGHT - 2 * MARGIN;
    let slot = plot_w / x_axis.ticks.len() as i32;
    let bar_w = slot * 6 / 10;
    let bar_style = BarStyle {
        fill_color: Color::from_argb(255, 84, 112, 198),
        ..BarStyle::default()
    };

    // Shapes first, labels second, so labels are never overpainted.
    let mut anchors = Vec::with_capacity(series.points.len());
    for (i, point) in series.points.iter().enumerate() {
        let x = MARGIN + (x_values[i] as i32) * slot + (slot - bar_w) / 2;
        let h = (point.value / summary.max_value * plot_h as f64) as i32;
        let top = HEIGHT - MARGIN - h;
        draw_bar(&mut surface, Rect::from_ltwh(x, top, bar_w, h), &bar_style);
        anchors.push((x + bar_w / 2, top));
    }

    let names = vec![series.name.clone()];
    let mut painter =
        SeriesLabelPainter::new(&mut surface, &names, LabelSpec::default(), theme);
    for (i, point) in series.points.iter().enumerate() {
        let (x, y) = anchors[i];
        painter.add(LabelValue { index: 0, value: point.value, x, y });
    }
    painter.render()?;
    drop(painter);

    let out = std::path::PathBuf::from("target/out/example_bars.png");
    surface.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
