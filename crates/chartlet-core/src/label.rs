// File: crates/chartlet-core/src/label.rs
// Summary: Label template engine: {b}/{c}/{d} substitution with fixed formatting.

/// Formats one data point: (index, value, percent) -> text. Percent is
/// optional-by-sentinel: a negative percent means "absent" and `{d}`
/// renders empty.
pub type LabelFormatter = Box<dyn Fn(usize, f64, f64) -> String>;

/// Pie labels default to `"{b}: {d}"` when no layout is supplied.
pub fn pie_label_formatter(series_names: &[String], layout: &str) -> LabelFormatter {
    let layout = if layout.is_empty() { "{b}: {d}" } else { layout };
    label_formatter(series_names, layout)
}

/// Plain value labels default to `"{c}"` when no layout is supplied.
pub fn value_label_formatter(series_names: &[String], layout: &str) -> LabelFormatter {
    let layout = if layout.is_empty() { "{c}" } else { layout };
    label_formatter(series_names, layout)
}

/// Literal replacement of all three tokens, in fixed order: `{c}`, then
/// `{d}`, then `{b}`. A layout may omit any of them.
pub fn label_formatter(series_names: &[String], layout: &str) -> LabelFormatter {
    let names = series_names.to_vec();
    let layout = layout.to_string();
    Box::new(move |index, value, percent| {
        let percent_text = if percent >= 0.0 {
            format!("{}%", format_value(percent * 100.0))
        } else {
            String::new()
        };
        let value_text = format_value(value);
        let name = names.get(index).map(String::as_str).unwrap_or("");
        layout
            .replace("{c}", &value_text)
            .replace("{d}", &percent_text)
            .replace("{b}", name)
    })
}

/// Fixed two-fractional-digit rendering, e.g. 10 -> "10.00". Byte-stable
/// so repeated runs produce identical label text.
fn format_value(value: f64) -> String {
    format!("{value:.2}")
}
