use std::fmt::Write as _;

use crate::axis::{nice_ceil, tick_value};
use crate::dataset::Entry;
use crate::format::{format_axis_value, format_number};

const MARGIN: f64 = 24.0;
const LABEL_GUTTER: f64 = 150.0;
const PLOT_WIDTH: f64 = 560.0;
const BAR_HEIGHT: f64 = 18.0;
const BAR_GAP: f64 = 10.0;
const AXIS_SPACE: f64 = 32.0;
const INTERVALS: usize = 4;
const BAR_FILL: &str = "#8884d8";

/// Standalone SVG document: one horizontal bar per entry, dashed vertical
/// gridlines, category labels in a fixed left gutter. Each bar carries a
/// `<title>` with the formatted count, which viewers surface on hover.
pub fn render_svg(dataset: &[Entry]) -> String {
    let max_value = dataset.iter().map(|entry| entry.value).max().unwrap_or(0);
    let axis_max = match nice_ceil(max_value) {
        0 => INTERVALS as u64,
        max => max,
    };

    let rows = dataset.len().max(1) as f64;
    let plot_height = rows * (BAR_HEIGHT + BAR_GAP);
    let canvas_width = MARGIN + LABEL_GUTTER + PLOT_WIDTH + MARGIN;
    let canvas_height = MARGIN + plot_height + AXIS_SPACE;
    let plot_left = MARGIN + LABEL_GUTTER;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{:.0}' height='{:.0}' viewBox='0 0 {:.0} {:.0}' role='img'>",
        canvas_width, canvas_height, canvas_width, canvas_height
    );
    let _ = writeln!(
        svg,
        "  <rect width='{:.0}' height='{:.0}' fill='#ffffff'/>",
        canvas_width, canvas_height
    );

    for index in 0..=INTERVALS {
        let x = plot_left + PLOT_WIDTH * index as f64 / INTERVALS as f64;
        let _ = writeln!(
            svg,
            "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='#cccccc' stroke-dasharray='3 3'/>",
            x,
            MARGIN,
            x,
            MARGIN + plot_height
        );
    }

    for (index, entry) in dataset.iter().enumerate() {
        let y = MARGIN + index as f64 * (BAR_HEIGHT + BAR_GAP) + BAR_GAP / 2.0;
        let bar_width = PLOT_WIDTH * entry.value as f64 / axis_max as f64;
        let text_y = y + BAR_HEIGHT / 2.0 + 4.0;

        let _ = writeln!(svg, "  <g>");
        let _ = writeln!(
            svg,
            "    <title>{}: {}</title>",
            escape_text(&entry.name),
            format_number(entry.value)
        );
        let _ = writeln!(
            svg,
            "    <rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' fill='{}'/>",
            plot_left, y, bar_width, BAR_HEIGHT, BAR_FILL
        );
        let _ = writeln!(
            svg,
            "    <text x='{:.2}' y='{:.2}' text-anchor='end' fill='#666666' font-family='sans-serif' font-size='12'>{}</text>",
            plot_left - 8.0,
            text_y,
            escape_text(&entry.name)
        );
        let _ = writeln!(svg, "  </g>");
    }

    let axis_y = MARGIN + plot_height;
    let _ = writeln!(
        svg,
        "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='#666666'/>",
        plot_left,
        axis_y,
        plot_left + PLOT_WIDTH,
        axis_y
    );

    for index in 0..=INTERVALS {
        let x = plot_left + PLOT_WIDTH * index as f64 / INTERVALS as f64;
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' text-anchor='middle' fill='#666666' font-family='sans-serif' font-size='12'>{}</text>",
            x,
            axis_y + 20.0,
            format_axis_value(tick_value(axis_max, INTERVALS, index))
        );
    }

    let _ = writeln!(svg, "</svg>");
    svg
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: u64) -> Entry {
        Entry {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn one_bar_group_per_entry() {
        let dataset = vec![entry("law", 1200), entry("health", 300)];
        let svg = render_svg(&dataset);

        assert_eq!(svg.matches("<g>").count(), 2);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn titles_carry_formatted_counts() {
        let svg = render_svg(&[entry("law", 12_345)]);
        assert!(svg.contains("<title>law: 12,345</title>"));
    }

    #[test]
    fn gridlines_are_dashed_and_span_all_ticks() {
        let svg = render_svg(&[entry("law", 10)]);
        assert_eq!(svg.matches("stroke-dasharray='3 3'").count(), INTERVALS + 1);
    }

    #[test]
    fn label_text_is_escaped() {
        let svg = render_svg(&[entry("r&d <misc>", 2)]);
        assert!(svg.contains("r&amp;d &lt;misc&gt;"));
        assert!(!svg.contains("<misc>"));
    }

    #[test]
    fn empty_dataset_renders_no_bars() {
        let svg = render_svg(&[]);
        assert_eq!(svg.matches("<g>").count(), 0);
        assert!(svg.contains("stroke-dasharray"));
    }
}
