use crate::axis::{nice_ceil, tick_value};
use crate::dataset::Entry;
use crate::format::{format_axis_value, format_number};

// Longer category names are truncated to keep the plot area on screen.
const MAX_LABEL_WIDTH: usize = 24;

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: usize,
    pub intervals: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            width: 60,
            intervals: 4,
        }
    }
}

/// Vertical-layout bar chart: label names down the left, a numeric axis with
/// gridline ticks along the bottom, one bar row per entry with its exact
/// count at the end of the bar. An empty dataset renders the bare axis.
pub fn render_bar_chart(dataset: &[Entry], options: &ChartOptions) -> String {
    let width = options.width.max(1);
    let intervals = options.intervals.max(1);

    let max_value = dataset.iter().map(|entry| entry.value).max().unwrap_or(0);
    // With no positive values there is nothing to scale against, so fall back
    // to one count per interval to keep the tick labels integral.
    let axis_max = match nice_ceil(max_value) {
        0 => intervals as u64,
        max => max,
    };

    let names: Vec<String> = dataset
        .iter()
        .map(|entry| truncate_label(&entry.name))
        .collect();
    let label_width = names
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);

    let tick_columns: Vec<usize> = (0..=intervals).map(|i| i * width / intervals).collect();

    let mut out = String::new();

    for (entry, name) in dataset.iter().zip(&names) {
        let pad = label_width - name.chars().count();
        out.push_str(&" ".repeat(pad));
        out.push_str(name);
        out.push_str(" ┤");

        let bar_len = bar_length(entry.value, axis_max, width);
        for col in 0..=width {
            if col < bar_len {
                out.push('█');
            } else if tick_columns.contains(&col) {
                out.push('┊');
            } else {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push_str(&format_number(entry.value));
        out.push('\n');
    }

    // Axis line, corner doubling as the zero tick.
    out.push_str(&" ".repeat(label_width));
    out.push_str(" └");
    for col in 1..=width {
        if tick_columns.contains(&col) {
            out.push('┴');
        } else {
            out.push('─');
        }
    }
    out.push('\n');

    out.push_str(&tick_label_row(axis_max, intervals, &tick_columns, label_width));
    out.push('\n');

    out
}

fn bar_length(value: u64, axis_max: u64, width: usize) -> usize {
    if value == 0 {
        return 0;
    }
    let scaled = ((value as u128 * width as u128 + (axis_max / 2) as u128) / axis_max as u128)
        as usize;
    scaled.max(1)
}

fn truncate_label(name: &str) -> String {
    if name.chars().count() <= MAX_LABEL_WIDTH {
        return name.to_string();
    }
    let mut truncated: String = name.chars().take(MAX_LABEL_WIDTH - 1).collect();
    truncated.push('…');
    truncated
}

fn tick_label_row(
    axis_max: u64,
    intervals: usize,
    tick_columns: &[usize],
    label_width: usize,
) -> String {
    let mut row = vec![' '; label_width + tick_columns.last().unwrap_or(&0) + 16];
    let mut cursor = 0usize;

    for (index, column) in tick_columns.iter().enumerate() {
        let text = format_axis_value(tick_value(axis_max, intervals, index));
        let center = label_width + 2 + column;
        let mut start = center.saturating_sub(text.chars().count() / 2);
        if start < cursor {
            start = cursor;
        }
        if start + text.chars().count() > row.len() {
            row.resize(start + text.chars().count(), ' ');
        }
        for (offset, ch) in text.chars().enumerate() {
            row[start + offset] = ch;
        }
        cursor = start + text.chars().count() + 1;
    }

    let rendered: String = row.into_iter().collect();
    rendered.trim_end().to_string()
}
