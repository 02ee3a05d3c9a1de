pub mod args;
pub mod axis;
pub mod chart;
pub mod dataset;
pub mod format;
pub mod labels;
pub mod svg;
pub mod utils;

pub use args::Args;
pub use chart::{render_bar_chart, ChartOptions};
pub use dataset::{build_chart_dataset, Entry, DEFAULT_TOP, OTHER_LABEL};
pub use format::{format_axis_value, format_number};
pub use labels::{load_labels, parse_labels, LabelCounts};
pub use svg::render_svg;
