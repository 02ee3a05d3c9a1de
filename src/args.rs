use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "domain-labels",
    about = "Render a bar chart of domain label frequencies",
    version,
    long_about = None
)]
pub struct Args {
    /// Label counts file (JSON mapping or "count label" lines); stdin when omitted
    pub input: Option<PathBuf>,

    /// Number of top labels to show before collapsing the rest into "Other"
    #[arg(short, long, default_value_t = crate::dataset::DEFAULT_TOP)]
    pub top: usize,

    /// Width of the plot area in terminal columns
    #[arg(short, long, default_value_t = 60)]
    pub width: usize,

    /// Number of axis divisions between gridlines
    #[arg(long, default_value_t = 4)]
    pub intervals: usize,

    /// Keep only labels matching this regular expression
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Write the chart as an SVG document to this path
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
