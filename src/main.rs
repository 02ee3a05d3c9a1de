use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;
use std::fs;
use std::time::Instant;
use tracing::{error, info};

use domain_labels::{args::Args, chart, dataset, labels, svg, utils};

fn run(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let mut counts = labels::load_labels(args.input.as_deref())?;

    if let Some(pattern) = &args.filter {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid filter expression '{}'", pattern))?;
        let before = counts.len();
        counts.retain_matching(&regex);
        info!(
            action = "filter",
            component = "label_input",
            pattern = pattern,
            kept = counts.len(),
            dropped = before - counts.len(),
            "Applied label filter"
        );
    }

    let dataset = dataset::build_chart_dataset(&counts, args.top);
    info!(
        action = "build",
        component = "chart_dataset",
        entry_count = dataset.len(),
        top = args.top,
        "Built chart dataset"
    );

    if let Some(svg_path) = &args.svg {
        let document = svg::render_svg(&dataset);
        fs::write(svg_path, document)
            .with_context(|| format!("Failed to write SVG chart to {:?}", svg_path))?;
        info!(action = "write", component = "svg_chart", file_path = ?svg_path, "Wrote SVG chart");
    }

    let options = chart::ChartOptions {
        width: args.width,
        intervals: args.intervals,
    };
    println!("\n--- Domain labels ---");
    print!("{}", chart::render_bar_chart(&dataset, &options));

    info!(
        action = "complete",
        component = "chart_render",
        duration_ms = start_time.elapsed().as_millis(),
        "Chart rendering completed"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match run(&args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
