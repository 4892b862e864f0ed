mod color;
mod data;
mod plot;
mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use data::loader::{load_catalog, LoadError};

const DEFAULT_CATALOG: &str = "satellite_data.csv";
const OUTPUT_IMAGE: &str = "altitude_distribution.png";
const BANNER_WIDTH: usize = 70;

fn main() -> Result<()> {
    env_logger::init();

    let banner = "=".repeat(BANNER_WIDTH);
    println!("{banner}");
    println!("SPACE DEBRIS ALTITUDE DISTRIBUTION VISUALIZATION");
    println!("{banner}");
    println!();

    // First CLI argument wins; otherwise ask on stdin.
    let csv_path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => prompt_for_path()?,
    };

    println!("\nLoading data from: {}", csv_path.display());

    let dataset = match load_catalog(&csv_path) {
        Ok(dataset) => dataset,
        Err(err @ LoadError::NotFound { .. }) => {
            log::error!("{err}");
            println!("Error: {err}");
            println!("Please ensure your CSV file is in the same directory as this program.");
            return Ok(());
        }
        Err(err) => {
            log::error!("{err}");
            println!("Error loading data: {err}");
            return Ok(());
        }
    };

    report::print_breakdown(&dataset);

    println!("\nCreating visualization...");
    plot::render_distribution(&dataset, Path::new(OUTPUT_IMAGE))?;
    println!("Plot saved to: {OUTPUT_IMAGE}");

    println!("\nVisualization complete!");
    println!("{banner}");
    Ok(())
}

/// Ask on stdin for the catalog path, defaulting when the reply is empty.
fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter CSV filename (or press Enter for '{DEFAULT_CATALOG}'): ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading filename from stdin")?;

    let reply = line.trim();
    Ok(if reply.is_empty() {
        PathBuf::from(DEFAULT_CATALOG)
    } else {
        PathBuf::from(reply)
    })
}
