//! CLI tool for sashgrid - evaluates dimensions and lays out grid snapshots
//!
//! Usage:
//!   sashgrid_cli eval "600 + 50"                  # Print the evaluated number
//!   sashgrid_cli layout <grid.json>               # Layout report JSON to stdout
//!   sashgrid_cli layout <grid.json> -o out.json   # Layout report JSON to file
//!
//! Set `RUST_LOG=debug` to see ignored edits and merge decisions on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use sashgrid::{try_evaluate, Grid, GridLayout, Sash};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: sashgrid_cli eval <expression>\n       sashgrid_cli layout <grid.json> [-o output.json]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "eval" => eval(&args[2..].join(" ")),
        "layout" => {
            let Some(output_path) = output_flag(&args[3..]) else {
                eprintln!("{USAGE}");
                std::process::exit(1);
            };
            layout(&args[2], output_path);
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    }
}

/// Parse the arguments after `layout <grid.json>`: nothing, or `-o <path>`.
fn output_flag(rest: &[String]) -> Option<Option<&str>> {
    match rest {
        [] => Some(None),
        [flag, path] if flag == "-o" => Some(Some(path.as_str())),
        _ => None,
    }
}

fn eval(expression: &str) {
    match try_evaluate(expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("Error evaluating {expression:?}: {e}");
            std::process::exit(1);
        }
    }
}

fn layout(input_path: &str, output_path: Option<&str>) {
    // Read input file
    let json = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Load and validate the snapshot
    let grid: Grid<Sash> = match Grid::from_json(&json) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error loading grid: {}", e);
            std::process::exit(1);
        }
    };

    let report = GridLayout::new(&grid).report(&grid);
    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
