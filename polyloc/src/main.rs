//! # polyloc
//!
//! A CLI tool for counting lines of code, comments, and blanks across
//! languages, with TODO/FIXME tagging.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory
//! polyloc .
//!
//! # Restrict to specific extensions
//! polyloc . --extensions rs,toml
//!
//! # Skip extra directories
//! polyloc . --ignore node_modules,dist,vendor
//!
//! # Output as JSON
//! polyloc . --json
//!
//! # Also write a plain-text report file
//! polyloc . --output loc-report.txt
//! ```

use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use polyloclib::{scan_path, FilterConfig, ScanOptions};

mod render;
mod report;

/// Directories skipped unless the user overrides `--ignore`.
const DEFAULT_IGNORE: &str = "node_modules,dist,.git,coverage,build,.next";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("polyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count lines of code, comments, TODOs, and blanks")
        .arg(
            Arg::new("path")
                .help("Path to analyze (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write a plain-text report to FILE"),
        )
        .arg(
            Arg::new("ignore")
                .short('i')
                .long("ignore")
                .value_name("PATTERNS")
                .default_value(DEFAULT_IGNORE)
                .help("Comma-separated directory patterns to skip"),
        )
        .arg(
            Arg::new("extensions")
                .short('e')
                .long("extensions")
                .value_name("EXTS")
                .help("Comma-separated file extensions to include"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output the report as JSON"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored output"),
        )
}

/// Split a comma-separated argument into trimmed, non-empty parts.
fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let ignore = matches
        .get_one::<String>("ignore")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_IGNORE);

    let mut filter = FilterConfig::new().ignore_dirs(split_list(ignore))?;

    if let Some(exts) = matches.get_one::<String>("extensions") {
        filter = filter.extensions(split_list(exts));
    }

    Ok(filter)
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let json = matches.get_flag("json");
    let color = !matches.get_flag("no-color");

    let filter = build_filter(matches)?;
    let options = ScanOptions::new().filter(filter);
    let scan_report = scan_path(path, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scan_report)?);
    } else {
        println!("{}", render::render_report(&scan_report, color));
    }

    if let Some(output) = matches.get_one::<String>("output") {
        report::write_report(Path::new(output), &scan_report)?;
        if !json {
            println!("Report saved to: {output}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
