//! # langmix
//!
//! CLI for the language census and synthetic-line generator.
//!
//! ## Usage
//!
//! ```bash
//! # Report the language mix of the current tree
//! langmix
//!
//! # Same, as JSON
//! langmix scan . --output json
//!
//! # Skip additional directories, teach the table a new extension
//! langmix scan . --exclude vendor --map .vue=Vue
//!
//! # Write synthetic files preserving the mix (2000 lines by default)
//! langmix generate . --total 2000 --seed 42 --out ./generated
//!
//! # Markdown badge fragment for a README section
//! langmix badges .
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use langmixlib::{
    apportion, build_report, render_badges, render_synthetic, render_table, scan_tree,
    write_synthetic, Census, LanguageMap, ScanOptions,
};

/// GitHub-style badge colors for common languages; anything missing falls
/// back to gray inside the reporter.
const BADGE_COLORS: &[(&str, &str)] = &[
    ("Python", "3776AB"),
    ("JavaScript", "F7DF1E"),
    ("TypeScript", "3178C6"),
    ("Rust", "DEA584"),
    ("Go", "00ADD8"),
    ("Shell", "89e051"),
    ("YAML", "cb171e"),
    ("JSON", "292929"),
    ("TOML", "9c4221"),
    ("Markdown", "083fa1"),
    ("Protocol Buffers", "4285F4"),
];

/// Arguments shared by every subcommand
fn common_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("path")
            .help("Directory tree to scan")
            .default_value("."),
    )
    .arg(
        Arg::new("exclude")
            .short('e')
            .long("exclude")
            .action(ArgAction::Append)
            .help("Directory name to skip during the scan (can be repeated)"),
    )
    .arg(
        Arg::new("map")
            .long("map")
            .action(ArgAction::Append)
            .value_name("EXT=LANG")
            .help("Extra extension mapping, e.g. --map .vue=Vue (can be repeated)"),
    )
    .arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .value_parser(["table", "json"])
            .default_value("table")
            .help("Output format"),
    )
}

/// Build the clap Command structure
fn build_command() -> Command {
    common_args(
        Command::new("langmix")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Per-language line census with proportional synthetic-line generation"),
    )
    .subcommand(common_args(
        Command::new("scan").about("Scan a tree and report its language mix"),
    ))
    .subcommand(
        common_args(
            Command::new("generate")
                .about("Generate synthetic files that preserve the language mix"),
        )
        .arg(
            Arg::new("total")
                .short('t')
                .long("total")
                .default_value("2000")
                .allow_hyphen_values(true)
                .help("Total synthetic lines to spread across languages"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .default_value("42")
                .help("Seed for the deterministic filler content"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .help("Output directory (defaults to <path>/generated)"),
        ),
    )
    .subcommand(common_args(
        Command::new("badges").about("Print a markdown badge fragment for the language mix"),
    ))
}

/// Build the language map from the defaults plus any --map entries
fn language_map(matches: &ArgMatches) -> anyhow::Result<LanguageMap> {
    let mut map = LanguageMap::default();
    if let Some(entries) = matches.get_many::<String>("map") {
        for entry in entries {
            let (ext, label) = entry
                .split_once('=')
                .with_context(|| format!("invalid --map entry '{entry}', expected EXT=LANG"))?;
            map.add(ext, label)?;
        }
    }
    Ok(map)
}

/// Build scan options from the defaults plus any --exclude names
fn scan_options(matches: &ArgMatches) -> ScanOptions {
    let mut options = ScanOptions::new();
    if let Some(names) = matches.get_many::<String>("exclude") {
        for name in names {
            options = options.exclude(name.clone());
        }
    }
    options
}

fn scan_path(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or(".")
}

fn json_output(matches: &ArgMatches) -> bool {
    matches.get_one::<String>("output").map(String::as_str) == Some("json")
}

/// Scan the requested tree, reporting unreadable files on stderr
fn run_scan(matches: &ArgMatches) -> anyhow::Result<Census> {
    let map = language_map(matches)?;
    let options = scan_options(matches);
    let census = scan_tree(scan_path(matches), &map, &options)?;

    for path in &census.unreadable {
        eprintln!("warning: could not read {}", path.display());
    }
    Ok(census)
}

/// Handler for the scan command (and the bare invocation)
fn scan_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let census = run_scan(matches)?;
    let rows = build_report(&census);

    if json_output(matches) {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let title = Style::new()
        .bold()
        .apply_to("Language statistics (by non-empty line)");
    Ok(format!("{title}\n{}", render_table(&rows)))
}

/// Handler for the generate command
fn generate_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let total: i64 = matches
        .get_one::<String>("total")
        .map(String::as_str)
        .unwrap_or("2000")
        .parse()
        .context("--total must be an integer")?;
    let seed: u64 = matches
        .get_one::<String>("seed")
        .map(String::as_str)
        .unwrap_or("42")
        .parse()
        .context("--seed must be a non-negative integer")?;

    let path = scan_path(matches);
    let out_dir = matches
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(path).join("generated"));

    let map = language_map(matches)?;
    let census = run_scan(matches)?;

    let allocation = apportion(&census, total)?;
    let files = render_synthetic(&allocation, &map, total as u64, seed);
    let written = write_synthetic(&out_dir, &files)?;

    if json_output(matches) {
        let summary: Vec<serde_json::Value> = files
            .iter()
            .zip(&written)
            .map(|(file, path)| {
                serde_json::json!({
                    "language": file.language,
                    "lines": file.lines,
                    "path": path,
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    if files.is_empty() {
        return Ok("No languages detected; nothing to generate.".to_string());
    }

    let title = Style::new()
        .bold()
        .apply_to(format!("Synthetic files written under {}", out_dir.display()));
    let mut out = format!("{title}\n");
    for (file, path) in files.iter().zip(&written) {
        out.push_str(&format!("{:>8} lines  {}\n", file.lines, path.display()));
    }
    Ok(out)
}

/// Handler for the badges command
fn badges_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let census = run_scan(matches)?;
    let rows = build_report(&census);

    if json_output(matches) {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let colors: BTreeMap<String, String> = BADGE_COLORS
        .iter()
        .map(|&(label, color)| (label.to_string(), color.to_string()))
        .collect();
    Ok(render_badges(&rows, &colors))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("scan", sub)) => scan_handler(sub),
        Some(("generate", sub)) => generate_handler(sub),
        Some(("badges", sub)) => badges_handler(sub),
        // Bare invocation behaves like scan
        _ => scan_handler(&matches),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
