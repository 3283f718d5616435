//! classdoc — aggregate doc-entry streams into per-class documentation models.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `classdoc < entries.json` — one entry stream in, the
//!   aggregated class models out as JSON.
//! - **file mode**: `classdoc -o docs/model src/**/*.entries.json` — every
//!   input stream is aggregated into one project and each class is written
//!   to `<output>/<ClassName>.json`.

use anyhow::{Context, Result};
use clap::Parser;
use classdoc::model::ClassDoc;
use classdoc::{input, Aggregator};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "classdoc",
    about = "Aggregate doc-entry streams into per-class documentation models"
)]
struct Cli {
    /// Input entry-stream files (glob patterns supported). If omitted,
    /// reads a single stream from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Disable getter/setter/change-event synthesis
    #[arg(long)]
    no_accessors: bool,

    /// Include private and hidden members in the output
    #[arg(long)]
    show_private: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one entry stream, write the class models to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input_text = String::new();
    io::stdin()
        .read_to_string(&mut input_text)
        .context("failed to read stdin")?;

    let entries = input::parse_entries(&input_text)?;

    let mut agr = Aggregator::new().accessors(!cli.no_accessors);
    agr.aggregate(entries);
    warn_orphans(&agr);

    let mut classes = agr.finish();
    for class in &mut classes {
        filter_members(class, cli.show_private);
    }

    let json = serde_json::to_string_pretty(&classes)?;
    println!("{}", json);
    Ok(())
}

/// file mode: aggregate every input stream into one project, write one
/// JSON model per class into the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let mut agr = Aggregator::new().accessors(!cli.no_accessors);
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match input::parse_entries(&content) {
            Ok(entries) => agr.aggregate(entries),
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
            }
        }
    }
    warn_orphans(&agr);

    for mut class in agr.finish() {
        filter_members(&mut class, cli.show_private);

        let out_path = output_dir.join(format!("{}.json", class.name));
        let json = serde_json::to_string_pretty(&class)?;
        fs::write(&out_path, json)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// File extensions recognized as entry streams.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Drop private/hidden members from the output view unless --show-private.
/// The model itself is never touched before this point; the flags come out
/// of aggregation exactly as authored or inherited.
fn filter_members(class: &mut ClassDoc, show_private: bool) {
    if show_private {
        return;
    }
    class
        .members
        .retain(|m| !m.modifiers.private && !m.modifiers.hide);
}

/// Report members that could not be attributed to any class.
fn warn_orphans(agr: &Aggregator) {
    for orphan in agr.orphans() {
        eprintln!(
            "warning: member '{}' has no owning class, dropped from output",
            orphan.name
        );
    }
}
