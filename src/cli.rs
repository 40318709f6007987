//! Command-line interface for codecritic.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::analyzer;
use crate::report::{self, FileReport};
use crate::source::{LanguageKind, SourceUnit, SUPPORTED_EXTENSIONS};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "vendor", "__pycache__", "dist", "build"];

/// Static code quality scorer for JavaScript/React and Python/FastAPI.
///
/// Codecritic reads source files, runs per-language heuristic rule tables
/// across six quality categories, and reports a 0-100 score together with
/// prioritized recommendations.
#[derive(Parser)]
#[command(name = "codecritic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score source files and print recommendations
    #[command(visible_alias = "score")]
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to analyze (file or directory)
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Minimum acceptable score (exit non-zero if any file falls below)
    #[arg(short, long)]
    pub min_score: Option<u32>,
}

/// Collect supported source files under a directory, sorted by path.
fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            // Never filter the walk root itself
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            // Skip hidden directories
            if e.file_type().is_dir() && name.starts_with('.') {
                return false;
            }
            // Skip dependency and build output directories
            if e.file_type().is_dir() && SKIPPED_DIRS.contains(&name.as_ref()) {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if SUPPORTED_EXTENSIONS.contains(&ext) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Analyze files in parallel, preserving input order.
pub fn analyze_files(files: &[PathBuf]) -> anyhow::Result<Vec<FileReport>> {
    files
        .par_iter()
        .map(|path| {
            let language = LanguageKind::from_path(path)?;
            let content =
                fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
            let source = SourceUnit::new(content);
            Ok(FileReport {
                path: path.display().to_string(),
                language,
                result: analyzer::analyze(&source, language),
            })
        })
        .collect()
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Check path exists
    let metadata = match fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    // Collect files to analyze
    let files = if metadata.is_dir() {
        collect_files(&args.path)?
    } else {
        // A single file must carry a supported extension
        if let Err(e) = LanguageKind::from_path(&args.path) {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
        vec![args.path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no supported files found under {:?}", args.path);
        return Ok(EXIT_SUCCESS);
    }

    let reports = analyze_files(&files)?;

    // Output results
    match args.format.as_str() {
        "json" => report::write_json(&reports)?,
        _ => report::write_pretty(&reports, args.min_score),
    }

    // Return appropriate exit code
    match args.min_score {
        Some(threshold) if !report::passes_min_score(&reports, threshold) => Ok(EXIT_FAILED),
        _ => Ok(EXIT_SUCCESS),
    }
}
