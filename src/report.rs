//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::score::{AnalysisResult, Category};
use crate::source::LanguageKind;

/// One analyzed file and its result.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub language: LanguageKind,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Render reports as JSON.
///
/// A single file renders as a bare result object; several files render as
/// an array that also carries each file's path and language.
pub fn render_json(reports: &[FileReport]) -> anyhow::Result<String> {
    let json = if let [only] = reports {
        serde_json::to_string_pretty(&only.result)?
    } else {
        serde_json::to_string_pretty(reports)?
    };
    Ok(json)
}

/// Write reports in JSON format to stdout.
pub fn write_json(reports: &[FileReport]) -> anyhow::Result<()> {
    println!("{}", render_json(reports)?);
    Ok(())
}

/// Write reports in pretty format to stdout.
pub fn write_pretty(reports: &[FileReport], min_score: Option<u32>) {
    // Header
    println!();
    print!("  ");
    print!("{}", "codecritic".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));

    for report in reports {
        println!();
        print!("  {}", report.path.bold());
        println!("  {}", format!("({})", report.language.as_str()).dimmed());

        print!("  Score: ");
        print!("{}", colored_score(report.result.overall_score));
        println!("{}", "/100".dimmed());

        write_breakdown(&report.result);
        write_recommendations(&report.result);
    }

    if let Some(threshold) = min_score {
        println!();
        write_final_status(reports, threshold);
    }
    println!();
}

/// Whether every report clears the minimum score.
pub fn passes_min_score(reports: &[FileReport], threshold: u32) -> bool {
    reports
        .iter()
        .all(|r| r.result.overall_score >= threshold)
}

fn colored_score(score: u32) -> ColoredString {
    let text = score.to_string();
    match score {
        s if s >= 90 => text.green().bold(),
        s if s >= 75 => text.green(),
        s if s >= 50 => text.yellow(),
        _ => text.red(),
    }
}

fn write_breakdown(result: &AnalysisResult) {
    for category in Category::ALL {
        println!(
            "    {:<15}{:>3}/{}",
            display_name(category),
            result.breakdown.get(category),
            category.max_points()
        );
    }
}

fn write_recommendations(result: &AnalysisResult) {
    if result.recommendations.is_empty() {
        return;
    }
    println!("  {}", "Recommendations:".dimmed());
    for (i, rec) in result.recommendations.iter().enumerate() {
        println!("    {}. {}", i + 1, rec);
    }
}

fn write_final_status(reports: &[FileReport], threshold: u32) {
    let lowest = reports
        .iter()
        .map(|r| r.result.overall_score)
        .min()
        .unwrap_or(100);
    if lowest >= threshold {
        println!("  {}  all files at or above {}", "✓ PASS".green(), threshold);
    } else {
        println!(
            "  {}  lowest score {} is below minimum {}",
            "✗ FAIL".red(),
            lowest,
            threshold
        );
    }
}

fn display_name(category: Category) -> &'static str {
    match category {
        Category::Naming => "Naming",
        Category::Modularity => "Modularity",
        Category::Comments => "Comments",
        Category::Formatting => "Formatting",
        Category::Reusability => "Reusability",
        Category::BestPractices => "Best practices",
    }
}
