//! examscore-report: result exports.
//!
//! Writes a [`ScoreReport`] to disk as JSON and/or Markdown and provides the
//! plain-text formatting shared by the exports and the terminal screens.

use std::path::{Path, PathBuf};

use anyhow::Result;

use examscore_core::report::ScoreReport;

pub mod markdown;
pub mod text;

/// Write `report` to `output_dir` once per format and return the paths.
///
/// File names carry the report timestamp and the first eight hex digits of
/// the report id, e.g. `score-2025-07-20T101500-3f2a9c1e.json`, so exams
/// submitted within the same second get separate files.
pub fn write_reports(
    report: &ScoreReport,
    output_dir: &Path,
    formats: &[&str],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let id = report.id.simple().to_string();
    let stem = format!(
        "score-{}-{}",
        report.created_at.format("%Y-%m-%dT%H%M%S"),
        &id[..8]
    );

    let mut written = Vec::new();
    for format in formats {
        let path = match *format {
            "json" => {
                let path = output_dir.join(format!("{stem}.json"));
                report.save_json(&path)?;
                path
            }
            "markdown" | "md" => {
                let path = output_dir.join(format!("{stem}.md"));
                markdown::write_markdown_report(report, &path)?;
                path
            }
            other => anyhow::bail!("unknown report format: {other}"),
        };
        written.push(path);
    }

    Ok(written)
}
