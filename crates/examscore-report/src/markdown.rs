//! Markdown report generator.

use std::path::Path;

use anyhow::{Context, Result};

use examscore_core::report::ScoreReport;

use crate::text::{format_score, join_labels};

/// Generate a Markdown document from a score report.
pub fn generate_markdown(report: &ScoreReport) -> String {
    let mut md = String::new();

    md.push_str("# Exam score\n\n");
    md.push_str(&format!(
        "**Total:** {} (including {} bonus points)\n\n",
        format_score(report.total_score),
        format_score(report.bonus)
    ));
    md.push_str(&format!(
        "**Earned on questions:** {}\n\n",
        format_score(report.earned_points())
    ));
    md.push_str(&format!(
        "{} questions, {} points per question, created {}\n\n",
        report.question_count,
        format_score(report.points_per_question),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("| # | Key | Marked | Correct | Wrong | Score |\n");
    md.push_str("|---|-----|--------|---------|-------|-------|\n");
    for q in &report.questions {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} / {} |\n",
            q.number,
            join_labels(&q.correct_answers, "-"),
            join_labels(&q.marked_answers, "-"),
            q.correct_count,
            q.incorrect_count,
            format_score(q.score),
            format_score(q.max_score),
        ));
    }

    md
}

/// Write a Markdown report to a file.
pub fn write_markdown_report(report: &ScoreReport, path: &Path) -> Result<()> {
    let md = generate_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)
        .with_context(|| format!("failed to write Markdown report to {}", path.display()))?;
    Ok(())
}
