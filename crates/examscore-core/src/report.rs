//! Score report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{QuestionReport, ResultSet, BONUS_POINTS};

/// A scored exam, as exported after a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub question_count: usize,
    pub points_per_question: f64,
    /// Bonus included in `total_score`.
    pub bonus: f64,
    pub total_score: f64,
    /// Per-question breakdown, in question order.
    pub questions: Vec<QuestionReport>,
}

impl ScoreReport {
    /// Wrap a result set with a fresh id and timestamp.
    pub fn new(results: &ResultSet, points_per_question: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            question_count: results.len(),
            points_per_question,
            bonus: BONUS_POINTS,
            total_score: results.total_score,
            questions: results.reports.clone(),
        }
    }

    /// Sum of the question scores, without the bonus.
    pub fn earned_points(&self) -> f64 {
        self.questions.iter().map(|q| q.score).sum()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerSet, Group};
    use crate::scoring::compute_total_score;

    fn make_results() -> ResultSet {
        let mut first = AnswerSet::from_key([true, false, false, false]);
        first.toggle(Group::Marked, 0);
        let second = AnswerSet::from_key([false, true, true, false]);
        compute_total_score(&[first, second], 45.0)
    }

    #[test]
    fn new_copies_results() {
        let report = ScoreReport::new(&make_results(), 45.0);
        assert_eq!(report.question_count, 2);
        assert_eq!(report.bonus, 10.0);
        assert_eq!(report.total_score, 55.0);
        assert_eq!(report.earned_points(), 45.0);
        assert_eq!(report.questions[1].number, 2);
    }

    #[test]
    fn json_uses_letter_labels() {
        let report = ScoreReport::new(&make_results(), 45.0);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value["questions"][1]["correct_answers"],
            serde_json::json!(["B", "C"])
        );
    }

    #[test]
    fn json_file_roundtrip() {
        let report = ScoreReport::new(&make_results(), 45.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = ScoreReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.questions, report.questions);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(ScoreReport::load_json(&path).is_err());
    }
}
