//! Plain-text formatting of scores and option labels.

use examscore_core::model::OptionLabel;
use examscore_core::scoring::QuestionReport;

/// A score with two decimals.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// Labels joined with ", ", or `empty` when there are none.
pub fn join_labels(labels: &[OptionLabel], empty: &str) -> String {
    if labels.is_empty() {
        return empty.to_string();
    }
    labels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The detail block for one question.
pub fn render_question(report: &QuestionReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Question {}:\n", report.number));
    out.push_str(&format!(
        "  Correct answers: {}\n",
        join_labels(&report.correct_answers, "(no key)")
    ));
    out.push_str(&format!(
        "  Marked answers: {}\n",
        join_labels(&report.marked_answers, "(none marked)")
    ));
    out.push_str(&format!(
        "  Correct marks: {} | Wrong marks: {}\n",
        report.correct_count, report.incorrect_count
    ));
    out.push_str(&format!(
        "  Score: {} / {}\n",
        format_score(report.score),
        format_score(report.max_score)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_have_two_decimals() {
        assert_eq!(format_score(1.875), "1.88");
        assert_eq!(format_score(10.0), "10.00");
        assert_eq!(format_score(0.0), "0.00");
    }

    #[test]
    fn labels_join_in_order() {
        assert_eq!(
            join_labels(&[OptionLabel::A, OptionLabel::C], "-"),
            "A, C"
        );
        assert_eq!(join_labels(&[], "(none marked)"), "(none marked)");
    }

    #[test]
    fn question_block() {
        let report = QuestionReport {
            number: 4,
            score: 1.5,
            max_score: 3.75,
            correct_answers: vec![OptionLabel::A],
            marked_answers: vec![],
            correct_count: 0,
            incorrect_count: 0,
        };
        let text = render_question(&report);
        assert!(text.starts_with("Question 4:"));
        assert!(text.contains("Correct answers: A"));
        assert!(text.contains("Marked answers: (none marked)"));
        assert!(text.contains("Score: 1.50 / 3.75"));
    }
}
