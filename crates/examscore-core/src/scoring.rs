//! Per-question scoring with negative marking, and the exam total.
//!
//! For a question worth `p` points with `t` key options:
//!
//! - each marked key option earns `p / t`
//! - each marked non-key option costs `0.66 * p / t`
//! - the result is clamped to `[0, p]`
//!
//! The exam total is the sum of question scores plus a fixed bonus.

use serde::{Deserialize, Serialize};

use crate::model::{AnswerSet, OptionLabel};

/// Points awarded to every candidate regardless of answers.
pub const BONUS_POINTS: f64 = 10.0;

/// Fraction of `p / t` deducted per marked non-key option.
pub const PENALTY_FACTOR: f64 = 0.66;

/// Total points shared by the questions, excluding the bonus.
pub const EXAM_POINTS: f64 = 90.0;

/// Maximum score of one question for an exam of `question_count` questions.
///
/// The 24-question exam is pinned to 3.75 as the historical rule; every
/// other size splits `EXAM_POINTS` evenly. `question_count` must be
/// non-zero; use [`QuestionCount`](crate::model::QuestionCount) to get one.
pub fn points_per_question(question_count: usize) -> f64 {
    if question_count == 24 {
        3.75
    } else {
        EXAM_POINTS / question_count as f64
    }
}

/// Breakdown of one scored question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionReport {
    /// 1-based question number.
    pub number: usize,
    /// Points achieved, within `[0, max_score]`.
    pub score: f64,
    /// Points available for this question.
    pub max_score: f64,
    /// Key options, in position order.
    pub correct_answers: Vec<OptionLabel>,
    /// Marked options, in position order.
    pub marked_answers: Vec<OptionLabel>,
    /// Marks that hit a key option.
    pub correct_count: u32,
    /// Marks that missed the key.
    pub incorrect_count: u32,
}

/// Score a single question.
///
/// Never fails. A set with no key options scores zero; its marks are still
/// reported and all of them count as incorrect.
pub fn compute_question_score(
    number: usize,
    answer: &AnswerSet,
    points_per_question: f64,
) -> QuestionReport {
    let mut report = QuestionReport {
        number,
        score: 0.0,
        max_score: points_per_question,
        correct_answers: answer.key_labels(),
        marked_answers: answer.marked_labels(),
        correct_count: 0,
        incorrect_count: 0,
    };

    for (_, slot) in answer.labeled().filter(|(_, slot)| slot.is_marked) {
        if slot.is_key {
            report.correct_count += 1;
        } else {
            report.incorrect_count += 1;
        }
    }

    let t = answer.key_count();
    if t == 0 {
        return report;
    }

    let share = points_per_question / t as f64;
    let raw = f64::from(report.correct_count) * share
        - f64::from(report.incorrect_count) * (PENALTY_FACTOR * points_per_question / t as f64);
    report.score = raw.min(points_per_question).max(0.0);
    report
}

/// Scores for a whole exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Sum of question scores plus [`BONUS_POINTS`].
    pub total_score: f64,
    /// One report per question, in question order.
    pub reports: Vec<QuestionReport>,
}

impl ResultSet {
    /// Sum of the question scores, without the bonus.
    pub fn earned_points(&self) -> f64 {
        self.reports.iter().map(|r| r.score).sum()
    }

    /// Highest reachable total, bonus included.
    pub fn max_total(&self) -> f64 {
        self.reports.iter().map(|r| r.max_score).sum::<f64>() + BONUS_POINTS
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Score every question in order and add the bonus.
pub fn compute_total_score(answers: &[AnswerSet], points_per_question: f64) -> ResultSet {
    let reports: Vec<QuestionReport> = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| compute_question_score(i + 1, answer, points_per_question))
        .collect();

    let total_score = reports.iter().map(|r| r.score).sum::<f64>() + BONUS_POINTS;

    ResultSet {
        total_score,
        reports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Group;

    const EPS: f64 = 1e-9;

    fn answer(key: [bool; 4], marked: [bool; 4]) -> AnswerSet {
        let mut set = AnswerSet::from_key(key);
        for (i, m) in marked.into_iter().enumerate() {
            if m {
                set.toggle(Group::Marked, i);
            }
        }
        set
    }

    #[test]
    fn points_per_question_rule() {
        assert_eq!(points_per_question(24), 3.75);
        assert_eq!(points_per_question(30), 3.0);
        assert!((points_per_question(7) - 90.0 / 7.0).abs() < EPS);
        assert_eq!(points_per_question(1), 90.0);
    }

    #[test]
    fn exact_key_gets_full_credit() {
        for p in [3.75, 3.0, 90.0 / 7.0, 1.0, 90.0] {
            for key in [
                [true, false, false, false],
                [false, true, false, true],
                [true, true, true, false],
                [false, true, true, true],
            ] {
                let report = compute_question_score(1, &answer(key, key), p);
                assert!((report.score - p).abs() < EPS, "p={p} key={key:?}");
                assert!(report.score <= p);
            }
        }
    }

    #[test]
    fn no_marks_scores_zero() {
        let report = compute_question_score(1, &answer([true, true, true, false], [false; 4]), 3.0);
        assert_eq!(report.score, 0.0);
        assert!(report.marked_answers.is_empty());
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.incorrect_count, 0);
    }

    #[test]
    fn only_wrong_marks_clamp_to_zero() {
        let report = compute_question_score(
            1,
            &answer([true, false, false, false], [false, true, true, true]),
            3.75,
        );
        assert_eq!(report.score, 0.0);
        assert_eq!(report.incorrect_count, 3);
    }

    #[test]
    fn partial_key_gets_share() {
        let report = compute_question_score(
            3,
            &answer([true, true, false, false], [true, false, false, false]),
            3.75,
        );
        assert!((report.score - 1.875).abs() < EPS);
        assert_eq!(report.number, 3);
        assert_eq!(report.correct_answers, vec![OptionLabel::A, OptionLabel::B]);
        assert_eq!(report.marked_answers, vec![OptionLabel::A]);
    }

    #[test]
    fn wrong_mark_is_penalized() {
        let report = compute_question_score(
            1,
            &answer([true, false, false, false], [true, true, false, false]),
            3.75,
        );
        assert!((report.score - 1.275).abs() < EPS);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.incorrect_count, 1);
    }

    #[test]
    fn marking_everything_never_exceeds_max() {
        let report = compute_question_score(1, &answer([true, true, true, false], [true; 4]), 3.0);
        // 3 * 1.0 - 1 * 0.66
        assert!((report.score - 2.34).abs() < EPS);
        assert!(report.score <= report.max_score);
    }

    #[test]
    fn empty_key_scores_zero_but_keeps_marks() {
        let report = compute_question_score(2, &answer([false; 4], [true, false, true, false]), 3.75);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.max_score, 3.75);
        assert!(report.correct_answers.is_empty());
        assert_eq!(report.marked_answers, vec![OptionLabel::A, OptionLabel::C]);
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.incorrect_count, 2);
    }

    #[test]
    fn score_stays_in_bounds_for_every_set() {
        let p = 3.75;
        for bits in 0u16..256 {
            let key = [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0];
            let marked = [bits & 16 != 0, bits & 32 != 0, bits & 64 != 0, bits & 128 != 0];
            let report = compute_question_score(1, &answer(key, marked), p);
            assert!(report.score >= 0.0 && report.score <= p, "bits={bits:08b}");
        }
    }

    #[test]
    fn total_adds_bonus() {
        let answers = vec![
            answer([true, false, false, false], [true, false, false, false]),
            answer([true, true, false, false], [true, false, false, false]),
            answer([false, false, true, false], [false; 4]),
        ];
        let results = compute_total_score(&answers, 3.75);
        let sum: f64 = results.reports.iter().map(|r| r.score).sum();
        assert!((results.total_score - (sum + BONUS_POINTS)).abs() < EPS);
        assert!((results.total_score - (3.75 + 1.875 + 10.0)).abs() < EPS);
        assert_eq!(
            results.reports.iter().map(|r| r.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn empty_exam_of_thirty_scores_bonus_only() {
        let answers = vec![AnswerSet::from_key([true, true, true, false]); 30];
        let results = compute_total_score(&answers, points_per_question(30));
        assert_eq!(results.total_score, 10.0);
        assert_eq!(results.len(), 30);
        assert!((results.max_total() - 100.0).abs() < EPS);
    }

    #[test]
    fn total_is_idempotent() {
        let answers = vec![answer([true, false, true, false], [true, true, false, false]); 5];
        let first = compute_total_score(&answers, 18.0);
        let second = compute_total_score(&answers, 18.0);
        assert_eq!(first, second);
    }
}
