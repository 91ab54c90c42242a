//! Plain-text screens for each session state.

use comfy_table::{Cell, Table};

use examscore_core::model::{AnswerSet, Group, OptionLabel};
use examscore_core::scoring::{ResultSet, BONUS_POINTS};
use examscore_core::session::{ResultView, Session, State};
use examscore_report::text::{format_score, join_labels, render_question};

use crate::VERSION;

const RULE: &str = "──────────────────────────────────────────────────";

const ANSWER_HELP: &str = "Commands (several per line are fine):
  m / up / down   switch between key and marked answers
  < / k , > / l   move left / right
  a / x           toggle the selected option
  n / p           next / previous question
  s               calculate the score
  q               quit";

/// Render the screen for `state`.
pub fn render(state: &State) -> String {
    match state {
        State::CollectingCount { error } => {
            let mut out = format!("examscore {VERSION} - admission exam score calculator\n\n");
            out.push_str("Enter the number of questions (24 or 30):\n");
            if let Some(error) = error {
                out.push_str(&format!("Error: {error}\n"));
            }
            out.push_str("\nType a number and press Enter to continue, q to quit.\n");
            out
        }
        State::EnteringAnswers(session) => render_session(session),
        State::ShowingResults(view) => render_results(view),
        State::Finished => String::new(),
    }
}

fn render_session(session: &Session) -> String {
    let cursor = session.cursor();
    let answer = session.current_answer();

    let mut out = format!(
        "Question {}/{} (p={} points per question)\n",
        session.current_index() + 1,
        session.question_count(),
        format_score(session.points_per_question())
    );
    let focus = |row: Group| (cursor.group == row).then_some(cursor.position);
    out.push_str("Key (correct answers):\n");
    out.push_str(&render_row(answer, Group::Key, focus(Group::Key)));
    out.push_str("\nMarked answers:\n");
    out.push_str(&render_row(answer, Group::Marked, focus(Group::Marked)));
    out.push_str("\n\n");
    out.push_str(ANSWER_HELP);
    out.push('\n');
    out
}

/// One row of checkboxes. The focused box is wrapped in `>` `<`.
fn render_row(answer: &AnswerSet, group: Group, focused: Option<usize>) -> String {
    OptionLabel::ALL
        .iter()
        .map(|label| {
            let position = label.position();
            let mark = if answer.is_set(group, position) { "x" } else { " " };
            if focused == Some(position) {
                format!(">[{mark}] {label}<")
            } else {
                format!(" [{mark}] {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_results(view: &ResultView) -> String {
    let results = view.results();
    let mut out = format!(
        "Total score: {} / {} (including {} bonus points)\n",
        format_score(results.total_score),
        format_score(results.max_total()),
        BONUS_POINTS
    );
    out.push_str(&format!(
        "Earned on questions: {}\n\n",
        format_score(results.earned_points())
    ));

    if let Some(report) = view.current_report() {
        out.push_str(&format!(
            "Question {} of {}\n",
            view.cursor() + 1,
            results.len()
        ));
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&render_question(report));
        out.push_str(RULE);
        out.push('\n');
    }

    let mut hints = Vec::new();
    if view.has_previous() {
        hints.push("< previous question");
    }
    if view.has_next() {
        hints.push("next question >");
    }
    if !hints.is_empty() {
        out.push_str(&format!("\n{}\n", hints.join(" | ")));
    }

    out.push_str("\nr to reset, q to quit.\n");
    out
}

/// Per-question table shown once after a submission.
pub fn summary_table(results: &ResultSet) -> String {
    let mut table = Table::new();
    table.set_header(vec!["#", "Key", "Marked", "Correct", "Wrong", "Score"]);

    for r in &results.reports {
        table.add_row(vec![
            Cell::new(r.number),
            Cell::new(join_labels(&r.correct_answers, "-")),
            Cell::new(join_labels(&r.marked_answers, "-")),
            Cell::new(r.correct_count),
            Cell::new(r.incorrect_count),
            Cell::new(format!(
                "{} / {}",
                format_score(r.score),
                format_score(r.max_score)
            )),
        ]);
    }

    table.to_string()
}
