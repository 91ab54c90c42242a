//! Session state machine.
//!
//! The session moves through three screens:
//!
//! ```text
//! CollectingCount --confirm count--> EnteringAnswers --submit--> ShowingResults
//!        ^                                                            |
//!        +---------------------------reset----------------------------+
//! ```
//!
//! Any screen accepts `Quit`, after which every command is ignored.
//! [`transition`] is a pure function of the current state and a command;
//! [`Controller`] owns the state for the control loop.

use serde::{Deserialize, Serialize};

use crate::error::CountError;
use crate::importer::AnswerKey;
use crate::model::{AnswerSet, Group, QuestionCount, OPTION_COUNT};
use crate::scoring::{compute_total_score, QuestionReport, ResultSet};

/// Horizontal cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// A logical input, independent of how it was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Confirm the question count. Carries the text as entered so that
    /// non-numeric input is reported like any other invalid count.
    ConfirmCount(String),
    MoveCursor(Direction),
    SwitchGroup,
    Toggle,
    NextQuestion,
    PreviousQuestion,
    Submit,
    Reset,
    ShowPreviousReport,
    ShowNextReport,
    Quit,
}

/// Which option the cursor is on, and in which row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub group: Group,
    pub position: usize,
}

/// Answers being entered for an exam.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    question_count: QuestionCount,
    points_per_question: f64,
    answers: Vec<AnswerSet>,
    current: usize,
    cursor: Cursor,
}

impl Session {
    /// A session of `count` empty questions.
    pub fn new(count: QuestionCount) -> Self {
        Self {
            question_count: count,
            points_per_question: count.points_per_question(),
            answers: vec![AnswerSet::new(); count.get()],
            current: 0,
            cursor: Cursor::default(),
        }
    }

    /// A session seeded from an imported key.
    pub fn from_key(key: AnswerKey) -> Self {
        let question_count = key.question_count();
        Self {
            question_count,
            points_per_question: question_count.points_per_question(),
            answers: key.into_answers(),
            current: 0,
            cursor: Cursor::default(),
        }
    }

    pub fn question_count(&self) -> usize {
        self.question_count.get()
    }

    pub fn points_per_question(&self) -> f64 {
        self.points_per_question
    }

    /// Zero-based index of the question being edited.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_answer(&self) -> &AnswerSet {
        &self.answers[self.current]
    }

    pub fn answers(&self) -> &[AnswerSet] {
        &self.answers
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_first_question(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.answers.len()
    }

    /// Move the cursor one option left or right. Stops at the edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.position = match direction {
            Direction::Left => self.cursor.position.saturating_sub(1),
            Direction::Right => (self.cursor.position + 1).min(OPTION_COUNT - 1),
        };
    }

    /// Move the cursor to the other row.
    pub fn switch_group(&mut self) {
        self.cursor.group = self.cursor.group.other();
    }

    /// Flip the focused flag of the current question.
    pub fn toggle(&mut self) {
        let Cursor { group, position } = self.cursor;
        self.answers[self.current].toggle(group, position);
    }

    /// Go to the next question, if there is one.
    pub fn next_question(&mut self) {
        if !self.is_last_question() {
            self.current += 1;
            self.cursor = Cursor::default();
        }
    }

    /// Go to the previous question, if there is one.
    pub fn previous_question(&mut self) {
        if !self.is_first_question() {
            self.current -= 1;
            self.cursor = Cursor::default();
        }
    }

    /// Score every question as it stands.
    pub fn score(&self) -> ResultSet {
        compute_total_score(&self.answers, self.points_per_question)
    }
}

/// Read-only review of a scored exam.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    results: ResultSet,
    points_per_question: f64,
    cursor: usize,
}

impl ResultView {
    pub fn new(results: ResultSet, points_per_question: f64) -> Self {
        Self {
            results,
            points_per_question,
            cursor: 0,
        }
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn points_per_question(&self) -> f64 {
        self.points_per_question
    }

    /// Index of the report on display.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_report(&self) -> Option<&QuestionReport> {
        self.results.reports.get(self.cursor)
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.results.len()
    }

    pub fn show_previous(&mut self) {
        if self.has_previous() {
            self.cursor -= 1;
        }
    }

    pub fn show_next(&mut self) {
        if self.has_next() {
            self.cursor += 1;
        }
    }
}

/// The screen the session is on.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    /// Waiting for the number of questions. `error` holds the last
    /// rejected entry, for display only.
    CollectingCount { error: Option<CountError> },
    EnteringAnswers(Session),
    ShowingResults(ResultView),
    /// The user quit.
    Finished,
}

impl Default for State {
    fn default() -> Self {
        State::CollectingCount { error: None }
    }
}

/// A fieldless tag for each [`State`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateTag {
    CollectingCount,
    EnteringAnswers,
    ShowingResults,
    Finished,
}

impl State {
    pub fn tag(&self) -> StateTag {
        match self {
            State::CollectingCount { .. } => StateTag::CollectingCount,
            State::EnteringAnswers(_) => StateTag::EnteringAnswers,
            State::ShowingResults(_) => StateTag::ShowingResults,
            State::Finished => StateTag::Finished,
        }
    }
}

/// Apply one command. Commands with no meaning on the current screen leave
/// the state as it is.
pub fn transition(state: State, command: Command) -> State {
    match (state, command) {
        (State::Finished, _) => State::Finished,
        (_, Command::Quit) => State::Finished,

        (State::CollectingCount { .. }, Command::ConfirmCount(input)) => {
            match QuestionCount::parse(&input) {
                Ok(count) => State::EnteringAnswers(Session::new(count)),
                Err(error) => {
                    tracing::debug!("rejected question count: {error}");
                    State::CollectingCount { error: Some(error) }
                }
            }
        }

        (State::EnteringAnswers(mut session), command) => match command {
            Command::MoveCursor(direction) => {
                session.move_cursor(direction);
                State::EnteringAnswers(session)
            }
            Command::SwitchGroup => {
                session.switch_group();
                State::EnteringAnswers(session)
            }
            Command::Toggle => {
                session.toggle();
                State::EnteringAnswers(session)
            }
            Command::NextQuestion => {
                session.next_question();
                State::EnteringAnswers(session)
            }
            Command::PreviousQuestion => {
                session.previous_question();
                State::EnteringAnswers(session)
            }
            Command::Submit => {
                let results = session.score();
                tracing::info!(
                    "scored {} questions, total {:.2}",
                    results.len(),
                    results.total_score
                );
                State::ShowingResults(ResultView::new(results, session.points_per_question()))
            }
            _ => State::EnteringAnswers(session),
        },

        (State::ShowingResults(mut view), command) => match command {
            Command::ShowPreviousReport => {
                view.show_previous();
                State::ShowingResults(view)
            }
            Command::ShowNextReport => {
                view.show_next();
                State::ShowingResults(view)
            }
            Command::Reset => State::default(),
            _ => State::ShowingResults(view),
        },

        (state, _) => state,
    }
}

/// Owns the session state for a single control loop.
#[derive(Debug, Default)]
pub struct Controller {
    state: State,
}

impl Controller {
    /// Start on the count screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on the answer screen with an imported key.
    pub fn from_key(key: AnswerKey) -> Self {
        Self {
            state: State::EnteringAnswers(Session::from_key(key)),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn tag(&self) -> StateTag {
        self.state.tag()
    }

    pub fn is_finished(&self) -> bool {
        self.tag() == StateTag::Finished
    }

    pub fn apply(&mut self, command: Command) {
        tracing::debug!("{:?} <- {:?}", self.tag(), command);
        let state = std::mem::take(&mut self.state);
        self.state = transition(state, command);
    }
}
