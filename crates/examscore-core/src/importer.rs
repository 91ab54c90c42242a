//! Answer-key file importer.
//!
//! The format is line based:
//!
//! ```text
//! 3        <- number of questions
//! 1010     <- question 1: A and C are correct
//! 0100     <- question 2: B is correct
//! AffA     <- question 3: A and D are correct
//! ```
//!
//! Each answer line has exactly four characters. `1`, `A` and `a` mark a
//! correct option; `0`, `F` and `f` an incorrect one. Every question needs
//! between one and three correct options. Lines are trimmed before they are
//! checked and anything after the last question is ignored.

use std::path::Path;

use crate::error::ImportError;
use crate::model::{AnswerSet, QuestionCount, OPTION_COUNT};

/// A successfully imported key: one scoreable answer set per question,
/// with no marks.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerKey {
    question_count: QuestionCount,
    answers: Vec<AnswerSet>,
}

impl AnswerKey {
    pub fn question_count(&self) -> QuestionCount {
        self.question_count
    }

    pub fn answers(&self) -> &[AnswerSet] {
        &self.answers
    }

    pub fn into_answers(self) -> Vec<AnswerSet> {
        self.answers
    }
}

/// Read and parse an answer-key file.
pub fn load_answer_key(path: &Path) -> Result<AnswerKey, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let key = parse_answer_key_str(&content)?;
    tracing::info!(
        "imported {} questions from {}",
        key.question_count,
        path.display()
    );
    Ok(key)
}

/// Parse answer-key text. Nothing is returned unless every line is valid.
pub fn parse_answer_key_str(content: &str) -> Result<AnswerKey, ImportError> {
    let mut lines = content.lines();

    let first = lines.next().ok_or(ImportError::Empty)?;
    let question_count = QuestionCount::parse(first).map_err(ImportError::InvalidCount)?;

    let mut answers = Vec::with_capacity(question_count.get());
    for question in 1..=question_count.get() {
        let line_number = question + 1;
        let line = lines
            .next()
            .ok_or(ImportError::MissingAnswers { line: line_number })?;
        answers.push(parse_answer_line(line.trim(), line_number)?);
    }

    Ok(AnswerKey {
        question_count,
        answers,
    })
}

/// Parse one trimmed answer line into a key-only answer set.
fn parse_answer_line(line: &str, line_number: usize) -> Result<AnswerSet, ImportError> {
    let found = line.chars().count();
    if found != OPTION_COUNT {
        return Err(ImportError::WrongLength {
            line: line_number,
            found,
        });
    }

    let mut key = [false; OPTION_COUNT];
    for (slot, character) in key.iter_mut().zip(line.chars()) {
        *slot = match character {
            '1' | 'A' | 'a' => true,
            '0' | 'F' | 'f' => false,
            _ => {
                return Err(ImportError::InvalidCharacter {
                    line: line_number,
                    character,
                })
            }
        };
    }

    let answer = AnswerSet::from_key(key);
    if !answer.is_scoreable() {
        return Err(ImportError::KeyCount {
            line: line_number,
            question: line_number - 1,
            found: answer.key_count(),
        });
    }

    Ok(answer)
}
