//! Core data model types for examscore.
//!
//! A question has exactly four options, addressed by position 0..=3 and
//! labeled A..=D in that fixed order. Each option carries two flags: whether
//! it belongs to the official key and whether the candidate marked it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CountError;
use crate::scoring::points_per_question;

/// Number of options every question has.
pub const OPTION_COUNT: usize = 4;

/// Smallest accepted question count.
pub const MIN_QUESTIONS: usize = 1;

/// Largest accepted question count.
pub const MAX_QUESTIONS: usize = 90;

/// The label of an option. Label order is positional and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// All labels in position order.
    pub const ALL: [OptionLabel; OPTION_COUNT] =
        [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    /// Zero-based position of this label.
    pub fn position(self) -> usize {
        match self {
            OptionLabel::A => 0,
            OptionLabel::B => 1,
            OptionLabel::C => 2,
            OptionLabel::D => 3,
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionLabel::A => write!(f, "A"),
            OptionLabel::B => write!(f, "B"),
            OptionLabel::C => write!(f, "C"),
            OptionLabel::D => write!(f, "D"),
        }
    }
}

/// Which of the two flag rows an operation targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// The official key (barem).
    #[default]
    Key,
    /// The candidate's marks.
    Marked,
}

impl Group {
    /// The other group.
    pub fn other(self) -> Self {
        match self {
            Group::Key => Group::Marked,
            Group::Marked => Group::Key,
        }
    }
}

/// Key and mark flags for one option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSlot {
    pub is_key: bool,
    pub is_marked: bool,
}

/// One question's key and marks.
///
/// A scoreable set has between one and three key options. The importer
/// enforces that; interactively entered sets are not re-validated and the
/// scoring engine falls back to zero points for a set with no key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    slots: [OptionSlot; OPTION_COUNT],
}

impl AnswerSet {
    /// An empty set: nothing in the key, nothing marked.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set whose key is `key` and which has no marks.
    pub fn from_key(key: [bool; OPTION_COUNT]) -> Self {
        let mut set = Self::new();
        for (slot, is_key) in set.slots.iter_mut().zip(key) {
            slot.is_key = is_key;
        }
        set
    }

    /// Labeled slots in position order.
    pub fn labeled(&self) -> impl Iterator<Item = (OptionLabel, OptionSlot)> + '_ {
        OptionLabel::ALL.into_iter().zip(self.slots.iter().copied())
    }

    /// Whether the flag of `group` is set at `position`. Out-of-range
    /// positions read as unset.
    pub fn is_set(&self, group: Group, position: usize) -> bool {
        self.slots.get(position).is_some_and(|slot| match group {
            Group::Key => slot.is_key,
            Group::Marked => slot.is_marked,
        })
    }

    /// Flip the flag of `group` at `position`. Out-of-range positions are
    /// ignored.
    pub fn toggle(&mut self, group: Group, position: usize) {
        if let Some(slot) = self.slots.get_mut(position) {
            match group {
                Group::Key => slot.is_key = !slot.is_key,
                Group::Marked => slot.is_marked = !slot.is_marked,
            }
        }
    }

    /// Number of key options (`t`).
    pub fn key_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_key).count()
    }

    /// Number of marked options.
    pub fn marked_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_marked).count()
    }

    /// True when the key has between one and three options.
    pub fn is_scoreable(&self) -> bool {
        (1..OPTION_COUNT).contains(&self.key_count())
    }

    /// Labels of the key options, in position order.
    pub fn key_labels(&self) -> Vec<OptionLabel> {
        self.labeled()
            .filter(|(_, slot)| slot.is_key)
            .map(|(label, _)| label)
            .collect()
    }

    /// Labels of the marked options, in position order.
    pub fn marked_labels(&self) -> Vec<OptionLabel> {
        self.labeled()
            .filter(|(_, slot)| slot.is_marked)
            .map(|(label, _)| label)
            .collect()
    }
}

/// A validated number of questions, within `MIN_QUESTIONS..=MAX_QUESTIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct QuestionCount(usize);

impl QuestionCount {
    pub fn new(n: i64) -> Result<Self, CountError> {
        match usize::try_from(n) {
            Ok(count) if (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) => Ok(Self(count)),
            _ => Err(CountError::OutOfRange(n)),
        }
    }

    /// Parse user-entered text. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, CountError> {
        let trimmed = input.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| CountError::NotANumber(trimmed.to_string()))?;
        Self::new(n)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Maximum score of one question for an exam of this size.
    pub fn points_per_question(self) -> f64 {
        points_per_question(self.0)
    }
}

impl TryFrom<i64> for QuestionCount {
    type Error = CountError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<QuestionCount> for usize {
    fn from(count: QuestionCount) -> Self {
        count.0
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display() {
        assert_eq!(OptionLabel::A.to_string(), "A");
        assert_eq!(OptionLabel::D.to_string(), "D");
    }

    #[test]
    fn label_positions_are_fixed() {
        for (i, label) in OptionLabel::ALL.iter().enumerate() {
            assert_eq!(label.position(), i);
        }
    }

    #[test]
    fn toggle_touches_only_the_focused_group() {
        let mut set = AnswerSet::new();
        set.toggle(Group::Key, 1);
        assert!(set.is_set(Group::Key, 1));
        assert!(!set.is_set(Group::Marked, 1));

        set.toggle(Group::Marked, 1);
        set.toggle(Group::Key, 1);
        assert!(!set.is_set(Group::Key, 1));
        assert!(set.is_set(Group::Marked, 1));

        set.toggle(Group::Key, 7);
        assert_eq!(set, {
            let mut expected = AnswerSet::new();
            expected.toggle(Group::Marked, 1);
            expected
        });
    }

    #[test]
    fn labels_follow_position_order() {
        let mut set = AnswerSet::from_key([false, true, false, true]);
        set.toggle(Group::Marked, 3);
        set.toggle(Group::Marked, 0);
        assert_eq!(set.key_labels(), vec![OptionLabel::B, OptionLabel::D]);
        assert_eq!(set.marked_labels(), vec![OptionLabel::A, OptionLabel::D]);
        assert_eq!(set.key_count(), 2);
        assert_eq!(set.marked_count(), 2);
    }

    #[test]
    fn scoreable_requires_one_to_three_keys() {
        assert!(!AnswerSet::new().is_scoreable());
        assert!(AnswerSet::from_key([true, false, false, false]).is_scoreable());
        assert!(AnswerSet::from_key([true, true, true, false]).is_scoreable());
        assert!(!AnswerSet::from_key([true; 4]).is_scoreable());
    }

    #[test]
    fn question_count_bounds() {
        assert_eq!(QuestionCount::new(1).unwrap().get(), 1);
        assert_eq!(QuestionCount::new(90).unwrap().get(), 90);
        assert_eq!(QuestionCount::new(0), Err(CountError::OutOfRange(0)));
        assert_eq!(QuestionCount::new(91), Err(CountError::OutOfRange(91)));
        assert_eq!(QuestionCount::new(-3), Err(CountError::OutOfRange(-3)));
    }

    #[test]
    fn question_count_parse() {
        assert_eq!(QuestionCount::parse(" 24\n").unwrap().get(), 24);
        assert_eq!(
            QuestionCount::parse("two"),
            Err(CountError::NotANumber("two".into()))
        );
        assert_eq!(
            QuestionCount::parse(""),
            Err(CountError::NotANumber(String::new()))
        );
    }

    #[test]
    fn question_count_serde() {
        let count: QuestionCount = serde_json::from_str("30").unwrap();
        assert_eq!(count.get(), 30);
        assert_eq!(serde_json::to_string(&count).unwrap(), "30");
        assert!(serde_json::from_str::<QuestionCount>("0").is_err());
    }
}
