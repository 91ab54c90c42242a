//! Decodes typed tokens into session commands.
//!
//! Input is read a line at a time and split on whitespace, so several
//! commands can be entered at once (`a l a n`). Each token is decoded
//! against the screen that is current when it is applied.

use examscore_core::session::{Command, Direction, StateTag};

/// Decode one token for the given screen. Unknown tokens yield `None`.
pub fn decode(token: &str, screen: StateTag) -> Option<Command> {
    let lower = token.to_lowercase();
    let command = match (screen, lower.as_str()) {
        (StateTag::Finished, _) => return None,
        (_, "q" | "quit" | "exit") => Command::Quit,

        (StateTag::CollectingCount, _) => Command::ConfirmCount(token.to_string()),

        (StateTag::EnteringAnswers, "left" | "<" | "k" | "h") => {
            Command::MoveCursor(Direction::Left)
        }
        (StateTag::EnteringAnswers, "right" | ">" | "l") => Command::MoveCursor(Direction::Right),
        (StateTag::EnteringAnswers, "up" | "down" | "j" | "m" | "g") => Command::SwitchGroup,
        (StateTag::EnteringAnswers, "a" | "x" | "space") => Command::Toggle,
        (StateTag::EnteringAnswers, "n" | "tab" | "next") => Command::NextQuestion,
        (StateTag::EnteringAnswers, "p" | "b" | "prev") => Command::PreviousQuestion,
        (StateTag::EnteringAnswers, "s" | "submit" | "enter") => Command::Submit,

        (StateTag::ShowingResults, "left" | "<" | "p" | "prev") => Command::ShowPreviousReport,
        (StateTag::ShowingResults, "right" | ">" | "n" | "next") => Command::ShowNextReport,
        (StateTag::ShowingResults, "r" | "reset") => Command::Reset,

        _ => return None,
    };
    Some(command)
}
