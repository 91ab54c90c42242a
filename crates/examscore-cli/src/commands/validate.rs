//! The `examscore validate` command.

use std::path::PathBuf;

use anyhow::Result;

use examscore_report::text::{format_score, join_labels};

use super::import_key;

pub fn execute(file: PathBuf) -> Result<()> {
    let key = import_key(&file)?;
    let count = key.question_count();

    println!(
        "Answer key: {} ({} questions, p={} points per question)",
        file.display(),
        count,
        format_score(count.points_per_question())
    );

    for (i, answer) in key.answers().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, join_labels(&answer.key_labels(), "-"));
    }

    println!("Answer key valid.");
    Ok(())
}
