use std::path::Path;

use anyhow::Result;

use examscore_core::importer::{load_answer_key, AnswerKey};

pub mod init;
pub mod session;
pub mod validate;

/// Import an answer key. When the error points at a line that exists in
/// the file, the line is quoted in front of the message.
pub fn import_key(path: &Path) -> Result<AnswerKey> {
    load_answer_key(path).map_err(|e| {
        let quoted = e.line().and_then(|n| {
            let content = std::fs::read_to_string(path).ok()?;
            let text = content.lines().nth(n - 1)?.trim().to_string();
            Some(format!("{}:{n}: `{text}`", path.display()))
        });
        match quoted {
            Some(context) => anyhow::Error::new(e).context(context),
            None => anyhow::Error::new(e),
        }
    })
}
