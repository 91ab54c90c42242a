//! The `examscore init` command.

use std::path::Path;

use anyhow::{Context, Result};

/// Files written by `init`, relative to the current directory.
const STARTER_FILES: [(&str, &str); 2] = [
    ("examscore.toml", SAMPLE_CONFIG),
    ("keys/example.txt", EXAMPLE_KEY),
];

pub fn execute() -> Result<()> {
    for (name, content) in STARTER_FILES {
        if write_if_missing(Path::new(name), content)? {
            println!("wrote {name}");
        } else {
            println!("kept {name} (already present)");
        }
    }

    println!();
    println!("Copy the official key into keys/ in the same format as keys/example.txt,");
    println!("check it with `examscore validate -f keys/<file>.txt`, then score a");
    println!("candidate with `examscore -f keys/<file>.txt`.");

    Ok(())
}

/// Write `content` to `path` unless something is already there.
/// Returns whether the file was written.
fn write_if_missing(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

const SAMPLE_CONFIG: &str = r#"# examscore configuration

# Where result exports are written.
output_dir = "./examscore-results"

# Export the results after every submission.
save_results = false

# json, markdown or all
format = "json"

# Key file to load when --file is not given.
# answer_key = "keys/example.txt"
"#;

const EXAMPLE_KEY: &str = "24
1000
0110
0001
1010
0100
0011
1100
0010
1001
0101
1110
0001
1000
0100
0010
1011
0110
1000
0001
0101
1010
0010
0111
1100
";
