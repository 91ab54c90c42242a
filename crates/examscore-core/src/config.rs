//! examscore configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Export formats understood by the `format` key.
pub const KNOWN_FORMATS: &[&str] = &["json", "markdown", "md", "all"];

/// Top-level examscore configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamscoreConfig {
    /// Where result exports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Write an export after every submission.
    #[serde(default)]
    pub save_results: bool,
    /// Export format: json, markdown or all.
    #[serde(default = "default_format")]
    pub format: String,
    /// Key file loaded when no `--file` is given.
    #[serde(default)]
    pub answer_key: Option<PathBuf>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./examscore-results")
}
fn default_format() -> String {
    "json".to_string()
}

impl Default for ExamscoreConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            save_results: false,
            format: default_format(),
            answer_key: None,
        }
    }
}

impl ExamscoreConfig {
    /// The formats to export, expanded from `format`.
    pub fn formats(&self) -> Result<Vec<&'static str>> {
        parse_formats(&self.format)
    }
}

/// Expand a comma-separated format list. `all` means every format.
pub fn parse_formats(list: &str) -> Result<Vec<&'static str>> {
    let mut formats = Vec::new();
    for part in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let expanded: &[&'static str] = match part {
            "json" => &["json"],
            "markdown" | "md" => &["markdown"],
            "all" => &["json", "markdown"],
            other => anyhow::bail!(
                "unknown report format '{other}' (expected one of: {})",
                KNOWN_FORMATS.join(", ")
            ),
        };
        for f in expanded {
            if !formats.contains(f) {
                formats.push(*f);
            }
        }
    }
    anyhow::ensure!(!formats.is_empty(), "no report format given");
    Ok(formats)
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `examscore.toml` in the current directory
/// 2. `~/.config/examscore/config.toml`
///
/// Environment variable override: `EXAMSCORE_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<ExamscoreConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examscore.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<ExamscoreConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            // relative key paths are relative to the config file
            if let Some(dir) = path.parent() {
                config.answer_key = config
                    .answer_key
                    .take()
                    .map(|key| if key.is_relative() { dir.join(key) } else { key });
            }
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => ExamscoreConfig::default(),
    };

    if let Ok(dir) = std::env::var("EXAMSCORE_OUTPUT_DIR") {
        if !dir.is_empty() {
            config.output_dir = PathBuf::from(dir);
        }
    }

    config.formats().context("invalid `format` in config")?;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examscore"))
}
