//! examscore CLI: interactive admission exam score calculator.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod view;

/// Release tag printed by `--version`.
pub const VERSION: &str = "v25.09";

#[derive(Parser)]
#[command(
    name = "examscore",
    about = "Admission exam score calculator with negative marking"
)]
struct Cli {
    /// Print the version and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Answer-key file to start from (skips the question-count prompt)
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save results to this directory after each submission
    #[arg(long)]
    output: Option<PathBuf>,

    /// Export format: json, markdown, all (implies saving)
    #[arg(long)]
    format: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an answer-key file without starting a session
    Validate {
        /// Path to the answer-key file
        #[arg(short = 'f', long)]
        file: PathBuf,
    },

    /// Create a starter config and an example answer key
    Init,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("examscore=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// True when `-v` or `--version` appears before any `--`. Checked ahead of
/// clap so that a subcommand with missing arguments still prints the version.
fn wants_version<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter()
        .map(|a| a.as_ref().to_owned())
        .take_while(|a| a != "--")
        .any(|a| a == "-v" || a == "--version")
}

fn main() {
    init_logging();

    if wants_version(std::env::args_os().skip(1)) {
        println!("examscore {VERSION}");
        return;
    }

    let cli = Cli::parse();

    if cli.version {
        println!("examscore {VERSION}");
        return;
    }

    let result = match cli.command {
        Some(Commands::Validate { file }) => commands::validate::execute(file),
        Some(Commands::Init) => commands::init::execute(),
        None => commands::session::execute(cli.file, cli.config, cli.output, cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_flag_is_found_anywhere() {
        assert!(wants_version(["-v"]));
        assert!(wants_version(["validate", "--version"]));
        assert!(wants_version(["-f", "key.txt", "-v"]));
        assert!(!wants_version(["validate", "-f", "key.txt"]));
        assert!(!wants_version(["--", "-v"]));
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["examscore", "-f", "key.txt", "--format", "all"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("key.txt")));
        assert_eq!(cli.format.as_deref(), Some("all"));
        assert!(cli.command.is_none());
    }
}
