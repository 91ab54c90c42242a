//! The interactive session (default command).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use examscore_core::config::{load_config_from, parse_formats};
use examscore_core::report::ScoreReport;
use examscore_core::session::{Command, Controller, State, StateTag};
use examscore_report::write_reports;

use super::import_key;
use crate::{input, view};

/// Where and how results are exported after a submission.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub formats: Vec<&'static str>,
}

pub fn execute(
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    // An import error ends the program before the session starts.
    let controller = match file.or_else(|| config.answer_key.clone()) {
        Some(path) => Controller::from_key(import_key(&path)?),
        None => Controller::new(),
    };

    let export = if output.is_some() || format.is_some() || config.save_results {
        let formats = match &format {
            Some(f) => parse_formats(f)?,
            None => config.formats()?,
        };
        Some(ExportSettings {
            output_dir: output.unwrap_or(config.output_dir),
            formats,
        })
    } else {
        None
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(controller, stdin.lock(), stdout.lock(), export.as_ref())
}

/// Drive `controller` with commands read from `input` until the user quits
/// or the input ends.
pub fn run<R: BufRead, W: Write>(
    mut controller: Controller,
    input: R,
    mut out: W,
    export: Option<&ExportSettings>,
) -> Result<()> {
    write!(out, "{}", view::render(controller.state()))?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        for token in line.split_whitespace() {
            let screen = controller.tag();
            let Some(command) = input::decode(token, screen) else {
                tracing::warn!("ignoring unknown command '{token}'");
                continue;
            };

            let submitted = screen == StateTag::EnteringAnswers && command == Command::Submit;
            controller.apply(command);

            if submitted {
                on_submit(controller.state(), &mut out, export)?;
            }
            if controller.is_finished() {
                break;
            }
        }

        if controller.is_finished() {
            break;
        }

        writeln!(out)?;
        write!(out, "{}", view::render(controller.state()))?;
        out.flush()?;
    }

    Ok(())
}

/// Print the summary table and export the results if asked to.
fn on_submit<W: Write>(state: &State, out: &mut W, export: Option<&ExportSettings>) -> Result<()> {
    let State::ShowingResults(results) = state else {
        return Ok(());
    };

    writeln!(out, "\n{}", view::summary_table(results.results()))?;

    if let Some(export) = export {
        let report = ScoreReport::new(results.results(), results.points_per_question());
        match write_reports(&report, &export.output_dir, &export.formats) {
            Ok(paths) => {
                for path in paths {
                    tracing::info!("saved results to {}", path.display());
                    eprintln!("Results saved to: {}", path.display());
                }
            }
            // The session stays usable when the export fails.
            Err(e) => eprintln!("Could not save results: {e:#}"),
        }
    }

    Ok(())
}
