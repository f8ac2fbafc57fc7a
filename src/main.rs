use exception_totals::logging;
use exception_totals::runner::{self, RunOutcome};
use anyhow::Context;
use exception_totals::shared::config::load_settings;
use std::process::ExitCode;
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
    let settings = load_settings().context("Failed to load configuration")?;
    logging::init(&settings.logging)?;
    info!("Starting exception totals run");

    let outcome = runner::run(&settings);

    match &outcome {
        RunOutcome::Aborted { reason } => {
            eprintln!("Run aborted, totals left untouched: {}", reason);
        }
        RunOutcome::Completed {
            totals, persisted, ..
        } => {
            print!("{}", runner::render_table(totals));
            if let Err(e) = persisted {
                eprintln!(
                    "Could not write running totals, rerun once the problem is fixed: {}",
                    e
                );
            }
        }
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
