pub mod errors;
pub mod outcome;
pub mod render;

pub use errors::RunError;
pub use outcome::RunOutcome;
pub use render::render_table;

use crate::engine::accumulate;
use crate::shared::config::Settings;
use crate::store::{BatchReader, TotalsStore};
use tracing::{info, warn};

/// Runs the pipeline once: read the batch, load the prior totals, fold the
/// batch in and write the result back. Failures are returned in the outcome.
pub fn run(settings: &Settings) -> RunOutcome {
    let category = settings.tally.category.as_str();
    let reader = BatchReader::new(&settings.files.incoming_path);
    let store = TotalsStore::new(&settings.files.totals_path);

    info!(
        category,
        batch = %reader.path().display(),
        totals = %store.path().display(),
        "Starting run"
    );

    let events = match reader.read() {
        Ok(events) => events,
        Err(e) => return abort(e),
    };

    let prior = match store.load() {
        Ok(prior) => prior,
        Err(e) => return abort(e),
    };

    let (totals, report) = match accumulate(&prior, &events, category) {
        Ok(merged) => merged,
        Err(e) => return abort(e),
    };
    info!("Merged batch of {} rows: {}", events.len(), report);

    for (id, names) in totals.conflicting_names() {
        warn!(%id, ?names, "id is tracked under more than one name");
    }

    let persisted = store.save(&totals);
    match &persisted {
        Ok(()) => info!("Saved {} running totals", totals.len()),
        Err(e) => e.log_error(),
    }

    RunOutcome::Completed {
        totals,
        report,
        persisted,
    }
}

fn abort(e: impl Into<RunError>) -> RunOutcome {
    let reason = e.into();
    reason.log_error();
    RunOutcome::Aborted { reason }
}
