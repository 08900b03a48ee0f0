mod completions;
mod credit;
mod inspect;
mod locate;

pub use completions::run_completions;
pub use credit::run_credit;
pub use inspect::run_inspect;
pub use locate::run_locate;

use anyhow::{anyhow, Result};
use cwa_core::config::CwaConfig;
use cwa_core::credit::CreditFormat;
use cwa_core::run::{self, AttributionError};
use cwa_core::session::{AttributionSession, CurrentResult};

fn selected_format(plain: bool) -> CreditFormat {
    if plain {
        CreditFormat::Plain
    } else {
        CreditFormat::Formatted
    }
}

/// Runs the blocking attribution pipeline on the blocking pool.
///
/// Failures collapse here into the user-visible message; the full error goes
/// to the log only. A panic on the worker surfaces as the unexpected-error
/// message instead of tearing the CLI down.
async fn fetch_current(cfg: CwaConfig, url: String) -> Result<CurrentResult> {
    let outcome = tokio::task::spawn_blocking(move || {
        let mut session = AttributionSession::new();
        run::run_attribution(&mut session, &cfg, &url)
    })
    .await
    .unwrap_or_else(|join_err| Err(AttributionError::Unexpected(join_err.to_string())));

    outcome.map_err(|err| {
        tracing::warn!("attribution run failed: {err}");
        anyhow!(err.user_message())
    })
}
