//! Session-scoped attribution state.
//!
//! Replaces a global mutable "current result" with a state object the caller
//! owns and passes by reference. Overlapping runs are resolved by generation
//! number: only the most recently begun run may install its completion, so a
//! slow stale response can never overwrite a newer result.

use crate::credit::{CreditFormat, CreditPair};
use crate::record::AttributionRecord;

/// The single current result: fetched record plus both cached credit forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentResult {
    pub generation: u64,
    pub record: AttributionRecord,
    pub credits: CreditPair,
}

/// Holder of the current result and the run-generation counter.
#[derive(Debug, Default)]
pub struct AttributionSession {
    generation: u64,
    current: Option<CurrentResult>,
}

impl AttributionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a run and returns its generation token. Any run begun earlier
    /// is superseded from this point on.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Installs a completed run's record, deriving and caching both credit
    /// forms. Returns `None` without touching state when `generation` is no
    /// longer the most recently begun run.
    pub fn complete(
        &mut self,
        generation: u64,
        record: AttributionRecord,
    ) -> Option<&CurrentResult> {
        if generation != self.generation {
            tracing::debug!(
                "discarding stale completion (generation {}, latest {})",
                generation,
                self.generation
            );
            return None;
        }
        let credits = CreditPair::from_record(&record);
        self.current = Some(CurrentResult {
            generation,
            record,
            credits,
        });
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&CurrentResult> {
        self.current.as_ref()
    }

    /// Selected credit form from the cached pair; no re-derivation.
    pub fn credit(&self, format: CreditFormat) -> Option<&str> {
        self.current.as_ref().map(|c| c.credits.get(format))
    }
}
