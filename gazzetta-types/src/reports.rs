//! Report envelopes produced by the aggregator.

use serde::{Deserialize, Serialize};

use crate::article::RawArticle;
use crate::error::GazzettaError;

/// One adapter that failed during a fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterFailure {
    /// Adapter name.
    pub adapter: String,
    /// Registration index of the adapter.
    pub index: usize,
    /// What went wrong.
    pub error: GazzettaError,
}

/// Summary of one fan-out over every registered adapter.
///
/// `articles` is the concatenation of each successful adapter's output, in
/// registration order with each adapter's internal order kept. Failures never
/// abort the fan-out; they are collected in `errors` instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Raw records from every adapter that succeeded.
    pub articles: Vec<RawArticle>,
    /// Non-fatal adapter failures, in registration order.
    pub errors: Vec<AdapterFailure>,
    /// Number of adapters queried.
    pub attempted: usize,
}

impl AggregateReport {
    /// Number of adapters that returned a result (possibly empty).
    #[must_use]
    pub const fn succeeded(&self) -> usize {
        self.attempted.saturating_sub(self.errors.len())
    }

    /// True when at least one adapter ran and every adapter failed.
    #[must_use]
    pub const fn is_total_failure(&self) -> bool {
        self.attempted > 0 && self.succeeded() == 0
    }

    /// Collapse the failures into one error when every adapter failed.
    #[must_use]
    pub fn failure(&self) -> Option<GazzettaError> {
        if !self.is_total_failure() {
            return None;
        }
        Some(GazzettaError::AllProvidersFailed(
            self.errors.iter().map(|f| f.error.clone()).collect(),
        ))
    }
}
