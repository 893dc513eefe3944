// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! The search execution collaborator.

use crate::error::Result;
use crate::models::engine::{RawSearchResponse, RawSuggestion};
use crate::models::plan::QueryPlan;
use async_trait::async_trait;

/// Executes compiled plans and prefix lookups against the hotel corpus.
///
/// Implementations own transport, timeouts and connection lifecycle; every
/// failure of theirs surfaces as `SearchError::SearchUnavailable`.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Run a search or facet plan.
    async fn execute(&self, plan: &QueryPlan) -> Result<RawSearchResponse>;

    /// Look up at most `max` completions for `prefix` on the suggestion field.
    async fn suggest(&self, prefix: &str, max: usize, dedupe: bool)
        -> Result<Vec<RawSuggestion>>;
}
