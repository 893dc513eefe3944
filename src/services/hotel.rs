// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Hotel search operations: list, filter facets, and autocomplete.

use crate::error::Result;
use crate::models::query::QuerySpec;
use crate::models::search::{FacetMap, PageResult};
use crate::services::aggregation::plan_facets;
use crate::services::compiler::compile;
use crate::services::engine::SearchEngine;
use crate::services::facets::extract_facets;
use crate::services::logging::truncate_for_log;
use crate::services::projector::project;
use crate::services::suggestions::{normalize, SUGGESTION_SIZE};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs hotel queries through an injected [`SearchEngine`].
pub struct HotelService {
    engine: Arc<dyn SearchEngine>,
}

impl HotelService {
    pub fn new(engine: Arc<dyn SearchEngine>) -> Self {
        Self { engine }
    }

    /// Search hotels and return one page of results.
    pub async fn search(&self, spec: &QuerySpec) -> Result<PageResult> {
        let plan = compile(spec)?;
        debug!(?plan, "Compiled hotel search");

        let raw = self.engine.execute(&plan).await?;
        let page = project(raw, &plan)?;

        info!(
            total = page.total,
            returned = page.hotels.len(),
            page = spec.page,
            "Hotel search completed"
        );
        Ok(page)
    }

    /// Facet values (brand, city, star rating) under the current filters.
    pub async fn filters(&self, spec: &QuerySpec) -> Result<FacetMap> {
        let plan = plan_facets(compile(spec)?);
        debug!(?plan, "Compiled facet request");

        let raw = self.engine.execute(&plan).await?;
        Ok(extract_facets(&raw.aggregations))
    }

    /// Autocomplete for a typed prefix.
    pub async fn suggestion(&self, prefix: &str) -> Result<Vec<String>> {
        if prefix.is_empty() {
            return Ok(Vec::new());
        }

        let options = self.engine.suggest(prefix, SUGGESTION_SIZE, true).await?;
        let suggestions = normalize(options);

        debug!(
            prefix = %truncate_for_log(prefix),
            count = suggestions.len(),
            "Suggestions resolved"
        );
        Ok(suggestions)
    }
}
