// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Engine-neutral shapes of what the search collaborator hands back.

use serde_json::Value;
use std::collections::HashMap;

/// A single search hit before decoding
#[derive(Debug, Clone, PartialEq)]
pub struct RawHit {
    /// Stored document payload
    pub source: Value,
    /// Sort values computed by the engine, primary key first
    pub sort: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBucket {
    pub key: String,
    pub doc_count: u64,
}

/// Aggregation name -> buckets in engine order
pub type RawAggregations = HashMap<String, Vec<RawBucket>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSearchResponse {
    /// Exact total hit count
    pub total: u64,
    pub hits: Vec<RawHit>,
    pub aggregations: RawAggregations,
}

/// One completion option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSuggestion {
    pub text: String,
}
