// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Engine-agnostic representation of a compiled hotel query.

use crate::models::query::GeoPoint;

/// The single scoring clause of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MustClause {
    MatchAll,
    /// Relevance match of `text` against `field`
    Match { field: String, text: String },
}

/// Non-scoring clause; every filter must hold for a document to match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterClause {
    /// Exact equality on a keyword field
    Term { field: String, value: String },
    /// Inclusive range on a numeric field
    Range { field: String, gte: i64, lte: i64 },
}

/// Score multiplier for documents whose `field` equals `value`.
///
/// Applied through a function-score wrapper, so it only reorders matches.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostRule {
    pub field: String,
    pub value: bool,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Ascending great-circle distance ordering from `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoSort {
    pub field: String,
    pub origin: GeoPoint,
    pub unit: DistanceUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
}

/// Bucket-count aggregation over a keyword field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsAggregation {
    pub name: String,
    pub field: String,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub must: MustClause,
    pub filters: Vec<FilterClause>,
    pub boost: Option<BoostRule>,
    /// `None` keeps the engine's relevance ordering
    pub sort: Option<GeoSort>,
    pub window: Window,
    pub aggregations: Vec<TermsAggregation>,
}

impl QueryPlan {
    pub fn is_geo_sorted(&self) -> bool {
        self.sort.is_some()
    }
}
