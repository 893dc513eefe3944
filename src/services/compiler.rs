// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Compiles a [`QuerySpec`] into a [`QueryPlan`].

use crate::error::Result;
use crate::models::plan::{
    BoostRule, DistanceUnit, FilterClause, GeoSort, MustClause, QueryPlan, Window,
};
use crate::models::query::QuerySpec;

pub const NAME_FIELD: &str = "name";
pub const BRAND_FIELD: &str = "brand";
pub const CITY_FIELD: &str = "city";
pub const STAR_FIELD: &str = "starName";
pub const PRICE_FIELD: &str = "price";
pub const LOCATION_FIELD: &str = "location";

/// Flag set on promoted (paid placement) hotels
pub const PROMOTED_FIELD: &str = "isAD";
pub const PROMOTED_WEIGHT: f64 = 10.0;

/// Build the query plan for a search request.
///
/// Fails only when the request itself is malformed.
pub fn compile(spec: &QuerySpec) -> Result<QueryPlan> {
    spec.validate()?;

    Ok(QueryPlan {
        must: must_clause(spec),
        filters: filter_clauses(spec),
        boost: Some(promoted_boost()),
        sort: spec.origin.map(|origin| GeoSort {
            field: LOCATION_FIELD.to_string(),
            origin,
            unit: DistanceUnit::Kilometers,
        }),
        window: Window {
            offset: u64::from(spec.page - 1) * u64::from(spec.page_size),
            limit: u64::from(spec.page_size),
        },
        aggregations: Vec::new(),
    })
}

fn must_clause(spec: &QuerySpec) -> MustClause {
    match spec.text.as_deref() {
        Some(text) if !text.is_empty() => MustClause::Match {
            field: NAME_FIELD.to_string(),
            text: text.to_string(),
        },
        _ => MustClause::MatchAll,
    }
}

fn filter_clauses(spec: &QuerySpec) -> Vec<FilterClause> {
    let terms = [
        (BRAND_FIELD, &spec.brand),
        (CITY_FIELD, &spec.city),
        (STAR_FIELD, &spec.star_rating),
    ];

    let mut filters: Vec<FilterClause> = terms
        .into_iter()
        .filter_map(|(field, value)| match value.as_deref() {
            Some(value) if !value.is_empty() => Some(FilterClause::Term {
                field: field.to_string(),
                value: value.to_string(),
            }),
            _ => None,
        })
        .collect();

    // A lone bound is ignored; the range applies only when both ends are given.
    if let (Some(gte), Some(lte)) = (spec.min_price, spec.max_price) {
        filters.push(FilterClause::Range {
            field: PRICE_FIELD.to_string(),
            gte,
            lte,
        });
    }

    filters
}

fn promoted_boost() -> BoostRule {
    BoostRule {
        field: PROMOTED_FIELD.to_string(),
        value: true,
        weight: PROMOTED_WEIGHT,
    }
}
