// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::{Result, SearchError};
use crate::models::engine::{RawHit, RawSearchResponse};
use crate::models::plan::QueryPlan;
use crate::models::search::{HotelDoc, PageResult};
use serde_json::Value;

/// Decode an engine response into a page of hotels.
///
/// Hit order is preserved. One undecodable hit fails the whole page.
pub fn project(raw: RawSearchResponse, plan: &QueryPlan) -> Result<PageResult> {
    let geo_sorted = plan.is_geo_sorted();

    let hotels = raw
        .hits
        .into_iter()
        .enumerate()
        .map(|(position, hit)| decode_hit(position, hit, geo_sorted))
        .collect::<Result<Vec<_>>>()?;

    Ok(PageResult {
        total: raw.total,
        hotels,
    })
}

fn decode_hit(position: usize, hit: RawHit, geo_sorted: bool) -> Result<HotelDoc> {
    let mut doc: HotelDoc = serde_json::from_value(hit.source).map_err(|e| {
        SearchError::MalformedDocument(format!("hit {} does not decode: {}", position, e))
    })?;

    if geo_sorted {
        // Only the primary sort key carries the distance.
        doc.distance = hit.sort.first().and_then(usable_distance);
    }

    Ok(doc)
}

/// A finite distance, or `None` for values like the `"Infinity"` reported
/// for hotels without a location.
fn usable_distance(value: &Value) -> Option<f64> {
    let distance = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    distance.filter(|d| d.is_finite())
}
