// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Facet-count aggregations for the filter panel.

use crate::models::plan::{QueryPlan, TermsAggregation, Window};

/// Which facet a definition feeds in the extracted [`crate::models::search::FacetMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Brand,
    City,
    StarRating,
}

/// One facet aggregation: its request name, indexed field and bucket cap
#[derive(Debug, Clone, Copy)]
pub struct FacetDefinition {
    pub facet: Facet,
    pub aggregation: &'static str,
    pub field: &'static str,
    pub size: usize,
}

pub const FACETS: [FacetDefinition; 3] = [
    FacetDefinition {
        facet: Facet::Brand,
        aggregation: "brandAgg",
        field: "brand",
        size: 20,
    },
    FacetDefinition {
        facet: Facet::City,
        aggregation: "cityAgg",
        field: "city",
        size: 50,
    },
    FacetDefinition {
        facet: Facet::StarRating,
        aggregation: "starNameAgg",
        field: "starName",
        size: 50,
    },
];

/// Turn a search plan into a facet plan.
///
/// Query and filters are kept so counts follow the current selection; no
/// documents are fetched and the geo sort is dropped.
pub fn plan_facets(base: QueryPlan) -> QueryPlan {
    QueryPlan {
        sort: None,
        window: Window {
            offset: 0,
            limit: 0,
        },
        aggregations: FACETS
            .iter()
            .map(|def| TermsAggregation {
                name: def.aggregation.to_string(),
                field: def.field.to_string(),
                size: def.size,
            })
            .collect(),
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::query::{GeoPoint, QuerySpec};
    use crate::services::compiler::compile;

    fn base_plan() -> QueryPlan {
        compile(&QuerySpec {
            text: Some("酒店".to_string()),
            city: Some("上海".to_string()),
            min_price: Some(100),
            max_price: Some(300),
            origin: Some(GeoPoint { lat: 31.2, lon: 121.5 }),
            page: 4,
            page_size: 10,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_facet_plan_keeps_query_and_filters() {
        let base = base_plan();
        let facets = plan_facets(base.clone());
        assert_eq!(facets.must, base.must);
        assert_eq!(facets.filters, base.filters);
        assert_eq!(facets.boost, base.boost);
    }

    #[test]
    fn test_facet_plan_fetches_no_documents() {
        let facets = plan_facets(base_plan());
        assert_eq!(facets.window.limit, 0);
        assert_eq!(facets.window.offset, 0);
        assert_eq!(facets.sort, None);
    }

    #[test]
    fn test_facet_plan_has_fixed_aggregations() {
        let facets = plan_facets(base_plan());
        let summary: Vec<_> = facets
            .aggregations
            .iter()
            .map(|agg| (agg.name.as_str(), agg.field.as_str(), agg.size))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("brandAgg", "brand", 20),
                ("cityAgg", "city", 50),
                ("starNameAgg", "starName", 50),
            ]
        );
    }
}
