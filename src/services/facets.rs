// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::engine::RawAggregations;
use crate::models::search::FacetMap;
use crate::services::aggregation::{Facet, FACETS};

/// Collect facet bucket keys in engine order.
///
/// A missing aggregation yields an empty list for that facet.
pub fn extract_facets(raw: &RawAggregations) -> FacetMap {
    let mut facets = FacetMap::default();

    for def in FACETS.iter() {
        let keys: Vec<String> = raw
            .get(def.aggregation)
            .map(|buckets| {
                buckets
                    .iter()
                    .take(def.size)
                    .map(|bucket| bucket.key.clone())
                    .collect()
            })
            .unwrap_or_default();

        match def.facet {
            Facet::Brand => facets.brand = keys,
            Facet::City => facets.city = keys,
            Facet::StarRating => facets.star_rating = keys,
        }
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::engine::RawBucket;

    fn buckets(keys: &[(&str, u64)]) -> Vec<RawBucket> {
        keys.iter()
            .map(|(key, doc_count)| RawBucket {
                key: key.to_string(),
                doc_count: *doc_count,
            })
            .collect()
    }

    #[test]
    fn test_extract_all_facets_in_engine_order() {
        let raw = RawAggregations::from([
            ("brandAgg".to_string(), buckets(&[("7天酒店", 30), ("如家", 30), ("皇冠假日", 17)])),
            ("cityAgg".to_string(), buckets(&[("上海", 83), ("北京", 62)])),
            ("starNameAgg".to_string(), buckets(&[("二钻", 84), ("五星级", 79)])),
        ]);

        let facets = extract_facets(&raw);
        assert_eq!(facets.brand, vec!["7天酒店", "如家", "皇冠假日"]);
        assert_eq!(facets.city, vec!["上海", "北京"]);
        assert_eq!(facets.star_rating, vec!["二钻", "五星级"]);
    }

    #[test]
    fn test_only_brand_aggregation_present() {
        let raw = RawAggregations::from([("brandAgg".to_string(), buckets(&[("汉庭", 5)]))]);

        let facets = extract_facets(&raw);
        assert_eq!(
            facets,
            FacetMap {
                brand: vec!["汉庭".to_string()],
                city: vec![],
                star_rating: vec![],
            }
        );
    }

    #[test]
    fn test_no_aggregations_is_empty_not_error() {
        assert_eq!(extract_facets(&RawAggregations::new()), FacetMap::default());
    }

    #[test]
    fn test_brand_capped_at_bucket_limit() {
        let many: Vec<RawBucket> = (0..30)
            .map(|i| RawBucket {
                key: format!("brand-{}", i),
                doc_count: 100 - i,
            })
            .collect();
        let raw = RawAggregations::from([("brandAgg".to_string(), many)]);

        let facets = extract_facets(&raw);
        assert_eq!(facets.brand.len(), 20);
        assert_eq!(facets.brand[0], "brand-0");
        assert_eq!(facets.brand[19], "brand-19");
    }
}
