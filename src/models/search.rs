// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Hotel document as stored in the `hotel` index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelDoc {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Nightly price
    pub price: i64,
    /// Guest rating
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub star_name: Option<String>,
    /// Business district
    #[serde(default)]
    pub business: Option<String>,
    /// "lat, lon" as indexed
    #[serde(default)]
    pub location: Option<String>,
    /// Picture URL
    #[serde(default)]
    pub pic: Option<String>,
    /// Promoted listing flag
    #[serde(rename = "isAD", default)]
    pub is_ad: Option<bool>,
    /// Kilometers from the requested origin, set only for geo-sorted searches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// One page of hotel search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageResult {
    /// Total number of matching hotels
    pub total: u64,
    /// Hotels on this page, in engine order
    pub hotels: Vec<HotelDoc>,
}

/// Facet values available for the current filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacetMap {
    pub brand: Vec<String>,
    pub city: Vec<String>,
    pub star_rating: Vec<String>,
}

impl FacetMap {
    /// Key the facets by their display labels, as the filter panel expects.
    pub fn labelled(self) -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([
            ("品牌".to_string(), self.brand),
            ("城市".to_string(), self.city),
            ("星级".to_string(), self.star_rating),
        ])
    }
}

/// Query string of the autocomplete endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionQuery {
    /// Typed prefix (pinyin or characters)
    #[serde(default)]
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_doc_decodes_indexed_payload() {
        let json = r#"{
            "id": 36934,
            "name": "7天连锁酒店(上海宝山路地铁站店)",
            "address": "静安交通路40号",
            "price": 336,
            "score": 37,
            "brand": "7天酒店",
            "city": "上海",
            "starName": "二钻",
            "business": "四川北路商业区",
            "location": "31.251433, 121.47522",
            "pic": "https://example.com/pic.jpg",
            "isAD": true,
            "suggestion": ["7天酒店", "四川北路商业区"]
        }"#;

        let doc: HotelDoc = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, 36934);
        assert_eq!(doc.star_name.as_deref(), Some("二钻"));
        assert_eq!(doc.is_ad, Some(true));
        assert_eq!(doc.distance, None);
    }

    #[test]
    fn test_hotel_doc_rejects_missing_name() {
        let result = serde_json::from_str::<HotelDoc>(r#"{"id": 1, "price": 100}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_distance_is_omitted_when_absent() {
        let doc: HotelDoc =
            serde_json::from_str(r#"{"id": 1, "name": "如家", "price": 199}"#).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("distance").is_none());
    }

    #[test]
    fn test_facet_map_serializes_fixed_keys() {
        let facets = FacetMap {
            brand: vec!["如家".to_string()],
            ..Default::default()
        };
        let value = serde_json::to_value(&facets).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"brand": ["如家"], "city": [], "starRating": []})
        );
    }

    #[test]
    fn test_facet_map_labelled() {
        let facets = FacetMap {
            brand: vec!["汉庭".to_string()],
            city: vec!["北京".to_string(), "上海".to_string()],
            star_rating: vec![],
        };
        let labelled = facets.labelled();
        assert_eq!(labelled["品牌"], vec!["汉庭"]);
        assert_eq!(labelled["城市"], vec!["北京", "上海"]);
        assert!(labelled["星级"].is_empty());
    }
}
