// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl FromStr for GeoPoint {
    type Err = SearchError;

    /// Parse the `"lat, lon"` form sent by the hotel map UI.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SearchError::InvalidRequest(format!("Invalid location: '{}'", s));

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(invalid());
        }

        Ok(GeoPoint { lat, lon })
    }
}

/// Validated, immutable description of one hotel search.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    /// Free text matched against the hotel name
    pub text: Option<String>,
    pub brand: Option<String>,
    pub city: Option<String>,
    /// Star rating label, e.g. "五星级"
    pub star_rating: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    /// When set, results are ordered by distance from this point
    pub origin: Option<GeoPoint>,
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            text: None,
            brand: None,
            city: None,
            star_rating: None,
            min_price: None,
            max_price: None,
            origin: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QuerySpec {
    /// Check the paging and price invariants.
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(SearchError::InvalidRequest(
                "page must be at least 1".to_string(),
            ));
        }
        if self.page_size < 1 {
            return Err(SearchError::InvalidRequest(
                "page size must be at least 1".to_string(),
            ));
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(SearchError::InvalidRequest(format!(
                    "minPrice ({}) must not exceed maxPrice ({})",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

/// Search request as posted by the hotel UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestParams {
    /// Free text search key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    /// User position as "lat, lon"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 1-based page number (default: 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<RequestParams> for QuerySpec {
    type Error = SearchError;

    fn try_from(params: RequestParams) -> Result<Self> {
        let origin = non_empty(params.location)
            .map(|location| location.parse::<GeoPoint>())
            .transpose()?;

        let spec = QuerySpec {
            text: non_empty(params.key),
            brand: non_empty(params.brand),
            city: non_empty(params.city),
            star_rating: non_empty(params.star_name),
            min_price: params.min_price,
            max_price: params.max_price,
            origin,
            page: params.page.unwrap_or(DEFAULT_PAGE),
            page_size: params.size.unwrap_or(DEFAULT_PAGE_SIZE),
        };
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geo_point() {
        let point: GeoPoint = "31.21, 121.5".parse().unwrap();
        assert_eq!(point, GeoPoint { lat: 31.21, lon: 121.5 });
    }

    #[test]
    fn test_parse_geo_point_without_space() {
        let point: GeoPoint = "40.05,116.3".parse().unwrap();
        assert_eq!(point, GeoPoint { lat: 40.05, lon: 116.3 });
    }

    #[test]
    fn test_parse_geo_point_rejects_garbage() {
        assert!(matches!(
            "somewhere".parse::<GeoPoint>(),
            Err(SearchError::InvalidRequest(_))
        ));
        assert!(matches!(
            "31.2, east".parse::<GeoPoint>(),
            Err(SearchError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_parse_geo_point_rejects_out_of_range() {
        assert!("91.0, 10.0".parse::<GeoPoint>().is_err());
        assert!("10.0, 181.0".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_page() {
        let spec = QuerySpec {
            page: 0,
            ..Default::default()
        };
        assert!(matches!(spec.validate(), Err(SearchError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let spec = QuerySpec {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(spec.validate(), Err(SearchError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_price_range() {
        let spec = QuerySpec {
            min_price: Some(500),
            max_price: Some(100),
            ..Default::default()
        };
        assert!(matches!(spec.validate(), Err(SearchError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_accepts_equal_price_bounds() {
        let spec = QuerySpec {
            min_price: Some(300),
            max_price: Some(300),
            ..Default::default()
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_request_params_defaults() {
        let params: RequestParams = serde_json::from_str("{}").unwrap();
        let spec = QuerySpec::try_from(params).unwrap();
        assert_eq!(spec, QuerySpec::default());
    }

    #[test]
    fn test_request_params_empty_strings_are_absent() {
        let params: RequestParams = serde_json::from_str(
            r#"{"key":"","brand":"","city":"","starName":"","location":""}"#,
        )
        .unwrap();
        let spec = QuerySpec::try_from(params).unwrap();
        assert_eq!(spec.text, None);
        assert_eq!(spec.brand, None);
        assert_eq!(spec.city, None);
        assert_eq!(spec.star_rating, None);
        assert_eq!(spec.origin, None);
    }

    #[test]
    fn test_request_params_camel_case_fields() {
        let params: RequestParams = serde_json::from_str(
            r#"{"key":"如家","starName":"二钻","minPrice":100,"maxPrice":300,
                "location":"31.21, 121.5","page":2,"size":5}"#,
        )
        .unwrap();
        let spec = QuerySpec::try_from(params).unwrap();
        assert_eq!(spec.text.as_deref(), Some("如家"));
        assert_eq!(spec.star_rating.as_deref(), Some("二钻"));
        assert_eq!(spec.min_price, Some(100));
        assert_eq!(spec.max_price, Some(300));
        assert_eq!(spec.origin, Some(GeoPoint { lat: 31.21, lon: 121.5 }));
        assert_eq!(spec.page, 2);
        assert_eq!(spec.page_size, 5);
    }

    #[test]
    fn test_request_params_invalid_location_is_rejected() {
        let params = RequestParams {
            location: Some("nowhere".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            QuerySpec::try_from(params),
            Err(SearchError::InvalidRequest(_))
        ));
    }
}
