// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Elasticsearch REST implementation of [`SearchEngine`].

use crate::error::{Result, SearchError};
use crate::models::engine::{RawAggregations, RawBucket, RawHit, RawSearchResponse, RawSuggestion};
use crate::models::plan::{FilterClause, GeoSort, MustClause, QueryPlan};
use crate::services::engine::SearchEngine;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_INDEX: &str = "hotel";
pub const SUGGESTION_FIELD: &str = "suggestion";
const SUGGESTION_NAME: &str = "hotelSuggestion";

/// Connection settings for the Elasticsearch cluster
#[derive(Debug, Clone)]
pub struct ElasticsearchConfig {
    pub url: Url,
    pub index: String,
    /// Applied to every request; an expired call fails the whole request
    pub timeout: Duration,
}

impl ElasticsearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("ELASTICSEARCH_URL")
            .map_err(|_| anyhow!("ELASTICSEARCH_URL environment variable not set"))?;
        let index = env::var("HOTEL_INDEX").unwrap_or_else(|_| DEFAULT_INDEX.to_string());
        let timeout_secs = env::var("ELASTICSEARCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        Self::new(&host, index, Duration::from_secs(timeout_secs))
    }

    /// Build a config, accepting either `host:port` or a full URL.
    pub fn new(host: &str, index: String, timeout: Duration) -> anyhow::Result<Self> {
        let mut url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };
        // Url::join replaces the last path segment unless the base ends in '/'
        if !url.ends_with('/') {
            url.push('/');
        }

        let url = Url::parse(&url).with_context(|| format!("Invalid Elasticsearch URL: {host}"))?;

        Ok(Self {
            url,
            index,
            timeout,
        })
    }
}

/// Elasticsearch client for the hotel index
pub struct ElasticsearchClient {
    http: reqwest::Client,
    search_url: Url,
    index: String,
}

impl ElasticsearchClient {
    pub fn new(config: &ElasticsearchConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let search_url = config
            .url
            .join(&format!("{}/_search", config.index))
            .context("Invalid index name")?;

        Ok(Self {
            http,
            search_url,
            index: config.index.clone(),
        })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    async fn post_search(&self, body: &Value) -> Result<Value> {
        debug!(url = %self.search_url, body = %body, "Sending search request");

        let response = self
            .http
            .post(self.search_url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "Elasticsearch request failed");
                SearchError::SearchUnavailable(format!("request to Elasticsearch failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, "Elasticsearch rejected search request");
            return Err(SearchError::SearchUnavailable(format!(
                "Elasticsearch returned {}: {}",
                status, detail
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            SearchError::SearchUnavailable(format!("unreadable Elasticsearch response: {}", e))
        })
    }
}

#[async_trait]
impl SearchEngine for ElasticsearchClient {
    async fn execute(&self, plan: &QueryPlan) -> Result<RawSearchResponse> {
        let body = render_search_body(plan);
        let response = self.post_search(&body).await?;
        parse_search_response(response)
    }

    async fn suggest(
        &self,
        prefix: &str,
        max: usize,
        dedupe: bool,
    ) -> Result<Vec<RawSuggestion>> {
        let body = render_suggest_body(prefix, max, dedupe);
        let response = self.post_search(&body).await?;
        parse_suggest_response(response)
    }
}

// ---------------------------------------------------------------------------
// Query DSL rendering
// ---------------------------------------------------------------------------

fn keyed(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

fn render_must(must: &MustClause) -> Value {
    match must {
        MustClause::MatchAll => json!({ "match_all": {} }),
        MustClause::Match { field, text } => keyed("match", keyed(field, json!(text))),
    }
}

fn render_filter(filter: &FilterClause) -> Value {
    match filter {
        FilterClause::Term { field, value } => keyed("term", keyed(field, json!(value))),
        FilterClause::Range { field, gte, lte } => {
            keyed("range", keyed(field, json!({ "gte": gte, "lte": lte })))
        }
    }
}

fn render_sort(sort: &GeoSort) -> Value {
    let mut geo = Map::new();
    geo.insert(
        sort.field.clone(),
        json!({ "lat": sort.origin.lat, "lon": sort.origin.lon }),
    );
    geo.insert("order".to_string(), json!("asc"));
    geo.insert("unit".to_string(), json!(sort.unit.as_str()));
    json!([{ "_geo_distance": Value::Object(geo) }])
}

/// Render a plan as an Elasticsearch `_search` request body.
pub fn render_search_body(plan: &QueryPlan) -> Value {
    let filters: Vec<Value> = plan.filters.iter().map(render_filter).collect();
    let bool_query = json!({
        "bool": {
            "must": [render_must(&plan.must)],
            "filter": filters,
        }
    });

    let query = match &plan.boost {
        Some(boost) => json!({
            "function_score": {
                "query": bool_query,
                "functions": [{
                    "filter": keyed("term", keyed(&boost.field, json!(boost.value))),
                    "weight": boost.weight,
                }],
            }
        }),
        None => bool_query,
    };

    let mut body = json!({
        "query": query,
        "from": plan.window.offset,
        "size": plan.window.limit,
        "track_total_hits": true,
    });

    if let Some(sort) = &plan.sort {
        body["sort"] = render_sort(sort);
    }

    if !plan.aggregations.is_empty() {
        let aggs: Map<String, Value> = plan
            .aggregations
            .iter()
            .map(|agg| {
                (
                    agg.name.clone(),
                    json!({ "terms": { "field": agg.field, "size": agg.size } }),
                )
            })
            .collect();
        body["aggs"] = Value::Object(aggs);
    }

    body
}

/// Render a completion-suggester request body.
pub fn render_suggest_body(prefix: &str, max: usize, dedupe: bool) -> Value {
    json!({
        "_source": false,
        "size": 0,
        "suggest": {
            SUGGESTION_NAME: {
                "prefix": prefix,
                "completion": {
                    "field": SUGGESTION_FIELD,
                    "skip_duplicates": dedupe,
                    "size": max,
                }
            }
        }
    })
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct EsSearchResponse {
    hits: EsHits,
    #[serde(default)]
    aggregations: HashMap<String, EsTermsAggregation>,
}

#[derive(Deserialize)]
struct EsHits {
    total: Option<EsTotal>,
    #[serde(default)]
    hits: Vec<EsHit>,
}

/// `{"value": n, "relation": "eq"}` since 7.x, a bare number before
#[derive(Deserialize)]
#[serde(untagged)]
enum EsTotal {
    Object { value: u64 },
    Count(u64),
}

#[derive(Deserialize)]
struct EsHit {
    #[serde(rename = "_source", default)]
    source: Value,
    #[serde(default)]
    sort: Vec<Value>,
}

#[derive(Deserialize)]
struct EsTermsAggregation {
    #[serde(default)]
    buckets: Vec<EsBucket>,
}

#[derive(Deserialize)]
struct EsBucket {
    key: Value,
    key_as_string: Option<String>,
    #[serde(default)]
    doc_count: u64,
}

impl EsBucket {
    fn key_string(self) -> String {
        match (self.key_as_string, self.key) {
            (Some(key), _) => key,
            (None, Value::String(key)) => key,
            (None, other) => other.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct EsSuggestResponse {
    #[serde(default)]
    suggest: HashMap<String, Vec<EsSuggestEntry>>,
}

#[derive(Deserialize)]
struct EsSuggestEntry {
    #[serde(default)]
    options: Vec<EsSuggestOption>,
}

#[derive(Deserialize)]
struct EsSuggestOption {
    text: String,
}

/// Convert an Elasticsearch `_search` response into the engine-neutral shape.
pub fn parse_search_response(body: Value) -> Result<RawSearchResponse> {
    let response: EsSearchResponse = serde_json::from_value(body).map_err(|e| {
        SearchError::SearchUnavailable(format!("unexpected search response shape: {}", e))
    })?;

    let total = match response.hits.total {
        Some(EsTotal::Object { value }) | Some(EsTotal::Count(value)) => value,
        None => response.hits.hits.len() as u64,
    };

    let hits = response
        .hits
        .hits
        .into_iter()
        .map(|hit| RawHit {
            source: hit.source,
            sort: hit.sort,
        })
        .collect();

    let aggregations: RawAggregations = response
        .aggregations
        .into_iter()
        .map(|(name, agg)| {
            let buckets = agg
                .buckets
                .into_iter()
                .map(|bucket| {
                    let doc_count = bucket.doc_count;
                    RawBucket {
                        key: bucket.key_string(),
                        doc_count,
                    }
                })
                .collect();
            (name, buckets)
        })
        .collect();

    Ok(RawSearchResponse {
        total,
        hits,
        aggregations,
    })
}

/// Pull completion options out of a suggest response; a missing block is empty.
pub fn parse_suggest_response(body: Value) -> Result<Vec<RawSuggestion>> {
    let response: EsSuggestResponse = serde_json::from_value(body).map_err(|e| {
        SearchError::SearchUnavailable(format!("unexpected suggest response shape: {}", e))
    })?;

    Ok(response
        .suggest
        .get(SUGGESTION_NAME)
        .into_iter()
        .flatten()
        .flat_map(|entry| entry.options.iter())
        .map(|option| RawSuggestion {
            text: option.text.clone(),
        })
        .collect())
}
