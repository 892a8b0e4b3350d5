//! Record types consumed and produced by the aggregation pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One place with its coordinates, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PositionalRecord {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Descriptive attributes for a place. `id` is the join key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetadataRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(
        default,
        rename = "reviews",
        alias = "reviewCount",
        alias = "review_count"
    )]
    pub review_count: Option<u32>,
}

/// A positional record joined with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub rating: Option<f64>,
    #[serde(rename = "reviews")]
    pub review_count: Option<u32>,
}

impl MergedRecord {
    pub fn new(position: &PositionalRecord, meta: &MetadataRecord) -> Self {
        Self {
            id: position.id.clone(),
            latitude: position.latitude,
            longitude: position.longitude,
            kind: meta.kind.clone(),
            rating: meta.rating,
            review_count: meta.review_count,
        }
    }
}

/// Summary statistics over the joined record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregationResult {
    /// Matched records per category.
    pub count_by_type: BTreeMap<String, usize>,
    /// Mean of present ratings per category. Categories without any rating are absent.
    pub average_rating_by_type: BTreeMap<String, f64>,
    /// First record holding the strictly highest review count, if any.
    pub most_reviewed: Option<MergedRecord>,
    /// Positional ids with no metadata, in input order.
    pub unmatched_ids: Vec<String>,
}

impl AggregationResult {
    /// Number of positional records that found a metadata counterpart.
    pub fn matched_count(&self) -> usize {
        self.count_by_type.values().sum()
    }
}
