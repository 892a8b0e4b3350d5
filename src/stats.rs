//! Join and aggregation over positional and metadata records.
//!
//! The whole computation is one pass over the positional records against a
//! lookup built from the metadata, followed by one pass over the per-category
//! rating totals to derive averages.

use std::collections::{BTreeMap, HashMap};

use crate::types::{AggregationResult, MergedRecord, MetadataRecord, PositionalRecord};

/// Metadata keyed by id. Later records overwrite earlier ones with the same id.
#[derive(Debug, Default)]
pub struct MetadataIndex<'a> {
    entries: HashMap<&'a str, &'a MetadataRecord>,
    duplicate_ids: usize,
}

impl<'a> MetadataIndex<'a> {
    pub fn build(metadata: &'a [MetadataRecord]) -> Self {
        metadata.iter().fold(Self::default(), |mut index, meta| {
            if index.entries.insert(meta.id.as_str(), meta).is_some() {
                index.duplicate_ids += 1;
            }
            index
        })
    }

    pub fn get(&self, id: &str) -> Option<&'a MetadataRecord> {
        self.entries.get(id).copied()
    }

    /// Number of distinct ids after duplicates were collapsed.
    pub fn distinct_ids(&self) -> usize {
        self.entries.len()
    }

    /// How many metadata records were shadowed by a later record with the same id.
    pub fn duplicate_ids(&self) -> usize {
        self.duplicate_ids
    }
}

#[derive(Debug, Default)]
struct RatingTotal {
    sum: f64,
    count: usize,
}

/// Joins `positions` against `metadata` and computes the summary statistics.
pub fn aggregate(positions: &[PositionalRecord], metadata: &[MetadataRecord]) -> AggregationResult {
    let index = MetadataIndex::build(metadata);
    aggregate_indexed(positions, &index)
}

/// Same as [`aggregate`], over a prebuilt [`MetadataIndex`].
pub fn aggregate_indexed(
    positions: &[PositionalRecord],
    index: &MetadataIndex<'_>,
) -> AggregationResult {
    let mut count_by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut ratings: BTreeMap<&str, RatingTotal> = BTreeMap::new();
    let mut most_reviewed: Option<MergedRecord> = None;
    // Starts at zero, so a review count of 0 never qualifies.
    let mut max_reviews = 0u32;
    let mut unmatched_ids = Vec::new();

    for position in positions {
        let Some(meta) = index.get(&position.id) else {
            unmatched_ids.push(position.id.clone());
            continue;
        };

        *count_by_type.entry(meta.kind.clone()).or_default() += 1;

        if let Some(rating) = meta.rating {
            let total = ratings.entry(meta.kind.as_str()).or_default();
            total.sum += rating;
            total.count += 1;
        }

        if let Some(reviews) = meta.review_count {
            if reviews > max_reviews {
                max_reviews = reviews;
                most_reviewed = Some(MergedRecord::new(position, meta));
            }
        }
    }

    let average_rating_by_type = ratings
        .into_iter()
        .filter(|(_, total)| total.count > 0)
        .map(|(kind, total)| (kind.to_string(), total.sum / total.count as f64))
        .collect();

    AggregationResult {
        count_by_type,
        average_rating_by_type,
        most_reviewed,
        unmatched_ids,
    }
}
