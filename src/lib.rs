pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod stats;
pub mod types;

use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::stats::{MetadataIndex, aggregate_indexed};
use crate::types::AggregationResult;

/// Loads both record lists and aggregates them.
#[tracing::instrument]
pub async fn run(locations: &str, metadata: &str) -> Result<AggregationResult, LoadError> {
    let (positions, metadata) = tokio::try_join!(
        fetch::load_positional(locations),
        fetch::load_metadata(metadata)
    )?;
    info!(
        positions = positions.len(),
        metadata = metadata.len(),
        "Input records loaded"
    );

    let index = MetadataIndex::build(&metadata);
    debug!(distinct_metadata = index.distinct_ids(), "Metadata index built");
    if index.duplicate_ids() > 0 {
        warn!(
            duplicates = index.duplicate_ids(),
            "Duplicate metadata ids found, keeping the last occurrence of each"
        );
    }

    let result = aggregate_indexed(&positions, &index);
    info!(
        matched = result.matched_count(),
        unmatched = result.unmatched_ids.len(),
        types = result.count_by_type.len(),
        "Aggregation complete"
    );

    Ok(result)
}
