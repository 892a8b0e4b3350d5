//! JSON decoding for the two input record lists.

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::types::{MetadataRecord, PositionalRecord};

/// Decodes a JSON array of [`PositionalRecord`]s.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] if `bytes` is not a JSON array of records.
pub fn parse_positional(origin: &str, bytes: &[u8]) -> Result<Vec<PositionalRecord>, LoadError> {
    parse_records(origin, bytes)
}

/// Decodes a JSON array of [`MetadataRecord`]s. Missing or `null` ratings and
/// review counts are accepted.
pub fn parse_metadata(origin: &str, bytes: &[u8]) -> Result<Vec<MetadataRecord>, LoadError> {
    parse_records(origin, bytes)
}

fn parse_records<T: DeserializeOwned>(origin: &str, bytes: &[u8]) -> Result<Vec<T>, LoadError> {
    serde_json::from_slice(bytes).map_err(|e| LoadError::malformed(origin, e))
}
