//! Version index resolution.
//!
//! The upstream index (`dataPaths.json`) maps a platform key to a table of
//! version strings, each pointing at the sub-paths where that version's
//! datasets live. Only the `pc` platform is consulted. Lookup is an exact
//! string match - no normalization, no prefix matching - so a requested
//! `1.19` never resolves to `1.19.2`.
//!
//! Per-version records are decoded lazily: old index entries do not always
//! carry every dataset key, and a strict whole-document decode would reject
//! the index over versions the audit never asks about.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Platform key under which client versions are listed in the index.
const PLATFORM: &str = "pc";

/// Errors that can occur while resolving a version against the index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index document is not a platform/version table.
    #[error("malformed version index: {0}")]
    MalformedIndex(#[source] serde_json::Error),

    /// The requested version does not exist under the platform key.
    #[error("version {0} was not found in the upstream index")]
    VersionNotFound(String),

    /// The version exists but its record lacks the dataset paths.
    #[error("index entry for {version} is missing dataset paths: {source}")]
    InvalidEntry {
        version: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Dataset sub-paths for a single resolved version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataPaths {
    /// Sub-path of the directory holding `blocks.json`.
    pub blocks: String,
    /// Sub-path of the directory holding `biomes.json`.
    pub biomes: String,
}

/// The upstream version index, immutable once constructed.
#[derive(Debug)]
pub struct VersionIndex {
    platforms: HashMap<String, HashMap<String, Value>>,
}

impl VersionIndex {
    /// Builds an index from the fetched `dataPaths.json` document.
    pub fn from_json(doc: Value) -> Result<Self, IndexError> {
        let platforms = serde_json::from_value(doc).map_err(IndexError::MalformedIndex)?;
        Ok(Self { platforms })
    }

    /// Looks up the dataset sub-paths for the given version.
    ///
    /// Exact string match only. A miss yields [`IndexError::VersionNotFound`]
    /// and the caller performs no further network work.
    pub fn resolve(&self, version: &str) -> Result<DataPaths, IndexError> {
        let entry = self
            .platforms
            .get(PLATFORM)
            .and_then(|versions| versions.get(version))
            .ok_or_else(|| IndexError::VersionNotFound(version.to_string()))?;

        serde_json::from_value(entry.clone()).map_err(|e| IndexError::InvalidEntry {
            version: version.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_index() -> VersionIndex {
        VersionIndex::from_json(json!({
            "pc": {
                "1.19": { "blocks": "pc/1.19", "biomes": "pc/1.19", "items": "pc/1.19" },
                "1.18": { "blocks": "pc/1.18", "biomes": "pc/1.18" },
                "0.30c": { "blocks": "pc/0.30c" }
            },
            "bedrock": {
                "1.19": { "blocks": "bedrock/1.19", "biomes": "bedrock/1.19" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_resolve_known_version() {
        let index = sample_index();
        let paths = index.resolve("1.19").unwrap();
        assert_eq!(paths.blocks, "pc/1.19");
        assert_eq!(paths.biomes, "pc/1.19");
    }

    #[test]
    fn test_resolve_unknown_version() {
        let index = sample_index();
        match index.resolve("9.99") {
            Err(IndexError::VersionNotFound(v)) => assert_eq!(v, "9.99"),
            other => panic!("Expected VersionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_is_exact_match_only() {
        let index = sample_index();
        // Neither prefix nor extension of a listed version resolves.
        assert!(matches!(
            index.resolve("1.19.2"),
            Err(IndexError::VersionNotFound(_))
        ));
        assert!(matches!(
            index.resolve("1.1"),
            Err(IndexError::VersionNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_ignores_other_platforms() {
        // A version listed only under another platform does not resolve.
        let index = VersionIndex::from_json(json!({
            "pc": {},
            "bedrock": { "1.20": { "blocks": "bedrock/1.20", "biomes": "bedrock/1.20" } }
        }))
        .unwrap();

        assert!(matches!(
            index.resolve("1.20"),
            Err(IndexError::VersionNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_entry_without_paths() {
        let index = sample_index();
        match index.resolve("0.30c") {
            Err(IndexError::InvalidEntry { version, .. }) => assert_eq!(version, "0.30c"),
            other => panic!("Expected InvalidEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_index_document() {
        let result = VersionIndex::from_json(json!(["not", "an", "object"]));
        assert!(matches!(result, Err(IndexError::MalformedIndex(_))));
    }

    #[test]
    fn test_extra_record_fields_ignored() {
        let index = sample_index();
        // "items" on the 1.19 record must not break decoding.
        assert!(index.resolve("1.19").is_ok());
    }
}
