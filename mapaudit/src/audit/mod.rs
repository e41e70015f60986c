//! Audit orchestration.
//!
//! The run sequence is linear with a single early exit: fetch the version
//! index, resolve the requested version (an unknown version stops the run
//! before any dataset is fetched), fetch the blocks and biomes datasets,
//! then compare and render each category in turn. Each report is written
//! as soon as it is computed.

use std::io::{self, Write};

use thiserror::Error;

use crate::coverage::{self, DatasetError};
use crate::fetch::{FetchError, HttpClient, JsonFetcher, UpstreamSource};
use crate::index::{IndexError, VersionIndex};
use crate::registry::ContentRegistry;

/// Errors that can end an audit run.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Version index retrieval or lookup failed.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A JSON document could not be retrieved or decoded.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// An upstream dataset was empty or malformed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Report output could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl AuditError {
    /// True when the run ended because the requested version is unknown,
    /// as opposed to a transport or data fault.
    pub fn is_version_not_found(&self) -> bool {
        matches!(self, AuditError::Index(IndexError::VersionNotFound(_)))
    }
}

/// Runs a full coverage audit for the given version, streaming both
/// category reports to `out`.
pub fn run<C, R, W>(
    fetcher: &JsonFetcher<C>,
    source: &UpstreamSource,
    registry: &R,
    version: &str,
    out: &mut W,
) -> Result<(), AuditError>
where
    C: HttpClient,
    R: ContentRegistry,
    W: Write,
{
    let index_doc = fetcher.fetch_json(&source.index_url())?;
    let index = VersionIndex::from_json(index_doc)?;
    let paths = index.resolve(version)?;

    tracing::debug!(version = %version, blocks = %paths.blocks, biomes = %paths.biomes, "Resolved dataset paths");

    let blocks_doc = fetcher.fetch_json(&source.blocks_url(&paths.blocks))?;
    let biomes_doc = fetcher.fetch_json(&source.biomes_url(&paths.biomes))?;

    let blocks = coverage::parse_items(blocks_doc, "blocks")?;
    let report = coverage::compare(&blocks, registry.known_block_ids(), "blocks", version, true)?;
    report.write_to(out)?;

    let biomes = coverage::parse_items(biomes_doc, "biomes")?;
    let report = coverage::compare(&biomes, registry.known_biome_ids(), "biomes", version, false)?;
    report.write_to(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    use serde_json::json;

    /// Mock client serving fixed bodies per URL and recording every call.
    struct RoutedClient {
        responses: HashMap<String, Vec<u8>>,
        calls: Mutex<Vec<String>>,
    }

    impl RoutedClient {
        fn new(responses: &[(&str, serde_json::Value)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(url, doc)| (url.to_string(), doc.to_string().into_bytes()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl HttpClient for RoutedClient {
        fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.calls.lock().unwrap().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    status: 404,
                    url: url.to_string(),
                })
        }
    }

    struct FakeRegistry {
        blocks: HashSet<String>,
        biomes: HashSet<String>,
    }

    impl FakeRegistry {
        fn new(blocks: &[&str], biomes: &[&str]) -> Self {
            Self {
                blocks: blocks.iter().map(|s| s.to_string()).collect(),
                biomes: biomes.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl ContentRegistry for FakeRegistry {
        fn known_block_ids(&self) -> &HashSet<String> {
            &self.blocks
        }

        fn known_biome_ids(&self) -> &HashSet<String> {
            &self.biomes
        }
    }

    const BASE: &str = "https://example.com/data";

    fn fixtures() -> RoutedClient {
        RoutedClient::new(&[
            (
                "https://example.com/data/dataPaths.json",
                json!({ "pc": { "1.19": { "blocks": "pc/1.19", "biomes": "pc/1.19" } } }),
            ),
            (
                "https://example.com/data/pc/1.19/blocks.json",
                json!([
                    { "name": "stone" },
                    { "name": "dirt" },
                    { "name": "unknownium" }
                ]),
            ),
            (
                "https://example.com/data/pc/1.19/biomes.json",
                json!([{ "name": "plains" }, { "name": "void" }]),
            ),
        ])
    }

    #[test]
    fn test_full_run_output() {
        let client = fixtures();
        let fetcher = JsonFetcher::new(client);
        let source = UpstreamSource::with_base(BASE);
        let registry = FakeRegistry::new(&["minecraft:stone", "minecraft:dirt"], &["plains"]);

        let mut out = Vec::new();
        run(&fetcher, &source, &registry, "1.19", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "minecraft:unknownium is not added yet.\n\
             \n\
             The renderer is missing 1 blocks from a total of 3.\n\
             The renderer covers 67% of blocks from 1.19.\n\
             \n\
             void is not added yet.\n\
             \n\
             The renderer is missing 1 biomes from a total of 2.\n\
             The renderer covers 50% of biomes from 1.19.\n\
             \n"
        );
    }

    #[test]
    fn test_run_fetch_order() {
        let client = fixtures();
        let fetcher = JsonFetcher::new(&client);
        let source = UpstreamSource::with_base(BASE);
        let registry = FakeRegistry::new(&[], &[]);

        let mut out = Vec::new();
        run(&fetcher, &source, &registry, "1.19", &mut out).unwrap();

        assert_eq!(
            client.calls(),
            vec![
                "https://example.com/data/dataPaths.json",
                "https://example.com/data/pc/1.19/blocks.json",
                "https://example.com/data/pc/1.19/biomes.json",
            ]
        );
    }

    #[test]
    fn test_unknown_version_short_circuits() {
        let client = fixtures();
        {
            let fetcher = JsonFetcher::new(&client);
            let source = UpstreamSource::with_base(BASE);
            let registry = FakeRegistry::new(&[], &[]);

            let mut out = Vec::new();
            let err = run(&fetcher, &source, &registry, "9.99", &mut out).unwrap_err();
            assert!(err.is_version_not_found());
            // Nothing was written before the early exit.
            assert!(out.is_empty());
        }

        // Only the index document was fetched.
        assert_eq!(client.calls(), vec!["https://example.com/data/dataPaths.json"]);
    }

    #[test]
    fn test_fetch_failure_propagates() {
        // Index resolves, but the blocks dataset 404s.
        let client = RoutedClient::new(&[(
            "https://example.com/data/dataPaths.json",
            json!({ "pc": { "1.19": { "blocks": "pc/1.19", "biomes": "pc/1.19" } } }),
        )]);
        let fetcher = JsonFetcher::new(client);
        let source = UpstreamSource::with_base(BASE);
        let registry = FakeRegistry::new(&[], &[]);

        let mut out = Vec::new();
        let err = run(&fetcher, &source, &registry, "1.19", &mut out).unwrap_err();
        assert!(matches!(err, AuditError::Fetch(FetchError::Status { status: 404, .. })));
        assert!(!err.is_version_not_found());
    }

    #[test]
    fn test_empty_dataset_is_reported() {
        let client = RoutedClient::new(&[
            (
                "https://example.com/data/dataPaths.json",
                json!({ "pc": { "1.19": { "blocks": "pc/1.19", "biomes": "pc/1.19" } } }),
            ),
            ("https://example.com/data/pc/1.19/blocks.json", json!([])),
            ("https://example.com/data/pc/1.19/biomes.json", json!([])),
        ]);
        let fetcher = JsonFetcher::new(client);
        let source = UpstreamSource::with_base(BASE);
        let registry = FakeRegistry::new(&[], &[]);

        let mut out = Vec::new();
        let err = run(&fetcher, &source, &registry, "1.19", &mut out).unwrap_err();
        assert!(matches!(err, AuditError::Dataset(DatasetError::Empty { .. })));
    }
}
