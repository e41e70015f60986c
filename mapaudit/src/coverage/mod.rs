//! Coverage comparison and reporting.
//!
//! For each content category (blocks, biomes) the comparator walks the
//! upstream item list in document order, derives a comparison key per item
//! and checks it against the renderer's known-identifier set. Block keys
//! carry the `minecraft:` namespace prefix because the renderer stores
//! block identifiers qualified; biome keys stay bare because the renderer
//! stores biome identifiers without a namespace. That asymmetry is part of
//! the contract.
//!
//! The coverage percentage reproduces the upstream two-stage rounding:
//! the missing/total ratio is rounded to two decimals BEFORE being scaled
//! to a percentage and subtracted from 100. This yields coarser values
//! than rounding the final percentage (1 missing of 3 gives 67, not 66.67)
//! and must not be "fixed".

use std::collections::HashSet;
use std::io::{self, Write};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Namespace prefix carried by qualified identifiers.
pub const NAMESPACE: &str = "minecraft:";

/// Errors raised while decoding or comparing an upstream dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The upstream dataset contained no items at all.
    #[error("upstream {category} dataset is empty")]
    Empty { category: String },

    /// The dataset was not a list of named items.
    #[error("malformed {category} dataset: {source}")]
    Malformed {
        category: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single upstream content entry. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub name: String,
}

/// Decodes a fetched dataset document into an ordered item list.
pub fn parse_items(doc: Value, category: &str) -> Result<Vec<ContentItem>, DatasetError> {
    serde_json::from_value(doc).map_err(|e| DatasetError::Malformed {
        category: category.to_string(),
        source: e,
    })
}

/// Coverage result for one content category.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Category label, e.g. "blocks" or "biomes".
    pub category: String,
    /// Version the upstream data was taken from.
    pub version: String,
    /// Total number of upstream items.
    pub total: usize,
    /// Comparison keys of the items absent locally, in upstream order.
    pub missing_items: Vec<String>,
}

impl CoverageReport {
    /// Number of upstream items absent locally.
    pub fn missing_count(&self) -> usize {
        self.missing_items.len()
    }

    /// Coverage percentage under the two-stage rounding rule.
    pub fn coverage_percent(&self) -> f64 {
        coverage_percent(self.missing_count(), self.total)
    }

    /// Renders the report: one line per missing item in upstream order,
    /// then the count and percentage summary lines.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.missing_items {
            writeln!(out, "{} is not added yet.", item)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "The renderer is missing {} {} from a total of {}.",
            self.missing_count(),
            self.category,
            self.total
        )?;
        writeln!(
            out,
            "The renderer covers {}% of {} from {}.",
            self.coverage_percent(),
            self.category,
            self.version
        )?;
        writeln!(out)?;
        Ok(())
    }
}

/// Computes `100 - round(missing / total, 2) * 100`.
///
/// The ratio is rounded to two decimals first, then scaled. Both steps
/// match the upstream calculation exactly for output parity, including
/// ties rounding to even (1 of 8 missing gives 88, not 87).
pub fn coverage_percent(missing: usize, total: usize) -> f64 {
    let ratio = missing as f64 / total as f64;
    let rounded = (ratio * 100.0).round_ties_even() / 100.0;
    100.0 - rounded * 100.0
}

/// Diffs an upstream item list against the locally-known identifier set.
///
/// When `qualify` is true each item's name is prefixed with [`NAMESPACE`]
/// before the membership check (block semantics); otherwise the bare name
/// is used (biome semantics). Missing keys are collected in upstream
/// encounter order.
pub fn compare(
    items: &[ContentItem],
    known: &HashSet<String>,
    category: &str,
    version: &str,
    qualify: bool,
) -> Result<CoverageReport, DatasetError> {
    if items.is_empty() {
        return Err(DatasetError::Empty {
            category: category.to_string(),
        });
    }

    let mut missing_items = Vec::new();
    for item in items {
        let key = if qualify {
            format!("{}{}", NAMESPACE, item.name)
        } else {
            item.name.clone()
        };
        if !known.contains(&key) {
            missing_items.push(key);
        }
    }

    Ok(CoverageReport {
        category: category.to_string(),
        version: version.to_string(),
        total: items.len(),
        missing_items,
    })
}
