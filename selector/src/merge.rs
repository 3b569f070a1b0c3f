//! # Section Merge/Dedup
//!
//! Combines sections from the wallet or the catalog into the list shown to the
//! user, guaranteeing that no asset appears twice.
//!
//! ## Algorithm
//!
//! Sections are scanned in order. Within a section the first occurrence of each
//! key is kept; an asset whose key an earlier section already emitted is dropped
//! (earlier sections win); sections left empty are removed. Relative order of
//! sections and of assets inside each section is preserved.
//!
//! The id pass is the production guarantee. A second pass keyed by symbol can be
//! enabled for environments where the catalog returns id-distinct assets sharing
//! a symbol.

use std::collections::HashSet;

use shared::{Asset, Section};

/// Field an asset is deduplicated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupKey {
    Id,
    Symbol,
}

impl DedupKey {
    fn of<'a>(&self, asset: &'a Asset) -> &'a str {
        match self {
            DedupKey::Id => &asset.id,
            DedupKey::Symbol => &asset.symbol,
        }
    }
}

/// Remove duplicate keys within and across sections, then drop empty sections.
pub fn dedup_sections(sections: Vec<Section>, key: DedupKey) -> Vec<Section> {
    let mut seen: HashSet<String> = HashSet::new();

    sections
        .into_iter()
        .map(|section| {
            let data = section
                .data
                .into_iter()
                // `insert` is false for keys emitted by this or any earlier section
                .filter(|asset| seen.insert(key.of(asset).to_string()))
                .collect();
            Section { data, ..section }
        })
        .filter(|section| !section.is_empty())
        .collect()
}

/// Id dedup, optionally followed by symbol dedup.
pub fn merge_sections(sections: Vec<Section>, dedup_by_symbol: bool) -> Vec<Section> {
    let merged = dedup_sections(sections, DedupKey::Id);
    if dedup_by_symbol {
        dedup_sections(merged, DedupKey::Symbol)
    } else {
        merged
    }
}
