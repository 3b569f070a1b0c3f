//! Catalog request sequencing.
//!
//! Catalog searches run on spawned tasks and may resolve out of order. Each
//! request is stamped with a monotonically increasing sequence number; only the
//! response carrying the latest number is applied, older ones are dropped on
//! arrival.

use shared::Section;

use crate::core::error::Result;

/// A catalog search that has been issued and not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub seq: u64,
    pub query: String,
    pub chain_id: u64,
}

/// Latest-wins bookkeeping for catalog searches.
#[derive(Debug, Clone, Default)]
pub struct CatalogRequests {
    latest_seq: u64,
    loading: bool,
    sections: Vec<Section>,
}

impl CatalogRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new request; it supersedes everything issued before it.
    pub fn issue(&mut self, query: &str, chain_id: u64) -> CatalogRequest {
        self.latest_seq += 1;
        self.loading = true;
        CatalogRequest {
            seq: self.latest_seq,
            query: query.to_string(),
            chain_id,
        }
    }

    /// Apply a response. Returns `false` if it was stale and ignored.
    ///
    /// A failed search counts as "no results".
    pub fn accept(&mut self, seq: u64, result: Result<Vec<Section>>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale catalog response");
            return false;
        }

        self.loading = false;
        match result {
            Ok(sections) => {
                tracing::debug!(seq, sections = sections.len(), "Catalog results applied");
                self.sections = sections;
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "Catalog search failed, showing no results");
                self.sections.clear();
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Sections of the latest applied response
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
