//! Metrics collected during a resolution run

use kinship_domain::{Category, LinkKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counters for a single resolution run
///
/// Tracks what was emitted and, for every claim that produced nothing,
/// why. Never shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionMetrics {
    /// Person records in the input
    pub persons: usize,

    /// Claims in the input
    pub claims_seen: usize,

    /// Parent edges in the input
    pub parent_edges_seen: usize,

    /// Links kept, per output link type
    pub links: BTreeMap<String, usize>,

    /// Links skipped because their key was already present
    pub duplicates_skipped: usize,

    /// Links (from claims or parent edges) naming a person absent from the input
    pub dangling_skipped: usize,

    /// Links whose endpoints resolved to the same person
    pub self_links_skipped: usize,

    /// Claims whose label is outside the catalog or "Other"
    pub unclassified: usize,

    /// Generic links dropped because generic emission is disabled
    pub generic_dropped: usize,

    /// Claims that found no prerequisite, per category
    pub unresolved: BTreeMap<&'static str, usize>,

    /// Father/Mother claims that replaced an earlier one in the parent index
    pub parent_overwrites: usize,

    /// Spouse links added by co-parent inference
    pub inferred_spouses: usize,
}

impl ResolutionMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a kept link
    pub fn record_link(&mut self, kind: &LinkKind) {
        *self.links.entry(kind.as_str().to_string()).or_insert(0) += 1;
    }

    /// Record a claim that found no prerequisite
    pub fn record_unresolved(&mut self, category: Category) {
        *self.unresolved.entry(category.as_str()).or_insert(0) += 1;
    }

    /// Get total links kept
    pub fn total_links(&self) -> usize {
        self.links.values().sum()
    }

    /// Get total unresolved claims
    pub fn total_unresolved(&self) -> usize {
        self.unresolved.values().sum()
    }

    /// Get the kept-link count for one link type
    pub fn links_of(&self, kind: &str) -> usize {
        self.links.get(kind).copied().unwrap_or(0)
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Resolution Summary".to_string(),
            "==================".to_string(),
            format!("Persons: {}", self.persons),
            format!("Claims: {}", self.claims_seen),
            format!("Parent edges: {}", self.parent_edges_seen),
            String::new(),
        ];

        if !self.links.is_empty() {
            lines.push("Links by type:".to_string());
            for (kind, count) in &self.links {
                lines.push(format!("  {}: {}", kind, count));
            }
            lines.push(format!("  Total: {}", self.total_links()));
            lines.push(String::new());
        }

        if !self.unresolved.is_empty() {
            lines.push("Unresolved claims by category:".to_string());
            for (category, count) in &self.unresolved {
                lines.push(format!("  {}: {}", category, count));
            }
            lines.push(format!("  Total: {}", self.total_unresolved()));
            lines.push(String::new());
        }

        lines.push(format!("Inferred spouses: {}", self.inferred_spouses));
        lines.push(format!("Duplicates skipped: {}", self.duplicates_skipped));
        lines.push(format!("Dangling references: {}", self.dangling_skipped));
        lines.push(format!("Self links skipped: {}", self.self_links_skipped));
        lines.push(format!("Unclassified labels: {}", self.unclassified));
        if self.generic_dropped > 0 {
            lines.push(format!("Generic links dropped: {}", self.generic_dropped));
        }
        lines.push(format!("Parent index overwrites: {}", self.parent_overwrites));

        lines.join("\n")
    }
}
