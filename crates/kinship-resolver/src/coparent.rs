//! Co-parent inference
//!
//! Two people who are both resolved parents of the same child are treated
//! as married, unless a spouse link between them already exists.

use crate::link_set::{Insert, LinkSet};
use crate::ResolutionMetrics;
use kinship_domain::{CanonicalLink, LinkKind};
use tracing::debug;

/// Add a spouse link for every pair of distinct parents sharing a child
///
/// Children are visited in id order and parent pairs in the order their
/// parent links were added, so output is deterministic for a fixed input.
pub fn infer_co_parents(links: &mut LinkSet, metrics: &mut ResolutionMetrics) {
    let candidates: Vec<CanonicalLink> = links
        .families()
        .into_iter()
        .filter(|(_, parents)| parents.len() > 1)
        .flat_map(|(_, parents)| {
            parents.iter().enumerate().flat_map(move |(i, &a)| {
                parents[i + 1..]
                    .iter()
                    .map(move |&b| CanonicalLink::spouse(a, b))
            })
        })
        .collect();

    for link in candidates {
        let description = link.to_string();
        match links.insert(link) {
            Insert::Added => {
                debug!(link = %description, "Inferred spouse from shared child");
                metrics.inferred_spouses += 1;
                metrics.record_link(&LinkKind::Spouse);
            }
            Insert::Duplicate => metrics.duplicates_skipped += 1,
            Insert::SelfLink => metrics.self_links_skipped += 1,
        }
    }
}
