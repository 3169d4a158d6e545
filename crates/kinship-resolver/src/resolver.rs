//! Link resolver - turns relationship claims into canonical tree links
//!
//! A run has three strictly ordered phases:
//!
//! 1. Build the [`ParentIndex`] from the complete claim set.
//! 2. Resolve every claim once, in input order, into at most one link.
//!    Parent edges supplied by the store are added first. Links are
//!    deduplicated as they are produced; a link naming a person absent
//!    from the input is skipped on its own.
//! 3. Infer spouse links between co-parents.
//!
//! Categories that depend on another claim (cousin via uncle, in-law via
//! sibling or spouse, nephew via sibling) or on already emitted links
//! (uncle/aunt via the father's parent) see only what is available at
//! their position in phase 2. A late prerequisite leaves the dependent
//! claim unresolved; that is deterministic for a fixed input order.

use crate::claim_index::ClaimIndex;
use crate::coparent::infer_co_parents;
use crate::graph::FamilyTree;
use crate::link_set::{Insert, LinkSet};
use crate::parent_index::ParentIndex;
use crate::{FamilyInput, ResolutionMetrics, ResolveError, ResolverConfig};
use kinship_domain::traits::FamilySource;
use kinship_domain::{
    CanonicalLink, Category, LinkKind, PersonId, RelationType, RelationshipClaim,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

const GRANDPARENTS: [RelationType; 6] = [
    RelationType::Grandfather,
    RelationType::Grandmother,
    RelationType::PaternalGrandfather,
    RelationType::PaternalGrandmother,
    RelationType::MaternalGrandfather,
    RelationType::MaternalGrandmother,
];
const UNCLES_AUNTS: [RelationType; 2] = [RelationType::Uncle, RelationType::Aunt];
const SIBLINGS: [RelationType; 2] = [RelationType::Brother, RelationType::Sister];
const CHILDREN: [RelationType; 2] = [RelationType::Son, RelationType::Daughter];

/// Output of a resolution run
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The `{nodes, links}` document
    pub tree: FamilyTree,

    /// Deduplicated canonical links, in emission order
    pub links: Vec<CanonicalLink>,

    /// Counters for this run
    pub metrics: ResolutionMetrics,
}

/// The relationship resolution engine
///
/// Stateless between runs: every call to [`Resolver::resolve`] starts from
/// scratch and the same input always yields the same output.
///
/// # Examples
///
/// ```
/// use kinship_domain::{CanonicalLink, Gender, Person, PersonId, RelationshipClaim};
/// use kinship_resolver::{FamilyInput, Resolver};
///
/// let input = FamilyInput::new(vec![
///     Person::new(1, "Joseph", Gender::Male),
///     Person::new(3, "Tom", Gender::Male),
/// ])
/// .with_claims(vec![RelationshipClaim::new(3, 1, "Father")]);
///
/// let resolution = Resolver::default_config().resolve(&input).unwrap();
/// assert_eq!(
///     resolution.links,
///     vec![CanonicalLink::parent(PersonId::new(1), PersonId::new(3))]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a new Resolver with the given configuration
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create a Resolver with default configuration
    pub fn default_config() -> Self {
        Self::new(ResolverConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Fetch records from a source and resolve them
    pub fn resolve_source<S: FamilySource>(&self, source: &S) -> Result<Resolution, ResolveError>
    where
        S::Error: std::fmt::Display,
    {
        let input = FamilyInput::from_source(source)?;
        self.resolve(&input)
    }

    /// Resolve an input into the family tree
    ///
    /// Fails only when the input shape is invalid (see
    /// [`FamilyInput::validate`]). Dangling references, unknown labels and
    /// missing prerequisites degrade to a partial graph.
    pub fn resolve(&self, input: &FamilyInput) -> Result<Resolution, ResolveError> {
        input.validate(&self.config)?;

        let mut metrics = ResolutionMetrics::new();
        metrics.persons = input.persons.len();
        metrics.claims_seen = input.claims.len();
        metrics.parent_edges_seen = input.parent_edges.len();

        let known = input.person_ids();

        // Phase 1: the index must see every claim before any is resolved,
        // including claims naming persons absent from the input
        let parents = ParentIndex::build(&input.claims);
        metrics.parent_overwrites = parents.overwrites();

        // Phase 2
        let mut pass = LinkPass {
            config: &self.config,
            parents: &parents,
            claims: ClaimIndex::build(&input.claims),
            known: &known,
            links: LinkSet::new(),
            metrics,
        };
        for edge in &input.parent_edges {
            pass.emit(CanonicalLink::parent(edge.parent_id, edge.child_id));
        }
        for (pos, claim) in input.claims.iter().enumerate() {
            pass.resolve(pos, claim);
        }
        let LinkPass {
            mut links,
            mut metrics,
            ..
        } = pass;

        // Phase 3
        if self.config.infer_co_parents {
            infer_co_parents(&mut links, &mut metrics);
        }

        let links = links.into_links();
        let tree = FamilyTree::assemble(&input.persons, &links);

        info!(
            persons = metrics.persons,
            claims = metrics.claims_seen,
            links = links.len(),
            inferred_spouses = metrics.inferred_spouses,
            unresolved = metrics.total_unresolved(),
            dangling = metrics.dangling_skipped,
            "Resolved family tree"
        );

        Ok(Resolution {
            tree,
            links,
            metrics,
        })
    }
}

/// What a single claim resolved to
enum Resolved {
    Link(CanonicalLink),
    /// A required prior claim or link was not found
    Unresolved,
    /// Generic link suppressed by configuration
    Dropped,
}

/// State of phase 2
struct LinkPass<'a> {
    config: &'a ResolverConfig,
    parents: &'a ParentIndex,
    claims: ClaimIndex<'a>,
    known: &'a HashSet<PersonId>,
    links: LinkSet,
    metrics: ResolutionMetrics,
}

impl LinkPass<'_> {
    fn resolve(&mut self, pos: usize, claim: &RelationshipClaim) {
        let category = claim.category();
        if category == Category::Unclassified {
            debug!(label = %claim.relation_type, "Unclassified relation type, using generic link");
            self.metrics.unclassified += 1;
        }

        match self.link_for(pos, claim, category) {
            Resolved::Link(link) => self.emit(link),
            Resolved::Unresolved => {
                debug!(
                    from = %claim.from_id,
                    to = %claim.to_id,
                    relation = %claim.relation_type,
                    "No prerequisite found, claim emits no link"
                );
                self.metrics.record_unresolved(category);
            }
            Resolved::Dropped => self.metrics.generic_dropped += 1,
        }
    }

    fn link_for(&self, pos: usize, claim: &RelationshipClaim, category: Category) -> Resolved {
        let (from, to) = (claim.from_id, claim.to_id);

        let link = match category {
            // "to is my father": to is the parent
            Category::DirectParent => Some(CanonicalLink::parent(to, from)),
            Category::DirectChild => Some(CanonicalLink::parent(from, to)),
            Category::Grandparent(lineage) => {
                // Without a known parent the generation is flattened
                let child = self.parents.chaining_parent(from, lineage).unwrap_or(from);
                Some(CanonicalLink::parent(to, child))
            }
            Category::Grandchild => {
                let kind = if claim.relation() == Some(RelationType::Granddaughter) {
                    LinkKind::Granddaughter
                } else {
                    LinkKind::Grandson
                };
                Some(CanonicalLink::new(from, to, kind))
            }
            Category::Spouse => Some(CanonicalLink::spouse(from, to)),
            Category::Sibling => Some(match self.parents.any_parent_of(from) {
                Some(parent) => CanonicalLink::parent(parent, to),
                None => CanonicalLink::sibling(from, to),
            }),
            Category::InLawSiblingSpouse => claim
                .relation()
                .and_then(|relation| relation.married_sibling())
                .and_then(|sibling| self.prerequisite(from, &[sibling], pos))
                .map(|sibling| CanonicalLink::spouse(sibling.to_id, to)),
            Category::UncleAunt => self
                .uncle_aunt_parent(from, pos)
                .map(|grandparent| CanonicalLink::parent(grandparent, to)),
            Category::Cousin => self
                .prerequisite(from, &UNCLES_AUNTS, pos)
                .map(|uncle| CanonicalLink::parent(uncle.to_id, to)),
            Category::ParentInLaw => self
                .prerequisite(from, &[RelationType::Spouse], pos)
                .map(|spouse| CanonicalLink::parent(to, spouse.to_id)),
            Category::ChildInLaw => self
                .prerequisite(from, &CHILDREN, pos)
                .map(|child| CanonicalLink::spouse(child.to_id, to)),
            Category::NephewNiece => self
                .prerequisite(from, &SIBLINGS, pos)
                .map(|sibling| CanonicalLink::parent(sibling.to_id, to)),
            Category::Unclassified => {
                if !self.config.emit_generic_links {
                    return Resolved::Dropped;
                }
                Some(CanonicalLink::generic(from, to, &claim.relation_type))
            }
        };

        link.map_or(Resolved::Unresolved, Resolved::Link)
    }

    fn prerequisite(
        &self,
        from: PersonId,
        relations: &[RelationType],
        pos: usize,
    ) -> Option<&RelationshipClaim> {
        self.claims
            .first_from(from, relations, pos, self.config.prerequisite_scope)
    }

    /// Person an uncle/aunt of `from` becomes a child of
    ///
    /// A grandparent claim wins. Otherwise a resolved parent of `from`'s
    /// father (other than `from`), and as a last resort any resolved parent
    /// of the father.
    fn uncle_aunt_parent(&self, from: PersonId, pos: usize) -> Option<PersonId> {
        if let Some(grandparent) = self.prerequisite(from, &GRANDPARENTS, pos) {
            return Some(grandparent.to_id);
        }

        let father = self.parents.father_of(from)?;
        let fathers_parents = self.links.parents_of(father);
        fathers_parents
            .iter()
            .copied()
            .find(|&p| p != from)
            .or_else(|| fathers_parents.first().copied())
    }

    /// Keep a link unless an endpoint is unknown, it repeats, or it loops
    fn emit(&mut self, link: CanonicalLink) {
        if !(self.known.contains(&link.source) && self.known.contains(&link.target)) {
            warn!(link = %link, "Skipping link that references an unknown person");
            self.metrics.dangling_skipped += 1;
            return;
        }

        let kind = link.kind.clone();
        match self.links.insert(link) {
            Insert::Added => self.metrics.record_link(&kind),
            Insert::Duplicate => self.metrics.duplicates_skipped += 1,
            Insert::SelfLink => {
                debug!(kind = %kind, "Skipping self link");
                self.metrics.self_links_skipped += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrerequisiteScope;
    use kinship_domain::{Gender, ParentEdge, Person};

    fn id(value: u64) -> PersonId {
        PersonId::new(value)
    }

    fn people(ids: &[u64]) -> Vec<Person> {
        ids.iter()
            .map(|&i| Person::new(i, format!("Person {}", i), Gender::Other))
            .collect()
    }

    fn resolve(ids: &[u64], claims: &[(u64, u64, &str)]) -> Resolution {
        resolve_with(ResolverConfig::default(), ids, claims)
    }

    fn resolve_with(config: ResolverConfig, ids: &[u64], claims: &[(u64, u64, &str)]) -> Resolution {
        let claims = claims
            .iter()
            .map(|&(from, to, label)| RelationshipClaim::new(from, to, label))
            .collect();
        let input = FamilyInput::new(people(ids)).with_claims(claims);
        Resolver::new(config).resolve(&input).unwrap()
    }

    #[test]
    fn test_direct_parent_and_child() {
        let resolution = resolve(&[1, 2, 3], &[(3, 1, "Father"), (1, 2, "Daughter")]);

        assert_eq!(
            resolution.links,
            vec![CanonicalLink::parent(id(1), id(3)), CanonicalLink::parent(id(1), id(2))]
        );
    }

    #[test]
    fn test_grandparent_chains_through_father() {
        let resolution = resolve(&[1, 2, 3], &[(3, 1, "Father"), (3, 2, "Paternal Grandfather")]);

        assert!(resolution.links.contains(&CanonicalLink::parent(id(2), id(1))));
    }

    #[test]
    fn test_maternal_grandparent_chains_through_mother() {
        let resolution = resolve(
            &[1, 2, 3, 4],
            &[(3, 1, "Father"), (3, 4, "Mother"), (3, 2, "Maternal Grandmother")],
        );

        assert!(resolution.links.contains(&CanonicalLink::parent(id(2), id(4))));
        assert!(!resolution.links.contains(&CanonicalLink::parent(id(2), id(1))));
    }

    #[test]
    fn test_grandparent_without_parent_flattens() {
        let resolution = resolve(&[2, 3], &[(3, 2, "Grandmother")]);

        assert_eq!(resolution.links, vec![CanonicalLink::parent(id(2), id(3))]);
    }

    #[test]
    fn test_grandchild_is_directed_from_claimant() {
        let resolution = resolve(&[1, 5, 6], &[(1, 5, "Grandson"), (1, 6, "granddaughter")]);

        assert_eq!(
            resolution.links,
            vec![
                CanonicalLink::new(id(1), id(5), LinkKind::Grandson),
                CanonicalLink::new(id(1), id(6), LinkKind::Granddaughter),
            ]
        );
    }

    #[test]
    fn test_sibling_attaches_to_parent() {
        let resolution = resolve(&[1, 3, 4], &[(3, 1, "Father"), (3, 4, "Brother")]);

        assert!(resolution.links.contains(&CanonicalLink::parent(id(1), id(4))));
        assert!(!resolution.links.contains(&CanonicalLink::sibling(id(3), id(4))));
    }

    #[test]
    fn test_sibling_uses_mother_when_no_father() {
        let resolution = resolve(&[2, 3, 4], &[(3, 2, "Mother"), (3, 4, "Sister")]);

        assert!(resolution.links.contains(&CanonicalLink::parent(id(2), id(4))));
    }

    #[test]
    fn test_sibling_without_parent_is_sibling_link() {
        let resolution = resolve(&[3, 4], &[(3, 4, "Brother")]);

        assert_eq!(resolution.links, vec![CanonicalLink::sibling(id(3), id(4))]);
    }

    #[test]
    fn test_sister_in_law_marries_brother() {
        let resolution = resolve(&[1, 4, 5], &[(1, 4, "Brother"), (1, 5, "Sister-in-law")]);

        assert!(resolution.links.contains(&CanonicalLink::spouse(id(4), id(5))));
    }

    #[test]
    fn test_brother_in_law_needs_sister_not_brother() {
        let resolution = resolve(&[1, 4, 5], &[(1, 4, "Brother"), (1, 5, "Brother-in-law")]);

        assert!(!resolution.links.iter().any(|l| l.kind == LinkKind::Spouse));
        assert_eq!(resolution.metrics.unresolved.get("in-law-sibling-spouse"), Some(&1));
    }

    #[test]
    fn test_uncle_attaches_to_grandparent_claim() {
        let resolution = resolve(&[1, 2, 6], &[(1, 2, "Grandfather"), (1, 6, "Uncle")]);

        assert!(resolution.links.contains(&CanonicalLink::parent(id(2), id(6))));
    }

    #[test]
    fn test_uncle_walks_fathers_resolved_parents() {
        // 1's father is 3; 3's father is 2 (as an emitted link)
        let resolution = resolve(
            &[1, 2, 3, 6],
            &[(1, 3, "Father"), (3, 2, "Father"), (1, 6, "Aunt")],
        );

        assert!(resolution.links.contains(&CanonicalLink::parent(id(2), id(6))));
    }

    #[test]
    fn test_uncle_without_anchor_is_unresolved() {
        let resolution = resolve(&[1, 3, 6], &[(1, 3, "Father"), (1, 6, "Uncle")]);

        assert_eq!(resolution.links, vec![CanonicalLink::parent(id(3), id(1))]);
        assert_eq!(resolution.metrics.unresolved.get("uncle-aunt"), Some(&1));
    }

    #[test]
    fn test_cousin_attaches_to_uncle() {
        let resolution = resolve(
            &[1, 2, 6, 7],
            &[(1, 2, "Grandmother"), (1, 6, "Uncle"), (1, 7, "Cousin")],
        );

        assert!(resolution.links.contains(&CanonicalLink::parent(id(6), id(7))));
    }

    #[test]
    fn test_parent_in_law_attaches_to_spouse() {
        let resolution = resolve(&[1, 4, 8], &[(1, 4, "Spouse"), (1, 8, "Mother-in-law")]);

        assert!(resolution.links.contains(&CanonicalLink::parent(id(8), id(4))));
    }

    #[test]
    fn test_child_in_law_marries_child() {
        let resolution = resolve(&[1, 5, 9], &[(1, 5, "Daughter"), (1, 9, "Son-in-law")]);

        assert!(resolution.links.contains(&CanonicalLink::spouse(id(5), id(9))));
    }

    #[test]
    fn test_nephew_attaches_to_sibling() {
        let resolution = resolve(&[1, 4, 10], &[(1, 4, "Sister"), (1, 10, "Niece")]);

        assert!(resolution.links.contains(&CanonicalLink::parent(id(4), id(10))));
    }

    #[test]
    fn test_late_prerequisite_is_order_sensitive() {
        let claims = [(1, 7, "Cousin"), (1, 2, "Grandfather"), (1, 6, "Uncle")];

        let preceding = resolve(&[1, 2, 6, 7], &claims);
        assert!(!preceding.links.contains(&CanonicalLink::parent(id(6), id(7))));
        assert_eq!(preceding.metrics.unresolved.get("cousin"), Some(&1));

        let config = ResolverConfig {
            prerequisite_scope: PrerequisiteScope::Complete,
            ..ResolverConfig::default()
        };
        let complete = resolve_with(config, &[1, 2, 6, 7], &claims);
        assert!(complete.links.contains(&CanonicalLink::parent(id(6), id(7))));
    }

    #[test]
    fn test_unclassified_emits_generic_link() {
        let resolution = resolve(&[1, 2], &[(1, 2, " Godparent ")]);

        assert_eq!(
            resolution.links,
            vec![CanonicalLink::new(id(1), id(2), LinkKind::Generic("godparent".to_string()))]
        );
        assert_eq!(resolution.metrics.unclassified, 1);
    }

    #[test]
    fn test_generic_links_can_be_disabled() {
        let config = ResolverConfig {
            emit_generic_links: false,
            ..ResolverConfig::default()
        };
        let resolution = resolve_with(config, &[1, 2], &[(1, 2, "Other")]);

        assert!(resolution.links.is_empty());
        assert_eq!(resolution.metrics.generic_dropped, 1);
    }

    #[test]
    fn test_parent_edges_come_first() {
        let input = FamilyInput::new(people(&[1, 2, 3]))
            .with_parent_edges(vec![ParentEdge::new(2, 3)])
            .with_claims(vec![RelationshipClaim::new(3, 1, "Father")]);

        let resolution = Resolver::default_config().resolve(&input).unwrap();
        assert_eq!(resolution.links[0], CanonicalLink::parent(id(2), id(3)));
        assert!(resolution.links.contains(&CanonicalLink::spouse(id(1), id(2))));
    }

    #[test]
    fn test_co_parent_inference_can_be_disabled() {
        let config = ResolverConfig {
            infer_co_parents: false,
            ..ResolverConfig::default()
        };
        let resolution = resolve_with(config, &[1, 2, 3], &[(3, 1, "Father"), (3, 2, "Mother")]);

        assert_eq!(resolution.links.len(), 2);
        assert_eq!(resolution.metrics.inferred_spouses, 0);
    }

    #[test]
    fn test_dangling_claims_are_skipped() {
        let resolution = resolve(&[1, 2], &[(1, 99, "Father"), (2, 1, "Father")]);

        assert_eq!(resolution.links, vec![CanonicalLink::parent(id(1), id(2))]);
        assert_eq!(resolution.metrics.dangling_skipped, 1);
        assert_eq!(resolution.metrics.claims_seen, 2);
    }

    #[test]
    fn test_unknown_father_still_anchors_chained_claims() {
        let resolution = resolve(
            &[1, 2, 5],
            &[(1, 99, "Father"), (1, 2, "Brother"), (1, 5, "Paternal Grandfather")],
        );

        // parent(99, 1), parent(99, 2) and parent(5, 99) all name person 99
        assert!(resolution.links.is_empty());
        assert_eq!(resolution.metrics.dangling_skipped, 3);
        assert!(!resolution.links.contains(&CanonicalLink::parent(id(5), id(1))));
        assert!(!resolution.links.contains(&CanonicalLink::sibling(id(1), id(2))));
    }

    #[test]
    fn test_uncle_falls_back_to_claimant_as_fathers_parent() {
        // 3 is 1's father and 1 is the only resolved parent of 3
        let resolution = resolve(
            &[1, 3, 6],
            &[(3, 1, "Father"), (1, 3, "Father"), (1, 6, "Uncle")],
        );

        assert_eq!(
            resolution.links,
            vec![
                CanonicalLink::parent(id(1), id(3)),
                CanonicalLink::parent(id(3), id(1)),
                CanonicalLink::parent(id(1), id(6)),
            ]
        );
        assert_eq!(resolution.metrics.total_unresolved(), 0);
    }

    #[test]
    fn test_in_law_and_nephew_without_prerequisite() {
        let resolution = resolve(
            &[1, 7, 8, 9],
            &[(1, 7, "Father-in-law"), (1, 8, "Daughter-in-law"), (1, 9, "Nephew")],
        );

        assert!(resolution.links.is_empty());
        assert_eq!(resolution.metrics.unresolved.get("parent-in-law"), Some(&1));
        assert_eq!(resolution.metrics.unresolved.get("child-in-law"), Some(&1));
        assert_eq!(resolution.metrics.unresolved.get("nephew-niece"), Some(&1));
    }

    #[test]
    fn test_self_claims_produce_no_link() {
        let resolution = resolve(&[1], &[(1, 1, "Spouse")]);

        assert!(resolution.links.is_empty());
        assert_eq!(resolution.metrics.self_links_skipped, 1);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let input = FamilyInput::new(vec![
            Person::new(1, "Anna", Gender::Female),
            Person::new(1, "Anna again", Gender::Female),
        ]);

        let result = Resolver::default_config().resolve(&input);
        assert!(matches!(result, Err(ResolveError::DuplicatePerson(_))));
    }
}
