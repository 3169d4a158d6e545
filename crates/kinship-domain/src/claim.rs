//! Claim module - directed, typed relationship assertions between persons

use crate::relation::{Category, RelationType};
use crate::PersonId;
use serde::{Deserialize, Serialize};

/// A relationship claim
///
/// Interpretation: "`from_id` says `to_id` is their `relation_type`".
/// Example: `(Alex, John, "Father")` means "Alex says John is his Father".
///
/// The label is kept as the store recorded it; classification happens
/// through the catalog so that unknown labels survive as generic links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipClaim {
    /// The claimant
    pub from_id: PersonId,

    /// The person being described
    pub to_id: PersonId,

    /// Relation label as recorded
    pub relation_type: String,
}

impl RelationshipClaim {
    /// Create a new claim
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::{Category, RelationshipClaim};
    ///
    /// let claim = RelationshipClaim::new(3, 1, "Father");
    /// assert_eq!(claim.category(), Category::DirectParent);
    /// ```
    pub fn new(
        from_id: impl Into<PersonId>,
        to_id: impl Into<PersonId>,
        relation_type: impl Into<String>,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            relation_type: relation_type.into(),
        }
    }

    /// Catalog entry for the label, if it is a known one
    pub fn relation(&self) -> Option<RelationType> {
        RelationType::parse(&self.relation_type)
    }

    /// Category of the label (`Unclassified` for unknown labels)
    pub fn category(&self) -> Category {
        Category::of(&self.relation_type)
    }
}

/// An already materialized parent/child pair
///
/// Supplied alongside the claims by stores that keep a direct
/// many-to-many "parents" relation on the person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentEdge {
    /// The parent
    pub parent_id: PersonId,

    /// The child
    pub child_id: PersonId,
}

impl ParentEdge {
    /// Create a new parent edge
    pub fn new(parent_id: impl Into<PersonId>, child_id: impl Into<PersonId>) -> Self {
        Self {
            parent_id: parent_id.into(),
            child_id: child_id.into(),
        }
    }
}
