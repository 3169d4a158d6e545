//! Graph assembler - projects persons and resolved links into the output document

use crate::ResolveError;
use kinship_domain::{CanonicalLink, Gender, Person, PersonId};
use serde::{Deserialize, Serialize};

/// A person as presented to the visualization client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Person id
    pub id: PersonId,
    /// Display name
    pub name: String,
    /// Photo reference
    pub photo: Option<String>,
    /// Committee role, else relation label
    pub role: String,
    /// Whether the person holds a committee role
    pub is_committee: bool,
    /// Linked account login, used by the client to center the tree
    pub username: Option<String>,
    /// Gender code
    pub gender: Gender,
    /// Age in years
    pub age: Option<u32>,
    /// Occupation
    pub occupation: Option<String>,
    /// Date of birth
    pub date_of_birth: Option<String>,
    /// Blood group
    pub blood_group: Option<String>,
    /// Education
    pub education: Option<String>,
    /// Location
    pub location: Option<String>,
    /// Place of work
    pub place_of_work: Option<String>,
    /// Whether the person is deceased
    pub is_deceased: bool,
}

impl From<&Person> for TreeNode {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            photo: person.photo_url.clone(),
            role: person.display_role().to_string(),
            is_committee: person.is_committee(),
            username: person.username.clone(),
            gender: person.gender,
            age: person.age,
            occupation: person.occupation.clone(),
            date_of_birth: person.date_of_birth.clone(),
            blood_group: person.blood_group.clone(),
            education: person.education.clone(),
            location: person.location.clone(),
            place_of_work: person.place_of_work.clone(),
            is_deceased: person.is_deceased,
        }
    }
}

/// A link as presented to the visualization client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeLink {
    /// Source person (the parent for `parent` links)
    pub source: PersonId,
    /// Target person (the child for `parent` links)
    pub target: PersonId,
    /// Link type: parent, spouse, sibling, grandson, granddaughter or a generic label
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&CanonicalLink> for TreeLink {
    fn from(link: &CanonicalLink) -> Self {
        Self {
            source: link.source,
            target: link.target,
            kind: link.kind.as_str().to_string(),
        }
    }
}

/// The `{nodes, links}` document consumed by the visualization client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyTree {
    /// One node per person, in input order
    pub nodes: Vec<TreeNode>,
    /// Resolved links, in resolution order
    pub links: Vec<TreeLink>,
}

impl FamilyTree {
    /// Assemble the document; no resolution happens here
    pub fn assemble(persons: &[Person], links: &[CanonicalLink]) -> Self {
        Self {
            nodes: persons.iter().map(TreeNode::from).collect(),
            links: links.iter().map(TreeLink::from).collect(),
        }
    }

    /// Node for a person id
    pub fn node(&self, id: PersonId) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Render as JSON
    pub fn to_json(&self, pretty: bool) -> Result<String, ResolveError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
