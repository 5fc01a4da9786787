//! Family document format
//!
//! A document has two top-level lists:
//!
//! ```yaml
//! people:
//!   - id: eko
//!     name: Eko Prasetyo
//!     gender: male
//!     birthDate: "1985-04-12"
//! relationships:
//!   - from: eko      # the child
//!     to: budi       # the parent
//!     type: parent   # default when omitted
//!   - from: eko
//!     to: dewi
//!     type: married
//! ```
//!
//! For parental types `to` is the parent of `from`. Partnerships are
//! undirected.

use crate::error::{Result, TreeError};
use sanak_domain::{Address, Edge, EdgeKind, Gender, Person, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// An address entry on a person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Address text
    pub address: String,

    /// Map link for the address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmap_link: Option<String>,
}

impl From<&AddressRecord> for Address {
    fn from(record: &AddressRecord) -> Self {
        Address {
            address: record.address.clone(),
            gmap_link: record.gmap_link.clone(),
        }
    }
}

/// A phone number entry on a person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
    /// The number as written
    pub number: String,

    /// Whether the number is on WhatsApp
    #[serde(default)]
    pub is_whatsapp_number: bool,
}

impl From<&PhoneRecord> for PhoneNumber {
    fn from(record: &PhoneRecord) -> Self {
        PhoneNumber {
            number: record.number.clone(),
            is_whatsapp_number: record.is_whatsapp_number,
        }
    }
}

/// A person entry as written in a family document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Unique identifier
    pub id: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `male` or `female`; anything else is treated as unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Birth date, kept as written
    #[serde(default, alias = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<AddressRecord>,

    /// Contact number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneRecord>,

    /// Link to a photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_link: Option<String>,

    /// Short biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_bio: Option<String>,

    /// Whether the person has passed away
    #[serde(default)]
    pub deceased: bool,
}

impl PersonRecord {
    /// Convert to a domain person
    pub fn to_person(&self) -> Person {
        Person {
            id: self.id.as_str().into(),
            gender: self.gender.as_deref().and_then(Gender::parse),
            name: self.name.clone(),
            birth_date: self.birth_date.clone(),
            address: self.address.iter().map(Address::from).collect(),
            phone_number: self.phone_number.as_ref().map(PhoneNumber::from),
            photo_link: self.photo_link.clone(),
            short_bio: self.short_bio.clone(),
            deceased: self.deceased,
        }
    }
}

/// Relationship type as written in a family document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// `to` is a biological parent of `from`
    #[default]
    Parent,
    /// `to` is a foster parent of `from`
    FosterParent,
    /// Married partners
    Married,
    /// Divorced partners
    Divorced,
    /// Partners without marriage
    NotMarried,
}

impl From<RelationshipType> for EdgeKind {
    fn from(kind: RelationshipType) -> Self {
        match kind {
            RelationshipType::Parent => EdgeKind::Parent,
            RelationshipType::FosterParent => EdgeKind::FosterParent,
            RelationshipType::Married => EdgeKind::Married,
            RelationshipType::Divorced => EdgeKind::Divorced,
            RelationshipType::NotMarried => EdgeKind::NotMarried,
        }
    }
}

/// A relationship entry as written in a family document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// The child, for parental types
    pub from: String,

    /// The parent, for parental types
    pub to: String,

    /// Relationship type
    #[serde(rename = "type", default)]
    pub kind: RelationshipType,
}

impl RelationshipRecord {
    /// Convert to a domain edge (parent as source for parental types)
    pub fn to_edge(&self) -> Edge {
        let kind = EdgeKind::from(self.kind);
        if kind.is_parental() {
            Edge::new(self.to.as_str(), self.from.as_str(), kind)
        } else {
            Edge::new(self.from.as_str(), self.to.as_str(), kind)
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    people: Option<Vec<PersonRecord>>,
    relationships: Option<Vec<RelationshipRecord>>,
}

/// A parsed and structurally checked family document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FamilyDocument {
    /// People in the family graph
    pub people: Vec<PersonRecord>,

    /// Typed relationships between them
    pub relationships: Vec<RelationshipRecord>,
}

impl FamilyDocument {
    /// Parse a YAML document
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: RawDocument = serde_yaml::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Parse a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Read a document from disk; `.json` files are JSON, anything else YAML
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        let people = raw
            .people
            .ok_or_else(|| TreeError::InvalidDocument("missing `people` list".to_string()))?;
        let relationships = raw
            .relationships
            .ok_or_else(|| TreeError::InvalidDocument("missing `relationships` list".to_string()))?;

        let document = Self {
            people,
            relationships,
        };
        document.validate()?;
        Ok(document)
    }

    /// Reject documents whose person ids are empty or repeated
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for record in &self.people {
            if record.id.trim().is_empty() {
                return Err(TreeError::InvalidDocument("person with empty id".to_string()));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(TreeError::InvalidDocument(format!("duplicate person id '{}'", record.id)));
            }
        }
        Ok(())
    }

    /// Domain person records, in document order
    pub fn persons(&self) -> Vec<Person> {
        self.people.iter().map(PersonRecord::to_person).collect()
    }

    /// Domain edges, in document order
    pub fn edges(&self) -> Vec<Edge> {
        self.relationships.iter().map(RelationshipRecord::to_edge).collect()
    }

    /// Serialize back to YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
