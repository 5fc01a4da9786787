//! Person module - the nodes of a family graph

use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a person in a family graph
///
/// Identifiers are free-form strings chosen by whoever authors the family
/// document. The id borrows as `&str`, so indices keyed by `PersonId` can be
/// queried with plain string slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(String);

impl PersonId {
    /// Create a new PersonId
    ///
    /// # Examples
    ///
    /// ```
    /// use sanak_domain::PersonId;
    ///
    /// let id = PersonId::new("budi");
    /// assert_eq!(id.as_str(), "budi");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gender of a person
///
/// Only used to pick gendered label variants (Mother/Father, Son/Daughter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse a gender from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

/// A postal address with an optional map link
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// Address text
    pub address: String,

    /// Link to the address on a map
    pub gmap_link: Option<String>,
}

/// A phone number
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneNumber {
    /// The number as written
    pub number: String,

    /// Whether the number is reachable on WhatsApp
    pub is_whatsapp_number: bool,
}

/// A person record
///
/// Display attributes travel with the person but play no part in kinship
/// computation. Records are immutable during a resolver query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Gender, if known
    pub gender: Option<Gender>,

    /// Display name
    pub name: Option<String>,

    /// Birth date as written in the source document
    pub birth_date: Option<String>,

    /// Addresses, in document order
    pub address: Vec<Address>,

    /// Contact number
    pub phone_number: Option<PhoneNumber>,

    /// Link to a photo
    pub photo_link: Option<String>,

    /// Short biography
    pub short_bio: Option<String>,

    /// Whether the person has passed away
    pub deceased: bool,
}

impl Person {
    /// Create a person with only an id and gender
    pub fn new(id: impl Into<PersonId>, gender: Option<Gender>) -> Self {
        Self {
            id: id.into(),
            gender,
            ..Self::default()
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for display, falling back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}
