//! Relationship module - typed edges between people

use crate::PersonId;

/// Type of relationship edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeKind {
    /// Source is a biological parent of target (default when untyped)
    #[default]
    Parent,

    /// Source is a foster or adoptive parent of target
    FosterParent,

    /// Source and target are married
    Married,

    /// Source and target were married and are now divorced
    Divorced,

    /// Source and target are partners without a marriage
    NotMarried,
}

impl EdgeKind {
    /// Get the edge kind as it is written in family documents
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Parent => "parent",
            EdgeKind::FosterParent => "foster_parent",
            EdgeKind::Married => "married",
            EdgeKind::Divorced => "divorced",
            EdgeKind::NotMarried => "not_married",
        }
    }

    /// Parse an edge kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "parent" => Some(EdgeKind::Parent),
            "foster_parent" => Some(EdgeKind::FosterParent),
            "married" => Some(EdgeKind::Married),
            "divorced" => Some(EdgeKind::Divorced),
            "not_married" => Some(EdgeKind::NotMarried),
            _ => None,
        }
    }

    /// Whether the edge links a parent to a child
    pub fn is_parental(&self) -> bool {
        matches!(self, EdgeKind::Parent | EdgeKind::FosterParent)
    }

    /// The partner kind for partnership edges, `None` for parental edges
    pub fn partner_kind(&self) -> Option<PartnerKind> {
        match self {
            EdgeKind::Married => Some(PartnerKind::Married),
            EdgeKind::Divorced => Some(PartnerKind::Divorced),
            EdgeKind::NotMarried => Some(PartnerKind::NotMarried),
            EdgeKind::Parent | EdgeKind::FosterParent => None,
        }
    }
}

impl std::str::FromStr for EdgeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relationship type: {}", s))
    }
}

/// Kind of partnership stored in the spouse index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartnerKind {
    /// Current marriage
    Married,

    /// Former marriage
    Divorced,

    /// Partnership without marriage
    NotMarried,
}

impl PartnerKind {
    /// Whether in-law kinship flows through this partnership
    ///
    /// Only a current marriage makes the partner's family into in-laws.
    pub fn propagates_affinity(&self) -> bool {
        matches!(self, PartnerKind::Married)
    }
}

/// A directed relationship edge
///
/// For parental kinds `source` is the parent of `target`. Partnership kinds
/// are stored once but are semantically undirected; the graph indexes them
/// in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source person (the parent, for parental edges)
    pub source: PersonId,

    /// Target person (the child, for parental edges)
    pub target: PersonId,

    /// Type of relationship
    pub kind: EdgeKind,
}

impl Edge {
    /// Create a new edge
    pub fn new(source: impl Into<PersonId>, target: impl Into<PersonId>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    /// `parent` is a biological parent of `child`
    pub fn parent(parent: impl Into<PersonId>, child: impl Into<PersonId>) -> Self {
        Self::new(parent, child, EdgeKind::Parent)
    }

    /// `parent` is a foster parent of `child`
    pub fn foster_parent(parent: impl Into<PersonId>, child: impl Into<PersonId>) -> Self {
        Self::new(parent, child, EdgeKind::FosterParent)
    }

    /// `a` and `b` are married
    pub fn married(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self::new(a, b, EdgeKind::Married)
    }

    /// `a` and `b` are divorced
    pub fn divorced(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self::new(a, b, EdgeKind::Divorced)
    }

    /// `a` and `b` are partners but not married
    pub fn not_married(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self::new(a, b, EdgeKind::NotMarried)
    }
}
