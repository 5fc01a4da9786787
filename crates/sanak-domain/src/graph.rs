//! Kinship graph model - parent, child and partner indices
//!
//! The indices are derived from a flat edge list and rebuilt whenever that
//! list changes. Construction is total: dangling ids and self-loops pass
//! through silently, callers supply a well-formed graph.

use crate::relationship::{Edge, EdgeKind, PartnerKind};
use crate::PersonId;
use std::collections::{HashMap, HashSet};

/// A partner entry in the spouse index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partner {
    /// The partner's id
    pub id: PersonId,

    /// Kind of partnership
    pub kind: PartnerKind,
}

/// Immutable indices over a family graph
///
/// `parents` combines biological and foster parents. The foster distinction
/// is kept separately so the classifier can tell the two apart for the same
/// generational coordinate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KinshipGraph {
    edges: Vec<Edge>,
    parents: HashMap<PersonId, Vec<PersonId>>,
    children: HashMap<PersonId, Vec<PersonId>>,
    spouses: HashMap<PersonId, Vec<Partner>>,
    biological: HashSet<(PersonId, PersonId)>,
    foster: HashSet<(PersonId, PersonId)>,
}

impl KinshipGraph {
    /// Build the indices from an edge list in O(E)
    pub fn build(edges: &[Edge]) -> Self {
        let mut graph = Self {
            edges: edges.to_vec(),
            ..Self::default()
        };

        for edge in edges {
            match edge.kind.partner_kind() {
                None => graph.index_parental(edge),
                Some(kind) => {
                    push_partner(&mut graph.spouses, &edge.source, &edge.target, kind);
                    push_partner(&mut graph.spouses, &edge.target, &edge.source, kind);
                }
            }
        }

        graph
    }

    fn index_parental(&mut self, edge: &Edge) {
        let pair = (edge.source.clone(), edge.target.clone());
        if edge.kind == EdgeKind::FosterParent {
            self.foster.insert(pair);
        } else {
            self.biological.insert(pair);
        }

        push_unique(&mut self.parents, &edge.target, &edge.source);
        push_unique(&mut self.children, &edge.source, &edge.target);
    }

    /// The raw edge list the indices were built from
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Parents (biological and foster) of a person, in edge order
    pub fn parents_of(&self, id: &str) -> &[PersonId] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Children (biological and foster) of a person, in edge order
    pub fn children_of(&self, id: &str) -> &[PersonId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All partners of a person, including non-marital and former ones
    pub fn partners_of(&self, id: &str) -> &[Partner] {
        self.spouses.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Partners through whom in-law kinship flows
    pub fn spouses_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a PersonId> + 'a {
        self.partners_of(id)
            .iter()
            .filter(|partner| partner.kind.propagates_affinity())
            .map(|partner| &partner.id)
    }

    /// The partnership between two people, if any
    ///
    /// When several partnership edges connect the same pair, a current
    /// marriage wins over a divorce, which wins over a non-marital one.
    pub fn partnership(&self, a: &str, b: &str) -> Option<PartnerKind> {
        let kinds = self
            .partners_of(a)
            .iter()
            .filter(|partner| partner.id.as_str() == b)
            .map(|partner| partner.kind);

        kinds.min_by_key(|kind| match kind {
            PartnerKind::Married => 0,
            PartnerKind::Divorced => 1,
            PartnerKind::NotMarried => 2,
        })
    }

    /// Whether `parent` is a foster parent of `child` and not also a biological one
    pub fn is_foster_link(&self, parent: &str, child: &str) -> bool {
        let pair = (PersonId::new(parent), PersonId::new(child));
        self.foster.contains(&pair) && !self.biological.contains(&pair)
    }

    /// Whether `a` and `b` share at least one parent
    pub fn are_siblings(&self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let theirs = self.parents_of(b);
        self.parents_of(a).iter().any(|p| theirs.contains(p))
    }

    /// Whether the id appears in any edge
    pub fn contains(&self, id: &str) -> bool {
        self.parents.contains_key(id) || self.children.contains_key(id) || self.spouses.contains_key(id)
    }
}

fn push_unique(index: &mut HashMap<PersonId, Vec<PersonId>>, key: &PersonId, value: &PersonId) {
    let entry = index.entry(key.clone()).or_default();
    if !entry.contains(value) {
        entry.push(value.clone());
    }
}

fn push_partner(
    index: &mut HashMap<PersonId, Vec<Partner>>,
    key: &PersonId,
    other: &PersonId,
    kind: PartnerKind,
) {
    let partner = Partner {
        id: other.clone(),
        kind,
    };
    let entry = index.entry(key.clone()).or_default();
    if !entry.contains(&partner) {
        entry.push(partner);
    }
}
