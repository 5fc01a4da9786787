//! Kinship resolver - labels a target person from a POV
//!
//! Evaluation order for one query:
//! 1. same person
//! 2. direct partnership
//! 3. blood coordinate through the nearest common ancestor
//! 4. affinal passes over married-in relatives, first match wins
//! 5. [`Kinship::Relative`]
//!
//! The resolver holds no state between queries besides the read-only graph.

use crate::ancestry::{ancestors_of, nearest_common_ancestor};
use crate::graph::KinshipGraph;
use crate::kinship::{classify_blood, gendered, Kinship};
use crate::relationship::{Edge, PartnerKind};
use crate::{Gender, Person, PersonId};
use std::collections::HashMap;

/// Resolves kinship terms against one immutable graph
///
/// # Examples
///
/// ```
/// use sanak_domain::{Edge, Gender, Kinship, KinshipGraph, Person, Resolver};
///
/// let edges = vec![
///     Edge::parent("gp", "p1"),
///     Edge::parent("gp", "p2"),
///     Edge::parent("p1", "c"),
/// ];
/// let people = vec![Person::new("p2", Some(Gender::Male)), Person::new("c", None)];
/// let graph = KinshipGraph::build(&edges);
/// let resolver = Resolver::new(&graph, &people);
///
/// assert_eq!(resolver.resolve("c", "p2"), Some(Kinship::Uncle));
/// ```
pub struct Resolver<'a> {
    graph: &'a KinshipGraph,
    people: &'a [Person],
    genders: HashMap<&'a str, Option<Gender>>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a graph and its person records
    pub fn new(graph: &'a KinshipGraph, people: &'a [Person]) -> Self {
        let genders = people
            .iter()
            .map(|person| (person.id.as_str(), person.gender))
            .collect();

        Self {
            graph,
            people,
            genders,
        }
    }

    /// Label `target` from the perspective of `pov`
    ///
    /// Returns `None` only when either id is unknown to both the person list
    /// and the edge list. Every known pair resolves to a term, with
    /// [`Kinship::Relative`] as the fallback.
    pub fn resolve(&self, pov: &str, target: &str) -> Option<Kinship> {
        if !self.is_known(pov) || !self.is_known(target) {
            return None;
        }
        Some(self.classify(pov, target))
    }

    /// Label every person in the person list from `pov`, in list order
    ///
    /// Empty when `pov` is unknown.
    pub fn resolve_all(&self, pov: &str) -> Vec<(&'a Person, Kinship)> {
        if !self.is_known(pov) {
            return Vec::new();
        }
        self.people
            .iter()
            .map(|person| (person, self.classify(pov, person.id.as_str())))
            .collect()
    }

    fn is_known(&self, id: &str) -> bool {
        self.genders.contains_key(id) || self.graph.contains(id)
    }

    fn gender_of(&self, id: &str) -> Option<Gender> {
        self.genders.get(id).copied().flatten()
    }

    fn classify(&self, pov: &str, target: &str) -> Kinship {
        if pov == target {
            return Kinship::Myself;
        }

        let gender = self.gender_of(target);

        if let Some(kind) = self.graph.partnership(pov, target) {
            return partner_term(kind, gender);
        }

        if let Some(coordinate) = nearest_common_ancestor(pov, target, self.graph) {
            return match (coordinate.up, coordinate.down) {
                (1, 0) if self.graph.is_foster_link(target, pov) => {
                    gendered(gender, Kinship::FosterMother, Kinship::FosterFather, Kinship::FosterParent)
                }
                (0, 1) if self.graph.is_foster_link(pov, target) => Kinship::FosterChild,
                (up, down) => classify_blood(up, down, gender),
            };
        }

        self.affinal(pov, target, gender).unwrap_or(Kinship::Relative)
    }

    /// Run the in-law passes in order and return the first match
    fn affinal(&self, pov: &str, target: &str, gender: Option<Gender>) -> Option<Kinship> {
        self.spouse_of_my_relative(pov, target, gender)
            .or_else(|| self.relative_of_my_spouse(pov, target, gender))
            .or_else(|| self.in_law_of_uncle_or_aunt(pov, target, gender))
            .or_else(|| self.co_parent_in_law(pov, target))
            .or_else(|| self.in_law_of_cousin(pov, target, gender))
            .or_else(|| self.spouse_of_spouses_relative(pov, target, gender))
    }

    fn coordinate(&self, from: &str, to: &str) -> Option<(u32, u32)> {
        nearest_common_ancestor(from, to, self.graph).map(|c| (c.up, c.down))
    }

    /// Target is married to one of my blood relatives
    fn spouse_of_my_relative(&self, pov: &str, target: &str, gender: Option<Gender>) -> Option<Kinship> {
        self.graph.spouses_of(target).find_map(|spouse| {
            let (up, down) = self.coordinate(pov, spouse.as_str())?;
            spouse_of_relative_term(up, down, gender)
        })
    }

    /// I am married to one of target's blood relatives
    fn relative_of_my_spouse(&self, pov: &str, target: &str, gender: Option<Gender>) -> Option<Kinship> {
        self.graph.spouses_of(pov).find_map(|spouse| {
            let (up, down) = self.coordinate(spouse.as_str(), target)?;
            relative_of_spouse_term(up, down, gender)
        })
    }

    /// Target is a blood relative of someone married to my uncle or aunt
    fn in_law_of_uncle_or_aunt(&self, pov: &str, target: &str, gender: Option<Gender>) -> Option<Kinship> {
        self.uncles_and_aunts(pov).into_iter().find_map(|relative| {
            self.graph.spouses_of(relative.as_str()).find_map(|spouse| {
                match self.coordinate(spouse.as_str(), target)? {
                    (1, 0) => Some(gendered(gender, Kinship::Grandmother, Kinship::Grandfather, Kinship::Grandparent)),
                    (2, 0) => Some(Kinship::GreatGrandparent),
                    (1, 1) => Some(gendered(gender, Kinship::Aunt, Kinship::Uncle, Kinship::AuntOrUncle)),
                    _ => None,
                }
            })
        })
    }

    /// Target is an ancestor or sibling of my child's or grandchild's spouse
    fn co_parent_in_law(&self, pov: &str, target: &str) -> Option<Kinship> {
        let children = self.graph.children_of(pov);
        let grandchildren = children
            .iter()
            .flat_map(|child| self.graph.children_of(child.as_str()));

        children
            .iter()
            .chain(grandchildren)
            .flat_map(|descendant| self.graph.spouses_of(descendant.as_str()))
            .filter(|spouse| spouse.as_str() != target)
            .any(|spouse| {
                ancestors_of(spouse.as_str(), self.graph).contains_key(target)
                    || self.graph.are_siblings(spouse.as_str(), target)
            })
            .then_some(Kinship::CoParentInLaw)
    }

    /// Target is a blood relative of someone married to my cousin
    fn in_law_of_cousin(&self, pov: &str, target: &str, gender: Option<Gender>) -> Option<Kinship> {
        let uncles_and_aunts = self.uncles_and_aunts(pov);
        let cousins = uncles_and_aunts
            .iter()
            .flat_map(|relative| self.graph.children_of(relative.as_str()));

        cousins
            .flat_map(|cousin| self.graph.spouses_of(cousin.as_str()))
            .find_map(|spouse| match self.coordinate(spouse.as_str(), target)? {
                (1, 0) => Some(gendered(gender, Kinship::Aunt, Kinship::Uncle, Kinship::AuntOrUncle)),
                (2, 0) => Some(gendered(gender, Kinship::Grandmother, Kinship::Grandfather, Kinship::Grandparent)),
                (1, 1) => Some(Kinship::Cousin),
                _ => None,
            })
    }

    /// Target is married to a blood relative of my spouse
    fn spouse_of_spouses_relative(&self, pov: &str, target: &str, gender: Option<Gender>) -> Option<Kinship> {
        self.graph.spouses_of(pov).find_map(|my_spouse| {
            self.graph
                .spouses_of(target)
                .filter(|their_spouse| *their_spouse != my_spouse)
                .find_map(|their_spouse| {
                    match self.coordinate(my_spouse.as_str(), their_spouse.as_str())? {
                        (1, 1) => Some(Kinship::SiblingInLaw),
                        (2, 1) => Some(gendered(gender, Kinship::Aunt, Kinship::Uncle, Kinship::AuntOrUncle)),
                        (1, 2) => Some(gendered(gender, Kinship::Niece, Kinship::Nephew, Kinship::NieceOrNephew)),
                        (2, 2) | (3, 3) => Some(Kinship::CousinInLaw),
                        _ => None,
                    }
                })
        })
    }

    /// Siblings of my parents: my grandparents' children other than my parents
    fn uncles_and_aunts(&self, pov: &str) -> Vec<&'a PersonId> {
        let graph = self.graph;
        let parents = graph.parents_of(pov);
        let mut found: Vec<&'a PersonId> = Vec::new();

        for parent in parents {
            for grandparent in graph.parents_of(parent.as_str()) {
                for candidate in graph.children_of(grandparent.as_str()) {
                    if candidate.as_str() != pov && !parents.contains(candidate) && !found.contains(&candidate) {
                        found.push(candidate);
                    }
                }
            }
        }

        found
    }
}

fn partner_term(kind: PartnerKind, gender: Option<Gender>) -> Kinship {
    match kind {
        PartnerKind::Married => gendered(gender, Kinship::Wife, Kinship::Husband, Kinship::Spouse),
        PartnerKind::Divorced => gendered(gender, Kinship::ExWife, Kinship::ExHusband, Kinship::ExSpouse),
        PartnerKind::NotMarried => Kinship::Relative,
    }
}

/// Coordinate runs from the POV to the target's spouse
fn spouse_of_relative_term(up: u32, down: u32, gender: Option<Gender>) -> Option<Kinship> {
    use Kinship::*;

    let kinship = match (up, down) {
        // Step-parents are labelled as parents
        (1, 0) => gendered(gender, Mother, Father, Parent),
        (2, 0) => gendered(gender, Grandmother, Grandfather, Grandparent),
        (0, 1) => ChildInLaw,
        (0, 2) => GrandchildInLaw,
        (0, 3) => GreatGrandchildInLaw,
        (1, 1) => SiblingInLaw,
        (2, 1) | (3, 2) => gendered(gender, Aunt, Uncle, AuntOrUncle),
        (1, 2) | (2, 3) => gendered(gender, Niece, Nephew, NieceOrNephew),
        (2, 2) | (3, 3) => CousinInLaw,
        _ => return None,
    };
    Some(kinship)
}

/// Coordinate runs from the POV's spouse to the target
fn relative_of_spouse_term(up: u32, down: u32, gender: Option<Gender>) -> Option<Kinship> {
    use Kinship::*;

    let kinship = match (up, down) {
        (1, 0) => ParentInLaw,
        (2, 0) => gendered(gender, GrandmotherInLaw, GrandfatherInLaw, GrandparentInLaw),
        (1, 1) => SiblingInLaw,
        (2, 1) => gendered(gender, Aunt, Uncle, AuntOrUncle),
        (2, 2) | (3, 3) => CousinInLaw,
        (1, 2) | (2, 3) => gendered(gender, Niece, Nephew, NieceOrNephew),
        // Step-children are labelled as children
        (0, 1) => gendered(gender, Daughter, Son, Child),
        (0, 2) => gendered(gender, Granddaughter, Grandson, Grandchild),
        _ => return None,
    };
    Some(kinship)
}

/// Resolve a single query from raw edges and person records
///
/// Builds the graph indices on every call; use [`Resolver`] directly when
/// labelling many targets against one graph.
pub fn resolve(pov: &str, target: &str, edges: &[Edge], people: &[Person]) -> Option<Kinship> {
    let graph = KinshipGraph::build(edges);
    Resolver::new(&graph, people).resolve(pov, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male(id: &str) -> Person {
        Person::new(id, Some(Gender::Male))
    }

    fn female(id: &str) -> Person {
        Person::new(id, Some(Gender::Female))
    }

    #[test]
    fn test_uncle_through_shared_grandparent() {
        let edges = vec![Edge::parent("gp", "p1"), Edge::parent("gp", "p2"), Edge::parent("p1", "c")];
        let people = vec![male("gp"), male("p1"), male("p2"), female("c")];

        assert_eq!(resolve("c", "p2", &edges, &people), Some(Kinship::Uncle));
        assert_eq!(resolve("p2", "c", &edges, &people), Some(Kinship::Niece));
    }

    #[test]
    fn test_step_parent_is_labelled_parent() {
        let edges = vec![Edge::married("h", "w"), Edge::parent("h", "c")];
        let people = vec![male("h"), female("w"), male("c")];

        assert_eq!(resolve("c", "w", &edges, &people), Some(Kinship::Mother));
        assert_eq!(resolve("w", "c", &edges, &people), Some(Kinship::Son));
    }

    #[test]
    fn test_child_in_law() {
        let edges = vec![Edge::parent("a", "b"), Edge::married("b", "c")];
        let people = vec![female("a"), male("b"), female("c")];

        assert_eq!(resolve("a", "c", &edges, &people), Some(Kinship::ChildInLaw));
        assert_eq!(resolve("c", "a", &edges, &people), Some(Kinship::ParentInLaw));
    }

    #[test]
    fn test_disconnected_people_are_relatives() {
        let people = vec![male("x"), female("y")];
        assert_eq!(resolve("x", "y", &[], &people), Some(Kinship::Relative));
    }

    #[test]
    fn test_unknown_ids_have_no_term() {
        let people = vec![male("x")];
        assert_eq!(resolve("x", "ghost", &[], &people), None);
        assert_eq!(resolve("ghost", "x", &[], &people), None);
    }

    #[test]
    fn test_ids_only_in_edges_are_known() {
        // No person record: gender falls back to the neutral term
        let edges = vec![Edge::parent("p", "c")];
        assert_eq!(resolve("c", "p", &edges, &[]), Some(Kinship::Parent));
    }

    #[test]
    fn test_partner_terms() {
        let edges = vec![
            Edge::married("h", "w"),
            Edge::divorced("h", "ex"),
            Edge::not_married("w", "friend"),
        ];
        let people = vec![male("h"), female("w"), female("ex"), male("friend")];

        assert_eq!(resolve("h", "w", &edges, &people), Some(Kinship::Wife));
        assert_eq!(resolve("w", "h", &edges, &people), Some(Kinship::Husband));
        assert_eq!(resolve("h", "ex", &edges, &people), Some(Kinship::ExWife));
        assert_eq!(resolve("w", "friend", &edges, &people), Some(Kinship::Relative));
    }

    #[test]
    fn test_foster_parent_override() {
        let edges = vec![Edge::foster_parent("fm", "kid"), Edge::parent("dad", "kid")];
        let people = vec![female("fm"), male("dad"), male("kid")];

        assert_eq!(resolve("kid", "fm", &edges, &people), Some(Kinship::FosterMother));
        assert_eq!(resolve("fm", "kid", &edges, &people), Some(Kinship::FosterChild));
        assert_eq!(resolve("kid", "dad", &edges, &people), Some(Kinship::Father));
    }

    #[test]
    fn test_biological_edge_beats_foster_edge() {
        let edges = vec![Edge::foster_parent("mum", "kid"), Edge::parent("mum", "kid")];
        let people = vec![female("mum"), female("kid")];

        assert_eq!(resolve("kid", "mum", &edges, &people), Some(Kinship::Mother));
        assert_eq!(resolve("mum", "kid", &edges, &people), Some(Kinship::Daughter));
    }

    #[test]
    fn test_sibling_in_law_both_directions() {
        let edges = vec![
            Edge::parent("mum", "a"),
            Edge::parent("mum", "b"),
            Edge::married("b", "bs"),
        ];
        let people = vec![female("mum"), male("a"), male("b"), female("bs")];

        // Spouse of my sibling
        assert_eq!(resolve("a", "bs", &edges, &people), Some(Kinship::SiblingInLaw));
        // Sibling of my spouse
        assert_eq!(resolve("bs", "a", &edges, &people), Some(Kinship::SiblingInLaw));
    }

    #[test]
    fn test_spouse_of_aunt_is_uncle() {
        let edges = vec![
            Edge::parent("gp", "mum"),
            Edge::parent("gp", "aunt"),
            Edge::parent("mum", "me"),
            Edge::married("aunt", "aunts_husband"),
        ];
        let people = vec![female("mum"), female("aunt"), male("aunts_husband"), female("me")];

        assert_eq!(resolve("me", "aunts_husband", &edges, &people), Some(Kinship::Uncle));
    }

    #[test]
    fn test_family_of_uncles_wife() {
        let edges = vec![
            Edge::parent("gp", "dad"),
            Edge::parent("gp", "uncle"),
            Edge::parent("dad", "me"),
            Edge::married("uncle", "tini"),
            Edge::parent("harto", "tini"),
            Edge::parent("harto", "tono"),
            Edge::parent("old_harto", "harto"),
        ];
        let people = vec![male("harto"), male("tono"), female("tini"), male("old_harto"), male("me")];

        assert_eq!(resolve("me", "harto", &edges, &people), Some(Kinship::Grandfather));
        assert_eq!(resolve("me", "tono", &edges, &people), Some(Kinship::Uncle));
        assert_eq!(resolve("me", "old_harto", &edges, &people), Some(Kinship::GreatGrandparent));
    }

    #[test]
    fn test_co_parent_in_law() {
        let edges = vec![
            Edge::parent("me", "son"),
            Edge::married("son", "bride"),
            Edge::parent("brides_mum", "bride"),
            Edge::parent("brides_mum", "brides_brother"),
            Edge::parent("brides_gran", "brides_mum"),
        ];
        let people = vec![female("me"), male("son"), female("bride"), female("brides_mum")];

        assert_eq!(resolve("me", "brides_mum", &edges, &people), Some(Kinship::CoParentInLaw));
        assert_eq!(resolve("me", "brides_brother", &edges, &people), Some(Kinship::CoParentInLaw));
        assert_eq!(resolve("me", "brides_gran", &edges, &people), Some(Kinship::CoParentInLaw));
        assert_eq!(resolve("me", "bride", &edges, &people), Some(Kinship::ChildInLaw));
    }

    #[test]
    fn test_not_married_partner_yields_no_in_laws() {
        let edges = vec![
            Edge::parent("mum", "me"),
            Edge::not_married("me", "partner"),
            Edge::parent("partners_dad", "partner"),
            Edge::parent("partners_dad", "partners_sister"),
        ];
        let people = vec![female("mum"), male("me"), female("partner"), male("partners_dad")];

        assert_eq!(resolve("me", "partners_dad", &edges, &people), Some(Kinship::Relative));
        assert_eq!(resolve("me", "partners_sister", &edges, &people), Some(Kinship::Relative));
        assert_eq!(resolve("mum", "partner", &edges, &people), Some(Kinship::Relative));
        assert_eq!(resolve("partners_dad", "me", &edges, &people), Some(Kinship::Relative));
    }

    #[test]
    fn test_divorce_ends_in_law_terms() {
        let edges = vec![Edge::parent("a", "b"), Edge::divorced("b", "c")];
        let people = vec![female("a"), male("b"), female("c")];

        assert_eq!(resolve("a", "c", &edges, &people), Some(Kinship::Relative));
        assert_eq!(resolve("b", "c", &edges, &people), Some(Kinship::ExWife));
    }

    #[test]
    fn test_resolve_all_follows_person_order() {
        let edges = vec![Edge::parent("mum", "kid")];
        let people = vec![female("mum"), male("kid"), male("stranger")];
        let graph = KinshipGraph::build(&edges);
        let resolver = Resolver::new(&graph, &people);

        let labels: Vec<_> = resolver
            .resolve_all("kid")
            .into_iter()
            .map(|(person, kinship)| (person.id.as_str(), kinship))
            .collect();

        assert_eq!(
            labels,
            vec![("mum", Kinship::Mother), ("kid", Kinship::Myself), ("stranger", Kinship::Relative)]
        );
        assert!(resolver.resolve_all("ghost").is_empty());
    }
}
