//! A loaded family tree with its kinship indices

use crate::diagnostics::{diagnose, Diagnostic};
use crate::document::FamilyDocument;
use crate::error::{Result, TreeError};
use crate::layout::{build_request, foster_children, unions, LayoutEngine, LayoutRequest, LayoutResponse, Union};
use sanak_domain::{Edge, Kinship, KinshipGraph, Person, Resolver};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// A target person with their kinship term from some POV
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonLabel<'a> {
    /// The labelled person
    pub person: &'a Person,
    /// Kinship term for that person
    pub kinship: Kinship,
}

/// People, edges and the indices built from them
///
/// Indices are built once on construction; build a new tree when the
/// underlying document changes.
#[derive(Debug, Clone)]
pub struct FamilyTree {
    people: Vec<Person>,
    index: HashMap<String, usize>,
    graph: KinshipGraph,
}

impl FamilyTree {
    /// Build a tree from domain records
    pub fn new(people: Vec<Person>, edges: Vec<Edge>) -> Self {
        let graph = KinshipGraph::build(&edges);
        let index = people
            .iter()
            .enumerate()
            .map(|(i, person)| (person.id.to_string(), i))
            .collect();

        debug!(people = people.len(), edges = edges.len(), "Built kinship indices");

        let tree = Self {
            people,
            index,
            graph,
        };
        for diagnostic in tree.diagnostics() {
            warn!(severity = %diagnostic.severity, "{}", diagnostic.message);
        }
        tree
    }

    /// Build a tree from a parsed document
    pub fn from_document(document: &FamilyDocument) -> Result<Self> {
        document.validate()?;
        Ok(Self::new(document.persons(), document.edges()))
    }

    /// Load a document from disk and build its tree
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading family document");
        Self::from_document(&FamilyDocument::from_path(path)?)
    }

    /// People in document order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Look up a person by id
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.index.get(id).map(|&i| &self.people[i])
    }

    /// The kinship indices
    pub fn graph(&self) -> &KinshipGraph {
        &self.graph
    }

    /// A resolver over this tree
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.graph, &self.people)
    }

    fn require(&self, id: &str) -> Result<&Person> {
        self.person(id)
            .ok_or_else(|| TreeError::UnknownPerson(id.to_string()))
    }

    /// Label `target` from the perspective of `pov`
    pub fn label(&self, pov: &str, target: &str) -> Result<Kinship> {
        self.require(pov)?;
        self.require(target)?;

        self.resolver()
            .resolve(pov, target)
            .ok_or_else(|| TreeError::UnknownPerson(target.to_string()))
    }

    /// Label everyone in the tree from `pov`, in document order
    pub fn labels_from(&self, pov: &str) -> Result<Vec<PersonLabel<'_>>> {
        self.require(pov)?;

        let labels: Vec<PersonLabel<'_>> = self
            .resolver()
            .resolve_all(pov)
            .into_iter()
            .map(|(person, kinship)| PersonLabel { person, kinship })
            .collect();

        debug!(pov, count = labels.len(), "Labelled tree");
        Ok(labels)
    }

    /// Structural problems in the graph
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        diagnose(&self.people, &self.graph)
    }

    /// Children grouped by parent set
    pub fn unions(&self) -> Vec<Union> {
        unions(&self.people, &self.graph)
    }

    /// Layout engine input for this tree
    pub fn layout_request(&self) -> LayoutRequest {
        build_request(&self.people, &self.unions())
    }

    /// Run a layout engine and apply the foster offset
    pub fn layout_with<E: LayoutEngine>(&self, engine: &E) -> Result<LayoutResponse> {
        let request = self.layout_request();
        debug!(nodes = request.nodes.len(), edges = request.edges.len(), "Running layout");

        let mut response = engine
            .layout(&request)
            .map_err(|e| TreeError::Layout(e.to_string()))?;
        response.offset_foster_children(&foster_children(&self.people, &self.graph));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GenerationLayout, FOSTER_OFFSET};
    use sanak_domain::Gender;

    fn tree() -> FamilyTree {
        let people = vec![
            Person::new("budi", Some(Gender::Male)),
            Person::new("sri", Some(Gender::Female)),
            Person::new("eko", Some(Gender::Male)),
            Person::new("dewi", Some(Gender::Female)),
            Person::new("tono", None),
        ];
        let edges = vec![
            Edge::married("budi", "sri"),
            Edge::parent("budi", "eko"),
            Edge::parent("sri", "eko"),
            Edge::married("eko", "dewi"),
            Edge::foster_parent("sri", "tono"),
        ];
        FamilyTree::new(people, edges)
    }

    #[test]
    fn test_label_known_people() {
        let tree = tree();
        assert_eq!(tree.label("eko", "budi").unwrap(), Kinship::Father);
        assert_eq!(tree.label("dewi", "sri").unwrap(), Kinship::ParentInLaw);
        assert_eq!(tree.label("tono", "sri").unwrap(), Kinship::FosterMother);
    }

    #[test]
    fn test_unknown_person_is_an_error() {
        let tree = tree();
        assert!(matches!(tree.label("eko", "nobody"), Err(TreeError::UnknownPerson(id)) if id == "nobody"));
        assert!(matches!(tree.labels_from("nobody"), Err(TreeError::UnknownPerson(_))));
    }

    #[test]
    fn test_labels_from_covers_everyone() {
        let tree = tree();
        let labels = tree.labels_from("eko").unwrap();

        let terms: Vec<_> = labels.iter().map(|l| (l.person.id.as_str(), l.kinship)).collect();
        assert_eq!(
            terms,
            vec![
                ("budi", Kinship::Father),
                ("sri", Kinship::Mother),
                ("eko", Kinship::Myself),
                ("dewi", Kinship::Wife),
                ("tono", Kinship::Sibling),
            ]
        );
    }

    #[test]
    fn test_layout_applies_foster_offset() {
        let tree = tree();
        let request = tree.layout_request();
        assert_eq!(request.nodes.len(), 5);

        let plain = GenerationLayout::default().layout(&request).unwrap();
        let placed = tree.layout_with(&GenerationLayout::default()).unwrap();

        let before = plain.position_of("tono").unwrap();
        assert_eq!(placed.position_of("tono").unwrap().y, before.y + FOSTER_OFFSET);
        assert_eq!(placed.position_of("eko"), plain.position_of("eko"));
    }

    struct Failing;

    impl LayoutEngine for Failing {
        type Error = String;

        fn layout(&self, _request: &LayoutRequest) -> std::result::Result<LayoutResponse, String> {
            Err("engine unavailable".to_string())
        }
    }

    #[test]
    fn test_layout_errors_are_wrapped() {
        let err = tree().layout_with(&Failing).unwrap_err();
        assert!(matches!(err, TreeError::Layout(msg) if msg == "engine unavailable"));
    }
}
