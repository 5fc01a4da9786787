//! Layout port
//!
//! The tree is handed to a layout engine as a directed parent-to-child graph
//! of fixed-size nodes. Engines return a position per node. Foster children
//! are shifted down afterwards so their links read differently from
//! biological ones.

use sanak_domain::{KinshipGraph, Person, PersonId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;

/// Width of a person card
pub const NODE_WIDTH: f64 = 256.0;

/// Height of a person card
pub const NODE_HEIGHT: f64 = 280.0;

/// Vertical shift applied to foster children after layout
pub const FOSTER_OFFSET: f64 = 70.0;

/// A node to place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    /// Person id
    pub id: String,
    /// Node width
    pub width: f64,
    /// Node height
    pub height: f64,
}

/// A directed parent-to-child edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEdge {
    /// Edge id, `e-{parent}-{child}`
    pub id: String,
    /// Parent id
    pub source: String,
    /// Child id
    pub target: String,
}

/// Input to a layout engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Nodes, in person-list order
    pub nodes: Vec<LayoutNode>,
    /// Edges, grouped by union
    pub edges: Vec<LayoutEdge>,
}

/// A point in layout space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

/// A placed node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    /// Person id
    pub id: String,
    /// Top-left corner
    pub position: Position,
}

/// Output of a layout engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResponse {
    /// Placed nodes
    pub nodes: Vec<PositionedNode>,
}

impl LayoutResponse {
    /// Position of a node by id
    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.position)
    }

    /// Push the listed nodes down by [`FOSTER_OFFSET`]
    pub fn offset_foster_children(&mut self, foster: &[PersonId]) {
        for node in &mut self.nodes {
            if foster.iter().any(|id| id.as_str() == node.id) {
                node.position.y += FOSTER_OFFSET;
            }
        }
    }
}

/// Something that can place nodes
pub trait LayoutEngine {
    /// Error type returned by the engine
    type Error: std::fmt::Display;

    /// Compute node positions
    fn layout(&self, request: &LayoutRequest) -> Result<LayoutResponse, Self::Error>;
}

/// Children sharing the same set of parents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    /// Parents, sorted
    pub parents: Vec<PersonId>,
    /// Children, in person-list order
    pub children: Vec<PersonId>,
}

/// Group children by their sorted parent set
///
/// Unions are returned in order of their first child in `people`.
pub fn unions(people: &[Person], graph: &KinshipGraph) -> Vec<Union> {
    let mut unions: Vec<Union> = Vec::new();
    let mut index: HashMap<Vec<PersonId>, usize> = HashMap::new();

    for person in people {
        let mut parents = graph.parents_of(person.id.as_str()).to_vec();
        if parents.is_empty() {
            continue;
        }
        parents.sort();

        match index.get(&parents) {
            Some(&i) => unions[i].children.push(person.id.clone()),
            None => {
                index.insert(parents.clone(), unions.len());
                unions.push(Union {
                    parents,
                    children: vec![person.id.clone()],
                });
            }
        }
    }

    unions
}

/// Build the engine input from people and their unions
///
/// Edges to parents missing from `people` are dropped.
pub fn build_request(people: &[Person], unions: &[Union]) -> LayoutRequest {
    let nodes = people
        .iter()
        .map(|person| LayoutNode {
            id: person.id.to_string(),
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
        })
        .collect();

    let known: std::collections::HashSet<&str> = people.iter().map(|p| p.id.as_str()).collect();
    let edges = unions
        .iter()
        .flat_map(|union| {
            union.parents.iter().flat_map(move |parent| {
                union.children.iter().map(move |child| (parent, child))
            })
        })
        .filter(|(parent, _)| known.contains(parent.as_str()))
        .map(|(parent, child)| LayoutEdge {
            id: format!("e-{}-{}", parent, child),
            source: parent.to_string(),
            target: child.to_string(),
        })
        .collect();

    LayoutRequest { nodes, edges }
}

/// People with at least one foster parent
pub fn foster_children(people: &[Person], graph: &KinshipGraph) -> Vec<PersonId> {
    people
        .iter()
        .filter(|person| {
            graph
                .parents_of(person.id.as_str())
                .iter()
                .any(|parent| graph.is_foster_link(parent.as_str(), person.id.as_str()))
        })
        .map(|person| person.id.clone())
        .collect()
}

/// Layered layout: one row per generation, nodes left to right in request order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationLayout {
    /// Horizontal gap between nodes
    pub node_spacing: f64,
    /// Vertical gap between rows
    pub layer_spacing: f64,
}

impl Default for GenerationLayout {
    fn default() -> Self {
        Self {
            node_spacing: 40.0,
            layer_spacing: 80.0,
        }
    }
}

impl GenerationLayout {
    /// Longest parent chain above each node, capped at the node count
    fn depths(request: &LayoutRequest) -> Vec<usize> {
        let position: HashMap<&str, usize> = request
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), i))
            .collect();

        let links: Vec<(usize, usize)> = request
            .edges
            .iter()
            .filter_map(|edge| Some((*position.get(edge.source.as_str())?, *position.get(edge.target.as_str())?)))
            .collect();

        let limit = request.nodes.len();
        let mut depth = vec![0usize; limit];

        // Bellman-Ford style relaxation; a cycle stops growing at the cap
        for _ in 0..limit {
            let mut changed = false;
            for &(parent, child) in &links {
                let candidate = (depth[parent] + 1).min(limit);
                if candidate > depth[child] {
                    depth[child] = candidate;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        depth
    }
}

impl LayoutEngine for GenerationLayout {
    type Error = Infallible;

    fn layout(&self, request: &LayoutRequest) -> Result<LayoutResponse, Self::Error> {
        let depths = Self::depths(request);
        let layers = depths.iter().copied().max().map_or(0, |max| max + 1);

        let mut row_height = vec![0.0f64; layers];
        for (node, &depth) in request.nodes.iter().zip(&depths) {
            row_height[depth] = row_height[depth].max(node.height);
        }

        let mut row_top = Vec::with_capacity(layers);
        let mut top = 0.0;
        for height in &row_height {
            row_top.push(top);
            top += height + self.layer_spacing;
        }

        let mut row_cursor = vec![0.0f64; layers];
        let nodes = request
            .nodes
            .iter()
            .zip(&depths)
            .map(|(node, &depth)| {
                let x = row_cursor[depth];
                row_cursor[depth] += node.width + self.node_spacing;
                PositionedNode {
                    id: node.id.clone(),
                    position: Position { x, y: row_top[depth] },
                }
            })
            .collect();

        Ok(LayoutResponse { nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanak_domain::Edge;

    fn people(ids: &[&str]) -> Vec<Person> {
        ids.iter().map(|id| Person::new(*id, None)).collect()
    }

    #[test]
    fn test_unions_group_children_by_parent_set() {
        let graph = KinshipGraph::build(&[
            Edge::parent("mum", "a"),
            Edge::parent("dad", "a"),
            Edge::parent("dad", "b"),
            Edge::parent("mum", "b"),
            Edge::parent("dad", "c"),
        ]);
        let people = people(&["dad", "mum", "a", "b", "c"]);
        let unions = unions(&people, &graph);

        assert_eq!(unions.len(), 2);
        assert_eq!(unions[0].parents, vec![PersonId::new("dad"), PersonId::new("mum")]);
        assert_eq!(unions[0].children, vec![PersonId::new("a"), PersonId::new("b")]);
        assert_eq!(unions[1].parents, vec![PersonId::new("dad")]);
        assert_eq!(unions[1].children, vec![PersonId::new("c")]);
    }

    #[test]
    fn test_request_uses_fixed_node_size_and_edge_ids() {
        let graph = KinshipGraph::build(&[Edge::parent("p", "c"), Edge::parent("ghost", "c")]);
        let people = people(&["p", "c"]);
        let request = build_request(&people, &unions(&people, &graph));

        assert_eq!(request.nodes.len(), 2);
        assert!(request.nodes.iter().all(|n| n.width == NODE_WIDTH && n.height == NODE_HEIGHT));
        assert_eq!(
            request.edges,
            vec![LayoutEdge {
                id: "e-p-c".to_string(),
                source: "p".to_string(),
                target: "c".to_string(),
            }]
        );
    }

    #[test]
    fn test_generation_layout_places_rows_by_depth() {
        let graph = KinshipGraph::build(&[
            Edge::parent("g", "p"),
            Edge::parent("p", "c1"),
            Edge::parent("p", "c2"),
        ]);
        let people = people(&["c1", "g", "p", "c2"]);
        let request = build_request(&people, &unions(&people, &graph));

        let engine = GenerationLayout::default();
        let response = engine.layout(&request).unwrap();
        let row = NODE_HEIGHT + engine.layer_spacing;

        assert_eq!(response.position_of("g"), Some(Position { x: 0.0, y: 0.0 }));
        assert_eq!(response.position_of("p"), Some(Position { x: 0.0, y: row }));
        assert_eq!(response.position_of("c1"), Some(Position { x: 0.0, y: 2.0 * row }));
        assert_eq!(
            response.position_of("c2"),
            Some(Position {
                x: NODE_WIDTH + engine.node_spacing,
                y: 2.0 * row
            })
        );
    }

    #[test]
    fn test_generation_layout_survives_cycles() {
        let request = LayoutRequest {
            nodes: vec![
                LayoutNode { id: "x".into(), width: NODE_WIDTH, height: NODE_HEIGHT },
                LayoutNode { id: "y".into(), width: NODE_WIDTH, height: NODE_HEIGHT },
            ],
            edges: vec![
                LayoutEdge { id: "e-x-y".into(), source: "x".into(), target: "y".into() },
                LayoutEdge { id: "e-y-x".into(), source: "y".into(), target: "x".into() },
            ],
        };
        let response = GenerationLayout::default().layout(&request).unwrap();
        assert_eq!(response.nodes.len(), 2);
    }

    #[test]
    fn test_foster_children_are_offset() {
        let graph = KinshipGraph::build(&[Edge::parent("m", "bio"), Edge::foster_parent("m", "kid")]);
        let people = people(&["m", "bio", "kid"]);
        let foster = foster_children(&people, &graph);
        assert_eq!(foster, vec![PersonId::new("kid")]);

        let request = build_request(&people, &unions(&people, &graph));
        let mut response = GenerationLayout::default().layout(&request).unwrap();
        let before = response.position_of("kid").unwrap();
        response.offset_foster_children(&foster);

        assert_eq!(response.position_of("kid").unwrap().y, before.y + FOSTER_OFFSET);
        assert_eq!(response.position_of("bio").unwrap().y, before.y);
    }
}
