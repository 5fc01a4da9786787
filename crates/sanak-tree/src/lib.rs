//! Sanak Tree
//!
//! Loads family documents and serves kinship labels and layout input for
//! them.
//!
//! # Overview
//!
//! A family document lists people and typed relationships in YAML or JSON.
//! Loading it produces a [`FamilyTree`], which builds the kinship indices
//! once and answers label queries against them.
//!
//! # Architecture
//!
//! ```text
//! YAML/JSON → FamilyDocument → FamilyTree → Resolver → Kinship → Locale
//!                                   └──────→ LayoutRequest → LayoutEngine
//! ```
//!
//! # Example Usage
//!
//! ```
//! use sanak_tree::{FamilyDocument, FamilyTree};
//! use sanak_domain::Kinship;
//!
//! let yaml = r#"
//! people:
//!   - { id: budi, gender: male }
//!   - { id: eko, gender: male }
//! relationships:
//!   - { from: eko, to: budi }
//! "#;
//!
//! let document = FamilyDocument::from_yaml_str(yaml)?;
//! let tree = FamilyTree::from_document(&document)?;
//! assert_eq!(tree.label("eko", "budi")?, Kinship::Father);
//! # Ok::<(), sanak_tree::TreeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod diagnostics;
pub mod document;
pub mod error;
pub mod layout;
pub mod tree;

pub use diagnostics::{diagnose, Diagnostic, Severity};
pub use document::{FamilyDocument, PersonRecord, RelationshipRecord, RelationshipType};
pub use error::{Result, TreeError};
pub use layout::{
    GenerationLayout, LayoutEdge, LayoutEngine, LayoutNode, LayoutRequest, LayoutResponse, Position,
    PositionedNode, Union,
};
pub use tree::{FamilyTree, PersonLabel};
