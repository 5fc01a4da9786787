//! Sanak Domain Layer
//!
//! This crate contains the kinship inference engine: given a point-of-view
//! (POV) person and a target person in a family graph, it computes the
//! kinship term that describes the target from the POV's perspective.
//! It has no external dependencies and performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Person**: an identity with an optional gender and display attributes
//! - **Edge**: a typed relationship (parent, foster parent, partnership)
//! - **KinshipGraph**: parent, child and partner indices built from edges
//! - **Coordinate**: generations up from the POV and down to the target,
//!   measured through their nearest common ancestor
//! - **Kinship**: the classified relationship, rendered to text per locale
//!
//! ## Architecture
//!
//! - Pure, synchronous, side-effect free
//! - Indices are built once per graph load and only read by queries
//! - Display strings are produced only at the locale boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ancestry;
pub mod graph;
pub mod kinship;
pub mod locale;
pub mod person;
pub mod relationship;
pub mod resolver;

// Re-exports for convenience
pub use ancestry::{ancestors_of, nearest_common_ancestor, Coordinate};
pub use graph::{KinshipGraph, Partner};
pub use kinship::{classify_blood, Kinship};
pub use locale::Locale;
pub use person::{Address, Gender, Person, PersonId, PhoneNumber};
pub use relationship::{Edge, EdgeKind, PartnerKind};
pub use resolver::{resolve, Resolver};
