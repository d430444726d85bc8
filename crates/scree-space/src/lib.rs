//! Spatial containers: rectangular grids and adjacency-list graphs.
//!
//! # Backends
//!
//! - [`Grid`]: rectangular grid with bounds-checked access, 4-connected
//!   neighbourhoods (absorb edges: boundary cells have fewer
//!   neighbours), and BFS flood-fill region discovery
//! - [`Graph`]: undirected adjacency-list graph over dense
//!   [`VertexId`]s with deterministic iteration order
//!
//! Both backends share [`SpaceError`] and check every position or
//! vertex before touching storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod graph;
pub mod grid;
pub mod pos;

pub use error::SpaceError;
pub use graph::{Graph, VertexId};
pub use grid::Grid;
pub use pos::Pos;
