//! Scree: bounds-checked container primitives.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Scree sub-crates. For most users, adding `scree` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use scree::prelude::*;
//!
//! // A growable sequence with a small up-front reservation.
//! let mut seq = Sequence::with_capacity(2).unwrap();
//! seq.push(1).unwrap();
//! seq.push(2).unwrap();
//! seq.push(3).unwrap(); // grows transparently
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.pop().unwrap(), 3);
//! assert!(seq.get(2).is_err()); // checked against the live count
//!
//! // Flood-fill region discovery on a grid.
//! let mut grid = Grid::from_rows(vec![
//!     vec![1, 1, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 1],
//! ])
//! .unwrap();
//! let painted = grid.flood(Pos::new(0, 0), 2).unwrap();
//! assert_eq!(painted, 3);
//!
//! // Undirected adjacency graph over dense vertex ids.
//! let mut graph = Graph::new(3).unwrap();
//! graph.add_edge(VertexId(0), VertexId(1)).unwrap();
//! assert_eq!(graph.degree(VertexId(1)).unwrap(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`seq`] | `scree-seq` | `Sequence`, growth config, sequence errors |
//! | [`space`] | `scree-space` | `Grid`, `Graph`, positions, space errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable, bounds-checked sequence storage (`scree-seq`).
///
/// Most users only need [`seq::Sequence`] from this module — it is
/// also available in the [`prelude`].
pub use scree_seq as seq;

/// Grid and adjacency-graph containers (`scree-space`).
///
/// Provides [`space::Grid`] with flood-fill region discovery and
/// [`space::Graph`] with deterministic adjacency iteration.
pub use scree_space as space;

/// Common imports for typical Scree usage.
///
/// ```rust
/// use scree::prelude::*;
/// ```
pub mod prelude {
    // Sequence storage
    pub use scree_seq::{SeqConfig, SeqError, Sequence};

    // Spatial containers
    pub use scree_space::{Graph, Grid, Pos, SpaceError, VertexId};
}
