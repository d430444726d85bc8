//! Undirected adjacency-list graphs over dense vertex ids.

use crate::error::SpaceError;
use indexmap::IndexMap;
use std::fmt;

/// Identifies a vertex within a [`Graph`].
///
/// Vertices are registered at construction and assigned sequential
/// ids: `VertexId(n)` is the n-th vertex of the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// An undirected graph stored as adjacency lists.
///
/// Vertices are dense ids `0..n` fixed at construction. Edges append
/// each endpoint to the other's list, so parallel edges and self-loops
/// are representable; a self-loop contributes two entries to its own
/// list. Iteration order is deterministic: vertices in registration
/// order, neighbours in edge-insertion order.
///
/// # Examples
///
/// ```
/// use scree_space::{Graph, VertexId};
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(VertexId(0), VertexId(1))?;
/// graph.add_edge(VertexId(1), VertexId(2))?;
/// assert_eq!(graph.neighbours(VertexId(1))?, &[VertexId(0), VertexId(2)]);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), scree_space::SpaceError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adjacency: IndexMap<VertexId, Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with vertices `0..vertices` and no edges.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` for a zero-vertex graph.
    pub fn new(vertices: u32) -> Result<Self, SpaceError> {
        if vertices == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let adjacency = (0..vertices).map(|v| (VertexId(v), Vec::new())).collect();
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added via [`add_edge`](Self::add_edge).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check that `vertex` is registered.
    fn check_vertex(&self, vertex: VertexId) -> Result<(), SpaceError> {
        if self.adjacency.contains_key(&vertex) {
            Ok(())
        } else {
            Err(SpaceError::UnknownVertex { vertex })
        }
    }

    /// Add an undirected edge between `u` and `v`.
    ///
    /// Returns `Err(SpaceError::UnknownVertex)` if either endpoint is
    /// not registered; the graph is unchanged on failure.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), SpaceError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[&u].push(v);
        self.adjacency[&v].push(u);
        self.edge_count += 1;
        Ok(())
    }

    /// The neighbours of `vertex`, in edge-insertion order.
    pub fn neighbours(&self, vertex: VertexId) -> Result<&[VertexId], SpaceError> {
        match self.adjacency.get(&vertex) {
            Some(list) => Ok(list.as_slice()),
            None => Err(SpaceError::UnknownVertex { vertex }),
        }
    }

    /// Number of edge endpoints at `vertex` (a self-loop counts twice).
    pub fn degree(&self, vertex: VertexId) -> Result<usize, SpaceError> {
        self.neighbours(vertex).map(|list| list.len())
    }

    /// Iterate over `(vertex, neighbours)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> + '_ {
        self.adjacency
            .iter()
            .map(|(vertex, list)| (*vertex, list.as_slice()))
    }
}

impl fmt::Display for Graph {
    /// One adjacency line per vertex: `0: 1 2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbours) in self.iter() {
            write!(f, "{vertex}:")?;
            for n in neighbours {
                write!(f, " {n}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
