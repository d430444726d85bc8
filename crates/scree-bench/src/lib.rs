//! Benchmark fixtures for the Scree containers.
//!
//! Provides deterministic grid and graph builders shared by the
//! criterion benches:
//!
//! - [`checkerboard_grid`]: alternating 0/1 cells, worst case for
//!   region discovery (every region is a single cell)
//! - [`uniform_grid`]: a single grid-spanning region, worst case for
//!   flood-fill
//! - [`ring_graph`]: n vertices in a cycle

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use scree_space::{Graph, Grid, VertexId};

/// Build a `rows x cols` grid of alternating 0/1 cells.
pub fn checkerboard_grid(rows: usize, cols: usize) -> Grid<u8> {
    let nested: Vec<Vec<u8>> = (0..rows)
        .map(|r| (0..cols).map(|c| ((r + c) % 2) as u8).collect())
        .collect();
    Grid::from_rows(nested).expect("bench grid dimensions are non-zero")
}

/// Build a `rows x cols` grid where every cell holds the same value.
pub fn uniform_grid(rows: usize, cols: usize) -> Grid<u8> {
    Grid::fill(rows, cols, 1).expect("bench grid dimensions are non-zero")
}

/// Build an n-vertex cycle: vertex i is joined to vertex (i + 1) mod n.
pub fn ring_graph(n: u32) -> Graph {
    let mut graph = Graph::new(n).expect("bench graph is non-empty");
    for i in 0..n {
        graph
            .add_edge(VertexId(i), VertexId((i + 1) % n))
            .expect("endpoints are registered");
    }
    graph
}
