//! Rectangular grids with bounds-checked access and region discovery.
//!
//! A [`Grid`] stores its cells in a single row-major `Vec<T>` and
//! resolves positions with rank arithmetic. Every public accessor
//! checks the position against the grid bounds before touching
//! storage. Connected regions of equal-valued cells are discovered
//! with a breadth-first search over the 4-connected neighbourhood.

use crate::error::SpaceError;
use crate::pos::Pos;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

/// A rectangular grid stored as a row-major flat vector.
///
/// Neighbourhoods are 4-connected (north, south, west, east) with
/// absorb edges: boundary cells simply have fewer neighbours.
///
/// # Examples
///
/// ```
/// use scree_space::{Grid, Pos};
///
/// let mut grid = Grid::fill(3, 3, 0)?;
/// grid.set(Pos::new(1, 1), 5)?;
/// assert_eq!(grid.get(Pos::new(1, 1))?, &5);
/// assert_eq!(grid.neighbours(Pos::new(0, 0))?.len(), 2);
/// # Ok::<(), scree_space::SpaceError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    /// Row-major cell storage; `cells.len() == rows * cols` always.
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` when there are no rows or
    /// the rows have zero width, and `Err(SpaceError::RaggedRows)`
    /// when the rows differ in width.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, SpaceError> {
        let height = rows.len();
        if height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(SpaceError::EmptySpace);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SpaceError::RaggedRows {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
        }
        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            cells.extend(row);
        }
        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Build a `rows x cols` grid with every cell set to `value`.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` when either dimension is
    /// zero.
    pub fn fill(rows: usize, cols: usize, value: T) -> Result<Self, SpaceError>
    where
        T: Clone,
    {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` is inside the grid.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major flat index of an in-bounds position.
    fn rank(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Check `pos` against the grid bounds and return its rank.
    fn check_bounds(&self, pos: Pos) -> Result<usize, SpaceError> {
        if !self.contains(pos) {
            return Err(SpaceError::OutOfBounds {
                pos,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            });
        }
        Ok(self.rank(pos))
    }

    /// Shared reference to the cell at `pos`.
    pub fn get(&self, pos: Pos) -> Result<&T, SpaceError> {
        let rank = self.check_bounds(pos)?;
        Ok(&self.cells[rank])
    }

    /// Mutable reference to the cell at `pos`.
    pub fn get_mut(&mut self, pos: Pos) -> Result<&mut T, SpaceError> {
        let rank = self.check_bounds(pos)?;
        Ok(&mut self.cells[rank])
    }

    /// Replace the cell at `pos` with `value`.
    pub fn set(&mut self, pos: Pos, value: T) -> Result<(), SpaceError> {
        let rank = self.check_bounds(pos)?;
        self.cells[rank] = value;
        Ok(())
    }

    /// The in-bounds 4-connected neighbours of `pos`.
    ///
    /// Deterministic north, south, west, east order. Boundary cells
    /// have fewer neighbours (corners 2, edges 3, interior 4).
    pub fn neighbours(&self, pos: Pos) -> Result<SmallVec<[Pos; 4]>, SpaceError> {
        self.check_bounds(pos)?;
        Ok(self.in_bounds_neighbours(pos))
    }

    /// Neighbour computation for a position already known to be
    /// in bounds.
    fn in_bounds_neighbours(&self, pos: Pos) -> SmallVec<[Pos; 4]> {
        let mut out = SmallVec::new();
        if pos.row > 0 {
            out.push(Pos::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.rows {
            out.push(Pos::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            out.push(Pos::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.cols {
            out.push(Pos::new(pos.row, pos.col + 1));
        }
        out
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Pos::new(i / cols, i % cols), cell))
    }
}

impl<T: PartialEq> Grid<T> {
    /// The connected region of cells equal to the cell at `start`.
    ///
    /// Breadth-first search over the 4-connected neighbourhood,
    /// returned in BFS visit order (deterministic for a given grid).
    /// A cell with no equal-valued neighbours yields a single-element
    /// region.
    pub fn region(&self, start: Pos) -> Result<Vec<Pos>, SpaceError> {
        let start_rank = self.check_bounds(start)?;
        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        let mut out = Vec::new();
        visited[start_rank] = true;
        queue.push_back(start);
        while let Some(pos) = queue.pop_front() {
            out.push(pos);
            for nb in self.in_bounds_neighbours(pos) {
                let rank = self.rank(nb);
                if !visited[rank] && self.cells[rank] == self.cells[start_rank] {
                    visited[rank] = true;
                    queue.push_back(nb);
                }
            }
        }
        Ok(out)
    }

    /// Flood-fill: paint the region containing `start` with `value`.
    ///
    /// Returns the number of cells rewritten (the region size, even
    /// when `value` equals the existing one).
    pub fn flood(&mut self, start: Pos, value: T) -> Result<usize, SpaceError>
    where
        T: Clone,
    {
        let region = self.region(start)?;
        for &pos in &region {
            let rank = self.rank(pos);
            self.cells[rank] = value.clone();
        }
        Ok(region.len())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// One row per line, cells separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let mut first = true;
            for cell in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<i32> {
        Grid::from_rows(vec![
            vec![1, 0, 1, 1, 0],
            vec![0, 1, 0, 1, 0],
            vec![1, 1, 1, 1, 1],
            vec![0, 0, 1, 0, 1],
            vec![1, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(
            Grid::<i32>::from_rows(vec![]),
            Err(SpaceError::EmptySpace)
        );
        assert_eq!(
            Grid::<i32>::from_rows(vec![vec![], vec![]]),
            Err(SpaceError::EmptySpace)
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let result = Grid::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(
            result,
            Err(SpaceError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1,
            })
        );
    }

    #[test]
    fn fill_rejects_zero_dimension() {
        assert_eq!(Grid::fill(0, 3, 0), Err(SpaceError::EmptySpace));
        assert_eq!(Grid::fill(3, 0, 0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut grid = Grid::fill(2, 3, 0).unwrap();
        grid.set(Pos::new(1, 2), 9).unwrap();
        assert_eq!(grid.get(Pos::new(1, 2)).unwrap(), &9);
        assert_eq!(grid.get(Pos::new(0, 0)).unwrap(), &0);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::fill(2, 2, 0).unwrap();
        let pos = Pos::new(2, 0);
        assert!(matches!(
            grid.get(pos),
            Err(SpaceError::OutOfBounds { .. })
        ));
        assert!(grid.set(Pos::new(0, 2), 1).is_err());
        assert!(grid.get_mut(Pos::new(9, 9)).is_err());
    }

    #[test]
    fn neighbour_counts_by_location() {
        let grid = Grid::fill(3, 3, 0).unwrap();
        // Corner, edge, interior.
        assert_eq!(grid.neighbours(Pos::new(0, 0)).unwrap().len(), 2);
        assert_eq!(grid.neighbours(Pos::new(0, 1)).unwrap().len(), 3);
        assert_eq!(grid.neighbours(Pos::new(1, 1)).unwrap().len(), 4);
    }

    #[test]
    fn neighbours_are_in_nswe_order() {
        let grid = Grid::fill(3, 3, 0).unwrap();
        let nbrs = grid.neighbours(Pos::new(1, 1)).unwrap();
        assert_eq!(
            nbrs.as_slice(),
            &[
                Pos::new(0, 1),
                Pos::new(2, 1),
                Pos::new(1, 0),
                Pos::new(1, 2),
            ]
        );
    }

    #[test]
    fn region_of_isolated_cell_is_itself() {
        let grid = sample();
        // (4, 0) holds a 1 surrounded by 0s.
        let region = grid.region(Pos::new(4, 0)).unwrap();
        assert_eq!(region, vec![Pos::new(4, 0)]);
    }

    #[test]
    fn region_finds_connected_component() {
        let grid = sample();
        let region = grid.region(Pos::new(2, 2)).unwrap();
        assert_eq!(region.len(), 11);
        assert!(region.contains(&Pos::new(0, 2)));
        assert!(region.contains(&Pos::new(3, 4)));
        // (0, 0) holds a 1 but is not connected to (2, 2).
        assert!(!region.contains(&Pos::new(0, 0)));
        assert!(!region.contains(&Pos::new(4, 0)));
    }

    #[test]
    fn region_visit_order_is_breadth_first() {
        let grid = sample();
        let region = grid.region(Pos::new(2, 2)).unwrap();
        // Distance-1 cells come before any distance-2 cell.
        assert_eq!(
            &region[..4],
            &[
                Pos::new(2, 2),
                Pos::new(3, 2),
                Pos::new(2, 1),
                Pos::new(2, 3),
            ]
        );
    }

    #[test]
    fn flood_rewrites_region_and_reports_size() {
        let mut grid = sample();
        let painted = grid.flood(Pos::new(2, 2), 2).unwrap();
        assert_eq!(painted, 11);
        assert_eq!(grid.get(Pos::new(2, 2)).unwrap(), &2);
        assert_eq!(grid.get(Pos::new(0, 2)).unwrap(), &2);
        // Unconnected 1s are untouched.
        assert_eq!(grid.get(Pos::new(0, 0)).unwrap(), &1);
        let twos = grid.iter().filter(|(_, &v)| v == 2).count();
        assert_eq!(twos, 11);
    }

    #[test]
    fn flood_with_same_value_is_idempotent() {
        let mut grid = Grid::fill(2, 2, 7).unwrap();
        assert_eq!(grid.flood(Pos::new(0, 0), 7).unwrap(), 4);
        assert!(grid.iter().all(|(_, &v)| v == 7));
    }

    #[test]
    fn iter_is_row_major() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let flat: Vec<i32> = grid.iter().map(|(_, &v)| v).collect();
        assert_eq!(flat, vec![1, 2, 3, 4]);
        let positions: Vec<Pos> = grid.iter().map(|(p, _)| p).collect();
        assert_eq!(positions[1], Pos::new(0, 1));
        assert_eq!(positions[2], Pos::new(1, 0));
    }

    #[test]
    fn display_one_row_per_line() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.to_string(), "1 2\n3 4\n");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn binary_grid() -> impl Strategy<Value = Grid<u8>> {
            ((1usize..6), (1usize..6)).prop_flat_map(|(rows, cols)| {
                proptest::collection::vec(0u8..2, rows * cols).prop_map(move |cells| {
                    let nested: Vec<Vec<u8>> =
                        cells.chunks(cols).map(|chunk| chunk.to_vec()).collect();
                    Grid::from_rows(nested).unwrap()
                })
            })
        }

        proptest! {
            #[test]
            fn region_is_closed_and_uniform(grid in binary_grid()) {
                let start = Pos::new(0, 0);
                let value = *grid.get(start).unwrap();
                let region = grid.region(start).unwrap();

                prop_assert!(region.contains(&start));
                for &pos in &region {
                    prop_assert_eq!(*grid.get(pos).unwrap(), value);
                    // Closure: every equal-valued neighbour is in the region.
                    for nb in grid.neighbours(pos).unwrap() {
                        if *grid.get(nb).unwrap() == value {
                            prop_assert!(region.contains(&nb));
                        }
                    }
                }
            }

            #[test]
            fn region_has_no_duplicates(grid in binary_grid()) {
                let region = grid.region(Pos::new(0, 0)).unwrap();
                let distinct: std::collections::HashSet<_> = region.iter().collect();
                prop_assert_eq!(distinct.len(), region.len());
            }

            #[test]
            fn flood_paints_exactly_the_region(grid in binary_grid()) {
                let start = Pos::new(0, 0);
                let region = grid.region(start).unwrap();
                let mut painted = grid.clone();
                // 9 is outside the 0/1 cell domain.
                prop_assert_eq!(painted.flood(start, 9).unwrap(), region.len());
                for (pos, &v) in painted.iter() {
                    prop_assert_eq!(v == 9, region.contains(&pos));
                }
            }
        }
    }
}
