pub mod cell;
mod grid;

use std::fmt;

pub use cell::{Cell, GridCell};
use grid::Grid;

/// The grid a maze generator carves into.
///
/// Implementations track which cells have been carved and which pairs of
/// adjacent cells have an open passage between them.
pub trait MazeGrid {
    /// Number of rows in the grid.
    fn rows(&self) -> u16;

    /// Number of columns in the grid.
    fn cols(&self) -> u16;

    /// Checks if the given cell is within the bounds of the grid.
    fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// Checks if the given cell has been carved.
    fn is_visited(&self, cell: Cell) -> bool;

    /// Opens a passage between two adjacent cells, marking both as carved.
    fn carve_path(&mut self, from: Cell, to: Cell);
}

/// A rectangular maze stored with explicit wall slots.
///
/// `rows x cols` cells are laid out in a `(2 * cols + 1) x (2 * rows + 1)` grid:
/// cell `(r, c)` lives at `(2c + 1, 2r + 1)` and the wall between two adjacent
/// cells sits halfway between them. Every slot starts out as a wall.
#[derive(Debug)]
pub struct Maze {
    grid: Grid,
    rows: u16,
    cols: u16,
}

impl Maze {
    /// Creates a new maze with the given number of rows and columns, fully walled.
    pub fn new(rows: u16, cols: u16) -> Self {
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let grid_height = rows as u32 * 2 + 1;
        let grid_width = cols as u32 * 2 + 1;
        Maze {
            grid: Grid::new(grid_width, grid_height, GridCell::Wall),
            rows,
            cols,
        }
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// Returns the raw storage grid, walls included.
    pub fn grid(&self) -> &[GridCell] {
        self.grid.data()
    }

    fn cell_coord(cell: Cell) -> (u32, u32) {
        (cell.col as u32 * 2 + 1, cell.row as u32 * 2 + 1)
    }

    fn wall_coord(a: Cell, b: Cell) -> (u32, u32) {
        (
            a.col as u32 + b.col as u32 + 1,
            a.row as u32 + b.row as u32 + 1,
        )
    }

    /// Checks if there is an open passage between two cells.
    /// Returns false for cells that are not adjacent or out of bounds.
    pub fn has_passage(&self, a: Cell, b: Cell) -> bool {
        self.contains(a)
            && self.contains(b)
            && a.is_adjacent(&b)
            && self.grid[Maze::wall_coord(a, b)] == GridCell::Path
    }

    /// Counts the open passages between adjacent cells.
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|cell| {
                [
                    Cell::new(cell.row, cell.col + 1),
                    Cell::new(cell.row + 1, cell.col),
                ]
                .into_iter()
                .filter(|&next| self.has_passage(cell, next))
                .count()
            })
            .sum()
    }

    /// Counts the carved cells.
    pub fn visited_count(&self) -> usize {
        self.cells().filter(|&cell| self.is_visited(cell)).count()
    }
}

impl MazeGrid for Maze {
    fn rows(&self) -> u16 {
        self.rows
    }

    fn cols(&self) -> u16 {
        self.cols
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.contains(cell) && self.grid[Maze::cell_coord(cell)] == GridCell::Path
    }

    /// # Panics
    /// * If either cell is out of bounds
    /// * If the cells are not adjacent
    fn carve_path(&mut self, from: Cell, to: Cell) {
        if !self.contains(from) || !self.contains(to) {
            panic!("Cannot carve a path from {from} to {to}: out of bounds");
        }
        if !from.is_adjacent(&to) {
            panic!("Cannot carve a path between non-adjacent cells {from} and {to}");
        }
        self.grid.set(Maze::cell_coord(from), GridCell::Path);
        self.grid.set(Maze::cell_coord(to), GridCell::Path);
        if self.grid.set(Maze::wall_coord(from, to), GridCell::Path) {
            tracing::trace!("[maze] opened passage {} <-> {}", from, to);
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                write!(f, "{}", self.grid[(x, y)].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Get neighbors of a cell.
/// A neighbor is considered a cell that is one step away in the cardinal directions (up, down, left, right)
/// and within the grid bounds.
pub fn get_neighbors<G: MazeGrid + ?Sized>(cell: Cell, grid: &G) -> impl Iterator<Item = Cell> {
    let Cell { row, col } = cell;
    [
        col.checked_add(1).map(|c| Cell::new(row, c)),
        col.checked_sub(1).map(|c| Cell::new(row, c)),
        row.checked_add(1).map(|r| Cell::new(r, col)),
        row.checked_sub(1).map(|r| Cell::new(r, col)),
    ]
    .into_iter()
    .flatten()
    .filter(move |&c| grid.contains(c))
}
