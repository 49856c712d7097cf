use std::fmt;

/// A maze cell identified by its (row, column) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    pub const fn new(row: u16, col: u16) -> Self {
        Cell { row, col }
    }

    /// Returns true if `other` is one step away in a cardinal direction.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Represents a slot in the storage grid, which can be either a path or a wall.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Path,
    #[default]
    Wall,
}

impl GridCell {
    /// Character used when printing the maze as text.
    pub fn symbol(&self) -> char {
        match self {
            GridCell::Path => ' ',
            GridCell::Wall => '#',
        }
    }
}
