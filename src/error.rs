use thiserror::Error;

use crate::maze::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("cannot generate a maze on an empty {rows}x{cols} grid")]
    EmptyGrid { rows: u16, cols: u16 },

    #[error("start cell {cell} has no neighbors to carve towards")]
    NoNeighbors { cell: Cell },

    /// A frontier cell with no carved neighbor means the grid lost carved state
    /// behind the generator's back.
    #[error("frontier cell {cell} has no carved neighbor")]
    NoClearedNeighbor { cell: Cell },
}
