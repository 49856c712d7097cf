use rand::{SeedableRng, rngs::StdRng};

mod frontier;
mod prim;

pub use frontier::Frontier;
pub use prim::PrimGenerator;

use crate::error::GenerateError;
use crate::maze::{Cell, MazeGrid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Notifications emitted at step boundaries, for anything that wants to
/// observe generation (e.g. a renderer on another thread).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorEvent {
    /// The start cell was carved together with one of its neighbors.
    Started { start: Cell, neighbor: Cell },
    /// A cell joined the frontier.
    FrontierAdded(Cell),
    /// A frontier cell was carved into the maze through its carved neighbor `from`.
    Carved { cell: Cell, from: Cell },
    /// The frontier ran empty. Sent once.
    Finished { steps: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// More steps may be possible.
    Active,
    /// The frontier was observed empty; further steps do nothing.
    Terminal,
}

/// Generate a complete maze on `grid`. Returns the number of steps taken.
pub fn generate_maze<G: MazeGrid + ?Sized>(
    grid: &mut G,
    seed: Option<u64>,
) -> Result<usize, GenerateError> {
    PrimGenerator::new(grid, seed)?.generate()
}
