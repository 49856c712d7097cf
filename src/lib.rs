pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;

pub use error::GenerateError;
pub use generators::{GeneratorEvent, GeneratorState, PrimGenerator, generate_maze};
pub use maze::{Cell, Maze, MazeGrid};
