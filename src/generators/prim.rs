use std::sync::mpsc::Sender;

use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use crate::error::GenerateError;
use crate::generators::{Frontier, GeneratorEvent, GeneratorState, get_rng};
use crate::maze::{Cell, MazeGrid, get_neighbors};

/// Randomized Prim's algorithm, driven one step at a time.
///
/// A random start cell is carved towards a random neighbor and placed in the
/// frontier. Each step picks a random frontier cell, carves a passage to one of
/// its already carved neighbors, adds its uncarved neighbors to the frontier and
/// drops it from the frontier. Generation is complete when the frontier is empty.
///
/// The start cell is already carved when it enters the frontier, and it is the
/// only member until the first step. That step re-opens the passage made at
/// construction and enqueues the uncarved neighbors of both the start cell and
/// the neighbor carved with it, which never enters the frontier itself.
/// Without the latter a corridor would be cut off behind that neighbor.
pub struct PrimGenerator<'a, G: MazeGrid + ?Sized, R: Rng = StdRng> {
    grid: &'a mut G,
    frontier: Frontier,
    rng: R,
    events: Option<Sender<GeneratorEvent>>,
    state: GeneratorState,
    start: Cell,
    steps: usize,
}

impl<'a, G: MazeGrid + ?Sized> PrimGenerator<'a, G, StdRng> {
    /// Creates a generator, optionally seeded for reproducibility.
    pub fn new(grid: &'a mut G, seed: Option<u64>) -> Result<Self, GenerateError> {
        Self::with_rng(grid, get_rng(seed), None)
    }

    /// Creates a generator that reports its progress on `events`.
    pub fn with_events(
        grid: &'a mut G,
        seed: Option<u64>,
        events: Sender<GeneratorEvent>,
    ) -> Result<Self, GenerateError> {
        Self::with_rng(grid, get_rng(seed), Some(events))
    }
}

impl<'a, G: MazeGrid + ?Sized, R: Rng> PrimGenerator<'a, G, R> {
    /// Creates a generator drawing all of its randomness from `rng`.
    ///
    /// Fails if the grid is empty, or if the randomly chosen start cell has no
    /// neighbor to carve towards (a 1x1 grid).
    pub fn with_rng(
        grid: &'a mut G,
        mut rng: R,
        events: Option<Sender<GeneratorEvent>>,
    ) -> Result<Self, GenerateError> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows == 0 || cols == 0 {
            return Err(GenerateError::EmptyGrid { rows, cols });
        }

        let start = Cell::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let neighbors = get_neighbors(start, &*grid).collect::<Vec<_>>();
        let Some(&neighbor) = neighbors.choose(&mut rng) else {
            return Err(GenerateError::NoNeighbors { cell: start });
        };
        grid.carve_path(start, neighbor);
        tracing::debug!(
            "[prim] starting {}x{} maze at {} towards {}",
            rows,
            cols,
            start,
            neighbor
        );

        let mut generator = PrimGenerator {
            grid,
            frontier: Frontier::new(),
            rng,
            events,
            state: GeneratorState::Active,
            start,
            steps: 0,
        };
        generator.emit(GeneratorEvent::Started { start, neighbor });
        generator.push_frontier(start);
        Ok(generator)
    }

    /// Steps the algorithm once.
    ///
    /// Returns `Ok(true)` if a cell was carved and more steps may follow, or
    /// `Ok(false)` once the frontier is empty. A finished generator keeps
    /// returning `Ok(false)` without touching the grid.
    pub fn step(&mut self) -> Result<bool, GenerateError> {
        if self.state == GeneratorState::Terminal {
            return Ok(false);
        }

        let Some(current) = self.frontier.pick(&mut self.rng) else {
            self.state = GeneratorState::Terminal;
            tracing::debug!("[prim] frontier exhausted after {} steps", self.steps);
            self.emit(GeneratorEvent::Finished { steps: self.steps });
            return Ok(false);
        };

        let from = self.carve_cell(current)?;
        self.add_neighbors(current);
        if current == self.start {
            self.add_neighbors(from);
        }
        let removed = self.frontier.remove(&current);
        debug_assert!(removed, "frontier cell {current} removed twice");
        self.steps += 1;
        Ok(true)
    }

    /// Steps until the frontier is empty. Returns the number of steps taken by this call.
    pub fn generate(&mut self) -> Result<usize, GenerateError> {
        let mut steps = 0;
        while self.step()? {
            steps += 1;
        }
        Ok(steps)
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == GeneratorState::Terminal
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Number of successful steps so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn grid(&self) -> &G {
        &*self.grid
    }

    /// Carves from the given cell to one of its carved neighbors, chosen at random.
    /// Returns the neighbor carved towards.
    fn carve_cell(&mut self, cell: Cell) -> Result<Cell, GenerateError> {
        let cleared = self.cleared_neighbors(cell);
        let Some(&from) = cleared.choose(&mut self.rng) else {
            return Err(GenerateError::NoClearedNeighbor { cell });
        };
        self.grid.carve_path(cell, from);
        tracing::trace!("[prim] carved {} from {}", cell, from);
        self.emit(GeneratorEvent::Carved { cell, from });
        Ok(from)
    }

    fn cleared_neighbors(&self, cell: Cell) -> Vec<Cell> {
        get_neighbors(cell, &*self.grid)
            .filter(|&n| self.grid.is_visited(n))
            .collect()
    }

    /// Adds the uncarved neighbors of `cell` that are not yet in the frontier.
    fn add_neighbors(&mut self, cell: Cell) {
        let uncarved = get_neighbors(cell, &*self.grid)
            .filter(|&n| !self.grid.is_visited(n) && !self.frontier.contains(&n))
            .collect::<Vec<_>>();
        for n in uncarved {
            self.push_frontier(n);
        }
    }

    fn push_frontier(&mut self, cell: Cell) {
        debug_assert!(self.grid.contains(cell), "frontier cell {cell} out of bounds");
        let inserted = self.frontier.insert(cell);
        debug_assert!(inserted, "frontier cell {cell} inserted twice");
        self.emit(GeneratorEvent::FrontierAdded(cell));
    }

    fn emit(&self, event: GeneratorEvent) {
        if let Some(sender) = &self.events {
            // Nobody listening is fine
            let _ = sender.send(event);
        }
    }
}
