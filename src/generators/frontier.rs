use std::collections::HashMap;

use rand::Rng;

use crate::maze::Cell;

/// Set of cells supporting uniform random selection.
///
/// Members live in a dense vector; a slot index makes membership tests and
/// swap-with-last removal O(1).
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    cells: Vec<Cell>,
    slots: HashMap<Cell, usize>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell if it is absent. Returns true if it was inserted.
    pub fn insert(&mut self, cell: Cell) -> bool {
        if self.slots.contains_key(&cell) {
            return false;
        }
        self.slots.insert(cell, self.cells.len());
        self.cells.push(cell);
        true
    }

    /// Removes a cell. Returns true if it was present.
    pub fn remove(&mut self, cell: &Cell) -> bool {
        let Some(idx) = self.slots.remove(cell) else {
            return false;
        };
        self.cells.swap_remove(idx);
        // The former last element now occupies `idx`
        if let Some(&moved) = self.cells.get(idx) {
            self.slots.insert(moved, idx);
        }
        true
    }

    /// Picks a member uniformly at random, without removing it.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        if self.cells.is_empty() {
            return None;
        }
        Some(self.cells[rng.random_range(0..self.cells.len())])
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.slots.contains_key(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn test_insert_is_set_like() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert!(frontier.insert(Cell::new(0, 1)));
        assert!(frontier.insert(Cell::new(1, 0)));
        assert!(!frontier.insert(Cell::new(0, 1)));
        assert_eq!(frontier.len(), 2);
        assert!(frontier.contains(&Cell::new(1, 0)));
        assert!(!frontier.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_remove_keeps_slots_consistent() {
        let mut frontier = Frontier::new();
        (0..5).for_each(|i| {
            frontier.insert(Cell::new(i, i));
        });
        assert!(frontier.remove(&Cell::new(1, 1)));
        assert!(!frontier.remove(&Cell::new(1, 1)));
        // The last element was moved into the freed slot and must still be removable
        assert!(frontier.remove(&Cell::new(4, 4)));
        assert!(frontier.remove(&Cell::new(0, 0)));
        assert_eq!(frontier.len(), 2);
        let rest = frontier.iter().copied().collect::<HashSet<_>>();
        assert_eq!(rest, HashSet::from([Cell::new(2, 2), Cell::new(3, 3)]));
    }

    #[test]
    fn test_pick_covers_all_members() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut frontier = Frontier::new();
        assert_eq!(frontier.pick(&mut rng), None);
        (0..4).for_each(|i| {
            frontier.insert(Cell::new(0, i));
        });

        let mut counts = HashMap::new();
        for _ in 0..4000 {
            let cell = frontier.pick(&mut rng).unwrap();
            *counts.entry(cell).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 4);
        // Each member should be picked roughly a quarter of the time
        assert!(counts.values().all(|&n| (800..1200).contains(&n)));
    }
}
