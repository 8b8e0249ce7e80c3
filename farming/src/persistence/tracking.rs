use std::collections::{BTreeSet, HashMap, HashSet};

use crate::cultivating::{GridId, Key};
use crate::math::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Erasure {
    All,
    Keys(BTreeSet<Key>),
}

/// Cells and keys changed since the last save capture, per grid.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    dirty: HashMap<GridId, HashSet<Cell>>,
    erased: HashMap<GridId, HashMap<Cell, Erasure>>,
}

impl DirtyTracker {
    pub fn mark_dirty(&mut self, grid: GridId, cell: Cell) {
        self.dirty.entry(grid).or_default().insert(cell);
    }

    /// `None` erases the whole cell and absorbs any partial erasure of it.
    pub fn mark_erased(&mut self, grid: GridId, cell: Cell, key: Option<Key>) {
        let erasure = self
            .erased
            .entry(grid)
            .or_default()
            .entry(cell)
            .or_insert_with(|| Erasure::Keys(BTreeSet::new()));
        match key {
            None => *erasure = Erasure::All,
            Some(key) => {
                if let Erasure::Keys(keys) = erasure {
                    keys.insert(key);
                }
            }
        }
    }

    pub fn dirty_cells(&self, grid: GridId) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .dirty
            .get(&grid)
            .map(|cells| cells.iter().copied().collect())
            .unwrap_or_default();
        cells.sort();
        cells
    }

    pub fn get_erasure(&self, grid: GridId, cell: Cell) -> Option<&Erasure> {
        self.erased.get(&grid).and_then(|cells| cells.get(&cell))
    }

    pub fn take_erased(&mut self, grid: GridId) -> Vec<(Cell, Erasure)> {
        let mut erased: Vec<(Cell, Erasure)> = self
            .erased
            .remove(&grid)
            .map(|cells| cells.into_iter().collect())
            .unwrap_or_default();
        erased.sort_by_key(|(cell, _)| *cell);
        erased
    }

    pub fn is_clean(&self) -> bool {
        self.dirty.values().all(HashSet::is_empty) && self.erased.values().all(HashMap::is_empty)
    }

    pub fn clear(&mut self, grid: GridId) {
        self.dirty.remove(&grid);
        self.erased.remove(&grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridId = GridId(1);

    #[test]
    fn test_full_erasure_absorbs_later_keys() {
        let mut tracker = DirtyTracker::default();
        tracker.mark_erased(GRID, [1, 1], Some(Key::Watered));
        tracker.mark_erased(GRID, [1, 1], None);
        tracker.mark_erased(GRID, [1, 1], Some(Key::WetUntil));
        assert_eq!(tracker.get_erasure(GRID, [1, 1]), Some(&Erasure::All));
    }

    #[test]
    fn test_marking_is_idempotent() {
        let mut tracker = DirtyTracker::default();
        tracker.mark_dirty(GRID, [0, 0]);
        tracker.mark_dirty(GRID, [0, 0]);
        tracker.mark_erased(GRID, [2, 0], Some(Key::SeedStep));
        tracker.mark_erased(GRID, [2, 0], Some(Key::SeedStep));
        assert_eq!(tracker.dirty_cells(GRID), vec![[0, 0]]);
        assert_eq!(
            tracker.get_erasure(GRID, [2, 0]),
            Some(&Erasure::Keys([Key::SeedStep].into_iter().collect()))
        );
    }

    #[test]
    fn test_clear_touches_only_one_grid() {
        let mut tracker = DirtyTracker::default();
        tracker.mark_dirty(GRID, [0, 0]);
        tracker.mark_dirty(GridId(2), [0, 0]);
        tracker.clear(GRID);
        assert!(tracker.dirty_cells(GRID).is_empty());
        assert_eq!(tracker.dirty_cells(GridId(2)), vec![[0, 0]]);
        assert!(!tracker.is_clean());
        tracker.clear(GridId(2));
        assert!(tracker.is_clean());
    }
}
