use std::collections::BTreeMap;

use log::{debug, warn};

use crate::cultivating::{GridState, Key};
use crate::math::Cell;
use crate::persistence::{
    parse_entry, read_entry, CellSnapshot, DirtyTracker, Envelope, EntrySnapshot, Erasure,
    GridSnapshot, SaveError, SaveSection, SECTION_VERSION,
};

type Entries = BTreeMap<String, EntrySnapshot>;

/// Accumulates grid properties across captures so that every save
/// writes the complete picture, not only the latest changes.
pub struct SaveContributor {
    pub section: String,
    accumulated: BTreeMap<String, BTreeMap<Cell, Entries>>,
}

impl SaveContributor {
    pub fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
            accumulated: BTreeMap::new(),
        }
    }

    /// Folds tracked changes into accumulation, then writes it whole.
    pub fn capture(
        &mut self,
        grids: &[GridState],
        tracker: &mut DirtyTracker,
        envelope: &mut Envelope,
    ) -> Result<(), SaveError> {
        for grid in grids {
            let cells = self.accumulated.entry(grid.path.clone()).or_default();
            for (cell, erasure) in tracker.take_erased(grid.id) {
                match erasure {
                    Erasure::All => {
                        cells.remove(&cell);
                    }
                    Erasure::Keys(keys) => {
                        if let Some(entries) = cells.get_mut(&cell) {
                            for key in keys {
                                entries.remove(key.name());
                            }
                            if entries.is_empty() {
                                cells.remove(&cell);
                            }
                        }
                    }
                }
            }
            for cell in tracker.dirty_cells(grid.id) {
                for key in Key::ALL {
                    match read_entry(grid, cell, key) {
                        Some(entry) => {
                            cells
                                .entry(cell)
                                .or_default()
                                .insert(entry.key.clone(), entry);
                        }
                        None => {
                            if let Some(entries) = cells.get_mut(&cell) {
                                entries.remove(key.name());
                                if entries.is_empty() {
                                    cells.remove(&cell);
                                }
                            }
                        }
                    }
                }
            }
            tracker.clear(grid.id);
            debug!("Captured grid {} with {} cells", grid.path, cells.len());
        }
        envelope.set_section(&self.section, &self.snapshot())
    }

    /// Replaces accumulation with the envelope section, if present.
    pub fn restore(&mut self, envelope: &Envelope) -> Result<(), SaveError> {
        let section: SaveSection = match envelope.get_section(&self.section)? {
            Some(section) => section,
            None => {
                debug!("Section {} not found, nothing to restore", self.section);
                return Ok(());
            }
        };
        if section.version != SECTION_VERSION {
            warn!(
                "Section {} has version {}, expected {}",
                self.section, section.version, SECTION_VERSION
            );
        }
        self.clear_accumulated();
        for grid in section.grids {
            let cells = self.accumulated.entry(grid.path).or_default();
            for cell in grid.cells {
                let entries = cells.entry(cell.coord).or_default();
                for entry in cell.entries {
                    entries.insert(entry.key.clone(), entry);
                }
            }
        }
        Ok(())
    }

    /// Resets live grid state and fills it from accumulation of its path.
    pub fn update_to_grid(&self, grid: &mut GridState) {
        grid.reset();
        let cells = match self.accumulated.get(&grid.path) {
            Some(cells) => cells,
            None => return,
        };
        for (cell, entries) in cells {
            for entry in entries.values() {
                let key = match Key::parse(&entry.key) {
                    Some(key) => key,
                    None => {
                        warn!("Unknown grid key {} at {:?} skipped", entry.key, cell);
                        continue;
                    }
                };
                match parse_entry(entry) {
                    Some(value) => grid.set(*cell, key, value),
                    None => debug!("Malformed {} value {:?} at {:?}", entry.key, entry.value, cell),
                }
            }
        }
    }

    pub fn clear_accumulated(&mut self) {
        self.accumulated.clear();
    }

    pub fn snapshot(&self) -> SaveSection {
        let grids = self
            .accumulated
            .iter()
            .map(|(path, cells)| GridSnapshot {
                path: path.clone(),
                cells: cells
                    .iter()
                    .map(|(coord, entries)| CellSnapshot {
                        coord: *coord,
                        entries: entries.values().cloned().collect(),
                    })
                    .collect(),
            })
            .collect();
        SaveSection {
            version: SECTION_VERSION,
            grids,
        }
    }
}
