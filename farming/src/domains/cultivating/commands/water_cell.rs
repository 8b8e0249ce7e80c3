use crate::cultivating::{Cultivating, CultivatingDomain, CultivatingError, GridId, Key};
use crate::math::Cell;
use crate::tiling::Role;

impl CultivatingDomain {
    /// Marks cell wet until given moment and counts the watering.
    pub fn water_cell<'operation>(
        &'operation mut self,
        grid: GridId,
        cell: Cell,
        until: i64,
        previous: Role,
    ) -> Result<impl FnOnce() -> Vec<Cultivating> + 'operation, CultivatingError> {
        let (state, tracker) = self.get_grid_tracked(grid)?;
        let operation = move || {
            let count = match state.get_int(cell, Key::WetCount) {
                Some(count) if count >= 0 => count + 1,
                _ => 1,
            };
            state.set(cell, Key::Watered, true);
            state.set(cell, Key::WetUntil, until);
            state.set(cell, Key::WetPreviousRole, previous.name());
            state.set(cell, Key::WetCount, count);
            tracker.mark_dirty(grid, cell);
            vec![Cultivating::CellWatered {
                grid,
                cell,
                until,
                count,
            }]
        };
        Ok(operation)
    }

    /// Clears wet state but keeps the watering count for growth needs.
    pub fn dry_cell<'operation>(
        &'operation mut self,
        grid: GridId,
        cell: Cell,
    ) -> Result<impl FnOnce() -> Vec<Cultivating> + 'operation, CultivatingError> {
        let (state, tracker) = self.get_grid_tracked(grid)?;
        let operation = move || {
            for key in [Key::Watered, Key::WetUntil, Key::WetPreviousRole] {
                state.erase(cell, key);
                tracker.mark_erased(grid, cell, Some(key));
            }
            vec![Cultivating::CellDried { grid, cell }]
        };
        Ok(operation)
    }
}
