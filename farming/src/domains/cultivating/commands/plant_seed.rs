use chrono::NaiveDate;

use crate::cultivating::{
    Cultivating, CultivatingDomain, CultivatingError, GridId, Key, DATE_FORMAT,
};
use crate::math::Cell;
use crate::model::ItemKey;

impl CultivatingDomain {
    /// Seeds always start at step zero with a fresh watering count.
    pub fn plant_seed<'operation>(
        &'operation mut self,
        grid: GridId,
        cell: Cell,
        item: ItemKey,
        date: NaiveDate,
    ) -> Result<impl FnOnce() -> Vec<Cultivating> + 'operation, CultivatingError> {
        let (state, tracker) = self.get_grid_tracked(grid)?;
        if state.has_seed(cell) {
            return Err(CultivatingError::SeedAlreadyPlanted { grid, cell });
        }
        let operation = move || {
            state.set(cell, Key::SeedItem, item.0 as i64);
            state.set(cell, Key::SeedStep, 0i64);
            state.set(cell, Key::SeedStartDate, date.format(DATE_FORMAT).to_string());
            if state.erase(cell, Key::WetCount) {
                tracker.mark_erased(grid, cell, Some(Key::WetCount));
            }
            tracker.mark_dirty(grid, cell);
            vec![Cultivating::SeedPlanted { grid, cell, item }]
        };
        Ok(operation)
    }

    /// Removes every seed key and the wet flag, the harvest leaves bare soil.
    pub fn clear_seed<'operation>(
        &'operation mut self,
        grid: GridId,
        cell: Cell,
    ) -> Result<impl FnOnce() -> Vec<Cultivating> + 'operation, CultivatingError> {
        let (state, tracker) = self.get_grid_tracked(grid)?;
        if !state.has_seed(cell) {
            return Err(CultivatingError::SeedNotPlanted { grid, cell });
        }
        let operation = move || {
            for key in [Key::SeedItem, Key::SeedStep, Key::SeedStartDate, Key::Watered] {
                state.erase(cell, key);
                tracker.mark_erased(grid, cell, Some(key));
            }
            vec![Cultivating::SeedCleared { grid, cell }]
        };
        Ok(operation)
    }
}
