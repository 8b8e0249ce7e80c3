use chrono::NaiveDate;

use crate::cultivating::{
    Cultivating, CultivatingDomain, CultivatingError, GridId, Key, DATE_FORMAT,
};
use crate::math::Cell;

impl CultivatingDomain {
    pub fn change_seed_step<'operation>(
        &'operation mut self,
        grid: GridId,
        cell: Cell,
        step: usize,
    ) -> Result<impl FnOnce() -> Vec<Cultivating> + 'operation, CultivatingError> {
        let (state, tracker) = self.get_grid_tracked(grid)?;
        if !state.has_seed(cell) {
            return Err(CultivatingError::SeedNotPlanted { grid, cell });
        }
        let operation = move || {
            state.set(cell, Key::SeedStep, step as i64);
            tracker.mark_dirty(grid, cell);
            vec![Cultivating::SeedStepChanged { grid, cell, step }]
        };
        Ok(operation)
    }

    /// Starts needs of the next step from scratch: no waterings, new start date.
    pub fn rearm_seed<'operation>(
        &'operation mut self,
        grid: GridId,
        cell: Cell,
        date: NaiveDate,
    ) -> Result<impl FnOnce() -> Vec<Cultivating> + 'operation, CultivatingError> {
        let (state, tracker) = self.get_grid_tracked(grid)?;
        if !state.has_seed(cell) {
            return Err(CultivatingError::SeedNotPlanted { grid, cell });
        }
        let operation = move || {
            if state.erase(cell, Key::WetCount) {
                tracker.mark_erased(grid, cell, Some(Key::WetCount));
            }
            state.set(cell, Key::SeedStartDate, date.format(DATE_FORMAT).to_string());
            tracker.mark_dirty(grid, cell);
            vec![]
        };
        Ok(operation)
    }
}
