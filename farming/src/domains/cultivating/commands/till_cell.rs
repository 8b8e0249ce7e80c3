use crate::cultivating::{Cultivating, CultivatingDomain, CultivatingError, GridId, Key};
use crate::math::Cell;

impl CultivatingDomain {
    pub fn till_cell<'operation>(
        &'operation mut self,
        grid: GridId,
        cell: Cell,
    ) -> Result<impl FnOnce() -> Vec<Cultivating> + 'operation, CultivatingError> {
        let (state, tracker) = self.get_grid_tracked(grid)?;
        let operation = move || {
            state.set(cell, Key::Tilled, true);
            tracker.mark_dirty(grid, cell);
            vec![Cultivating::CellTilled { grid, cell }]
        };
        Ok(operation)
    }
}
