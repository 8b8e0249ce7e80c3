use crate::cultivating::{CultivatingDomain, CultivatingError, GridId, GridState};
use crate::persistence::DirtyTracker;

impl CultivatingDomain {
    pub fn get_grid(&self, id: GridId) -> Result<&GridState, CultivatingError> {
        self.grids
            .iter()
            .find(|grid| grid.id == id)
            .ok_or(CultivatingError::GridNotFound { id })
    }

    pub fn get_grid_mut(&mut self, id: GridId) -> Result<&mut GridState, CultivatingError> {
        self.grids
            .iter_mut()
            .find(|grid| grid.id == id)
            .ok_or(CultivatingError::GridNotFound { id })
    }

    pub(crate) fn get_grid_tracked(
        &mut self,
        id: GridId,
    ) -> Result<(&mut GridState, &mut DirtyTracker), CultivatingError> {
        let CultivatingDomain { grids, tracker, .. } = self;
        let grid = grids
            .iter_mut()
            .find(|grid| grid.id == id)
            .ok_or(CultivatingError::GridNotFound { id })?;
        Ok((grid, tracker))
    }
}
