use crate::cultivating::{Cultivating, CultivatingDomain, CultivatingError, GridId, GridState};

impl CultivatingDomain {
    pub fn create_grid<'operation>(
        &'operation mut self,
        path: &str,
    ) -> Result<(GridId, impl FnOnce() -> Vec<Cultivating> + 'operation), CultivatingError> {
        let mut grids_id = self.grids_id.introduce();
        let id = grids_id.one(GridId);
        let grid = GridState::new(id, path);
        let operation = move || {
            self.grids_id = grids_id;
            let path = grid.path.clone();
            self.grids.push(grid);
            vec![Cultivating::GridCreated { grid: id, path }]
        };
        Ok((id, operation))
    }
}
