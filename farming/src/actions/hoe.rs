use log::debug;

use crate::api::{ActionError, Event};
use crate::tooling::{ToolContext, Validation};
use crate::{occur, Game};

impl Game {
    pub(crate) fn validate_hoe(&self, context: &ToolContext) -> Validation {
        let mut validation = Validation::default();
        for cell in &context.cells {
            validation.judge(*cell, self.is_cell_workable(&context.tool, *cell));
        }
        validation.finish("Blocked or no ground.")
    }

    pub(crate) fn hoe(&mut self, context: &ToolContext) -> Result<Vec<Event>, ActionError> {
        let role = context.tool.write_role;
        let tile = self
            .config
            .tiles
            .tile_for(role)
            .cloned()
            .ok_or(ActionError::TileNotConfigured { role })?;
        let mut events = vec![];
        for cell in context.ordered_cells() {
            let layer = match self.tiling.resolve_write_target(role, cell) {
                Some(layer) => layer,
                None => {
                    debug!("No {:?} layer to hoe {:?}", role, cell);
                    continue;
                }
            };
            let paint = self.tiling.paint_tile(layer, cell, Some(tile.clone()))?;
            let till = self.cultivating.till_cell(context.grid, cell)?;
            events.extend(occur![paint(), till()]);
        }
        Ok(events)
    }
}
