use log::{debug, warn};

use crate::api::{ActionError, Event};
use crate::planting::PlantingError;
use crate::tooling::{ToolContext, ToolingError, Validation};
use crate::{occur, Game};

impl Game {
    pub(crate) fn validate_seed(&self, context: &ToolContext) -> Validation {
        let grid = match self.cultivating.get_grid(context.grid) {
            Ok(grid) => grid,
            Err(_) => return Validation::rejected(&context.cells, "Map is not loaded."),
        };
        let mut validation = Validation::default();
        for cell in &context.cells {
            let plantable = !grid.has_seed(*cell) && self.is_cell_workable(&context.tool, *cell);
            validation.judge(*cell, plantable);
        }
        validation.finish("Occupied, blocked or no tilled ground.")
    }

    pub(crate) fn seed(&mut self, context: &ToolContext) -> Result<Vec<Event>, ActionError> {
        let item = context.item.ok_or(ToolingError::SeedNotHeld)?;
        let growth = self.known.growths.find(&self.config.growth_key(item))?;
        let first = growth
            .steps
            .first()
            .ok_or(PlantingError::NoSteps { growth: growth.id })?;
        let role = context.tool.write_role;
        let today = self.timing.today();
        let mut events = vec![];
        for cell in context.ordered_cells() {
            let layer = match self.tiling.resolve_write_target(role, cell) {
                Some(layer) => layer,
                None => {
                    debug!("No {:?} layer to seed {:?}", role, cell);
                    continue;
                }
            };
            let plant = match self.cultivating.plant_seed(context.grid, cell, item, today) {
                Ok(plant) => plant,
                Err(error) => {
                    warn!("Unable to seed {:?}, {:?}", cell, error);
                    continue;
                }
            };
            let paint = self.tiling.paint_tile(layer, cell, Some(first.tile.clone()))?;
            events.extend(occur![plant(), paint()]);
        }
        Ok(events)
    }
}
