use log::{error, warn};

use crate::api::{ActionError, Event};
use crate::math::CellMath;
use crate::model::{HarvestMethod, ItemKey};
use crate::tooling::{ToolContext, Tooling, Validation};
use crate::{occur, Game};

impl Game {
    pub(crate) fn validate_harvest(&self, context: &ToolContext, method: HarvestMethod) -> Validation {
        let grid = match self.cultivating.get_grid(context.grid) {
            Ok(grid) => grid,
            Err(_) => return Validation::rejected(&context.cells, "Map is not loaded."),
        };
        let mut validation = Validation::default();
        for cell in &context.cells {
            let cell = *cell;
            if !self.is_cell_workable(&context.tool, cell) {
                validation.reject(cell);
                continue;
            }
            let (item, step) = match grid.get_seed(cell) {
                Some(seed) => seed,
                None => {
                    validation.reject(cell);
                    continue;
                }
            };
            if !self.is_harvestable_by(item, method) {
                validation.reject(cell);
                continue;
            }
            match self.known.growths.find(&self.config.growth_key(item)) {
                Ok(growth) => validation.judge(cell, growth.is_final(step)),
                Err(error) => {
                    error!("Unable to judge harvest at {:?}, {:?}", cell, error);
                    validation.reject(cell);
                }
            }
        }
        validation.finish("Nothing ripe to harvest.")
    }

    pub(crate) fn harvest(
        &mut self,
        context: &ToolContext,
        method: HarvestMethod,
    ) -> Result<Vec<Event>, ActionError> {
        let role = context.tool.write_role;
        let mut events = vec![];
        for cell in context.ordered_cells() {
            let layer = match self.tiling.resolve_write_target(role, cell) {
                Some(layer) => layer,
                None => continue,
            };
            let (item, step) = match self.cultivating.get_grid(context.grid)?.get_seed(cell) {
                Some(seed) => seed,
                None => {
                    warn!("Nothing planted at {:?}", cell);
                    continue;
                }
            };
            if !self.is_harvestable_by(item, method) {
                warn!("Seed {:?} at {:?} is not harvestable by {:?}", item, cell, method);
                continue;
            }
            let growth = self.known.growths.find(&self.config.growth_key(item))?;
            if !growth.is_final(step) {
                warn!("Seed at {:?} is not ripe, step {}", cell, step);
                continue;
            }
            let clear = self.cultivating.clear_seed(context.grid, cell)?;
            let paint = self.tiling.paint_tile(layer, cell, None)?;
            let drop = vec![Tooling::DropSpawned {
                item: growth.result,
                quantity: 1,
                position: cell.position(),
            }];
            events.extend(occur![clear(), paint(), drop]);
        }
        Ok(events)
    }

    fn is_harvestable_by(&self, item: ItemKey, method: HarvestMethod) -> bool {
        self.known
            .items
            .get(item)
            .map(|kind| kind.harvest == Some(method))
            .unwrap_or(false)
    }
}
