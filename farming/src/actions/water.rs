use log::debug;

use crate::api::{ActionError, Event};
use crate::cultivating::Key;
use crate::tiling::{Role, RoleMask};
use crate::tooling::{DurationMode, ToolContext, Validation};
use crate::{occur, Game};

impl Game {
    pub(crate) fn validate_water(&self, context: &ToolContext) -> Validation {
        let mut validation = Validation::default();
        for cell in &context.cells {
            validation.judge(*cell, self.is_cell_workable(&context.tool, *cell));
        }
        validation.finish("Blocked or no tilled ground.")
    }

    pub(crate) fn water(
        &mut self,
        context: &ToolContext,
        duration: f32,
        mode: DurationMode,
    ) -> Result<Vec<Event>, ActionError> {
        let tile = self
            .config
            .tiles
            .tile_for(Role::GroundWet)
            .cloned()
            .ok_or(ActionError::TileNotConfigured {
                role: Role::GroundWet,
            })?;
        let now = self.timing.now_seconds();
        let duration = duration.max(0.0).ceil() as i64;
        let mut events = vec![];
        for cell in context.ordered_cells() {
            let previous = if self.tiling.any_tile_at(cell, RoleMask::from(Role::GroundHoed)) {
                Role::GroundHoed
            } else {
                Role::GroundBase
            };
            let layer = match self.tiling.resolve_write_target(Role::GroundWet, cell) {
                Some(layer) => layer,
                None => {
                    debug!("No wet layer to water {:?}", cell);
                    continue;
                }
            };
            let existing = self
                .cultivating
                .get_grid(context.grid)?
                .get_int(cell, Key::WetUntil)
                .unwrap_or(0);
            let until = match mode {
                DurationMode::Extend if existing > 0 => existing + duration,
                _ => now + duration,
            };
            let covered = self.tiling.covered_tile(layer, Role::GroundWet, cell);
            let paint = self.tiling.paint_tile(layer, cell, Some(tile.clone()))?;
            let water = self
                .cultivating
                .water_cell(context.grid, cell, until, previous)?;
            let schedule = self.decaying.register(layer, cell, until, previous, covered);
            events.extend(occur![paint(), water(), schedule]);
        }
        Ok(events)
    }
}
