use log::{debug, warn};

use crate::api::{ActionError, Event};
use crate::cultivating::{GridId, Key};
use crate::math::Cell;
use crate::tiling::{LayerId, Role, Tile};
use crate::{occur, Game};

impl Game {
    /// Repaints ground of restored grid properties.
    pub(crate) fn redraw_grid(&mut self, grid: GridId) -> Result<Vec<Event>, ActionError> {
        let state = self.cultivating.get_grid(grid)?;
        let mut paints: Vec<(LayerId, Cell, Tile)> = vec![];
        let mut cells: Vec<Cell> = state.cells.keys().copied().collect();
        cells.sort();
        for cell in cells {
            if state.get_flag(cell, Key::Tilled) {
                if let Some(paint) = self.runtime_paint(Role::GroundHoed, cell) {
                    paints.push(paint);
                }
            }
            if state.get_flag(cell, Key::Watered) {
                if let Some(paint) = self.runtime_paint(Role::GroundWet, cell) {
                    paints.push(paint);
                }
            }
            if let Some((item, step)) = state.get_seed(cell) {
                let growth = match self.known.growths.find(&self.config.growth_key(item)) {
                    Ok(growth) => growth,
                    Err(error) => {
                        warn!("Unable to redraw seed at {:?}, {:?}", cell, error);
                        continue;
                    }
                };
                let layer = self.tiling.resolve_write_target(Role::GroundGrowth, cell);
                match (layer, growth.steps.get(step)) {
                    (Some(layer), Some(step)) => paints.push((layer, cell, step.tile.clone())),
                    _ => debug!("Seed at {:?} is not drawable", cell),
                }
            }
        }
        let mut events = vec![];
        for (layer, cell, tile) in paints {
            let paint = self.tiling.paint_tile(layer, cell, Some(tile))?;
            events.extend(occur![paint()]);
        }
        Ok(events)
    }

    fn runtime_paint(&self, role: Role, cell: Cell) -> Option<(LayerId, Cell, Tile)> {
        let tile = self.config.tiles.tile_for(role)?;
        let layer = self.tiling.resolve_write_target(role, cell)?;
        Some((layer, cell, tile.clone()))
    }

    /// Schedules drying of cells restored in wet state. Runs before the
    /// redraw so shared ground layers still hold their map tiles.
    pub(crate) fn rearm_decay(&mut self, grid: GridId) -> Result<Vec<Event>, ActionError> {
        let state = self.cultivating.get_grid(grid)?;
        let mut entries = vec![];
        for cell in state.cells_with(Key::WetUntil) {
            let until = match state.get_int(cell, Key::WetUntil) {
                Some(until) => until,
                None => continue,
            };
            let previous = state
                .get_text(cell, Key::WetPreviousRole)
                .and_then(|name| Role::parse(&name))
                .unwrap_or(Role::GroundBase);
            match self.tiling.resolve_write_target(Role::GroundWet, cell) {
                Some(layer) => {
                    let covered = self.tiling.covered_tile(layer, Role::GroundWet, cell);
                    entries.push((layer, cell, until, previous, covered));
                }
                None => warn!("No wet layer to schedule drying at {:?}", cell),
            }
        }
        let mut events = vec![];
        for (layer, cell, until, previous, covered) in entries {
            events.extend(occur![self.decaying.register(layer, cell, until, previous, covered)]);
        }
        Ok(events)
    }
}
