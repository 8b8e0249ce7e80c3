use chrono::NaiveDate;
use log::{debug, error};

use crate::api::{ActionError, Event};
use crate::cultivating::{GridId, Key};
use crate::math::Cell;
use crate::planting::{try_find_next_growable_step, GrowthKind};
use crate::tiling::{Role, TilingError};
use crate::{occur, Game};

impl Game {
    /// Paints tile of `step` and records it as the seed step.
    /// Watering count and start date are left to the caller.
    pub fn apply_step(
        &mut self,
        grid: GridId,
        cell: Cell,
        growth: &GrowthKind,
        step: usize,
    ) -> Result<Vec<Event>, ActionError> {
        let tile = growth.get_step(step)?.tile.clone();
        let layer = self
            .tiling
            .resolve_write_target(Role::GroundGrowth, cell)
            .ok_or(TilingError::WriteTargetNotFound {
                role: Role::GroundGrowth,
            })?;
        let change = self.cultivating.change_seed_step(grid, cell, step)?;
        let paint = self.tiling.paint_tile(layer, cell, Some(tile))?;
        Ok(occur![change(), paint()])
    }

    /// Advances seed to `step` and starts needs of that step from scratch.
    pub fn advance_seed(
        &mut self,
        grid: GridId,
        cell: Cell,
        growth: &GrowthKind,
        step: usize,
        today: NaiveDate,
    ) -> Result<Vec<Event>, ActionError> {
        let mut events = self.apply_step(grid, cell, growth, step)?;
        let rearm = self.cultivating.rearm_seed(grid, cell, today)?;
        events.extend(occur![rearm()]);
        Ok(events)
    }

    /// Gives every planted seed of current map one chance to grow by one step.
    pub fn grow_seeds(&mut self) -> Vec<Event> {
        let grid = match self.map {
            Some(grid) => grid,
            None => return vec![],
        };
        let state = match self.cultivating.get_grid(grid) {
            Ok(state) => state,
            Err(error) => {
                error!("Unable to grow seeds, {:?}", error);
                return vec![];
            }
        };
        let today = self.timing.today();
        let mut advances = vec![];
        for cell in state.cells_with(Key::SeedItem) {
            let (item, step) = match state.get_seed(cell) {
                Some(seed) => seed,
                None => continue,
            };
            let growth = match self.known.growths.find(&self.config.growth_key(item)) {
                Ok(growth) => growth,
                Err(error) => {
                    error!("Unable to grow seed at {:?}, {:?}", cell, error);
                    continue;
                }
            };
            match try_find_next_growable_step(&growth, state, cell, step + 1, today) {
                Ok(next) => advances.push((cell, growth, next)),
                Err(reason) => debug!("Seed at {:?} stays at step {}: {}", cell, step, reason),
            }
        }
        let mut events = vec![];
        for (cell, growth, next) in advances {
            match self.advance_seed(grid, cell, &growth, next, today) {
                Ok(advance) => events.extend(advance),
                Err(error) => error!("Unable to advance seed at {:?}, {:?}", cell, error),
            }
        }
        events
    }

    /// Moves calendar forward and lets seeds react to the new day.
    pub fn advance_time(&mut self, days: u32) -> Vec<Event> {
        let mut events = occur![self.timing.advance_days(days)];
        events.extend(self.grow_seeds());
        events
    }
}
