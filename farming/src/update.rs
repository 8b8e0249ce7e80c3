use log::warn;

use crate::api::Event;
use crate::decaying::{DecayEntry, Decaying};
use crate::tiling::{LayerId, Role, Tile};
use crate::tooling::PlayerInput;
use crate::{occur, Game};

impl Game {
    pub fn update(&mut self, real_seconds: f32, input: &PlayerInput) -> Vec<Event> {
        let mut events = occur![self.timing.update(real_seconds)];
        if self.decaying.tick(real_seconds) {
            events.extend(self.revert_expired());
        }
        events.extend(self.tick_tools(input));
        events
    }

    /// Dries every cell whose wet state expired by current game time.
    pub fn revert_expired(&mut self) -> Vec<Event> {
        let grid = match self.map {
            Some(grid) => grid,
            None => return vec![],
        };
        let now = self.timing.now_seconds();
        let mut events = vec![];
        for entry in self.decaying.take_expired(now) {
            let layer = self
                .tiling
                .resolve_write_target(Role::GroundWet, entry.cell)
                .unwrap_or(entry.layer);
            let tile = self.dry_tile(layer, &entry);
            match self.tiling.paint_tile(layer, entry.cell, tile) {
                Ok(paint) => events.extend(occur![paint()]),
                Err(error) => warn!("Unable to revert wet tile at {:?}, {:?}", entry.cell, error),
            }
            match self.cultivating.dry_cell(grid, entry.cell) {
                Ok(dry) => events.extend(occur![dry()]),
                Err(error) => warn!("Unable to dry {:?}, {:?}", entry.cell, error),
            }
            events.extend(occur![vec![Decaying::EntryExpired {
                layer: entry.layer,
                cell: entry.cell,
                previous: entry.previous,
            }]]);
        }
        events
    }

    /// Dedicated wet layers are cleared. Shared ground layers get back the
    /// hoed tile when tilled soil lives there, otherwise the covered ground.
    fn dry_tile(&self, layer: LayerId, entry: &DecayEntry) -> Option<Tile> {
        if self.tiling.is_dedicated(layer, Role::GroundWet) {
            return None;
        }
        if entry.previous != Role::GroundBase
            && self.tiling.resolve_write_target(entry.previous, entry.cell) == Some(layer)
        {
            if let Some(tile) = self.config.tiles.tile_for(entry.previous) {
                return Some(tile.clone());
            }
        }
        let tile = entry
            .covered
            .clone()
            .or_else(|| self.config.tiles.tile_for(Role::GroundBase).cloned());
        if tile.is_none() {
            warn!("No dry tile to restore at {:?}, clear it", entry.cell);
        }
        tile
    }
}
