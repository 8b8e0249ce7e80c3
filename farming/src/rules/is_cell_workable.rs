use crate::math::{Cell, Position};
use crate::model::{EntityCategory, EntityView};
use crate::tooling::ToolKind;
use crate::Game;

/// Radius of entity overlap probe around a cell center.
pub const OVERLAP_RADIUS: f32 = 0.5;

impl Game {
    /// Cell has ground the tool can read and nothing that blocks it.
    pub fn is_cell_workable(&self, tool: &ToolKind, cell: Cell) -> bool {
        !self.tiling.any_tile_at(cell, tool.block_roles)
            && self.tiling.any_tile_at(cell, tool.read_roles)
    }

    pub fn find_entity(&self, position: Position, category: EntityCategory) -> Option<EntityView> {
        self.probe
            .overlap(position, OVERLAP_RADIUS)
            .into_iter()
            .find(|entity| entity.category == category)
    }
}
