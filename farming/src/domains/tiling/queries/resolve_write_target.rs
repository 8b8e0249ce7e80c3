use crate::math::Cell;
use crate::tiling::{Layer, LayerId, Role, RoleMask, Tile, TilingDomain};

impl TilingDomain {
    /// Highest sorting order wins, first registered on ties.
    pub fn top_for_role(&self, role: Role) -> Option<&Layer> {
        let mut top: Option<&Layer> = None;
        for layer in self.layers_of(role) {
            match top {
                Some(current) if current.order >= layer.order => {}
                _ => top = Some(layer),
            }
        }
        top
    }

    pub fn any_tile_at(&self, cell: Cell, mask: RoleMask) -> bool {
        mask.roles()
            .any(|role| self.layers_of(role).any(|layer| layer.has_tile(cell)))
    }

    /// Layer to paint for desired role. Ground family roles fall back to
    /// the base ground layer when no dedicated layer is classified.
    pub fn resolve_write_target(&self, role: Role, _cell: Cell) -> Option<LayerId> {
        if let Some(layer) = self.top_for_role(role) {
            return Some(layer.id);
        }
        if role.is_any_ground() {
            return self.top_for_role(Role::GroundBase).map(|layer| layer.id);
        }
        None
    }

    /// Whether `role` is the only role of the layer.
    pub fn is_dedicated(&self, layer: LayerId, role: Role) -> bool {
        self.roles_of(layer) == [role]
    }

    /// Tile a paint of `role` would cover. Layers dedicated to the role keep nothing under it.
    pub fn covered_tile(&self, layer: LayerId, role: Role, cell: Cell) -> Option<Tile> {
        if self.is_dedicated(layer, role) {
            return None;
        }
        self.get_layer(layer).ok()?.get_tile(cell).cloned()
    }
}
