use crate::math::Cell;
use crate::tiling::{LayerId, Tile, Tiling, TilingDomain, TilingError};

impl TilingDomain {
    /// Painting `None` erases cell content of the layer.
    pub fn paint_tile<'operation>(
        &'operation mut self,
        layer: LayerId,
        cell: Cell,
        tile: Option<Tile>,
    ) -> Result<impl FnOnce() -> Vec<Tiling> + 'operation, TilingError> {
        let target = self.get_layer_mut(layer)?;
        let operation = move || {
            match &tile {
                Some(tile) => {
                    target.tiles.insert(cell, tile.clone());
                }
                None => {
                    target.tiles.remove(&cell);
                }
            }
            vec![Tiling::TilePainted { layer, cell, tile }]
        };
        Ok(operation)
    }
}
