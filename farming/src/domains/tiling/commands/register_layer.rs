use crate::tiling::{Layer, LayerId, Tiling, TilingDomain, TilingError};

impl TilingDomain {
    pub fn register_layer<'operation>(
        &'operation mut self,
        layer: Layer,
    ) -> Result<impl FnOnce() -> Vec<Tiling> + 'operation, TilingError> {
        if layer.name == self.preview_name {
            return Err(TilingError::ReservedLayerName { name: layer.name });
        }
        if self.get_layer(layer.id).is_ok() {
            return Err(TilingError::LayerAlreadyRegistered { id: layer.id });
        }
        let operation = move || {
            let event = Tiling::LayerRegistered {
                layer: layer.id,
                name: layer.name.clone(),
            };
            self.layers.push(layer);
            vec![event]
        };
        Ok(operation)
    }

    pub fn unregister_layer<'operation>(
        &'operation mut self,
        id: LayerId,
    ) -> Result<impl FnOnce() -> Vec<Tiling> + 'operation, TilingError> {
        let index = self
            .layers
            .iter()
            .position(|layer| layer.id == id)
            .ok_or(TilingError::LayerNotFound { id })?;
        let operation = move || {
            self.layers.remove(index);
            for layers in self.roles.values_mut() {
                layers.retain(|layer| *layer != id);
            }
            vec![Tiling::LayerUnregistered { layer: id }]
        };
        Ok(operation)
    }
}
