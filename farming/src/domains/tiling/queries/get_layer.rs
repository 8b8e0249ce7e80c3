use crate::tiling::{Layer, LayerId, Role, TilingDomain, TilingError};

impl TilingDomain {
    pub fn get_layer(&self, id: LayerId) -> Result<&Layer, TilingError> {
        self.layers
            .iter()
            .find(|layer| layer.id == id)
            .ok_or(TilingError::LayerNotFound { id })
    }

    pub fn get_layer_mut(&mut self, id: LayerId) -> Result<&mut Layer, TilingError> {
        self.layers
            .iter_mut()
            .find(|layer| layer.id == id)
            .ok_or(TilingError::LayerNotFound { id })
    }

    pub fn find_layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    pub fn roles_of(&self, id: LayerId) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| {
                self.roles
                    .get(role)
                    .map(|layers| layers.contains(&id))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn layers_of(&self, role: Role) -> impl Iterator<Item = &Layer> {
        self.roles
            .get(&role)
            .into_iter()
            .flatten()
            .filter_map(|id| self.get_layer(*id).ok())
    }
}
