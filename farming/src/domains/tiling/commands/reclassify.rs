use log::debug;

use crate::tiling::{classify, Preview, Tiling, TilingDomain};

impl TilingDomain {
    /// Rebuilds role index from registered layers. Preview overlay is
    /// created on first classification and reused afterwards.
    pub fn reclassify(&mut self) -> Vec<Tiling> {
        self.roles = classify(&self.layers, &self.rules);
        if self.preview.is_none() {
            debug!("Create preview layer {}", self.preview_name);
            self.preview = Some(Preview {
                name: self.preview_name.clone(),
                painted: Default::default(),
            });
        }
        let roles = self
            .layers
            .iter()
            .map(|layer| (layer.id, self.roles_of(layer.id)))
            .collect();
        vec![Tiling::LayersClassified { roles }]
    }
}
