use datamap::Storage;
pub use domains::*;
use log::{info, warn};

use crate::api::{ActionError, Event};
use crate::config::SimulationConfig;
use crate::cultivating::{CultivatingDomain, GridId};
use crate::decaying::DecayingDomain;
use crate::model::{Entities, EntityProbe, Knowledge};
use crate::persistence::{Envelope, SaveContributor, SaveError};
use crate::tiling::{Layer, TilingDomain};
use crate::timing::TimingDomain;
use crate::tooling::ToolController;

mod actions;
mod control;
pub mod api;
pub mod collections;
pub mod config;
pub mod data;
mod domains;
mod growth;
mod loading;
pub mod math;
pub mod model;
pub mod persistence;
mod rules;
mod update;

pub struct Game {
    pub config: SimulationConfig,
    pub known: Knowledge,
    pub timing: TimingDomain,
    pub tiling: TilingDomain,
    pub cultivating: CultivatingDomain,
    pub decaying: DecayingDomain,
    pub controller: ToolController,
    pub saving: SaveContributor,
    /// Grid of the currently entered map.
    pub map: Option<GridId>,
    probe: Box<dyn EntityProbe>,
    storage: Storage,
}

impl Game {
    pub fn new(storage: Storage, config: SimulationConfig) -> Self {
        Self {
            known: Knowledge::default(),
            timing: TimingDomain::new(config.game_seconds_per_real_second, config.start_date),
            tiling: TilingDomain::new(vec![], config.preview_layer.clone()),
            cultivating: CultivatingDomain::default(),
            decaying: DecayingDomain::new(config.decay_check_interval),
            controller: ToolController::default(),
            saving: SaveContributor::new(&config.save_section),
            map: None,
            probe: Box::new(Entities::default()),
            storage,
            config,
        }
    }

    pub fn set_probe(&mut self, probe: Box<dyn EntityProbe>) {
        self.probe = probe;
    }

    /// Starts fresh per-map state: layers are registered and classified,
    /// saved grid properties restored and repainted, wet cells scheduled
    /// for drying and planted seeds given one chance to grow.
    pub fn enter_map(&mut self, path: &str, layers: Vec<Layer>) -> Result<Vec<Event>, ActionError> {
        info!("Begin map {} loading", path);
        self.leave_map();
        let mut events = vec![];
        for layer in layers {
            let register = self.tiling.register_layer(layer)?;
            events.extend(occur![register()]);
        }
        events.extend(occur![self.tiling.reclassify()]);
        let (grid, create) = self.cultivating.create_grid(path)?;
        events.extend(occur![create()]);
        self.map = Some(grid);
        self.saving.update_to_grid(self.cultivating.get_grid_mut(grid)?);
        events.extend(self.rearm_decay(grid)?);
        events.extend(self.redraw_grid(grid)?);
        events.extend(self.grow_seeds());
        info!("End map {} loading", path);
        Ok(events)
    }

    /// Drops per-map state. Uncaptured changes are lost.
    pub fn leave_map(&mut self) {
        if !self.cultivating.tracker.is_clean() {
            warn!("Leave map with uncaptured grid changes");
        }
        self.tiling = TilingDomain::new(self.known.rules.clone(), self.config.preview_layer.clone());
        self.cultivating = CultivatingDomain::default();
        self.decaying = DecayingDomain::new(self.config.decay_check_interval);
        self.controller.forget();
        self.map = None;
    }

    pub fn capture(&mut self, envelope: &mut Envelope) -> Result<(), SaveError> {
        self.saving.capture(
            &self.cultivating.grids,
            &mut self.cultivating.tracker,
            envelope,
        )
    }

    pub fn restore(&mut self, envelope: &Envelope) -> Result<(), SaveError> {
        self.saving.restore(envelope)
    }

    pub fn clear_accumulated(&mut self) {
        self.saving.clear_accumulated();
    }

    pub fn save_game(&mut self) -> Result<(), SaveError> {
        let mut envelope = Envelope::load(&self.storage)?;
        self.capture(&mut envelope)?;
        envelope.store(&self.storage)
    }

    pub fn load_game(&mut self) -> Result<(), SaveError> {
        let envelope = Envelope::load(&self.storage)?;
        self.restore(&envelope)
    }
}
