use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::{error, info};

use crate::model::ItemKey;
use crate::tiling::{Role, Tile};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_decay_check_interval")]
    pub decay_check_interval: f32,

    #[serde(default = "default_game_seconds_per_real_second")]
    pub game_seconds_per_real_second: f32,

    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    #[serde(default = "default_growth_key_prefix")]
    pub growth_key_prefix: String,

    #[serde(default = "default_tool_key_prefix")]
    pub tool_key_prefix: String,

    #[serde(default = "default_seed_tool")]
    pub seed_tool: String,

    #[serde(default = "default_hand_harvest_tool")]
    pub hand_harvest_tool: String,

    #[serde(default = "default_enabled")]
    pub preview_always_show: bool,

    #[serde(default = "default_enabled")]
    pub preview_hide_when_moving: bool,

    #[serde(default = "default_preview_layer")]
    pub preview_layer: String,

    #[serde(default = "default_save_section")]
    pub save_section: String,

    #[serde(default)]
    pub tiles: RuntimeTiles,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            decay_check_interval: default_decay_check_interval(),
            game_seconds_per_real_second: default_game_seconds_per_real_second(),
            start_date: default_start_date(),
            growth_key_prefix: default_growth_key_prefix(),
            tool_key_prefix: default_tool_key_prefix(),
            seed_tool: default_seed_tool(),
            hand_harvest_tool: default_hand_harvest_tool(),
            preview_always_show: default_enabled(),
            preview_hide_when_moving: default_enabled(),
            preview_layer: default_preview_layer(),
            save_section: default_save_section(),
            tiles: RuntimeTiles::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(config) => {
                    info!("Uses {path:?}");
                    config
                }
                Err(error) => {
                    error!("Unable to parse config file, {error:?}");
                    SimulationConfig::default()
                }
            },
            _ => {
                info!("Uses default config, {path:?} not found");
                SimulationConfig::default()
            }
        }
    }

    pub fn growth_key(&self, item: ItemKey) -> String {
        format!("{}_{}", self.growth_key_prefix, item.0)
    }

    pub fn tool_key(&self, item: ItemKey) -> String {
        format!("{}_{}", self.tool_key_prefix, item.0)
    }
}

/// Tiles painted for each ground role at runtime.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RuntimeTiles {
    #[serde(default = "default_hoed_tile")]
    pub hoed: Tile,

    #[serde(default = "default_wet_tile")]
    pub wet: Tile,

    #[serde(default)]
    pub base: Option<Tile>,
}

impl Default for RuntimeTiles {
    fn default() -> Self {
        RuntimeTiles {
            hoed: default_hoed_tile(),
            wet: default_wet_tile(),
            base: None,
        }
    }
}

impl RuntimeTiles {
    pub fn tile_for(&self, role: Role) -> Option<&Tile> {
        match role {
            Role::GroundHoed => Some(&self.hoed),
            Role::GroundWet => Some(&self.wet),
            Role::GroundBase => self.base.as_ref(),
            _ => None,
        }
    }
}

fn default_decay_check_interval() -> f32 {
    0.25
}

fn default_game_seconds_per_real_second() -> f32 {
    60.0
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

fn default_growth_key_prefix() -> String {
    String::from("simulation_growth")
}

fn default_tool_key_prefix() -> String {
    String::from("simulation_tool")
}

fn default_seed_tool() -> String {
    String::from("simulation_tool_seed")
}

fn default_hand_harvest_tool() -> String {
    String::from("simulation_tool_hand")
}

fn default_enabled() -> bool {
    true
}

fn default_preview_layer() -> String {
    String::from("Preview")
}

fn default_save_section() -> String {
    String::from("simulation.gridinfo")
}

fn default_hoed_tile() -> Tile {
    String::from("hoed")
}

fn default_wet_tile() -> Tile {
    String::from("wet")
}
