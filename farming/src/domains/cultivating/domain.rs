use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::collections::Sequence;
use crate::math::Cell;
use crate::model::ItemKey;
use crate::persistence::DirtyTracker;

#[derive(Default)]
pub struct CultivatingDomain {
    pub grids_id: Sequence,
    pub grids: Vec<GridState>,
    pub tracker: DirtyTracker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct GridId(pub usize);

pub type Properties = HashMap<Key, Value>;

/// Sparse per-cell property bags of one map grid.
#[derive(Debug, Clone)]
pub struct GridState {
    pub id: GridId,
    pub path: String,
    pub cells: HashMap<Cell, Properties>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    Tilled,
    Watered,
    WetUntil,
    WetPreviousRole,
    WetCount,
    SeedItem,
    SeedStep,
    SeedStartDate,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::Tilled,
        Key::Watered,
        Key::WetUntil,
        Key::WetPreviousRole,
        Key::WetCount,
        Key::SeedItem,
        Key::SeedStep,
        Key::SeedStartDate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Key::Tilled => "tilled",
            Key::Watered => "watered",
            Key::WetUntil => "wet_until",
            Key::WetPreviousRole => "wet_previous_role",
            Key::WetCount => "wet_count",
            Key::SeedItem => "seed_item",
            Key::SeedStep => "seed_step",
            Key::SeedStartDate => "seed_start_date",
        }
    }

    pub fn parse(name: &str) -> Option<Key> {
        Key::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn hint(self) -> ValueType {
        match self {
            Key::Tilled | Key::Watered => ValueType::Bool,
            Key::WetUntil | Key::WetCount | Key::SeedItem | Key::SeedStep => ValueType::Int,
            Key::WetPreviousRole | Key::SeedStartDate => ValueType::String,
        }
    }
}

/// Live cell value. Flags are kept as 0/1 integers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f32),
    Text(String),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Bool,
    Int,
    Float,
    String,
    Composite,
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Cultivating {
    GridCreated {
        grid: GridId,
        path: String,
    },
    CellTilled {
        grid: GridId,
        cell: Cell,
    },
    CellWatered {
        grid: GridId,
        cell: Cell,
        until: i64,
        count: i64,
    },
    CellDried {
        grid: GridId,
        cell: Cell,
    },
    SeedPlanted {
        grid: GridId,
        cell: Cell,
        item: ItemKey,
    },
    SeedStepChanged {
        grid: GridId,
        cell: Cell,
        step: usize,
    },
    SeedCleared {
        grid: GridId,
        cell: Cell,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CultivatingError {
    GridNotFound { id: GridId },
    SeedAlreadyPlanted { grid: GridId, cell: Cell },
    SeedNotPlanted { grid: GridId, cell: Cell },
}
