use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::collections::Shared;
use crate::cultivating::GridId;
use crate::math::{Cell, DistanceMetric, Position};
use crate::model::{EntityId, ItemKey};
use crate::tiling::{Role, RoleMask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct ToolKey(pub usize);

#[derive(Debug)]
pub struct ToolKind {
    pub id: ToolKey,
    pub name: String,
    pub range: i32,
    pub metric: DistanceMetric,
    pub targeting: Targeting,
    pub action: ToolAction,
    pub read_roles: RoleMask,
    pub block_roles: RoleMask,
    pub write_role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Targeting {
    pub shape: Shape,
    #[serde(default = "enabled")]
    pub respect_range: bool,
    #[serde(default = "enabled")]
    pub include_cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    SingleCell,
    Line {
        #[serde(default)]
        include_origin: bool,
    },
    Cross {
        radius: i32,
        #[serde(default = "enabled")]
        include_center: bool,
    },
    Rect {
        width: i32,
        height: i32,
        #[serde(default)]
        pivot: RectPivot,
        #[serde(default = "enabled")]
        align_to_axis: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectPivot {
    Cursor,
    Origin,
    CenteredOnCursor,
}

impl Default for RectPivot {
    fn default() -> Self {
        Self::CenteredOnCursor
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolAction {
    Hoe,
    Water {
        duration: f32,
        #[serde(default)]
        mode: DurationMode,
    },
    Seed,
    HandHarvest,
    Sickle,
    Axe {
        #[serde(default = "single_damage")]
        damage: i32,
    },
    PickAxe {
        #[serde(default = "single_damage")]
        damage: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationMode {
    Refresh,
    Extend,
}

impl Default for DurationMode {
    fn default() -> Self {
        Self::Refresh
    }
}

fn enabled() -> bool {
    true
}

fn single_damage() -> i32 {
    1
}

/// Snapshot of one targeting pass. Never mutated after validation.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub grid: GridId,
    pub origin: Cell,
    pub cursor: Cell,
    pub tool: Shared<ToolKind>,
    pub item: Option<ItemKey>,
    pub cells: HashSet<Cell>,
}

impl ToolContext {
    /// Target cells in stable row-major order.
    pub fn ordered_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_by_key(|[x, y]| (*y, *x));
        cells
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerInput {
    pub origin: Cell,
    pub cursor: Cell,
    pub animating: bool,
    pub moving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub enum ToolState {
    Idle,
    HandHarvestCandidate,
    EquippedToolCandidate,
    Invalid,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Tooling {
    ToolEquipped {
        tool: ToolKey,
        item: ItemKey,
    },
    ToolUnequipped,
    CandidateChanged {
        state: ToolState,
    },
    DropSpawned {
        item: ItemKey,
        quantity: u32,
        position: Position,
    },
    DamageReported {
        entity: EntityId,
        damage: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolingError {
    NoCandidate,
    CandidateIsSeed,
    CandidateIsNotSeed,
    SeedNotHeld,
}
