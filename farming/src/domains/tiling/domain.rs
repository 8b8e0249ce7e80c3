use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::collections::Shared;
use crate::math::Cell;

/// Opaque tile asset token understood by the host renderer.
pub type Tile = String;

pub struct TilingDomain {
    pub layers: Vec<Layer>,
    pub roles: HashMap<Role, Vec<LayerId>>,
    pub rules: Vec<Shared<RoleRule>>,
    pub preview: Option<Preview>,
    pub preview_name: String,
}

impl Default for TilingDomain {
    fn default() -> Self {
        Self::new(vec![], "preview".to_string())
    }
}

impl TilingDomain {
    pub fn new(rules: Vec<Shared<RoleRule>>, preview_name: String) -> Self {
        Self {
            layers: vec![],
            roles: HashMap::new(),
            rules,
            preview: None,
            preview_name,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub enum Role {
    GroundBase,
    GroundHoed,
    GroundWet,
    GroundGrowth,
    Blocking,
    Decor,
    Empty,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::GroundBase,
        Role::GroundHoed,
        Role::GroundWet,
        Role::GroundGrowth,
        Role::Blocking,
        Role::Decor,
        Role::Empty,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Roles whose write target falls back to the base ground layer.
    pub fn is_any_ground(self) -> bool {
        RoleMask::ANY_GROUND.contains(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::GroundBase => "GroundBase",
            Role::GroundHoed => "GroundHoed",
            Role::GroundWet => "GroundWet",
            Role::GroundGrowth => "GroundGrowth",
            Role::Blocking => "Blocking",
            Role::Decor => "Decor",
            Role::Empty => "Empty",
        }
    }

    pub fn parse(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// Set of roles, stored in content files as a list of role names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Role>", into = "Vec<Role>")]
pub struct RoleMask(u8);

impl RoleMask {
    pub const EMPTY: RoleMask = RoleMask(0);
    pub const ANY_GROUND: RoleMask = RoleMask(1 | 1 << 1 | 1 << 2);

    pub fn of(roles: &[Role]) -> Self {
        roles.iter().fold(Self::EMPTY, |mask, role| mask.with(*role))
    }

    #[inline]
    pub fn with(self, role: Role) -> Self {
        RoleMask(self.0 | role.bit())
    }

    #[inline]
    pub fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl From<Role> for RoleMask {
    fn from(role: Role) -> Self {
        RoleMask::EMPTY.with(role)
    }
}

impl From<Vec<Role>> for RoleMask {
    fn from(roles: Vec<Role>) -> Self {
        RoleMask::of(&roles)
    }
}

impl From<RoleMask> for Vec<Role> {
    fn from(mask: RoleMask) -> Self {
        mask.roles().collect()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, bincode::Encode, bincode::Decode,
)]
pub struct LayerId(pub usize);

#[derive(Debug, Clone)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub order: i32,
    pub collider: bool,
    pub tiles: HashMap<Cell, Tile>,
}

impl Layer {
    pub fn new(id: LayerId, name: &str, order: i32, collider: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            order,
            collider,
            tiles: HashMap::new(),
        }
    }

    pub fn with_tiles(mut self, cells: &[Cell], tile: &str) -> Self {
        for cell in cells {
            self.tiles.insert(*cell, tile.to_string());
        }
        self
    }

    #[inline]
    pub fn has_tile(&self, cell: Cell) -> bool {
        self.tiles.contains_key(&cell)
    }

    pub fn get_tile(&self, cell: Cell) -> Option<&Tile> {
        self.tiles.get(&cell)
    }
}

/// Overlay marks of the target preview, never classified by role rules.
#[derive(Debug, Default)]
pub struct Preview {
    pub name: String,
    pub painted: HashMap<Cell, PreviewMark>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub enum PreviewMark {
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColliderRequirement {
    Any,
    Require,
    Forbid,
}

#[derive(Debug, Clone)]
pub struct RoleRule {
    pub id: usize,
    pub role: Role,
    pub name_pattern: Option<Regex>,
    pub order_range: Option<[i32; 2]>,
    pub collider: ColliderRequirement,
    pub weight: u32,
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Tiling {
    LayerRegistered {
        layer: LayerId,
        name: String,
    },
    LayerUnregistered {
        layer: LayerId,
    },
    LayersClassified {
        roles: Vec<(LayerId, Vec<Role>)>,
    },
    TilePainted {
        layer: LayerId,
        cell: Cell,
        tile: Option<Tile>,
    },
    PreviewPainted {
        cell: Cell,
        mark: Option<PreviewMark>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    LayerNotFound { id: LayerId },
    LayerAlreadyRegistered { id: LayerId },
    ReservedLayerName { name: String },
    WriteTargetNotFound { role: Role },
}
