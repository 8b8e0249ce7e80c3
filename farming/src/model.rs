use serde::{Deserialize, Serialize};

use crate::collections::{Dictionary, Shared};
use crate::math::{Position, VectorMath};
use crate::planting::{GrowthKey, GrowthKind};
use crate::tiling::RoleRule;
use crate::tooling::{ToolKey, ToolKind};

#[derive(Default)]
pub struct Knowledge {
    pub items: Dictionary<ItemKey, ItemKind>,
    pub tools: Dictionary<ToolKey, ToolKind>,
    pub growths: Dictionary<GrowthKey, GrowthKind>,
    pub rules: Vec<Shared<RoleRule>>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct ItemKey(pub usize);

#[derive(Debug)]
pub struct ItemKind {
    pub id: ItemKey,
    pub name: String,
    pub category: ItemCategory,
    pub harvest: Option<HarvestMethod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Tool,
    Seed,
    Crop,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarvestMethod {
    Hand,
    Scythe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct EntityId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Tree,
    Ore,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityView {
    pub id: EntityId,
    pub category: EntityCategory,
    pub position: Position,
}

/// Overlap queries against world entities owned by the host physics.
pub trait EntityProbe {
    fn overlap(&self, point: Position, radius: f32) -> Vec<EntityView>;
}

/// Plain list of entities, for hosts without spatial indexing.
#[derive(Default)]
pub struct Entities {
    pub entities: Vec<EntityView>,
}

impl EntityProbe for Entities {
    fn overlap(&self, point: Position, radius: f32) -> Vec<EntityView> {
        self.entities
            .iter()
            .filter(|entity| entity.position.distance(point) <= radius)
            .copied()
            .collect()
    }
}
