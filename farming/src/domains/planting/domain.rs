use serde::{Deserialize, Serialize};

use crate::model::ItemKey;
use crate::tiling::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthKey(pub usize);

/// Staged growth of a seed item into a harvest result.
#[derive(Debug)]
pub struct GrowthKind {
    pub id: GrowthKey,
    pub name: String,
    pub seed: ItemKey,
    pub result: ItemKey,
    pub steps: Vec<GrowthStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthStep {
    pub tile: Tile,
    #[serde(default)]
    pub needs: Vec<GrowthNeed>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthNeed {
    #[serde(rename = "type")]
    pub kind: NeedKind,
    #[serde(default)]
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeedKind {
    None,
    Watering,
    ElapsedDays,
    #[serde(other)]
    Unsupported,
}

impl NeedKind {
    pub fn label(self) -> &'static str {
        match self {
            NeedKind::None => "None",
            NeedKind::Watering => "Watering",
            NeedKind::ElapsedDays => "Elapsed days",
            NeedKind::Unsupported => "Unsupported",
        }
    }
}

impl GrowthKind {
    /// Negative thresholds of authored content are treated as zero.
    pub fn normalize(mut self) -> Self {
        for step in self.steps.iter_mut() {
            for need in step.needs.iter_mut() {
                need.value = need.value.max(0);
            }
        }
        self
    }

    pub fn get_step(&self, step: usize) -> Result<&GrowthStep, PlantingError> {
        self.steps.get(step).ok_or(PlantingError::StepOutOfRange {
            growth: self.id,
            step,
        })
    }

    pub fn is_final(&self, step: usize) -> bool {
        !self.steps.is_empty() && step + 1 >= self.steps.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantingError {
    StepOutOfRange { growth: GrowthKey, step: usize },
    NoSteps { growth: GrowthKey },
}
