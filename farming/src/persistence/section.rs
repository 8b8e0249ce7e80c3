use serde::{Deserialize, Serialize};

use crate::cultivating::ValueType;
use crate::math::Cell;

pub const SECTION_VERSION: u32 = 1;

/// Save section document of grid properties, one snapshot per grid path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSection {
    pub version: u32,
    pub grids: Vec<GridSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub path: String,
    pub cells: Vec<CellSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub coord: Cell,
    pub entries: Vec<EntrySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: ValueType,
    pub value: String,
}
