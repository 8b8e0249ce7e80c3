use crate::math::Cell;
use crate::tiling::{LayerId, Role, Tile};

/// Pending reversions of timed wet ground.
pub struct DecayingDomain {
    pub check_interval: f32,
    pub elapsed: f32,
    pub entries: Vec<DecayEntry>,
}

impl Default for DecayingDomain {
    fn default() -> Self {
        Self::new(0.25)
    }
}

impl DecayingDomain {
    pub fn new(check_interval: f32) -> Self {
        Self {
            check_interval,
            elapsed: 0.0,
            entries: vec![],
        }
    }

    /// At most one entry per (layer, cell), re-registration replaces it
    /// but keeps the tile covered by the first wet paint.
    pub fn register(
        &mut self,
        layer: LayerId,
        cell: Cell,
        expiry: i64,
        previous: Role,
        covered: Option<Tile>,
    ) -> Vec<Decaying> {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.layer == layer && entry.cell == cell)
        {
            Some(existing) => {
                existing.expiry = expiry;
                existing.previous = previous;
                if existing.covered.is_none() {
                    existing.covered = covered;
                }
            }
            None => self.entries.push(DecayEntry {
                layer,
                cell,
                expiry,
                previous,
                covered,
            }),
        }
        vec![Decaying::EntryRegistered {
            layer,
            cell,
            expiry,
        }]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecayEntry {
    pub layer: LayerId,
    pub cell: Cell,
    pub expiry: i64,
    pub previous: Role,
    /// Ground tile under the wet paint when the wet role shares a layer.
    pub covered: Option<Tile>,
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Decaying {
    EntryRegistered {
        layer: LayerId,
        cell: Cell,
        expiry: i64,
    },
    EntryExpired {
        layer: LayerId,
        cell: Cell,
        previous: Role,
    },
}
