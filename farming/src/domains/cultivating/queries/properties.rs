use chrono::NaiveDate;

use crate::cultivating::{GridId, GridState, Key, Value, DATE_FORMAT};
use crate::math::Cell;
use crate::model::ItemKey;

impl GridState {
    pub fn new(id: GridId, path: &str) -> Self {
        Self {
            id,
            path: path.to_string(),
            cells: Default::default(),
        }
    }

    #[inline]
    pub fn get(&self, cell: Cell, key: Key) -> Option<&Value> {
        self.cells.get(&cell).and_then(|properties| properties.get(&key))
    }

    pub fn get_int(&self, cell: Cell, key: Key) -> Option<i64> {
        match self.get(cell, key)? {
            Value::Int(value) => Some(*value),
            Value::Float(value) => Some(*value as i64),
            Value::Text(value) => value.parse().ok(),
        }
    }

    pub fn get_float(&self, cell: Cell, key: Key) -> Option<f32> {
        match self.get(cell, key)? {
            Value::Int(value) => Some(*value as f32),
            Value::Float(value) => Some(*value),
            Value::Text(value) => value.parse().ok(),
        }
    }

    pub fn get_text(&self, cell: Cell, key: Key) -> Option<String> {
        match self.get(cell, key)? {
            Value::Int(value) => Some(value.to_string()),
            Value::Float(value) => Some(value.to_string()),
            Value::Text(value) => Some(value.clone()),
        }
    }

    pub fn get_flag(&self, cell: Cell, key: Key) -> bool {
        self.get_int(cell, key).map(|value| value != 0).unwrap_or(false)
    }

    pub fn get_date(&self, cell: Cell, key: Key) -> Option<NaiveDate> {
        match self.get(cell, key)? {
            Value::Text(value) => NaiveDate::parse_from_str(value, DATE_FORMAT).ok(),
            _ => None,
        }
    }

    /// Planted item and current growth step, if both are present.
    pub fn get_seed(&self, cell: Cell) -> Option<(ItemKey, usize)> {
        let item = self.get_int(cell, Key::SeedItem)?;
        let step = self.get_int(cell, Key::SeedStep)?;
        if item <= 0 || step < 0 {
            return None;
        }
        Some((ItemKey(item as usize), step as usize))
    }

    pub fn has_seed(&self, cell: Cell) -> bool {
        self.get(cell, Key::SeedItem).is_some()
    }

    pub fn set(&mut self, cell: Cell, key: Key, value: impl Into<Value>) {
        self.cells.entry(cell).or_default().insert(key, value.into());
    }

    /// Returns whether the key was present.
    pub fn erase(&mut self, cell: Cell, key: Key) -> bool {
        let properties = match self.cells.get_mut(&cell) {
            Some(properties) => properties,
            None => return false,
        };
        let erased = properties.remove(&key).is_some();
        if properties.is_empty() {
            self.cells.remove(&cell);
        }
        erased
    }

    pub fn reset(&mut self) {
        self.cells.clear();
    }

    pub fn cells_with(&self, key: Key) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .cells
            .iter()
            .filter(|(_, properties)| properties.contains_key(&key))
            .map(|(cell, _)| *cell)
            .collect();
        cells.sort();
        cells
    }
}
