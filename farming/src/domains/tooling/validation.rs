use std::collections::HashSet;

use crate::math::Cell;

/// Per-cell verdict of a tool action. Accepted only when at least one
/// cell is valid and none is invalid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    pub valid: HashSet<Cell>,
    pub invalid: HashSet<Cell>,
    pub reason: Option<String>,
}

impl Validation {
    #[inline]
    pub fn accept(&mut self, cell: Cell) {
        self.valid.insert(cell);
    }

    #[inline]
    pub fn reject(&mut self, cell: Cell) {
        self.invalid.insert(cell);
    }

    pub fn judge(&mut self, cell: Cell, valid: bool) {
        if valid {
            self.accept(cell)
        } else {
            self.reject(cell)
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.valid.is_empty() && self.invalid.is_empty()
    }

    pub fn finish(mut self, reason: &str) -> Self {
        if !self.is_valid() {
            self.reason = Some(reason.to_string());
        }
        self
    }

    pub fn rejected(cells: &HashSet<Cell>, reason: &str) -> Self {
        Self {
            valid: HashSet::new(),
            invalid: cells.clone(),
            reason: Some(reason.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_invalid_cell_rejects_everything() {
        let mut validation = Validation::default();
        validation.accept([0, 0]);
        validation.accept([1, 0]);
        validation.reject([2, 0]);
        let validation = validation.finish("Blocked.");
        assert!(!validation.is_valid());
        assert_eq!(validation.reason.as_deref(), Some("Blocked."));
    }

    #[test]
    fn test_empty_target_is_not_valid() {
        let validation = Validation::default().finish("Nothing.");
        assert!(!validation.is_valid());
    }
}
