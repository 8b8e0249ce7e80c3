use std::collections::HashSet;

use crate::math::Cell;
use crate::tiling::{Preview, PreviewMark, Tiling, TilingDomain};

impl TilingDomain {
    fn preview_mut(&mut self) -> &mut Preview {
        let name = &self.preview_name;
        self.preview.get_or_insert_with(|| Preview {
            name: name.clone(),
            painted: Default::default(),
        })
    }

    /// Replaces preview marks with given sets, erasing stale marks first.
    pub fn paint_preview(&mut self, valid: &HashSet<Cell>, invalid: &HashSet<Cell>) -> Vec<Tiling> {
        let preview = self.preview_mut();
        let mut events = vec![];
        let mut stale: Vec<Cell> = preview
            .painted
            .keys()
            .filter(|cell| !valid.contains(*cell) && !invalid.contains(*cell))
            .copied()
            .collect();
        stale.sort();
        for cell in stale {
            preview.painted.remove(&cell);
            events.push(Tiling::PreviewPainted { cell, mark: None });
        }
        let marks = valid
            .iter()
            .map(|cell| (*cell, PreviewMark::Valid))
            .chain(invalid.iter().map(|cell| (*cell, PreviewMark::Invalid)));
        for (cell, mark) in marks {
            if preview.painted.insert(cell, mark) != Some(mark) {
                events.push(Tiling::PreviewPainted {
                    cell,
                    mark: Some(mark),
                });
            }
        }
        events
    }

    pub fn clear_preview(&mut self) -> Vec<Tiling> {
        let preview = match self.preview.as_mut() {
            Some(preview) => preview,
            None => return vec![],
        };
        let mut cells: Vec<Cell> = preview.painted.drain().map(|(cell, _)| cell).collect();
        cells.sort();
        cells
            .into_iter()
            .map(|cell| Tiling::PreviewPainted { cell, mark: None })
            .collect()
    }
}
