use std::collections::HashSet;

use crate::math::{rasterize_line, Cell, CellMath, DistanceMetric};
use crate::tooling::{RectPivot, Shape, Targeting};

impl Targeting {
    /// Cells affected by a tool used from `origin` towards `cursor`.
    pub fn get_cells(&self, origin: Cell, cursor: Cell, range: i32, metric: DistanceMetric) -> HashSet<Cell> {
        let mut cells: HashSet<Cell> = self
            .shape
            .cells(origin, cursor)
            .into_iter()
            .filter(|cell| !self.respect_range || origin.in_range(*cell, range, metric))
            .collect();
        if self.include_cursor {
            cells.insert(cursor);
        }
        cells
    }
}

impl Shape {
    pub fn cells(&self, origin: Cell, cursor: Cell) -> Vec<Cell> {
        match *self {
            Shape::SingleCell => vec![cursor],
            Shape::Line { include_origin } => {
                let start = if include_origin {
                    origin
                } else {
                    origin.step_towards(cursor)
                };
                rasterize_line(start, cursor)
            }
            Shape::Cross {
                radius,
                include_center,
            } => {
                let mut cells = vec![];
                if include_center {
                    cells.push(cursor);
                }
                for i in 1..=radius.max(0) {
                    cells.push(cursor.offset(i, 0));
                    cells.push(cursor.offset(-i, 0));
                    cells.push(cursor.offset(0, i));
                    cells.push(cursor.offset(0, -i));
                }
                cells
            }
            Shape::Rect {
                width,
                height,
                pivot,
                align_to_axis,
            } => {
                let [_, vertical] = origin.dominant_axis(cursor);
                let (mut width, mut height) = (width.max(1), height.max(1));
                if align_to_axis && vertical != 0 {
                    std::mem::swap(&mut width, &mut height);
                }
                let [x, y] = match pivot {
                    RectPivot::Cursor => cursor,
                    RectPivot::Origin => origin,
                    RectPivot::CenteredOnCursor => cursor.offset(-(width / 2), -(height / 2)),
                };
                let mut cells = vec![];
                for dy in 0..height {
                    for dx in 0..width {
                        cells.push([x, y].offset(dx, dy));
                    }
                }
                cells
            }
        }
    }
}
