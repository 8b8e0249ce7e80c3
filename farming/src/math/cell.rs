use serde::{Deserialize, Serialize};

use crate::math::VectorMath;

/// Integer coordinate on the map grid.
pub type Cell = [i32; 2];

/// World space position, one unit per cell.
pub type Position = [f32; 2];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub enum DistanceMetric {
    Manhattan,
    Chebyshev,
    Euclidean,
}

impl Default for DistanceMetric {
    fn default() -> Self {
        Self::Manhattan
    }
}

pub trait CellMath {
    fn offset(self, dx: i32, dy: i32) -> Self;
    fn in_range(self, other: Self, range: i32, metric: DistanceMetric) -> bool;
    fn step_towards(self, other: Self) -> Self;
    fn dominant_axis(self, other: Self) -> Self;
    fn position(self) -> Position;
}

impl CellMath for Cell {
    #[inline]
    fn offset(self, dx: i32, dy: i32) -> Self {
        [self[0].saturating_add(dx), self[1].saturating_add(dy)]
    }

    fn in_range(self, other: Self, range: i32, metric: DistanceMetric) -> bool {
        let [dx, dy] = delta(self, other);
        let (dx, dy) = (dx.abs(), dy.abs());
        let range = range as i64;
        match metric {
            DistanceMetric::Manhattan => dx + dy <= range,
            DistanceMetric::Chebyshev => dx.max(dy) <= range,
            DistanceMetric::Euclidean => {
                range >= 0 && dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) <= range * range
            }
        }
    }

    #[inline]
    fn step_towards(self, other: Self) -> Self {
        let [dx, dy] = delta(self, other);
        self.offset(dx.signum() as i32, dy.signum() as i32)
    }

    /// Unit vector along the axis with the larger delta, horizontal on ties.
    fn dominant_axis(self, other: Self) -> Self {
        let [dx, dy] = delta(self, other);
        if dx.abs() >= dy.abs() {
            [if dx < 0 { -1 } else { 1 }, 0]
        } else {
            [0, dy.signum() as i32]
        }
    }

    #[inline]
    fn position(self) -> Position {
        [self[0] as f32, self[1] as f32].add([0.5, 0.5])
    }
}

/// Difference of two cells, wide enough for any pair of coordinates.
#[inline]
fn delta(from: Cell, to: Cell) -> [i64; 2] {
    [to[0] as i64 - from[0] as i64, to[1] as i64 - from[1] as i64]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_metrics_disagree_on_diagonal() {
        let origin = [0, 0];
        let diagonal = [2, 2];
        assert!(!origin.in_range(diagonal, 3, DistanceMetric::Manhattan));
        assert!(origin.in_range(diagonal, 2, DistanceMetric::Chebyshev));
        assert!(!origin.in_range(diagonal, 2, DistanceMetric::Euclidean));
        assert!(origin.in_range(diagonal, 3, DistanceMetric::Euclidean));
    }

    #[test]
    fn test_dominant_axis_prefers_horizontal_on_tie() {
        assert_eq!([0, 0].dominant_axis([-2, 2]), [-1, 0]);
        assert_eq!([0, 0].dominant_axis([1, -3]), [0, -1]);
    }

    #[test]
    fn test_extreme_coordinates() {
        let (min, max) = ([i32::MIN, i32::MIN], [i32::MAX, i32::MAX]);
        assert!(!min.in_range(max, i32::MAX, DistanceMetric::Euclidean));
        assert!(!min.in_range(max, i32::MAX, DistanceMetric::Manhattan));
        assert_eq!(min.dominant_axis(max), [1, 0]);
        assert_eq!(max.step_towards(min), [i32::MAX - 1, i32::MAX - 1]);
        assert_eq!(max.offset(1, 0), max);
    }

    #[test]
    fn test_step_towards() {
        assert_eq!([1, 1].step_towards([5, -3]), [2, 0]);
        assert_eq!([1, 1].step_towards([1, 1]), [1, 1]);
    }
}
