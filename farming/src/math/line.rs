use crate::math::Cell;

/// Cells of the integer line between `start` and `end`, both inclusive.
pub fn rasterize_line(start: Cell, end: Cell) -> Vec<Cell> {
    let (mut x, mut y) = (start[0] as i64, start[1] as i64);
    let w = end[0] as i64 - x;
    let h = end[1] as i64 - y;
    let dx1 = w.signum();
    let dy1 = h.signum();
    let mut dx2 = w.signum();
    let mut dy2 = 0;
    let mut longest = w.abs();
    let mut shortest = h.abs();
    if longest <= shortest {
        longest = h.abs();
        shortest = w.abs();
        dy2 = h.signum();
        dx2 = 0;
    }
    let mut result = Vec::with_capacity(longest.min(256) as usize + 1);
    let mut numerator = longest >> 1;
    for _ in 0..=longest {
        // stays between start and end, so always fits a cell
        result.push([x as i32, y as i32]);
        numerator += shortest;
        if numerator >= longest {
            numerator -= longest;
            x += dx1;
            y += dy1;
        } else {
            x += dx2;
            y += dy2;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_line() {
        assert_eq!(
            rasterize_line([0, 0], [3, 0]),
            vec![[0, 0], [1, 0], [2, 0], [3, 0]]
        );
    }

    #[test]
    fn test_negative_diagonal_line() {
        assert_eq!(
            rasterize_line([0, 0], [-2, -2]),
            vec![[0, 0], [-1, -1], [-2, -2]]
        );
    }

    #[test]
    fn test_line_at_extreme_coordinates() {
        let line = rasterize_line([i32::MAX - 1, 0], [i32::MAX, 0]);
        assert_eq!(line, vec![[i32::MAX - 1, 0], [i32::MAX, 0]]);
        let line = rasterize_line([i32::MIN, 5], [i32::MIN + 2, 5]);
        assert_eq!(line.last(), Some(&[i32::MIN + 2, 5]));
    }

    #[test]
    fn test_single_point() {
        assert_eq!(rasterize_line([5, -1], [5, -1]), vec![[5, -1]]);
    }

    #[test]
    fn test_steep_line_ends_at_target() {
        let line = rasterize_line([0, 0], [1, 4]);
        assert_eq!(line.len(), 5);
        assert_eq!(line.first(), Some(&[0, 0]));
        assert_eq!(line.last(), Some(&[1, 4]));
    }
}
