//! Even-odd point-in-polygon test.
//!
//! # Algorithm
//!
//! For a cell at `(col, row)`, cast a horizontal ray towards +x and walk the
//! polygon edges `(v[i], v[j])`, where `j` is the vertex before `i` (wrapping
//! from the last vertex to the first). An edge toggles `inside` when:
//!
//! 1. exactly one endpoint has `y > row`, and
//! 2. `col` is left of the edge's x at that row:
//!    `v[j].x + (row - v[j].y) * (v[i].x - v[j].x) / (v[i].y - v[j].y)`
//!
//! Horizontal edges are skipped before the division; they can never satisfy
//! (1), so skipping them only makes the divisor-is-nonzero invariant explicit.
//!
//! # Boundary convention
//!
//! For an axis-aligned rectangle the low edges are inclusive and the high
//! edges exclusive: `(0,0)-(3,0)-(3,3)-(0,3)` contains exactly the cells with
//! `col` and `row` in `0..3`.

use crate::error::{GridError, Result};
use crate::types::Point;

/// How the x of an edge crossing is computed.
///
/// The two modes only disagree when the crossing is not an integer and the
/// interpolated offset is positive: truncation rounds it down, which drops the
/// cell sitting just left of the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Floating-point crossing; a cell is inside when its column is strictly
    /// left of the true edge position.
    #[default]
    Exact,
    /// Integer division truncating toward zero.
    Truncating,
}

/// A borrowed, validated polygon.
#[derive(Debug, Clone, Copy)]
pub struct Polygon<'a> {
    vertices: &'a [Point],
    interpolation: Interpolation,
}

impl<'a> Polygon<'a> {
    /// Wrap a vertex list. At least three vertices are required.
    pub fn new(vertices: &'a [Point], interpolation: Interpolation) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GridError::TooFewVertices(vertices.len()));
        }
        Ok(Self {
            vertices,
            interpolation,
        })
    }

    /// Test whether the cell at `(col, row)` lies inside.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;

        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            j = i;

            if vi.y == vj.y {
                continue;
            }
            if (vi.y > row) == (vj.y > row) {
                continue;
            }
            if self.left_of_edge(col, row, vi, vj) {
                inside = !inside;
            }
        }

        inside
    }

    /// `vi.y != vj.y` is guaranteed by the caller.
    ///
    /// Differences are taken after widening: any `i32` vertex is valid, and a
    /// product of two `i32` spans needs more than 64 bits.
    #[inline]
    fn left_of_edge(&self, col: i32, row: i32, vi: Point, vj: Point) -> bool {
        match self.interpolation {
            Interpolation::Exact => {
                let dy = f64::from(vi.y) - f64::from(vj.y);
                let dx = f64::from(vi.x) - f64::from(vj.x);
                let x = f64::from(vj.x) + (f64::from(row) - f64::from(vj.y)) * dx / dy;
                f64::from(col) < x
            }
            Interpolation::Truncating => {
                let dy = i128::from(vi.y) - i128::from(vj.y);
                let dx = i128::from(vi.x) - i128::from(vj.x);
                let offset = (i128::from(row) - i128::from(vj.y)) * dx / dy;
                i128::from(col) < i128::from(vj.x) + offset
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    fn inside_cells(polygon: &Polygon, width: i32, height: i32) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        for row in 0..height {
            for col in 0..width {
                if polygon.contains(col, row) {
                    cells.push((col, row));
                }
            }
        }
        cells
    }

    #[test]
    fn test_too_few_vertices() {
        let two = points(&[(0, 0), (3, 3)]);
        assert!(matches!(
            Polygon::new(&two, Interpolation::Exact),
            Err(GridError::TooFewVertices(2))
        ));
        assert!(matches!(
            Polygon::new(&[], Interpolation::Exact),
            Err(GridError::TooFewVertices(0))
        ));
    }

    #[test]
    fn test_rectangle_boundaries() {
        let square = points(&[(0, 0), (3, 0), (3, 3), (0, 3)]);
        let polygon = Polygon::new(&square, Interpolation::Exact).unwrap();

        // Low edges inclusive
        assert!(polygon.contains(0, 1));
        assert!(polygon.contains(1, 0));
        // High edges exclusive
        assert!(!polygon.contains(3, 1));
        assert!(!polygon.contains(1, 3));
        // Corners
        assert!(polygon.contains(0, 0));
        assert!(!polygon.contains(3, 0));
        assert!(!polygon.contains(3, 3));
        assert!(!polygon.contains(0, 3));
        // Just past the low edges
        assert!(!polygon.contains(-1, 1));
        assert!(!polygon.contains(1, -1));
    }

    #[test]
    fn test_rectangle_cell_set() {
        let square = points(&[(0, 0), (3, 0), (3, 3), (0, 3)]);
        for mode in [Interpolation::Exact, Interpolation::Truncating] {
            let polygon = Polygon::new(&square, mode).unwrap();
            let expected: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (c, r))).collect();
            assert_eq!(inside_cells(&polygon, 5, 5), expected);
        }
    }

    #[test]
    #[rustfmt::skip]
    fn test_triangle_cell_set() {
        let triangle = points(&[(0, 0), (4, 0), (0, 4)]);
        let polygon = Polygon::new(&triangle, Interpolation::Exact).unwrap();

        let expected = vec![
            (0, 0), (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1),
            (0, 2), (1, 2),
            (0, 3),
        ];
        assert_eq!(inside_cells(&polygon, 5, 5), expected);
    }

    #[test]
    fn test_winding_order_irrelevant() {
        let cw = points(&[(0, 0), (4, 0), (0, 4)]);
        let ccw = points(&[(0, 4), (4, 0), (0, 0)]);
        let a = Polygon::new(&cw, Interpolation::Exact).unwrap();
        let b = Polygon::new(&ccw, Interpolation::Exact).unwrap();
        assert_eq!(inside_cells(&a, 5, 5), inside_cells(&b, 5, 5));
    }

    #[test]
    fn test_truncation_drops_cells_left_of_slanted_edge() {
        // Diagonal edge x = 5y/3 is non-integral at rows 1 and 2.
        let triangle = points(&[(0, 0), (5, 3), (0, 3)]);

        let exact = Polygon::new(&triangle, Interpolation::Exact).unwrap();
        assert_eq!(
            inside_cells(&exact, 5, 5),
            vec![(0, 1), (1, 1), (0, 2), (1, 2), (2, 2), (3, 2)]
        );

        let truncating = Polygon::new(&triangle, Interpolation::Truncating).unwrap();
        assert_eq!(
            inside_cells(&truncating, 5, 5),
            vec![(0, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_negative_offset_truncation_agrees() {
        // x = 5 - 5y/3: truncation toward zero rounds up, which matches the
        // strict comparison for integer columns.
        let triangle = points(&[(0, 0), (5, 0), (0, 3)]);
        let exact = Polygon::new(&triangle, Interpolation::Exact).unwrap();
        let truncating = Polygon::new(&triangle, Interpolation::Truncating).unwrap();
        assert_eq!(inside_cells(&exact, 6, 4), inside_cells(&truncating, 6, 4));
    }

    #[test]
    fn test_concave_polygon() {
        // U shape: notch covers cols 2..4 on rows 0..3
        let u = points(&[(0, 0), (2, 0), (2, 3), (4, 3), (4, 0), (6, 0), (6, 5), (0, 5)]);
        let polygon = Polygon::new(&u, Interpolation::Exact).unwrap();

        assert!(polygon.contains(1, 1));
        assert!(!polygon.contains(2, 1));
        assert!(!polygon.contains(3, 2));
        assert!(polygon.contains(4, 1));
        assert!(polygon.contains(3, 3));
        assert!(polygon.contains(5, 4));
    }

    #[test]
    fn test_extreme_vertices_do_not_overflow() {
        // Spike reaching up to i32::MIN covers the whole 5x5 grid
        let spike = points(&[(0, i32::MIN), (10, 100), (-10, 100)]);
        // Rectangle spanning the full i32 range
        let huge = points(&[
            (i32::MIN, i32::MIN),
            (i32::MAX, i32::MIN),
            (i32::MAX, i32::MAX),
            (i32::MIN, i32::MAX),
        ]);

        for mode in [Interpolation::Exact, Interpolation::Truncating] {
            let polygon = Polygon::new(&spike, mode).unwrap();
            assert_eq!(inside_cells(&polygon, 5, 5).len(), 25, "{mode:?}");

            let polygon = Polygon::new(&huge, mode).unwrap();
            assert_eq!(inside_cells(&polygon, 5, 5).len(), 25, "{mode:?}");
        }
    }

    #[test]
    fn test_vertices_outside_grid() {
        let big = points(&[(-10, -10), (10, -10), (10, 10), (-10, 10)]);
        let polygon = Polygon::new(&big, Interpolation::Truncating).unwrap();
        assert_eq!(inside_cells(&polygon, 4, 4).len(), 16);
    }
}
