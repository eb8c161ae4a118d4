//! Scanner module - enumerates pattern occurrences on the grid
//!
//! A full-grid scan runs after every user toggle. Anchors are visited with
//! x as the outer loop and y as the inner loop, patterns in caller order,
//! and offsets in pattern order; this fixed traversal is what makes
//! occurrence discovery (and therefore scoring and animation order)
//! deterministic, so it must not be "optimized" into another order.
//!
//! The scanner reports every independent occurrence, including overlapping
//! ones and multiple patterns on the same anchor. Overlap resolution is the
//! sequencer's job. Each call is a fresh O(size² × patterns × pattern area)
//! pass with no cached state, which is fine for small interactive grids and
//! a known scaling limit beyond that.

use crate::grid::Grid;
use crate::pattern::Pattern;
use crate::types::Coord;

/// One verified (pattern, anchor) match on the current grid.
///
/// Produced transiently per scan pass; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOccurrence {
    /// Index into the caller's pattern list.
    pub pattern: usize,
    /// Grid coordinate the pattern offsets are relative to.
    pub anchor: Coord,
    /// Absolute grid coordinates covered, in pattern-offset order.
    pub cells: Vec<Coord>,
}

/// Find every occurrence of `patterns` on `grid`, in deterministic order.
pub fn scan(grid: &Grid, patterns: &[Pattern]) -> Vec<MatchOccurrence> {
    let mut found = Vec::new();
    for x in 0..grid.size() {
        for y in 0..grid.size() {
            for (index, pattern) in patterns.iter().enumerate() {
                if let Some(cells) = match_at(grid, pattern, x, y) {
                    found.push(MatchOccurrence {
                        pattern: index,
                        anchor: (x, y),
                        cells,
                    });
                }
            }
        }
    }
    found
}

/// Test one pattern at one anchor, short-circuiting on the first offset
/// that is out of bounds or unmarked.
fn match_at(grid: &Grid, pattern: &Pattern, anchor_x: i32, anchor_y: i32) -> Option<Vec<Coord>> {
    // Bounding-box rejection: offsets are non-negative, so a pattern whose
    // box pokes past the grid edge cannot match.
    if anchor_x + pattern.width() > grid.size() || anchor_y + pattern.height() > grid.size() {
        return None;
    }

    let mut cells = Vec::with_capacity(pattern.offsets().len());
    for &(dx, dy) in pattern.offsets() {
        let (x, y) = (anchor_x + dx, anchor_y + dy);
        if !grid.is_marked(x, y) {
            return None;
        }
        cells.push((x, y));
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked_grid(size: i32, cells: &[Coord]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(x, y) in cells {
            grid.toggle(x, y).unwrap();
        }
        grid
    }

    #[test]
    fn test_single_cell_pattern_matches_each_mark_once() {
        let single = Pattern::from_rows(&[vec![true]]).unwrap();
        let grid = marked_grid(4, &[(2, 1)]);

        let found = scan(&grid, &[single]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].anchor, (2, 1));
        assert_eq!(found[0].cells, vec![(2, 1)]);
    }

    #[test]
    fn test_anchor_order_is_x_outer_y_inner() {
        let single = Pattern::from_rows(&[vec![true]]).unwrap();
        let grid = marked_grid(2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);

        let anchors: Vec<_> = scan(&grid, &[single]).into_iter().map(|o| o.anchor).collect();
        assert_eq!(anchors, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_horizontal_pair_on_3x3() {
        let pair = Pattern::from_rows(&[vec![true, true]]).unwrap();
        let grid = marked_grid(3, &[(0, 0), (1, 0)]);

        let found = scan(&grid, &[pair]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].cells, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_bounding_box_rejects_edge_anchors() {
        let pair = Pattern::from_rows(&[vec![true, true]]).unwrap();
        // Mark the right edge column; a 2-wide pattern cannot anchor there.
        let grid = marked_grid(3, &[(2, 0), (2, 1)]);
        assert!(scan(&grid, &[pair]).is_empty());
    }

    #[test]
    fn test_overlapping_occurrences_are_all_reported() {
        let pair = Pattern::from_rows(&[vec![true, true]]).unwrap();
        let grid = marked_grid(3, &[(0, 0), (1, 0), (2, 0)]);

        let found = scan(&grid, &[pair]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].cells, vec![(0, 0), (1, 0)]);
        assert_eq!(found[1].cells, vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn test_multiple_patterns_keep_list_order_per_anchor() {
        let single = Pattern::from_rows(&[vec![true]]).unwrap();
        let pair = Pattern::from_rows(&[vec![true, true]]).unwrap();
        let grid = marked_grid(3, &[(0, 0), (1, 0)]);

        let found = scan(&grid, &[single.clone(), pair.clone()]);
        // Anchor (0,0): single then pair; anchor (1,0): single only.
        let keys: Vec<_> = found.iter().map(|o| (o.anchor, o.pattern)).collect();
        assert_eq!(keys, vec![((0, 0), 0), ((0, 0), 1), ((1, 0), 0)]);

        // Reversed pattern list reverses per-anchor order.
        let found = scan(&grid, &[pair, single]);
        let keys: Vec<_> = found.iter().map(|o| (o.anchor, o.pattern)).collect();
        assert_eq!(keys, vec![((0, 0), 0), ((0, 0), 1), ((1, 0), 1)]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let patterns = vec![
            Pattern::from_rows(&[vec![true, true]]).unwrap(),
            Pattern::from_rows(&[vec![true], vec![true]]).unwrap(),
        ];
        let grid = marked_grid(4, &[(0, 0), (1, 0), (0, 1), (3, 3)]);

        let first = scan(&grid, &patterns);
        let second = scan(&grid, &patterns);
        assert_eq!(first, second);
    }
}
