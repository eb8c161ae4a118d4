//! Pattern module - immutable boolean-matrix match patterns
//!
//! A pattern is authored as rows of booleans (external tooling concern) and
//! stored here as the ordered list of `(dx, dy)` offsets for every `true`
//! entry, plus the matrix bounding box for fast rejection against grid
//! bounds. Offsets are non-negative by construction: patterns only extend
//! rightward/downward from their anchor.

use crate::types::{Coord, EngineError};

/// An immutable match pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: i32,
    height: i32,
    offsets: Vec<Coord>,
}

impl Pattern {
    /// Build a pattern from a rectangular boolean matrix.
    ///
    /// Offsets are collected in row-major order; this order defines both
    /// the scanner's short-circuit order and the cell order inside an
    /// occurrence.
    ///
    /// Fails with `MalformedPattern` when rows have unequal lengths, when
    /// the matrix has no rows or no columns, or when no entry is `true`
    /// (a degenerate pattern that would match every anchor).
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(EngineError::MalformedPattern {
                reason: "pattern matrix is empty",
            });
        }

        let mut offsets = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(EngineError::MalformedPattern {
                    reason: "rows have unequal lengths",
                });
            }
            for (x, &marked) in row.iter().enumerate() {
                if marked {
                    offsets.push((x as i32, y as i32));
                }
            }
        }

        if offsets.is_empty() {
            return Err(EngineError::MalformedPattern {
                reason: "pattern has no marked cells",
            });
        }

        Ok(Self {
            width: width as i32,
            height: height as i32,
            offsets,
        })
    }

    /// Matrix width (bounding box).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Matrix height (bounding box).
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Ordered `(dx, dy)` offsets that must all be marked for a match.
    pub fn offsets(&self) -> &[Coord] {
        &self.offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_row_major() {
        // X.X
        // .X.
        let pattern = Pattern::from_rows(&[
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();

        assert_eq!(pattern.width(), 3);
        assert_eq!(pattern.height(), 2);
        assert_eq!(pattern.offsets(), &[(0, 0), (2, 0), (1, 1)]);
    }

    #[test]
    fn test_horizontal_pair() {
        let pattern = Pattern::from_rows(&[vec![true, true]]).unwrap();
        assert_eq!(pattern.offsets(), &[(0, 0), (1, 0)]);
        assert_eq!((pattern.width(), pattern.height()), (2, 1));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Pattern::from_rows(&[vec![true, true], vec![true]]).unwrap_err();
        assert_eq!(
            err,
            EngineError::MalformedPattern {
                reason: "rows have unequal lengths"
            }
        );
    }

    #[test]
    fn test_rejects_empty_matrix() {
        assert!(Pattern::from_rows(&[]).is_err());
        assert!(Pattern::from_rows(&[vec![]]).is_err());
    }

    #[test]
    fn test_rejects_all_false_matrix() {
        let err = Pattern::from_rows(&[vec![false, false]]).unwrap_err();
        assert_eq!(
            err,
            EngineError::MalformedPattern {
                reason: "pattern has no marked cells"
            }
        );
    }
}
