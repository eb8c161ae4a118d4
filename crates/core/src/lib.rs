//! Core puzzle logic - pure, deterministic, and testable
//!
//! This module contains the grid state, pattern representation, and the
//! scan/resolve algorithms. It has **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: identical grid + pattern state always yields the
//!   same occurrences in the same order
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`grid`]: square mark grid with bounds checks and the silent clear path
//! - [`pattern`]: immutable boolean-matrix patterns as `(dx, dy)` offsets
//! - [`scanner`]: full-grid occurrence enumeration in source order
//! - [`sequencer`]: occurrence list → ordered scoring/clearing plan
//!
//! # Example
//!
//! ```
//! use mark_match_core::{build_plan, scan, Grid, Pattern};
//!
//! let mut grid = Grid::new(3).unwrap();
//! let pair = Pattern::from_rows(&[vec![true, true]]).unwrap();
//!
//! grid.toggle(0, 0).unwrap();
//! grid.toggle(1, 0).unwrap();
//!
//! let occurrences = scan(&grid, &[pair]);
//! assert_eq!(occurrences.len(), 1);
//!
//! let plan = build_plan(occurrences, 0);
//! assert_eq!(plan.final_score(), 1);
//! grid.clear_cells(&plan.cleared_cells());
//! assert!(!grid.is_marked(0, 0));
//! ```

pub mod grid;
pub mod pattern;
pub mod scanner;
pub mod sequencer;

pub use mark_match_types as types;

// Re-export commonly used items for convenience
pub use grid::Grid;
pub use pattern::Pattern;
pub use scanner::{scan, MatchOccurrence};
pub use sequencer::{build_plan, MatchBatch, ResolutionPlan};
