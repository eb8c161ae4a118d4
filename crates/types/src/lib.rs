//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no I/O concerns, making them usable in any
//! context (core logic, engine coordination, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The grid is always square. It starts at [`INITIAL_GRID_SIZE`] and can be
//! rebuilt at any positive size; the terminal front-end clamps interactive
//! resizing to [`MIN_GRID_SIZE`]..=[`MAX_GRID_SIZE`] so the board stays
//! readable on screen.
//!
//! # Animation Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MATCH_FLASH_MS` | 150 | Highlight flash per resolved batch |
//! | `MATCH_INTERVAL_MS` | 300 | Pause between consecutive batches |
//!
//! The core engine never waits on these; they only pace the front-end's
//! consumption of the resolution events.

use thiserror::Error;

/// Grid coordinate pair `(x, y)`.
///
/// `x` grows rightward and `y` grows downward, both from 0. Pattern offsets
/// use the same convention relative to an anchor cell.
pub type Coord = (i32, i32);

/// Grid size at startup (matches the original 5x5 board).
pub const INITIAL_GRID_SIZE: i32 = 5;

/// Smallest grid the front-end will resize to.
pub const MIN_GRID_SIZE: i32 = 1;

/// Largest grid the front-end will resize to.
pub const MAX_GRID_SIZE: i32 = 16;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Highlight flash duration for one resolved match batch.
pub const MATCH_FLASH_MS: u32 = 150;

/// Pause between consecutive match batches in the front-end animation.
pub const MATCH_INTERVAL_MS: u32 = 300;

/// Failures surfaced by the engine's mutation API.
///
/// All variants are recoverable caller-input errors: a rejected call leaves
/// engine state unchanged, and there is nothing to retry until the caller
/// corrects the input or resolution finishes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinate outside the current grid.
    #[error("coordinate ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: i32 },

    /// Non-positive grid rebuild target.
    #[error("grid dimension must be positive, got {0}")]
    InvalidDimension(i32),

    /// Pattern matrix that cannot produce a usable offset list.
    #[error("malformed pattern: {reason}")]
    MalformedPattern { reason: &'static str },

    /// Mutation attempted while a match resolution pass is in progress.
    #[error("input rejected while matches are resolving")]
    InputRejected,
}

/// Ordered notifications emitted by the engine.
///
/// For one resolution pass the emission order is fixed:
/// `CellMarkChanged` for the triggering toggle, `MatchResolutionStarted`,
/// one `MatchBatchResolved` per occurrence in scan order, then
/// `MatchResolutionEnded`. `GridRebuilt` is emitted on construction and on
/// every resize, and implies score 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The grid was (re)built at `size`; all cells unmarked, score reset.
    GridRebuilt { size: i32 },
    /// A user toggle changed one cell's mark. Resolution clears are silent
    /// and never produce this event.
    CellMarkChanged { x: i32, y: i32, marked: bool },
    /// A scan found at least one occurrence; input is gated until
    /// `MatchResolutionEnded`.
    MatchResolutionStarted,
    /// One occurrence resolved: `score` is the running total after its +1,
    /// `cells` the absolute coordinates it covered, in pattern order.
    MatchBatchResolved { score: u32, cells: Vec<Coord> },
    /// All batches of the pass resolved and their cells cleared.
    MatchResolutionEnded,
}

/// Front-end actions produced by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the cursor up one cell.
    CursorUp,
    /// Move the cursor down one cell.
    CursorDown,
    /// Move the cursor left one cell.
    CursorLeft,
    /// Move the cursor right one cell.
    CursorRight,
    /// Toggle the mark under the cursor.
    ToggleMark,
    /// Rebuild the grid one cell larger.
    GrowGrid,
    /// Rebuild the grid one cell smaller.
    ShrinkGrid,
    /// Rebuild the grid at its current size (clears marks and score).
    Rebuild,
}
