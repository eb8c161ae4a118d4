//! Engine module - owns the grid, patterns, score, and the input gate
//!
//! The engine is the only mutable entry point into the puzzle. External
//! input calls [`Engine::toggle_cell`] or [`Engine::resize`]; everything
//! else (scan, sequencing, clearing) happens synchronously inside those
//! calls and is reported to an injected [`EventSink`] in a fixed order.
//!
//! There is no bus and no service locator: the grid, the pattern list, and
//! the sink all arrive through the constructor, and the sink must not call
//! back into the engine (resolution runs to completion before the mutating
//! call returns, so any re-entrant mutation is rejected by the gate).

pub mod config;

use mark_match_core::{build_plan, scan, Grid, MatchOccurrence, Pattern};
use mark_match_types::{EngineError, EngineEvent};

pub use config::{default_patterns, load_pattern_set, parse_pattern_set};

/// Ordered notification sink injected into the engine.
///
/// Per resolution pass the engine emits, in order: `CellMarkChanged` for
/// the triggering toggle, `MatchResolutionStarted`, one
/// `MatchBatchResolved` per occurrence, `MatchResolutionEnded`.
/// `GridRebuilt` is emitted on construction and resize. Implementations
/// own all presentation timing and must not mutate the engine while
/// handling an event.
pub trait EventSink {
    fn on_event(&mut self, event: EngineEvent);
}

/// Sink that drops every event (headless/bench use).
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: EngineEvent) {}
}

/// Sink that records events for later draining.
///
/// The terminal front-end drains this once per loop iteration to feed its
/// animation queue; tests use it to assert emission order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<EngineEvent>,
}

impl EventLog {
    /// Recorded events since the last drain.
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: EngineEvent) {
        self.events.push(event);
    }
}

/// The puzzle coordinator.
pub struct Engine<S: EventSink> {
    grid: Grid,
    patterns: Vec<Pattern>,
    score: u32,
    resolving: bool,
    sink: S,
}

impl<S: EventSink> Engine<S> {
    /// Create an engine over an already-built grid and pattern list.
    ///
    /// Emits `GridRebuilt` for the initial build.
    pub fn new(grid: Grid, patterns: Vec<Pattern>, sink: S) -> Self {
        let mut engine = Self {
            grid,
            patterns,
            score: 0,
            resolving: false,
            sink,
        };
        engine.sink.on_event(EngineEvent::GridRebuilt {
            size: engine.grid.size(),
        });
        engine
    }

    /// Flip the mark at (x, y), then scan and resolve any matches.
    ///
    /// Runs to full completion: when this returns `Ok`, every occurrence
    /// found by the post-toggle scan has been scored and cleared. Fails
    /// with `InputRejected` while a resolution pass is in progress and
    /// `OutOfBounds` for bad coordinates; rejected calls change nothing.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        if self.resolving {
            return Err(EngineError::InputRejected);
        }

        let marked = self.grid.toggle(x, y)?;
        self.sink
            .on_event(EngineEvent::CellMarkChanged { x, y, marked });

        let occurrences = scan(&self.grid, &self.patterns);
        if !occurrences.is_empty() {
            self.resolve(occurrences);
        }
        Ok(())
    }

    /// Rebuild the grid at `size`, resetting all marks and the score.
    ///
    /// Fails with `InputRejected` while resolving and `InvalidDimension`
    /// for non-positive sizes; rejected calls change nothing.
    pub fn resize(&mut self, size: i32) -> Result<(), EngineError> {
        if self.resolving {
            return Err(EngineError::InputRejected);
        }

        self.grid = Grid::new(size)?;
        self.score = 0;
        self.sink.on_event(EngineEvent::GridRebuilt { size });
        Ok(())
    }

    /// Drive one scan pass's occurrences through scoring and clearing.
    ///
    /// The final clear goes through `Grid::clear_cells`, the non-signaling
    /// path, so it can never trigger another scan.
    fn resolve(&mut self, occurrences: Vec<MatchOccurrence>) {
        self.resolving = true;
        self.sink.on_event(EngineEvent::MatchResolutionStarted);

        let plan = build_plan(occurrences, self.score);
        for batch in plan.batches() {
            self.score = batch.score;
            self.sink.on_event(EngineEvent::MatchBatchResolved {
                score: batch.score,
                cells: batch.cells.clone(),
            });
        }

        self.grid.clear_cells(&plan.cleared_cells());
        self.resolving = false;
        self.sink.on_event(EngineEvent::MatchResolutionEnded);
    }

    /// Current session score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether a resolution pass is gating input.
    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    /// Read access to the grid (for rendering and queries).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of configured patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Mutable access to the sink (for draining recorded events).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Force the gate for tests; resolution is synchronous, so the flag is
    /// never observable between public calls otherwise.
    #[cfg(test)]
    fn force_resolving(&mut self, resolving: bool) {
        self.resolving = resolving;
    }
}
