//! Sequencer module - turns occurrences into an ordered resolution plan
//!
//! One scan pass produces one plan: a sequence of batches in the exact
//! order the scanner returned the occurrences. Each batch scores +1 and
//! schedules its cells for clearing. The plan is pure data; the engine
//! applies it (emitting one notification per batch) and performs the final
//! silent clear through `Grid::clear_cells`.

use crate::scanner::MatchOccurrence;
use crate::types::Coord;

/// One occurrence's worth of resolution: score increment plus cell clears,
/// processed as an atomic step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBatch {
    /// Running score total after this batch's +1.
    pub score: u32,
    /// Absolute cells this batch covers, in pattern-offset order.
    pub cells: Vec<Coord>,
}

/// Deterministic resolution plan for one scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPlan {
    batches: Vec<MatchBatch>,
    final_score: u32,
}

/// Build the plan for `occurrences`, numbering scores from `score_before`.
pub fn build_plan(occurrences: Vec<MatchOccurrence>, score_before: u32) -> ResolutionPlan {
    let mut batches = Vec::with_capacity(occurrences.len());
    let mut score = score_before;
    for occurrence in occurrences {
        score += 1;
        batches.push(MatchBatch {
            score,
            cells: occurrence.cells,
        });
    }
    ResolutionPlan {
        batches,
        final_score: score,
    }
}

impl ResolutionPlan {
    /// Batches in resolution order.
    pub fn batches(&self) -> &[MatchBatch] {
        &self.batches
    }

    /// Whether the pass found nothing to resolve.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Score total once every batch has been processed.
    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    /// Every cell scheduled for clearing, batch by batch.
    ///
    /// A cell shared between overlapping batches appears once per batch;
    /// clearing is idempotent so no deduplication is needed.
    pub fn cleared_cells(&self) -> Vec<Coord> {
        self.batches
            .iter()
            .flat_map(|batch| batch.cells.iter().copied())
            .collect()
    }
}
