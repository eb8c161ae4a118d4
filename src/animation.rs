//! Match-resolution animation queue.
//!
//! The engine resolves synchronously and hands the front-end the whole
//! ordered batch list up front; this module replays it on a timeline so the
//! player sees one batch flash at a time, with the score popping up at each
//! batch boundary. The engine is long done by the time any of this plays,
//! so nothing here ever calls back into it.

use std::collections::VecDeque;

use mark_match::types::{Coord, EngineEvent, MATCH_FLASH_MS, MATCH_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingBatch {
    score: u32,
    cells: Vec<Coord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Flashing one batch's cells.
    Flash { cells: Vec<Coord>, left_ms: u32 },
    /// Pause between batches.
    Gap { left_ms: u32 },
}

/// Replays resolved match batches with flash/interval pacing.
#[derive(Debug)]
pub struct MatchAnimation {
    queue: VecDeque<PendingBatch>,
    phase: Phase,
    /// Score to display while batches are still replaying.
    shown_score: Option<u32>,
}

impl MatchAnimation {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            phase: Phase::Idle,
            shown_score: None,
        }
    }

    /// Absorb one engine event. Only batch events matter here; mark and
    /// rebuild changes are rendered straight from the grid.
    pub fn absorb(&mut self, event: EngineEvent) {
        if let EngineEvent::MatchBatchResolved { score, cells } = event {
            self.queue.push_back(PendingBatch { score, cells });
        }
    }

    /// Advance the timeline by `dt_ms`.
    pub fn update(&mut self, dt_ms: u32) {
        let mut left = dt_ms;
        loop {
            match std::mem::replace(&mut self.phase, Phase::Idle) {
                Phase::Idle => {
                    let Some(batch) = self.queue.pop_front() else {
                        self.shown_score = None;
                        return;
                    };
                    self.shown_score = Some(batch.score);
                    self.phase = Phase::Flash {
                        cells: batch.cells,
                        left_ms: MATCH_FLASH_MS,
                    };
                }
                Phase::Flash { cells, left_ms } => {
                    if left < left_ms {
                        self.phase = Phase::Flash {
                            cells,
                            left_ms: left_ms - left,
                        };
                        return;
                    }
                    left -= left_ms;
                    if !self.queue.is_empty() {
                        self.phase = Phase::Gap {
                            left_ms: MATCH_INTERVAL_MS,
                        };
                    }
                }
                Phase::Gap { left_ms } => {
                    if left < left_ms {
                        self.phase = Phase::Gap {
                            left_ms: left_ms - left,
                        };
                        return;
                    }
                    left -= left_ms;
                }
            }
        }
    }

    /// Cells currently flashing.
    pub fn highlight(&self) -> &[Coord] {
        match &self.phase {
            Phase::Flash { cells, .. } => cells,
            _ => &[],
        }
    }

    /// Score to display instead of the engine total, while replaying.
    pub fn score_override(&self) -> Option<u32> {
        self.shown_score
    }

    /// Whether any batch is still queued or playing.
    pub fn busy(&self) -> bool {
        self.phase != Phase::Idle || !self.queue.is_empty()
    }
}

impl Default for MatchAnimation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(score: u32, cells: Vec<Coord>) -> EngineEvent {
        EngineEvent::MatchBatchResolved { score, cells }
    }

    #[test]
    fn idle_without_events() {
        let mut anim = MatchAnimation::new();
        anim.update(1000);
        assert!(!anim.busy());
        assert!(anim.highlight().is_empty());
        assert_eq!(anim.score_override(), None);
    }

    #[test]
    fn non_batch_events_are_ignored() {
        let mut anim = MatchAnimation::new();
        anim.absorb(EngineEvent::MatchResolutionStarted);
        anim.absorb(EngineEvent::GridRebuilt { size: 5 });
        anim.absorb(EngineEvent::MatchResolutionEnded);
        anim.update(16);
        assert!(!anim.busy());
    }

    #[test]
    fn single_batch_flashes_then_goes_idle() {
        let mut anim = MatchAnimation::new();
        anim.absorb(batch(1, vec![(0, 0), (1, 0)]));

        anim.update(0);
        assert!(anim.busy());
        assert_eq!(anim.highlight(), &[(0, 0), (1, 0)]);
        assert_eq!(anim.score_override(), Some(1));

        anim.update(MATCH_FLASH_MS);
        assert!(!anim.busy());
        assert!(anim.highlight().is_empty());
        assert_eq!(anim.score_override(), None);
    }

    #[test]
    fn batches_replay_in_order_with_gaps() {
        let mut anim = MatchAnimation::new();
        anim.absorb(batch(1, vec![(0, 0)]));
        anim.absorb(batch(2, vec![(1, 1)]));

        anim.update(0);
        assert_eq!(anim.highlight(), &[(0, 0)]);
        assert_eq!(anim.score_override(), Some(1));

        // Finish the first flash; now in the inter-batch gap.
        anim.update(MATCH_FLASH_MS);
        assert!(anim.busy());
        assert!(anim.highlight().is_empty());
        assert_eq!(anim.score_override(), Some(1));

        // Gap elapses into the second flash.
        anim.update(MATCH_INTERVAL_MS);
        assert_eq!(anim.highlight(), &[(1, 1)]);
        assert_eq!(anim.score_override(), Some(2));

        anim.update(MATCH_FLASH_MS);
        assert!(!anim.busy());
    }

    #[test]
    fn large_step_drains_the_whole_queue() {
        let mut anim = MatchAnimation::new();
        anim.absorb(batch(1, vec![(0, 0)]));
        anim.absorb(batch(2, vec![(1, 1)]));
        anim.update(10_000);
        assert!(!anim.busy());
        assert_eq!(anim.score_override(), None);
    }
}
