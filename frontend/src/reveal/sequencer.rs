use crate::reveal::stage::{reduce, AnimationStage, RevealEvent};
use crate::reveal::storage::RevealStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTimings {
    /// Delay from the click to the burst.
    pub burst_delay_ms: u32,
    /// Delay from the click (not from the burst) to the typewriter.
    pub typewriter_delay_ms: u32,
    pub typing_total_ms: u32,
    pub line_gap_ms: u32,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            burst_delay_ms: 0,
            typewriter_delay_ms: 150,
            typing_total_ms: 5000,
            line_gap_ms: 200,
        }
    }
}

/// An event the caller must dispatch back after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub delay_ms: u32,
    pub event: RevealEvent,
}

/// Owns the stage and the persisted flag. Knows nothing about timers or rendering.
pub struct RevealSequencer<S: RevealStore> {
    store: S,
    timings: RevealTimings,
    stage: AnimationStage,
}

impl<S: RevealStore> RevealSequencer<S> {
    pub fn new(store: S, timings: RevealTimings) -> Self {
        let stage = if store.is_revealed() {
            AnimationStage::Revealed
        } else {
            AnimationStage::Idle
        };
        Self { store, timings, stage }
    }

    pub fn stage(&self) -> AnimationStage {
        self.stage
    }

    pub fn timings(&self) -> RevealTimings {
        self.timings
    }

    pub fn dispatch(&mut self, event: RevealEvent) -> AnimationStage {
        let next = reduce(self.stage, event);
        if next == AnimationStage::Revealed && self.stage != AnimationStage::Revealed {
            self.store.mark_revealed();
            log::info!("Site revealed");
        }
        self.stage = next;
        next
    }

    /// Handles the click. Both delays are measured from this call, they do not chain.
    pub fn activate(&mut self) -> Vec<ScheduledEvent> {
        if self.stage != AnimationStage::Idle {
            return Vec::new();
        }
        self.dispatch(RevealEvent::Activate);
        vec![
            ScheduledEvent {
                delay_ms: self.timings.burst_delay_ms,
                event: RevealEvent::BurstDue,
            },
            ScheduledEvent {
                delay_ms: self.timings.typewriter_delay_ms,
                event: RevealEvent::TypewriterDue,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::storage::memory::MemoryRevealStore;
    use AnimationStage::*;

    fn sequencer(store: &MemoryRevealStore) -> RevealSequencer<MemoryRevealStore> {
        RevealSequencer::new(store.clone(), RevealTimings::default())
    }

    #[test]
    fn stored_flag_skips_straight_to_revealed() {
        let store = MemoryRevealStore::revealed();
        let mut seq = sequencer(&store);
        assert_eq!(seq.stage(), Revealed);
        assert!(seq.activate().is_empty());
        assert_eq!(seq.stage(), Revealed);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn click_schedules_burst_then_typewriter_from_the_same_instant() {
        let store = MemoryRevealStore::default();
        let mut seq = sequencer(&store);
        assert_eq!(seq.stage(), Idle);

        let scheduled = seq.activate();
        assert_eq!(seq.stage(), Ambient);
        assert_eq!(
            scheduled,
            vec![
                ScheduledEvent { delay_ms: 0, event: RevealEvent::BurstDue },
                ScheduledEvent { delay_ms: 150, event: RevealEvent::TypewriterDue },
            ]
        );
    }

    #[test]
    fn second_click_is_ignored() {
        let store = MemoryRevealStore::default();
        let mut seq = sequencer(&store);
        seq.activate();
        assert!(seq.activate().is_empty());
        assert_eq!(seq.stage(), Ambient);
    }

    #[test]
    fn full_run_is_monotonic_and_writes_flag_once() {
        let store = MemoryRevealStore::default();
        let mut seq = sequencer(&store);
        let mut seen = vec![seq.stage()];

        for scheduled in seq.activate() {
            seen.push(seq.dispatch(scheduled.event));
        }
        seen.push(seq.dispatch(RevealEvent::TypingFinished));
        seen.push(seq.dispatch(RevealEvent::TypingFinished));

        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seq.stage(), Revealed);
        assert_eq!(store.writes(), 1);
        assert!(store.is_revealed());
    }

    #[test]
    fn typing_finished_before_typewriter_stage_does_nothing() {
        let store = MemoryRevealStore::default();
        let mut seq = sequencer(&store);
        seq.activate();
        assert_eq!(seq.dispatch(RevealEvent::TypingFinished), Ambient);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn fresh_sequencer_after_completion_takes_fast_path() {
        let store = MemoryRevealStore::default();
        let mut first = sequencer(&store);
        first.activate();
        first.dispatch(RevealEvent::BurstDue);
        first.dispatch(RevealEvent::TypewriterDue);
        first.dispatch(RevealEvent::TypingFinished);

        let second = sequencer(&store);
        assert_eq!(second.stage(), Revealed);
    }
}
