//! Transition timers polled from the egui frame loop.

use std::time::{Duration, Instant};

use navigator::{Scheduler, TransitionStep};

#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Vec<(Instant, TransitionStep)>,
}

impl FrameScheduler {
    /// Removes and returns every step due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TransitionStep> {
        let mut due = Vec::new();
        self.pending.retain(|(deadline, step)| {
            if *deadline <= now {
                due.push((*deadline, *step));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, step)| step).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_after(&mut self, delay: Duration, step: TransitionStep) {
        self.pending.push((Instant::now() + delay, step));
    }
}
