use log::trace;

/// One-shot advance timer. Holds at most one pending deadline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AdvanceTimer {
    deadline_ms: Option<u64>,
}

impl AdvanceTimer {
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Arm for `now_ms + delay_ms`, replacing any pending deadline.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        let deadline_ms = now_ms.saturating_add(delay_ms);
        if let Some(previous) = self.deadline_ms.replace(deadline_ms) {
            trace!("timer re-armed previous={} next={}", previous, deadline_ms);
        }
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub const fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub const fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Consume the deadline if it has elapsed. Fires at most once per arm.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
