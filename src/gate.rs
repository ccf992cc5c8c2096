//! Passcode gate in front of the sketch.
//!
//! Purely a visibility toggle: plain string comparison, unlimited retries.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// This input flipped the gate open.
    Unlocked,
    /// Wrong or missing input; the caller should tell the user and ask again.
    Rejected,
    /// The gate was already open; nothing changed.
    AlreadyOpen,
}

const RETRY_STEP_MS: u32 = 250;
const RETRY_MAX_MS: u32 = 2_000;

#[derive(Clone, Debug)]
pub struct Gate {
    secret: String,
    state: GateState,
    failures: u32,
}

impl Gate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            state: GateState::Locked,
            failures: 0,
        }
    }

    /// Feed one prompt answer. `None` is a dismissed prompt.
    pub fn submit(&mut self, input: Option<&str>) -> GateOutcome {
        if self.state == GateState::Unlocked {
            return GateOutcome::AlreadyOpen;
        }
        if input == Some(self.secret.as_str()) {
            self.state = GateState::Unlocked;
            GateOutcome::Unlocked
        } else {
            self.failures = self.failures.saturating_add(1);
            GateOutcome::Rejected
        }
    }

    /// Wait before the next prompt. Grows with consecutive rejections so a
    /// browser that dismisses modals instantly doesn't spin.
    pub fn retry_delay_ms(&self) -> u32 {
        RETRY_STEP_MS.saturating_mul(self.failures).min(RETRY_MAX_MS)
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == GateState::Unlocked
    }
}
