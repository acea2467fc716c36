//! PIN Gate Service - digit entry, verification and failure feedback

use std::rc::Rc;

use keepsake_domain::pin_gate::{AUTO_VERIFY_DELAY, SHAKE_DURATION};
use keepsake_domain::{AppState, Digit, DigitOutcome, PinGate, VerifyOutcome};

use crate::ports::outbound::{Region, SchedulerPort, SurfacePort, TimerId};

pub struct PinGateService {
    gate: PinGate,
    surface: Rc<dyn SurfacePort>,
    scheduler: Rc<dyn SchedulerPort>,
    /// Bumped on every shake so only the latest reset clears it
    shake_generation: u32,
}

impl PinGateService {
    pub fn new(gate: PinGate, surface: Rc<dyn SurfacePort>, scheduler: Rc<dyn SchedulerPort>) -> Self {
        Self {
            gate,
            surface,
            scheduler,
            shake_generation: 0,
        }
    }

    /// Draw the entry and hint as they currently stand.
    pub fn render(&self, state: &AppState) {
        self.surface.render_pin(&self.gate.masked(state));
        self.surface.set_visible(Region::Hint, state.hint_visible());
    }

    pub fn submit_digit(&self, state: &mut AppState, digit: Digit) {
        match self.gate.submit_digit(state, digit) {
            DigitOutcome::Appended { len } => {
                tracing::trace!(len, "PIN digit entered");
            }
            DigitOutcome::ReadyToVerify => {
                self.scheduler.schedule_once(TimerId::AutoVerify, AUTO_VERIFY_DELAY);
            }
            DigitOutcome::Ignored => {
                tracing::trace!("PIN entry full, digit dropped");
                return;
            }
        }
        self.surface.render_pin(&self.gate.masked(state));
    }

    pub fn backspace(&self, state: &mut AppState) {
        if self.gate.backspace(state) {
            self.surface.render_pin(&self.gate.masked(state));
        }
    }

    /// Automatic verification after the final digit.
    ///
    /// Skipped when the entry changed during the delay (a backspace, or an
    /// explicit confirm that already consumed it).
    pub fn on_auto_verify(&mut self, state: &mut AppState) -> Option<VerifyOutcome> {
        if !self.gate.is_full(state) {
            tracing::debug!("Auto-verify skipped, entry no longer complete");
            return None;
        }
        Some(self.verify(state))
    }

    /// Verify the current entry. Short entries count as a wrong attempt.
    pub fn verify(&mut self, state: &mut AppState) -> VerifyOutcome {
        let outcome = self.gate.verify(state);
        self.surface.render_pin(&self.gate.masked(state));

        match outcome {
            VerifyOutcome::Unlocked => {
                tracing::info!("PIN accepted");
            }
            VerifyOutcome::Rejected {
                attempts,
                hint_revealed,
            } => {
                tracing::info!(attempts, "PIN rejected");
                if hint_revealed {
                    self.surface.set_visible(Region::Hint, true);
                }
                self.start_shake();
            }
        }
        outcome
    }

    pub fn on_shake_reset(&self, generation: u32) {
        if generation == self.shake_generation {
            self.surface.set_shake(false);
        }
    }

    fn start_shake(&mut self) {
        self.shake_generation = self.shake_generation.wrapping_add(1);
        self.surface.set_shake(true);
        self.scheduler
            .schedule_once(TimerId::ShakeReset(self.shake_generation), SHAKE_DURATION);
    }
}
