//! PIN gate rules
//!
//! Accepts digits up to the secret length, verifies by exact match and
//! tracks failed attempts. After [`HINT_THRESHOLD`] failures the hint becomes
//! visible for the rest of the session. There is no lockout or backoff.

use std::time::Duration;

use crate::state::AppState;
use crate::value_objects::{Digit, Secret};

/// Failed attempts after which the hint is revealed.
pub const HINT_THRESHOLD: u32 = 3;

/// Delay between the final digit and automatic verification.
pub const AUTO_VERIFY_DELAY: Duration = Duration::from_millis(200);

/// How long the shake feedback stays on after a failure.
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);

/// Result of submitting one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOutcome {
    /// Digit appended, entry still shorter than the secret.
    Appended { len: usize },
    /// Digit appended and the entry now has the secret's length.
    ReadyToVerify,
    /// Entry already full; the digit was dropped.
    Ignored,
}

/// Result of comparing the entry against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Unlocked,
    Rejected {
        attempts: u32,
        /// True only on the failure that crossed the hint threshold.
        hint_revealed: bool,
    },
}

/// Digit entry and verification against a fixed secret.
#[derive(Debug, Clone)]
pub struct PinGate {
    secret: Secret,
}

impl PinGate {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// Append `digit` unless the entry is already full.
    pub fn submit_digit(&self, state: &mut AppState, digit: Digit) -> DigitOutcome {
        if state.entered_digits.len() >= self.secret.len() {
            return DigitOutcome::Ignored;
        }
        state.entered_digits.push(digit);

        let len = state.entered_digits.len();
        if len == self.secret.len() {
            DigitOutcome::ReadyToVerify
        } else {
            DigitOutcome::Appended { len }
        }
    }

    /// Remove the last digit. Returns `false` when the entry was empty.
    pub fn backspace(&self, state: &mut AppState) -> bool {
        state.entered_digits.pop().is_some()
    }

    /// Whether the entry has reached the secret's length.
    pub fn is_full(&self, state: &AppState) -> bool {
        state.entered_digits.len() == self.secret.len()
    }

    /// Compare the entry with the secret and clear it either way.
    pub fn verify(&self, state: &mut AppState) -> VerifyOutcome {
        let matched = self.secret.matches(&state.entered_digits);
        state.entered_digits.clear();

        if matched {
            return VerifyOutcome::Unlocked;
        }

        state.wrong_attempts = state.wrong_attempts.saturating_add(1);
        let hint_revealed = !state.hint_visible && state.wrong_attempts >= HINT_THRESHOLD;
        if hint_revealed {
            state.hint_visible = true;
        }

        VerifyOutcome::Rejected {
            attempts: state.wrong_attempts,
            hint_revealed,
        }
    }

    /// One `*` per entered digit.
    pub fn masked(&self, state: &AppState) -> String {
        "*".repeat(state.entered_digits.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> PinGate {
        PinGate::new(Secret::new("1906").unwrap())
    }

    fn enter(gate: &PinGate, state: &mut AppState, keys: &str) -> Vec<DigitOutcome> {
        keys.chars()
            .map(|c| gate.submit_digit(state, Digit::try_from(c).unwrap()))
            .collect()
    }

    #[test]
    fn short_entries_never_report_ready() {
        let gate = gate();
        let mut state = AppState::new();
        let outcomes = enter(&gate, &mut state, "190");
        assert_eq!(
            outcomes,
            vec![
                DigitOutcome::Appended { len: 1 },
                DigitOutcome::Appended { len: 2 },
                DigitOutcome::Appended { len: 3 },
            ]
        );
        assert!(!gate.is_full(&state));
    }

    #[test]
    fn final_digit_reports_ready_and_extra_digits_are_dropped() {
        let gate = gate();
        let mut state = AppState::new();
        let outcomes = enter(&gate, &mut state, "19065");
        assert_eq!(outcomes[3], DigitOutcome::ReadyToVerify);
        assert_eq!(outcomes[4], DigitOutcome::Ignored);
        assert_eq!(state.entered_digits().len(), 4);
    }

    #[test]
    fn correct_secret_unlocks_and_clears() {
        let gate = gate();
        let mut state = AppState::new();
        enter(&gate, &mut state, "1906");
        assert_eq!(gate.verify(&mut state), VerifyOutcome::Unlocked);
        assert!(state.entered_digits().is_empty());
        assert_eq!(state.wrong_attempts(), 0);
    }

    #[test]
    fn wrong_secret_counts_attempt_and_clears() {
        let gate = gate();
        let mut state = AppState::new();
        enter(&gate, &mut state, "1907");
        assert_eq!(
            gate.verify(&mut state),
            VerifyOutcome::Rejected {
                attempts: 1,
                hint_revealed: false
            }
        );
        assert!(state.entered_digits().is_empty());
        assert_eq!(gate.masked(&state), "");
    }

    #[test]
    fn hint_appears_on_third_failure_and_sticks() {
        let gate = gate();
        let mut state = AppState::new();

        for attempt in 1..=2 {
            enter(&gate, &mut state, "0000");
            gate.verify(&mut state);
            assert_eq!(state.wrong_attempts(), attempt);
            assert!(!state.hint_visible());
        }

        enter(&gate, &mut state, "0000");
        assert_eq!(
            gate.verify(&mut state),
            VerifyOutcome::Rejected {
                attempts: 3,
                hint_revealed: true
            }
        );
        assert!(state.hint_visible());

        enter(&gate, &mut state, "1111");
        assert_eq!(
            gate.verify(&mut state),
            VerifyOutcome::Rejected {
                attempts: 4,
                hint_revealed: false
            }
        );
        assert!(state.hint_visible());

        // Unlocking later does not hide it either
        enter(&gate, &mut state, "1906");
        assert_eq!(gate.verify(&mut state), VerifyOutcome::Unlocked);
        assert!(state.hint_visible());
    }

    #[test]
    fn backspace_removes_last_digit_and_is_noop_when_empty() {
        let gate = gate();
        let mut state = AppState::new();
        assert!(!gate.backspace(&mut state));

        enter(&gate, &mut state, "19");
        assert!(gate.backspace(&mut state));
        assert_eq!(gate.masked(&state), "*");
        assert_eq!(state.entered_digits()[0].as_char(), '1');
    }

    #[test]
    fn manual_verify_of_short_entry_is_a_failure() {
        let gate = gate();
        let mut state = AppState::new();
        enter(&gate, &mut state, "19");
        assert!(matches!(
            gate.verify(&mut state),
            VerifyOutcome::Rejected { attempts: 1, .. }
        ));
    }

    #[test]
    fn unlimited_attempts_are_allowed() {
        let gate = gate();
        let mut state = AppState::new();
        for _ in 0..50 {
            enter(&gate, &mut state, "9999");
            gate.verify(&mut state);
        }
        assert_eq!(state.wrong_attempts(), 50);
        enter(&gate, &mut state, "1906");
        assert_eq!(gate.verify(&mut state), VerifyOutcome::Unlocked);
    }
}
