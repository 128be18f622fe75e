//! Per-control submission gate
//!
//! Exactly one control owns exactly one gate. A trigger arriving while a
//! submission is in flight is rejected entirely, never queued, so handler
//! runs for a single control are strictly serialized.

use crate::page::Control;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Busy token guarding a single triggering control.
pub struct ActionGate {
    busy: AtomicBool,
    control: Arc<dyn Control>,
}

impl ActionGate {
    pub fn new(control: Arc<dyn Control>) -> Self {
        Self {
            busy: AtomicBool::new(false),
            control,
        }
    }

    /// Claim the gate for one submission.
    ///
    /// Returns `None` when a submission is already in flight. On success
    /// the control is disabled until the returned permit is dropped.
    pub fn try_acquire(&self) -> Option<GatePermit<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("trigger ignored, submission already in flight");
            return None;
        }
        self.control.set_enabled(false);
        Some(GatePermit { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Scoped claim on an [`ActionGate`].
///
/// Dropping the permit re-enables the control and returns the token to
/// idle, exactly once on every exit path.
pub struct GatePermit<'a> {
    gate: &'a ActionGate,
}

impl GatePermit<'_> {
    /// Release the gate explicitly
    pub fn release(self) {}
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        self.gate.control.set_enabled(true);
        self.gate.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every enabled-state transition pushed to the control
    struct RecordingControl {
        states: Mutex<Vec<bool>>,
    }

    impl RecordingControl {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                states: Mutex::new(Vec::new()),
            })
        }

        fn states(&self) -> Vec<bool> {
            self.states.lock().unwrap().clone()
        }
    }

    impl Control for RecordingControl {
        fn set_enabled(&self, enabled: bool) {
            self.states.lock().unwrap().push(enabled);
        }
    }

    #[test]
    fn test_acquire_disables_control_and_marks_busy() {
        let control = RecordingControl::new();
        let gate = ActionGate::new(control.clone());

        let permit = gate.try_acquire();
        assert!(permit.is_some());
        assert!(gate.is_busy());
        assert_eq!(control.states(), vec![false]);
    }

    #[test]
    fn test_second_trigger_while_busy_is_rejected() {
        let control = RecordingControl::new();
        let gate = ActionGate::new(control.clone());

        let _permit = gate.try_acquire().unwrap();
        assert!(gate.try_acquire().is_none());
        // No extra disable call for the rejected trigger
        assert_eq!(control.states(), vec![false]);
    }

    #[test]
    fn test_drop_re_enables_control_and_returns_to_idle() {
        let control = RecordingControl::new();
        let gate = ActionGate::new(control.clone());

        let permit = gate.try_acquire().unwrap();
        drop(permit);
        assert!(!gate.is_busy());
        assert_eq!(control.states(), vec![false, true]);
    }

    #[test]
    fn test_explicit_release_is_equivalent_to_drop() {
        let control = RecordingControl::new();
        let gate = ActionGate::new(control.clone());

        gate.try_acquire().unwrap().release();
        assert!(!gate.is_busy());
        assert_eq!(control.states(), vec![false, true]);
    }

    #[test]
    fn test_gate_can_be_reacquired_after_release() {
        let control = RecordingControl::new();
        let gate = ActionGate::new(control.clone());

        gate.try_acquire().unwrap().release();
        let again = gate.try_acquire();
        assert!(again.is_some());
        assert_eq!(control.states(), vec![false, true, false]);
    }

    #[test]
    fn test_rapid_triggers_accept_exactly_one() {
        let control = RecordingControl::new();
        let gate = ActionGate::new(control);

        let permit = gate.try_acquire();
        let rejected: Vec<_> = (0..4).map(|_| gate.try_acquire()).collect();
        assert!(permit.is_some());
        assert!(rejected.iter().all(Option::is_none));
    }
}
