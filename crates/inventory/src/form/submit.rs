use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Allows one submission in flight per form. Clones share the same flag, so
/// the submit button can read it while the request runs.
#[derive(Debug, Clone, Default)]
pub struct SubmitLatch {
    in_flight: Arc<AtomicBool>,
}

/// Held for the duration of a submission; dropping it re-enables submit.
#[derive(Debug)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl SubmitLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<SubmitGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitGuard {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    pub fn is_held(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
