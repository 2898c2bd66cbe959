use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lj_core::submission::SubmissionState;
use tokio::sync::Mutex;

/// Shared submission context containing state and the in-flight flag.
///
/// The flag is the only guard against double submission: nothing else stops
/// a second `submit` fired by rapid repeated user action.
pub struct SubmissionContext {
    state: Mutex<SubmissionState>,
    in_flight: AtomicBool,
}

impl SubmissionContext {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SubmissionState::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> SubmissionState {
        self.state.lock().await.clone()
    }

    pub async fn set_state(&self, state: SubmissionState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }

    /// Claims the in-flight flag. Returns `None` if a submission is already running.
    pub fn try_begin(self: &Arc<Self>) -> Option<InFlightGuard> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(InFlightGuard {
            context: Arc::clone(self),
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Releases the in-flight flag when dropped.
pub struct InFlightGuard {
    context: Arc<SubmissionContext>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.context.in_flight.store(false, Ordering::SeqCst);
    }
}
