//! Progress notification port
//!
//! Defines the interface for reporting request state transitions.

use crate::use_cases::request_state::RequestState;
use study_domain::TaskKind;

/// Callback for state transitions of a study request
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called every time a request enters a new state
    fn on_transition(&self, task: TaskKind, state: RequestState);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_transition(&self, _task: TaskKind, _state: RequestState) {}
}
