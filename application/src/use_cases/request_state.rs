//! Per-request state machine.
//!
//! ```text
//! Idle → Requesting → Parsing → Success
//!        Requesting → ConnectivityFailed → Fallback → Success
//!        Requesting → Parsing → ExtractionFailed → Fallback → Success
//!        Requesting → ConnectivityFailed → PropagatedError   (study guide)
//!        Requesting → Success                               (study guide)
//! ```

use crate::ports::progress::ProgressNotifier;
use study_domain::TaskKind;
use tracing::debug;

/// State of a single study request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Requesting,
    Parsing,
    ConnectivityFailed,
    ExtractionFailed,
    Fallback,
    Success,
    PropagatedError,
}

impl RequestState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Requesting => "requesting",
            RequestState::Parsing => "parsing",
            RequestState::ConnectivityFailed => "connectivity_failed",
            RequestState::ExtractionFailed => "extraction_failed",
            RequestState::Fallback => "fallback",
            RequestState::Success => "success",
            RequestState::PropagatedError => "propagated_error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Success | RequestState::PropagatedError)
    }

    /// Whether `self → next` is a legal transition for `task`.
    pub fn can_transition_to(&self, next: RequestState, task: TaskKind) -> bool {
        use RequestState::*;
        match (self, next) {
            (Idle, Requesting) => true,
            (Requesting, ConnectivityFailed) => true,
            (Requesting, Parsing) => task.has_fallback(),
            (Requesting, Success) => !task.has_fallback(),
            (Parsing, Success) | (Parsing, ExtractionFailed) => true,
            (ConnectivityFailed, Fallback) | (ExtractionFailed, Fallback) => task.has_fallback(),
            (ConnectivityFailed, PropagatedError) => !task.has_fallback(),
            (Fallback, Success) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Walks one request through its states and reports every transition.
pub(crate) struct RequestTracker<'a> {
    task: TaskKind,
    state: RequestState,
    progress: &'a dyn ProgressNotifier,
}

impl<'a> RequestTracker<'a> {
    pub(crate) fn new(task: TaskKind, progress: &'a dyn ProgressNotifier) -> Self {
        Self {
            task,
            state: RequestState::Idle,
            progress,
        }
    }

    pub(crate) fn advance(&mut self, next: RequestState) {
        debug_assert!(
            self.state.can_transition_to(next, self.task),
            "illegal transition {} -> {} for {}",
            self.state,
            next,
            self.task
        );
        debug!("{}: {} -> {}", self.task, self.state, next);
        self.state = next;
        self.progress.on_transition(self.task, next);
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> RequestState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;

    #[test]
    fn test_happy_path() {
        let mut tracker = RequestTracker::new(TaskKind::Quiz, &NoProgress);
        tracker.advance(RequestState::Requesting);
        tracker.advance(RequestState::Parsing);
        tracker.advance(RequestState::Success);
        assert!(tracker.state().is_terminal());
    }

    #[test]
    fn test_study_guide_cannot_fall_back() {
        let s = RequestState::ConnectivityFailed;
        assert!(!s.can_transition_to(RequestState::Fallback, TaskKind::StudyGuide));
        assert!(s.can_transition_to(RequestState::PropagatedError, TaskKind::StudyGuide));
    }

    #[test]
    fn test_structured_tasks_never_propagate() {
        for task in [TaskKind::Emotion, TaskKind::ConceptMap, TaskKind::Quiz] {
            assert!(!RequestState::ConnectivityFailed
                .can_transition_to(RequestState::PropagatedError, task));
            assert!(RequestState::ExtractionFailed.can_transition_to(RequestState::Fallback, task));
        }
    }

    #[test]
    fn test_no_transition_out_of_terminal_states() {
        let all = [
            RequestState::Idle,
            RequestState::Requesting,
            RequestState::Parsing,
            RequestState::ConnectivityFailed,
            RequestState::ExtractionFailed,
            RequestState::Fallback,
            RequestState::Success,
            RequestState::PropagatedError,
        ];
        for next in all {
            assert!(!RequestState::Success.can_transition_to(next, TaskKind::Emotion));
            assert!(!RequestState::PropagatedError.can_transition_to(next, TaskKind::StudyGuide));
        }
    }
}
