//! Progress reporting for study requests
//!
//! Everything here draws on stderr, leaving stdout to the results.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use study_application::ports::progress::ProgressNotifier;
use study_application::RequestState;
use study_domain::TaskKind;

/// Reports progress with a spinner while a request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn task_display_name(task: TaskKind) -> &'static str {
        match task {
            TaskKind::StudyGuide => "Study guide",
            TaskKind::Emotion => "Emotion",
            TaskKind::ConceptMap => "Concept map",
            TaskKind::Quiz => "Quiz",
        }
    }

    fn state_message(state: RequestState) -> Option<&'static str> {
        match state {
            RequestState::Requesting => Some("Waiting for the model..."),
            RequestState::Parsing => Some("Reading the response..."),
            RequestState::ConnectivityFailed => Some("Model server unreachable"),
            RequestState::ExtractionFailed => Some("Response could not be understood"),
            RequestState::Fallback => Some("Using built-in answer"),
            RequestState::Idle | RequestState::Success | RequestState::PropagatedError => None,
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_transition(&self, task: TaskKind, state: RequestState) {
        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());

        match state {
            RequestState::Requesting => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_prefix(Self::task_display_name(task));
                pb.enable_steady_tick(Duration::from_millis(100));
                if let Some(message) = Self::state_message(state) {
                    pb.set_message(message);
                }
                *slot = Some(pb);
            }
            RequestState::Success => {
                if let Some(pb) = slot.take() {
                    pb.finish_and_clear();
                }
            }
            RequestState::PropagatedError => {
                if let Some(pb) = slot.take() {
                    pb.abandon_with_message(format!("{}", "failed".red()));
                }
            }
            _ => {
                if let (Some(pb), Some(message)) = (slot.as_ref(), Self::state_message(state)) {
                    pb.set_message(message);
                }
            }
        }
    }
}

/// Simple text-based progress (no fancy UI), for non-terminal stderr
///
/// Only the detours are printed: failures and fallbacks.
pub struct SimpleProgress;

impl SimpleProgress {
    fn line(task: TaskKind, state: RequestState) -> Option<String> {
        let name = ProgressReporter::task_display_name(task);
        match state {
            RequestState::ConnectivityFailed | RequestState::ExtractionFailed => {
                ProgressReporter::state_message(state)
                    .map(|message| format!("{} {}: {}", "x".red(), name.bold(), message))
            }
            RequestState::Fallback => Some(format!(
                "{} {}: using built-in answer",
                "->".cyan(),
                name.bold()
            )),
            _ => None,
        }
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_transition(&self, task: TaskKind, state: RequestState) {
        if let Some(line) = Self::line(task, state) {
            eprintln!("{}", line);
        }
    }
}
