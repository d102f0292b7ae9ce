//! Study assistant use case
//!
//! The four caller-facing entry points. Each runs one request:
//!
//! 1. Build the task prompt ([`PromptTemplate`])
//! 2. Call the model once ([`ModelGateway::generate`])
//! 3. Extract the structured result
//! 4. On any failure in 2 or 3, substitute the task's fallback
//!
//! The study guide has no fallback: its failures reach the caller as
//! [`StudyGuideError`].

use crate::config::GenerationParams;
use crate::model_gateway::ModelGateway;
use crate::ports::llm_gateway::GatewayError;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::request_state::{RequestState, RequestTracker};
use std::sync::Arc;
use study_domain::{
    ConceptNode, EmotionAnalysis, ExtractionError, HueRule, LayoutAssigner, PromptTemplate,
    QuizQuestion, StudyGuide, TaskKind, extract_concepts, extract_emotion, extract_quiz,
    fallback_concepts, fallback_emotion, fallback_quiz,
};
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced by [`StudyAssistant::generate_study_guide`]
#[derive(Error, Debug)]
pub enum StudyGuideError {
    #[error("Failed to generate study guide. Please check your model server connection. ({0})")]
    Gateway(#[from] GatewayError),
}

/// Where a structured result came from
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome<T> {
    Generated(T),
    Fallback(T),
}

/// Use case serving every study task through one [`ModelGateway`].
pub struct StudyAssistant {
    gateway: Arc<ModelGateway>,
    params: GenerationParams,
    progress: Arc<dyn ProgressNotifier>,
}

impl StudyAssistant {
    pub fn new(gateway: Arc<ModelGateway>) -> Self {
        Self {
            gateway,
            params: GenerationParams::default(),
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// The gateway used for every request (model selection, connectivity)
    pub fn gateway(&self) -> &ModelGateway {
        &self.gateway
    }

    /// Generate a markdown study guide. Fails if the model cannot answer.
    pub async fn generate_study_guide(&self, text: &str) -> Result<StudyGuide, StudyGuideError> {
        let task = TaskKind::StudyGuide;
        info!("Generating study guide ({} chars)", text.chars().count());

        let mut tracker = RequestTracker::new(task, self.progress.as_ref());
        tracker.advance(RequestState::Requesting);

        let prompt = PromptTemplate::build(task, text);
        match self.gateway.generate(&prompt, self.params.for_task(task)).await {
            Ok(response) => {
                tracker.advance(RequestState::Success);
                Ok(StudyGuide::new(response))
            }
            Err(e) => {
                warn!("Error generating study guide: {}", e);
                tracker.advance(RequestState::ConnectivityFailed);
                tracker.advance(RequestState::PropagatedError);
                Err(StudyGuideError::Gateway(e))
            }
        }
    }

    /// Analyse the emotional tone of `text`. Never fails.
    pub async fn analyze_emotion(&self, text: &str) -> EmotionAnalysis {
        info!("Analyzing emotion ({} chars)", text.chars().count());
        self.run_structured(TaskKind::Emotion, text, extract_emotion, || {
            fallback_emotion(text)
        })
        .await
        .into_inner()
    }

    /// Build a placed and colored concept map for `text`. Never fails.
    pub async fn generate_concept_map(&self, text: &str) -> Vec<ConceptNode> {
        info!("Generating concept map ({} chars)", text.chars().count());
        let outcome = self
            .run_structured(TaskKind::ConceptMap, text, extract_concepts, || {
                fallback_concepts(text)
            })
            .await;

        let (mut nodes, rule) = match outcome {
            Outcome::Generated(nodes) => (nodes, HueRule::Even),
            Outcome::Fallback(nodes) => (nodes, HueRule::FALLBACK),
        };
        LayoutAssigner::assign(&mut nodes, rule);
        nodes
    }

    /// Create multiple-choice questions about `text`. Never fails.
    pub async fn generate_quiz(&self, text: &str) -> Vec<QuizQuestion> {
        info!("Generating quiz ({} chars)", text.chars().count());
        self.run_structured(TaskKind::Quiz, text, extract_quiz, fallback_quiz)
            .await
            .into_inner()
    }

    /// Model path with a uniform fallback on connectivity or extraction
    /// failure.
    async fn run_structured<T>(
        &self,
        task: TaskKind,
        content: &str,
        extract: fn(&str) -> Result<T, ExtractionError>,
        fallback: impl FnOnce() -> T,
    ) -> Outcome<T> {
        let mut tracker = RequestTracker::new(task, self.progress.as_ref());
        tracker.advance(RequestState::Requesting);

        let prompt = PromptTemplate::build(task, content);
        let response = match self.gateway.generate(&prompt, self.params.for_task(task)).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Model unavailable for {}, using fallback: {}", task, e);
                tracker.advance(RequestState::ConnectivityFailed);
                tracker.advance(RequestState::Fallback);
                let value = fallback();
                tracker.advance(RequestState::Success);
                return Outcome::Fallback(value);
            }
        };

        tracker.advance(RequestState::Parsing);
        match extract(&response) {
            Ok(value) => {
                tracker.advance(RequestState::Success);
                Outcome::Generated(value)
            }
            Err(e) => {
                warn!("Unusable {} response, using fallback: {}", task, e);
                tracker.advance(RequestState::ExtractionFailed);
                tracker.advance(RequestState::Fallback);
                let value = fallback();
                tracker.advance(RequestState::Success);
                Outcome::Fallback(value)
            }
        }
    }
}

impl<T> Outcome<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Outcome::Generated(value) | Outcome::Fallback(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{GenerateRequest, LlmGateway};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use study_domain::{Emotion, GenerationOptions, Model, OPTION_COUNT};

    // ==================== Test Mocks ====================

    /// Replays scripted replies; `None` simulates an unreachable server.
    struct MockGateway {
        replies: Mutex<VecDeque<Option<String>>>,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    impl MockGateway {
        fn new(replies: Vec<Option<&str>>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().map(|r| r.map(String::from)).collect()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(vec![Model::default()])
        }

        async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .flatten()
                .ok_or_else(|| GatewayError::ConnectionError("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        states: Mutex<Vec<RequestState>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_transition(&self, _task: TaskKind, state: RequestState) {
            self.states.lock().unwrap().push(state);
        }
    }

    fn assistant(replies: Vec<Option<&str>>) -> (Arc<MockGateway>, StudyAssistant) {
        let backend = Arc::new(MockGateway::new(replies));
        let gateway = Arc::new(ModelGateway::new(backend.clone(), Model::default()));
        (backend, StudyAssistant::new(gateway))
    }

    fn offline() -> StudyAssistant {
        assistant(vec![None]).1
    }

    // ==================== Study guide ====================

    #[tokio::test]
    async fn test_study_guide_passes_text_through() {
        let (backend, assistant) = assistant(vec![Some("# Cells\n- Nucleus")]);
        let guide = assistant.generate_study_guide("Cells have nuclei.").await.unwrap();
        assert_eq!(guide.as_str(), "# Cells\n- Nucleus");

        let requests = backend.requests.lock().unwrap();
        assert!(requests[0].prompt.contains("Cells have nuclei."));
        assert_eq!(requests[0].options, None);
    }

    #[tokio::test]
    async fn test_study_guide_failure_propagates() {
        let progress = Arc::new(RecordingProgress::default());
        let assistant = offline().with_progress(progress.clone());

        let result = assistant.generate_study_guide("anything").await;
        assert!(matches!(
            result,
            Err(StudyGuideError::Gateway(GatewayError::ConnectionError(_)))
        ));
        assert_eq!(
            *progress.states.lock().unwrap(),
            vec![
                RequestState::Requesting,
                RequestState::ConnectivityFailed,
                RequestState::PropagatedError
            ]
        );
    }

    // ==================== Emotion ====================

    #[tokio::test]
    async fn test_emotion_from_model() {
        let (backend, assistant) = assistant(vec![Some(
            r#"Sure. {"emotion": "Confident", "confidence": 91, "affirmation": "Nice!"}"#,
        )]);

        let analysis = assistant.analyze_emotion("I aced it").await;
        assert_eq!(analysis.emotion, Emotion::Confident);
        assert_eq!(analysis.confidence, 91);
        assert_eq!(analysis.affirmation, "Nice!");
        assert!(analysis.suggestions.is_empty());

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests[0].options, Some(GenerationOptions::new(0.7, 0.9)));
    }

    #[tokio::test]
    async fn test_emotion_offline_uses_keyword_fallback() {
        let analysis = offline().analyze_emotion("I'm so FRUSTRATED with this").await;
        assert_eq!(analysis.emotion, Emotion::Frustrated);
        assert_eq!(analysis.confidence, 75);
        assert_eq!(
            analysis.suggestions,
            vec![
                "Take a 10-minute break to reset your mindset",
                "Try a different study approach or environment",
                "Focus on one small concept at a time",
            ]
        );
    }

    #[tokio::test]
    async fn test_emotion_unparsable_reply_uses_fallback() {
        let progress = Arc::new(RecordingProgress::default());
        let (_, assistant) = assistant(vec![Some("You sound nervous, but fine.")]);
        let assistant = assistant.with_progress(progress.clone());

        let analysis = assistant.analyze_emotion("I'm nervous").await;
        assert_eq!(analysis.emotion, Emotion::Anxious);
        assert_eq!(analysis.confidence, 75);
        assert_eq!(
            *progress.states.lock().unwrap(),
            vec![
                RequestState::Requesting,
                RequestState::Parsing,
                RequestState::ExtractionFailed,
                RequestState::Fallback,
                RequestState::Success
            ]
        );
    }

    // ==================== Concept map ====================

    #[tokio::test]
    async fn test_concept_map_from_model_is_laid_out_evenly() {
        let (_, assistant) = assistant(vec![Some(
            r#"{"concepts": [
                {"id": "a", "label": "Atom", "connections": ["b", "zz"]},
                {"id": "b", "label": "Bond", "connections": ["a"]},
                {"id": "c", "label": "Charge", "connections": []}
            ]}"#,
        )]);

        let nodes = assistant.generate_concept_map("chemistry").await;
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].connections, vec!["b"]);
        assert!((nodes[0].x - 350.0).abs() < 1e-9);
        assert_eq!(nodes[1].color, "hsl(120, 70%, 60%)");
        assert_eq!(nodes[2].color, "hsl(240, 70%, 60%)");
    }

    #[tokio::test]
    async fn test_concept_map_offline_uses_word_fallback() {
        let progress = Arc::new(RecordingProgress::default());
        let assistant = offline().with_progress(progress.clone());

        let nodes = assistant
            .generate_concept_map("Energy flows through ecosystems via food chains")
            .await;
        let labels: Vec<_> = nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Energy", "Flows", "Through", "Ecosystems", "Chains"]);

        // Fallback hues step by 60 degrees even though there are 5 nodes
        assert_eq!(nodes[1].color, "hsl(60, 70%, 60%)");
        assert_eq!(nodes[4].color, "hsl(240, 70%, 60%)");
        // Positions still spread over the actual node count
        let angle = 2.0 * std::f64::consts::PI / 5.0;
        assert!((nodes[1].x - (200.0 + 150.0 * angle.cos())).abs() < 1e-9);

        for node in &nodes {
            for target in &node.connections {
                assert!(nodes.iter().any(|n| &n.id == target));
                assert_ne!(target, &node.id);
            }
        }
        assert_eq!(
            *progress.states.lock().unwrap(),
            vec![
                RequestState::Requesting,
                RequestState::ConnectivityFailed,
                RequestState::Fallback,
                RequestState::Success
            ]
        );
    }

    #[tokio::test]
    async fn test_concept_map_unusable_reply_uses_fallback_layout() {
        let progress = Arc::new(RecordingProgress::default());
        let (_, assistant) = assistant(vec![Some("{}")]);
        let assistant = assistant.with_progress(progress.clone());

        let text = "Energy flows through ecosystems via food chains";
        let nodes = assistant.generate_concept_map(text).await;
        assert_eq!(nodes, fallback_concepts_laid_out(text));

        let hues: Vec<_> = nodes.iter().map(|n| n.color.as_str()).collect();
        assert_eq!(
            hues,
            vec![
                "hsl(0, 70%, 60%)",
                "hsl(60, 70%, 60%)",
                "hsl(120, 70%, 60%)",
                "hsl(180, 70%, 60%)",
                "hsl(240, 70%, 60%)"
            ]
        );
        assert_eq!(nodes[0].connections, vec!["concept-1", "concept-4"]);
        assert_eq!(
            *progress.states.lock().unwrap(),
            vec![
                RequestState::Requesting,
                RequestState::Parsing,
                RequestState::ExtractionFailed,
                RequestState::Fallback,
                RequestState::Success
            ]
        );
    }

    fn fallback_concepts_laid_out(text: &str) -> Vec<ConceptNode> {
        let mut nodes = fallback_concepts(text);
        LayoutAssigner::assign(&mut nodes, HueRule::FALLBACK);
        nodes
    }

    #[tokio::test]
    async fn test_concept_map_fallback_is_reproducible() {
        let text = "Plate tectonics explains earthquakes, volcanoes and mountains";
        let first = offline().generate_concept_map(text).await;
        let second = offline().generate_concept_map(text).await;
        assert_eq!(first, second);
    }

    // ==================== Quiz ====================

    #[tokio::test]
    async fn test_quiz_from_model() {
        let (_, assistant) = assistant(vec![Some(
            r#"{"questions": [
                {"id": "q1", "question": "Capital of France?",
                 "options": ["Rome", "Paris", "Oslo", "Bern"], "correctAnswer": 1,
                 "explanation": "Paris is the capital."},
                {"id": "q2", "question": "2*3?",
                 "options": ["5", "6", "7", "8"], "correctAnswer": 1}
            ]}"#,
        )]);

        let quiz = assistant.generate_quiz("geography and maths").await;
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].correct_option(), Some("Paris"));
        assert_eq!(quiz[1].explanation, "");
    }

    #[tokio::test]
    async fn test_quiz_offline_returns_single_canned_question() {
        let quiz = offline().generate_quiz("anything at all").await;
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].options.len(), OPTION_COUNT);
        assert!(quiz[0].correct_answer < OPTION_COUNT);
    }

    #[tokio::test]
    async fn test_quiz_invalid_question_uses_fallback() {
        let (_, assistant) = assistant(vec![Some(
            r#"{"questions": [{"id": "q1", "options": ["a", "b"], "correctAnswer": 0}]}"#,
        )]);
        let quiz = assistant.generate_quiz("text").await;
        assert_eq!(quiz, fallback_quiz());
    }

    // ==================== Model selection ====================

    #[tokio::test]
    async fn test_model_change_applies_to_next_request() {
        let (backend, assistant) = assistant(vec![Some("{}"), Some("{}")]);
        assistant.analyze_emotion("one").await;
        assistant.gateway().set_model("gemma2");
        assistant.analyze_emotion("two").await;

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests[0].model, Model::default());
        assert_eq!(requests[1].model, Model::new("gemma2"));
    }
}
