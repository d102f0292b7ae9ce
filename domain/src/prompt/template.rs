//! Prompt templates for each study task

use crate::core::task::TaskKind;

/// Example emotion result embedded in the emotion prompt.
///
/// It is also a complete, valid response: extracting it applies no defaults.
pub const EMOTION_SCHEMA: &str = r#"{
  "emotion": "anxious",
  "confidence": 85,
  "suggestions": [
    "immediate actionable suggestion 1",
    "immediate actionable suggestion 2",
    "immediate actionable suggestion 3"
  ],
  "affirmation": "a warm, encouraging, and personalized message that validates their feelings",
  "learningAdjustments": [
    "specific study technique adjustment 1",
    "specific study technique adjustment 2"
  ],
  "copingStrategies": [
    "emotional coping strategy 1",
    "emotional coping strategy 2"
  ]
}"#;

/// Example concept map embedded in the concept map prompt.
pub const CONCEPT_MAP_SCHEMA: &str = r#"{
  "concepts": [
    {
      "id": "concept-1",
      "label": "Main Concept Name",
      "connections": ["concept-2", "concept-3"]
    },
    {
      "id": "concept-2",
      "label": "Related Concept",
      "connections": ["concept-1"]
    },
    {
      "id": "concept-3",
      "label": "Supporting Idea",
      "connections": ["concept-1"]
    }
  ]
}"#;

/// Example quiz embedded in the quiz prompt.
pub const QUIZ_SCHEMA: &str = r#"{
  "questions": [
    {
      "id": "q1",
      "question": "Question text here?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": 0,
      "explanation": "Detailed explanation of why this answer is correct"
    }
  ]
}"#;

/// Templates for generating the prompt of each task kind
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the prompt for `task`, embedding `content` verbatim.
    pub fn build(task: TaskKind, content: &str) -> String {
        match task {
            TaskKind::StudyGuide => Self::study_guide(content),
            TaskKind::Emotion => Self::emotion(content),
            TaskKind::ConceptMap => Self::concept_map(content),
            TaskKind::Quiz => Self::quiz(content),
        }
    }

    /// The JSON example a task's response must follow, if it has one.
    #[cfg(test)]
    pub(crate) fn schema(task: TaskKind) -> Option<&'static str> {
        match task {
            TaskKind::StudyGuide => None,
            TaskKind::Emotion => Some(EMOTION_SCHEMA),
            TaskKind::ConceptMap => Some(CONCEPT_MAP_SCHEMA),
            TaskKind::Quiz => Some(QUIZ_SCHEMA),
        }
    }

    /// Prompt for a markdown study guide
    pub fn study_guide(content: &str) -> String {
        format!(
            r#"You are an expert study assistant. Convert the following content into a comprehensive, well-structured study guide. Use markdown formatting with:

1. Clear headers and subheaders
2. Bullet points for key concepts
3. Important definitions highlighted
4. Summary sections
5. Study tips and recommendations

Make it engaging and easy to understand for students.

Content to analyze:
{}

Generate a complete study guide:"#,
            content
        )
    }

    /// Prompt for emotional tone analysis
    pub fn emotion(text: &str) -> String {
        format!(
            r#"You are an empathetic AI assistant specializing in emotional analysis and educational psychology. Analyze the following student's text for emotional tone and provide comprehensive support.

Student's message: "{}"

Analyze their emotional state and provide supportive, actionable guidance. Consider their learning context and provide specific educational recommendations.

Respond in this exact JSON format:
{}

Field rules:
- "emotion" must be one of: happy, sad, frustrated, anxious, excited, neutral, overwhelmed, confident, stressed, motivated
- "confidence" must be a number between 75 and 95
- "suggestions" must contain 3 items, "learningAdjustments" and "copingStrategies" 2 items each

Guidelines:
- Be empathetic and understanding
- Provide practical, actionable advice
- Consider their academic context
- If emotion is negative, focus on constructive coping
- If emotion is positive, help maintain momentum
- Make suggestions specific to their situation"#,
            text, EMOTION_SCHEMA
        )
    }

    /// Prompt for concept map extraction
    pub fn concept_map(content: &str) -> String {
        format!(
            r#"You are an expert at creating concept maps for educational content. Analyze the following text and extract 6-10 key concepts with their relationships.

Content: {}

Respond in this exact JSON format:
{}

Every id in "connections" must be the id of another concept in the list.
Focus on the most important concepts and their meaningful relationships. Keep concept labels concise (1-3 words)."#,
            content, CONCEPT_MAP_SCHEMA
        )
    }

    /// Prompt for a multiple-choice quiz
    pub fn quiz(content: &str) -> String {
        format!(
            r#"You are an expert quiz creator for educational content. Create 4-5 multiple choice questions based on the following content. Make questions that test understanding, not just memorization.

Content: {}

Respond in this exact JSON format:
{}

Each question must have exactly 4 options, and "correctAnswer" is the 0-based index of the correct option.
Make questions challenging but fair, with plausible distractors."#,
            content, QUIZ_SCHEMA
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TASKS: [TaskKind; 4] = [
        TaskKind::StudyGuide,
        TaskKind::Emotion,
        TaskKind::ConceptMap,
        TaskKind::Quiz,
    ];

    #[test]
    fn test_content_is_embedded_verbatim() {
        let content = "Photosynthesis uses {light} & \"water\"\n  to make <glucose>.";
        for task in ALL_TASKS {
            let prompt = PromptTemplate::build(task, content);
            assert!(prompt.contains(content), "{task} prompt lost content");
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        for task in ALL_TASKS {
            assert_eq!(
                PromptTemplate::build(task, "cells divide"),
                PromptTemplate::build(task, "cells divide")
            );
        }
    }

    #[test]
    fn test_structured_prompts_restate_schema() {
        for task in [TaskKind::Emotion, TaskKind::ConceptMap, TaskKind::Quiz] {
            let schema = PromptTemplate::schema(task).unwrap();
            assert!(PromptTemplate::build(task, "x").contains(schema));
        }
        assert!(PromptTemplate::schema(TaskKind::StudyGuide).is_none());
    }

    #[test]
    fn test_schemas_are_valid_json() {
        for schema in [EMOTION_SCHEMA, CONCEPT_MAP_SCHEMA, QUIZ_SCHEMA] {
            assert!(serde_json::from_str::<serde_json::Value>(schema).is_ok());
        }
    }

    #[test]
    fn test_emotion_prompt_lists_every_emotion() {
        let prompt = PromptTemplate::emotion("hi");
        for emotion in crate::study::Emotion::ALL {
            assert!(prompt.contains(emotion.as_str()));
        }
    }

    #[test]
    fn test_study_guide_asks_for_markdown() {
        let prompt = PromptTemplate::study_guide("mitosis");
        assert!(prompt.contains("markdown"));
        assert!(prompt.ends_with("Generate a complete study guide:"));
    }
}
