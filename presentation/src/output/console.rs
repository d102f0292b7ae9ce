//! Console output formatter for study results

use colored::Colorize;
use serde::Serialize;
use study_domain::{ConceptNode, EmotionAnalysis, Model, QuizQuestion, StudyGuide};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Formats study results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_guide(guide: &StudyGuide) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Study Guide"));
        output.push_str("\n\n");
        output.push_str(guide.as_str().trim());
        output.push('\n');
        output.push_str(&Self::footer());
        output
    }

    pub fn format_emotion(analysis: &EmotionAnalysis) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {}\n",
            "Emotion:".cyan().bold(),
            analysis.emotion.as_str().yellow().bold(),
            format!("({}% confidence)", analysis.confidence).dimmed()
        ));

        if !analysis.affirmation.is_empty() {
            output.push_str(&format!("\n{}\n", analysis.affirmation.green()));
        }

        output.push_str(&Self::bullet_section("Suggestions", &analysis.suggestions));
        output.push_str(&Self::bullet_section(
            "Learning adjustments",
            &analysis.learning_adjustments,
        ));
        output.push_str(&Self::bullet_section(
            "Coping strategies",
            &analysis.coping_strategies,
        ));

        output
    }

    pub fn format_concepts(nodes: &[ConceptNode]) -> String {
        if nodes.is_empty() {
            return format!("{}\n", "No concepts found.".dimmed());
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Concept Map".cyan().bold()));
        output.push_str(&format!("{}\n", "-".repeat(40)));

        for node in nodes {
            output.push_str(&format!(
                "\n{} {}\n",
                node.label.yellow().bold(),
                format!("[{}]", node.id).dimmed()
            ));
            output.push_str(&format!(
                "  at ({:.1}, {:.1})  {}\n",
                node.x, node.y, node.color
            ));

            if !node.connections.is_empty() {
                let labels: Vec<&str> = node
                    .connections
                    .iter()
                    .map(|id| Self::label_for(nodes, id))
                    .collect();
                output.push_str(&format!("  {} {}\n", "->".cyan(), labels.join(", ")));
            }
        }

        output
    }

    pub fn format_quiz(questions: &[QuizQuestion]) -> String {
        if questions.is_empty() {
            return format!("{}\n", "No questions generated.".dimmed());
        }

        let mut output = String::new();
        for (number, question) in questions.iter().enumerate() {
            output.push_str(&format!(
                "{} {}\n",
                format!("{}.", number + 1).cyan().bold(),
                question.question.bold()
            ));
            for (index, (label, option)) in
                OPTION_LABELS.iter().zip(question.options.iter()).enumerate()
            {
                if index == question.correct_answer {
                    output.push_str(&format!("   {} {} {}\n", label, option.green(), "*".green()));
                } else {
                    output.push_str(&format!("   {} {}\n", label, option));
                }
            }
            if !question.explanation.is_empty() {
                output.push_str(&format!("   {}\n", question.explanation.dimmed()));
            }
            output.push('\n');
        }

        output
    }

    /// List models, marking the active one.
    pub fn format_models(models: &[Model], active: &Model) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Available models:".cyan().bold()));
        for model in models {
            if model == active {
                output.push_str(&format!("  {} {}\n", "*".green(), model.as_str().green().bold()));
            } else {
                output.push_str(&format!("    {}\n", model));
            }
        }
        output
    }

    pub fn format_status(connected: bool, host: &str, model: &Model) -> String {
        let state = if connected {
            "connected".green().bold()
        } else {
            "unreachable".red().bold()
        };
        format!(
            "{} {} ({})\n{} {}\n",
            "Server:".cyan().bold(),
            host,
            state,
            "Model:".cyan().bold(),
            model
        )
    }

    fn bullet_section(title: &str, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let mut output = format!("\n{}\n", format!("{}:", title).cyan().bold());
        for item in items {
            output.push_str(&format!("  * {}\n", item));
        }
        output
    }

    fn label_for<'a>(nodes: &'a [ConceptNode], id: &'a str) -> &'a str {
        nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.label.as_str())
            .unwrap_or(id)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
