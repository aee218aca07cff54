//! Prompt assembly
//!
//! Turns a category name and the answers collected for it into the final
//! prompt text. Question and answer text is inserted verbatim.

use questionset::Answer;
use tracing::debug;

use super::embedded;

/// Language the downstream response is requested in
pub const DEFAULT_RESPONSE_LANGUAGE: &str = "Croatian";

const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// The advisor prompt template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    response_language: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            response_language: DEFAULT_RESPONSE_LANGUAGE.to_string(),
        }
    }
}

impl PromptTemplate {
    /// Template asking for the response in `response_language` (blank falls back to the default)
    pub fn new(response_language: impl Into<String>) -> Self {
        let response_language = response_language.into().trim().to_string();
        if response_language.is_empty() {
            return Self::default();
        }
        Self { response_language }
    }

    pub fn response_language(&self) -> &str {
        &self.response_language
    }

    /// Render the prompt for one completed session
    pub fn render(&self, category_name: &str, answers: &[Answer]) -> String {
        debug!(%category_name, answers = answers.len(), "PromptTemplate::render: called");
        let mut prompt = String::new();

        prompt.push_str(&normalize(embedded::ADVISOR_ROLE));
        prompt.push_str("\n\n");
        prompt.push_str("Context: The student is seeking advice related to: ");
        prompt.push_str(category_name);
        prompt.push_str("\n\n");
        prompt.push_str("Student Information:\n");

        for (i, item) in answers.iter().enumerate() {
            prompt.push_str(&format!("{}. {}: {}\n", i + 1, item.question, item.answer));
        }

        prompt.push('\n');
        prompt.push_str(&normalize(embedded::ADVISOR_CLOSING).replacen(
            LANGUAGE_PLACEHOLDER,
            &self.response_language,
            1,
        ));
        prompt.push('\n');
        prompt
    }
}

/// Assemble the advisor prompt with the default response language
pub fn assemble(category_name: &str, answers: &[Answer]) -> String {
    PromptTemplate::default().render(category_name, answers)
}

/// Template text without trailing whitespace and with `\n` line breaks only
fn normalize(template: &str) -> String {
    template.trim_end().replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_HOUSING: &str = "You are a friendly, practical student advisor with extensive experience helping university students navigate their daily challenges and make the most of their academic and personal life.

Context: The student is seeking advice related to: Housing

Student Information:
1. Where do you live?: Dorm

Please provide comprehensive, actionable advice in Croatian. Structure your response with:
- Clear headings and sections
- Bullet points for easy reading
- Specific, practical steps the student can take
- Empathetic and encouraging tone
- Real-world examples when relevant

Focus on being helpful, realistic, and supportive while addressing the student's specific situation and needs.
";

    fn housing() -> Vec<Answer> {
        vec![Answer::new("Where do you live?", "Dorm")]
    }

    #[test]
    fn test_assemble_exact_output() {
        assert_eq!(assemble("Housing", &housing()), EXPECTED_HOUSING);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let first = assemble("Housing", &housing());
        let second = assemble("Housing", &housing());
        assert_eq!(first, second);
        assert!(first.lines().any(|l| l == "1. Where do you live?: Dorm"));
    }

    #[test]
    fn test_answers_keep_input_order() {
        let answers = vec![
            Answer::new("Zeta", "last alphabetically"),
            Answer::new("Alpha", "first alphabetically"),
            Answer::new("Mid", "middle"),
        ];
        let prompt = assemble("Order", &answers);

        let numbered: Vec<&str> = prompt
            .lines()
            .filter(|l| l.starts_with(|c: char| c.is_ascii_digit()))
            .collect();
        assert_eq!(
            numbered,
            vec!["1. Zeta: last alphabetically", "2. Alpha: first alphabetically", "3. Mid: middle"]
        );
    }

    #[test]
    fn test_no_answers_leaves_section_empty() {
        let prompt = assemble("Empty", &[]);
        assert!(prompt.contains("Student Information:\n\nPlease provide"));
        assert!(!prompt.contains("1. "));
    }

    #[test]
    fn test_text_is_inserted_verbatim() {
        let answers = vec![Answer::new("Rent: per month?", "{language} <b>\"300\"</b> & more")];
        let prompt = assemble("Stan & {language}", &answers);
        assert!(prompt.contains("related to: Stan & {language}\n"));
        assert!(prompt.contains("1. Rent: per month?: {language} <b>\"300\"</b> & more\n"));
        assert!(prompt.contains("actionable advice in Croatian."));
    }

    #[test]
    fn test_response_language_override() {
        let template = PromptTemplate::new("English");
        let prompt = template.render("Housing", &housing());
        assert!(prompt.contains("actionable advice in English. Structure"));
        assert!(!prompt.contains("Croatian"));
    }

    #[test]
    fn test_blank_language_falls_back() {
        assert_eq!(PromptTemplate::new("   "), PromptTemplate::default());
        assert_eq!(PromptTemplate::default().response_language(), "Croatian");
    }
}
