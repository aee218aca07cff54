//! Category, question and answer records

use serde::{Deserialize, Serialize};

/// A single question shown to the user, with optional guidance text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text
    pub question: String,

    /// Guidance shown under the question (empty when absent)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instruction: String,
}

impl Question {
    pub fn new(question: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            instruction: instruction.into(),
        }
    }

    /// Whether there is any guidance text to show
    pub fn has_instruction(&self) -> bool {
        !self.instruction.is_empty()
    }
}

/// A named topic with its questions in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }

    pub fn with_questions(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// The user's response to one question within a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Copied from the question that was asked
    pub question: String,
    pub answer: String,
}

impl Answer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Pair an answer with the question it responds to
    pub fn for_question(question: &Question, answer: impl Into<String>) -> Self {
        Self::new(question.question.clone(), answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_instruction_flag() {
        assert!(!Question::new("Where do you live?", "").has_instruction());
        assert!(Question::new("Where do you live?", "Be specific").has_instruction());
    }

    #[test]
    fn test_answer_copies_question_text() {
        let q = Question::new("Where do you live?", "City and type of housing");
        let a = Answer::for_question(&q, "Dorm");
        assert_eq!(a.question, "Where do you live?");
        assert_eq!(a.answer, "Dorm");
    }

    #[test]
    fn test_category_yaml_shape() {
        let cat = Category::with_questions(
            "Housing",
            vec![Question::new("Where do you live?", ""), Question::new("Budget?", "Monthly, in EUR")],
        );

        let yaml = serde_yaml::to_string(&cat).unwrap();
        assert!(yaml.contains("name: Housing"));
        assert!(yaml.contains("instruction: Monthly, in EUR"));
        // empty instructions are omitted
        assert_eq!(yaml.matches("instruction").count(), 1);

        let back: Category = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, cat);
        assert_eq!(back.question_count(), 2);
    }
}
