//! Pure validation rules for survey input.

use std::fmt;

use super::{Question, QuestionType};

/// The three (question, type) pairs every survey's question list must carry.
pub const REQUIRED_QUESTIONS: [(&str, QuestionType); 3] = [
    ("Público-alvo", QuestionType::Text),
    ("Quantidade de estrelas", QuestionType::Rating),
    ("e-mail para contato", QuestionType::Email),
];

/// True iff `questions` contains every mandatory (question, type) pair.
///
/// Both the label and the type must match exactly. Order and extra questions
/// are irrelevant.
pub fn has_required_questions(questions: &[Question]) -> bool {
    REQUIRED_QUESTIONS.iter().all(|(label, kind)| {
        questions
            .iter()
            .any(|q| q.question == *label && q.question_type == *kind)
    })
}

/// A single input-shape violation reported by the request validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
