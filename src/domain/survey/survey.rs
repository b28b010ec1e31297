//! Survey entity and question value types.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The kind of input a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Rating,
    Email,
}

/// A single question on a survey form.
///
/// The `question` string doubles as the key that submitted answers are
/// matched against, so it is compared by exact equality throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

impl Question {
    pub fn new(question: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            question: question.into(),
            question_type,
        }
    }
}

/// A named form definition with an ordered question list.
///
/// `updated_at` stays `None` until the first update and is bumped on every
/// subsequent one; `created_at` never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    pub id: ObjectId,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Survey {
    /// Creates a new survey with a generated id and `created_at` set to now.
    pub fn new(title: String, description: Option<String>, questions: Vec<Question>) -> Self {
        Self {
            id: ObjectId::new(),
            title,
            description,
            questions,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_survey_has_no_update_timestamp() {
        let survey = Survey::new(
            "Pesquisa de Satisfação".to_string(),
            None,
            vec![Question::new("Público-alvo", QuestionType::Text)],
        );
        assert!(survey.updated_at.is_none());
        assert_eq!(survey.title, "Pesquisa de Satisfação");
    }

    #[test]
    fn question_type_serializes_lowercase() {
        let json = serde_json::to_string(&QuestionType::Rating).unwrap();
        assert_eq!(json, "\"rating\"");
    }

    #[test]
    fn question_serializes_with_type_key() {
        let question = Question::new("Quantidade de estrelas", QuestionType::Rating);
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["question"], "Quantidade de estrelas");
        assert_eq!(json["type"], "rating");
    }

    #[test]
    fn question_rejects_unknown_type() {
        let json = r#"{"question": "Idade", "type": "checkbox"}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
