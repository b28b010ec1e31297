//! Persisted document shapes.
//!
//! These mirror the stored BSON field-for-field; the domain entities convert
//! through them so wire-shape concerns stay local to this module.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::survey::{Answer, Question, Survey, SurveyResponse};

/// Stored shape of a survey in the `surveys` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

impl From<&Survey> for SurveyDocument {
    fn from(survey: &Survey) -> Self {
        Self {
            id: survey.id,
            title: survey.title.clone(),
            description: survey.description.clone(),
            questions: survey.questions.clone(),
            created_at: DateTime::from_chrono(survey.created_at),
            updated_at: survey.updated_at.map(DateTime::from_chrono),
        }
    }
}

impl From<SurveyDocument> for Survey {
    fn from(document: SurveyDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            description: document.description,
            questions: document.questions,
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.map(|dt| dt.to_chrono()),
        }
    }
}

/// Stored shape of a submitted response in the `responses` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub survey: ObjectId,
    pub responses: Vec<Answer>,
    pub created_at: DateTime,
}

impl From<&SurveyResponse> for ResponseDocument {
    fn from(response: &SurveyResponse) -> Self {
        Self {
            id: response.id,
            survey: response.survey,
            responses: response.responses.clone(),
            created_at: DateTime::from_chrono(response.created_at),
        }
    }
}

impl From<ResponseDocument> for SurveyResponse {
    fn from(document: ResponseDocument) -> Self {
        Self {
            id: document.id,
            survey: document.survey,
            responses: document.responses,
            created_at: document.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::QuestionType;
    use mongodb::bson;

    fn sample_survey() -> Survey {
        Survey::new(
            "Pesquisa de Satisfação".to_string(),
            None,
            vec![
                Question::new("Público-alvo", QuestionType::Text),
                Question::new("Quantidade de estrelas", QuestionType::Rating),
                Question::new("e-mail para contato", QuestionType::Email),
            ],
        )
    }

    #[test]
    fn survey_document_keeps_null_update_timestamp() {
        let document = SurveyDocument::from(&sample_survey());
        let bson = bson::to_document(&document).unwrap();
        // updated_at must serialize as an explicit null, matching the stored
        // shape, not be omitted.
        assert_eq!(bson.get("updated_at"), Some(&bson::Bson::Null));
    }

    #[test]
    fn survey_document_omits_missing_description() {
        let document = SurveyDocument::from(&sample_survey());
        let bson = bson::to_document(&document).unwrap();
        assert!(!bson.contains_key("description"));
    }

    #[test]
    fn survey_document_uses_type_field_for_questions() {
        let document = SurveyDocument::from(&sample_survey());
        let bson = bson::to_document(&document).unwrap();
        let questions = bson.get_array("questions").unwrap();
        let first = questions[0].as_document().unwrap();
        assert_eq!(first.get_str("question").unwrap(), "Público-alvo");
        assert_eq!(first.get_str("type").unwrap(), "text");
    }

    #[test]
    fn survey_roundtrips_through_document() {
        let survey = sample_survey();
        let document = SurveyDocument::from(&survey);
        let back = Survey::from(document);
        assert_eq!(back.id, survey.id);
        assert_eq!(back.title, survey.title);
        assert_eq!(back.questions, survey.questions);
        // BSON datetimes carry millisecond precision.
        assert_eq!(
            back.created_at.timestamp_millis(),
            survey.created_at.timestamp_millis()
        );
    }
}
