//! HTTP DTOs for the survey endpoints.
//!
//! Request shapes carry explicit `validate` functions returning the full list
//! of violations; handlers run them before any command handler is invoked.

use chrono::SecondsFormat;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::survey::{
    has_required_questions, Answer, AnswerValue, Question, SortOrder, Survey, SurveyResponse,
    Violation,
};

const REQUIRED_QUESTIONS_MESSAGE: &str = "questions must contain the three mandatory items: \
     Público-alvo, Quantidade de estrelas, e-mail para contato";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /surveys`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSurveyRequest {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

impl CreateSurveyRequest {
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        if self.title.trim().is_empty() {
            violations.push(Violation::new("title", "title must not be empty"));
        }
        validate_questions(&self.questions, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Body of `PUT /surveys/:id`. Absent fields keep their stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSurveyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<Question>>,
}

impl UpdateSurveyRequest {
    /// Each supplied field is checked exactly as in create; absent fields are
    /// not validated.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                violations.push(Violation::new("title", "title must not be empty"));
            }
        }
        if let Some(questions) = &self.questions {
            validate_questions(questions, &mut violations);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Body of `POST /surveys/fill`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponseRequest {
    pub survey: String,
    pub responses: Vec<AnswerPayload>,
}

/// One `{question, answer}` pair of a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerPayload {
    pub question: String,
    pub answer: AnswerValue,
}

impl SubmitResponseRequest {
    /// Validates the shape and returns the parsed survey id.
    pub fn validate(&self) -> Result<ObjectId, Vec<Violation>> {
        let mut violations = Vec::new();
        let survey_id = match ObjectId::parse_str(&self.survey) {
            Ok(id) => Some(id),
            Err(_) => {
                violations.push(Violation::new("survey", "survey must be a valid object id"));
                None
            }
        };
        if self.responses.is_empty() {
            violations.push(Violation::new("responses", "responses must not be empty"));
        }
        if self.responses.iter().any(|a| a.question.trim().is_empty()) {
            violations.push(Violation::new("responses", "question must not be empty"));
        }
        match survey_id {
            Some(id) if violations.is_empty() => Ok(id),
            _ => Err(violations),
        }
    }
}

/// Query of `GET /surveys/responses`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponsesQuery {
    pub audience: Option<String>,
    pub sort: Option<String>,
}

impl ListResponsesQuery {
    /// Validates the query and returns the audience filter plus the sort
    /// order (default ascending).
    pub fn validate(&self) -> Result<(String, SortOrder), Vec<Violation>> {
        let mut violations = Vec::new();
        let audience = match self.audience.as_deref() {
            Some(a) if !a.is_empty() => Some(a.to_string()),
            _ => {
                violations.push(Violation::new("audience", "audience is required"));
                None
            }
        };
        let sort = match self.sort.as_deref() {
            None => Some(SortOrder::default()),
            Some(s) => {
                let parsed = SortOrder::parse(s);
                if parsed.is_none() {
                    violations.push(Violation::new("sort", "sort must be \"asc\" or \"desc\""));
                }
                parsed
            }
        };
        match (audience, sort) {
            (Some(audience), Some(sort)) if violations.is_empty() => Ok((audience, sort)),
            _ => Err(violations),
        }
    }
}

fn validate_questions(questions: &[Question], violations: &mut Vec<Violation>) {
    if questions.is_empty() {
        violations.push(Violation::new("questions", "questions must not be empty"));
    }
    if questions.iter().any(|q| q.question.trim().is_empty()) {
        violations.push(Violation::new("questions", "question must not be empty"));
    }
    if !has_required_questions(questions) {
        violations.push(Violation::new("questions", REQUIRED_QUESTIONS_MESSAGE));
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Survey as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyBody {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub created_at: String,
    // Serialized even when null; clients read the null as "never updated".
    pub updated_at: Option<String>,
}

impl From<Survey> for SurveyBody {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.id.to_hex(),
            title: survey.title,
            description: survey.description,
            questions: survey.questions,
            created_at: rfc3339(survey.created_at),
            updated_at: survey.updated_at.map(rfc3339),
        }
    }
}

/// Stored response as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseBody {
    #[serde(rename = "_id")]
    pub id: String,
    pub survey: String,
    pub responses: Vec<Answer>,
    pub created_at: String,
}

impl From<SurveyResponse> for ResponseBody {
    fn from(response: SurveyResponse) -> Self {
        Self {
            id: response.id.to_hex(),
            survey: response.survey.to_hex(),
            responses: response.responses,
            created_at: rfc3339(response.created_at),
        }
    }
}

/// Error body shape shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

fn rfc3339(datetime: chrono::DateTime<chrono::Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}
