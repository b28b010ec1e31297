//! Submitted response entity and answer value types.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An answer value as submitted: free text or a number.
///
/// Untagged, so the wire shape is the bare JSON value. Variant order matters:
/// integers must be tried before floats so whole numbers stay integral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// One answered question on a submitted response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: AnswerValue,
}

/// One respondent's submission against a specific survey.
///
/// Responses are immutable once stored; there is no update timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResponse {
    pub id: ObjectId,
    pub survey: ObjectId,
    pub responses: Vec<Answer>,
    pub created_at: DateTime<Utc>,
}

impl SurveyResponse {
    /// Creates a new response with a generated id and `created_at` set to now.
    pub fn new(survey: ObjectId, responses: Vec<Answer>) -> Self {
        Self {
            id: ObjectId::new(),
            survey,
            responses,
            created_at: Utc::now(),
        }
    }
}

/// Sort direction for the stars ranking in the audience listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses the `sort` query parameter. Returns `None` for anything other
    /// than `"asc"` or `"desc"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}
