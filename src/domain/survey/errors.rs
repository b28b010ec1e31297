//! Survey-specific error types.

/// Errors surfaced by the survey operations.
///
/// The message strings are part of the HTTP contract and are matched verbatim
/// by existing clients; do not reword them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// A survey with the same title already exists.
    Duplicate,
    /// The update target does not exist.
    NotFound,
    /// The fill target does not exist.
    SurveyNotFound,
    /// A submitted answer references a question the survey does not have.
    QuestionNotFound(String),
    /// Input shape or invariant violation.
    Validation(String),
    /// Any store or runtime failure.
    Store(String),
}

impl SurveyError {
    pub fn validation(message: impl Into<String>) -> Self {
        SurveyError::Validation(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        SurveyError::Store(message.into())
    }

    pub fn message(&self) -> String {
        match self {
            SurveyError::Duplicate => "Survey already exists".to_string(),
            SurveyError::NotFound => "object not found".to_string(),
            SurveyError::SurveyNotFound => "Survey not found".to_string(),
            SurveyError::QuestionNotFound(question) => {
                format!("Question not found: {}", question)
            }
            SurveyError::Validation(message) => message.clone(),
            SurveyError::Store(message) => message.clone(),
        }
    }
}

impl std::fmt::Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SurveyError {}
