//! UpdateSurveyHandler - Command handler for partial survey updates.

use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::domain::survey::{Question, Survey, SurveyError};
use crate::ports::SurveyRepository;

/// Command to update an existing survey. Absent fields keep their stored
/// values.
#[derive(Debug, Clone)]
pub struct UpdateSurveyCommand {
    pub id: ObjectId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<Question>>,
}

/// Handler for updating surveys.
///
/// Title uniqueness is not re-checked against other surveys on update; that
/// matches the behavior existing clients rely on.
pub struct UpdateSurveyHandler {
    surveys: Arc<dyn SurveyRepository>,
}

impl UpdateSurveyHandler {
    pub fn new(surveys: Arc<dyn SurveyRepository>) -> Self {
        Self { surveys }
    }

    pub async fn handle(&self, cmd: UpdateSurveyCommand) -> Result<Survey, SurveyError> {
        let mut survey = self
            .surveys
            .find_by_id(cmd.id)
            .await?
            .ok_or(SurveyError::NotFound)?;

        if let Some(title) = cmd.title {
            survey.title = title;
        }
        if let Some(description) = cmd.description {
            survey.description = Some(description);
        }
        if let Some(questions) = cmd.questions {
            survey.questions = questions;
        }
        survey.updated_at = Some(Utc::now());

        self.surveys.update(&survey).await?;

        Ok(survey)
    }
}
