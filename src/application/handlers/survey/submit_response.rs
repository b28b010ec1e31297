//! SubmitResponseHandler - Command handler for filling a survey.

use std::collections::HashSet;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::survey::{Answer, SurveyError, SurveyResponse};
use crate::ports::{ResponseRepository, SurveyRepository};

/// Command to submit answers against an existing survey.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub survey: ObjectId,
    pub responses: Vec<Answer>,
}

/// Handler for response submission.
pub struct SubmitResponseHandler {
    surveys: Arc<dyn SurveyRepository>,
    responses: Arc<dyn ResponseRepository>,
}

impl SubmitResponseHandler {
    pub fn new(surveys: Arc<dyn SurveyRepository>, responses: Arc<dyn ResponseRepository>) -> Self {
        Self { surveys, responses }
    }

    /// Validates every submitted answer against the survey's question list
    /// before anything is written. The first unknown question aborts the
    /// whole submission.
    pub async fn handle(&self, cmd: SubmitResponseCommand) -> Result<SurveyResponse, SurveyError> {
        let survey = self
            .surveys
            .find_by_id(cmd.survey)
            .await?
            .ok_or(SurveyError::SurveyNotFound)?;

        let known: HashSet<&str> = survey.questions.iter().map(|q| q.question.as_str()).collect();

        for answer in &cmd.responses {
            if !known.contains(answer.question.as_str()) {
                return Err(SurveyError::QuestionNotFound(answer.question.clone()));
            }
        }

        let response = SurveyResponse::new(cmd.survey, cmd.responses);
        self.responses.insert(&response).await?;

        Ok(response)
    }
}
