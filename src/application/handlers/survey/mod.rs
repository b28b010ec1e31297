//! Handlers for the survey operations: create, update, submit response,
//! and list responses by audience.

mod create_survey;
mod list_responses_by_audience;
mod submit_response;
mod update_survey;

pub use create_survey::{CreateSurveyCommand, CreateSurveyHandler};
pub use list_responses_by_audience::{
    ListResponsesByAudienceHandler, ListResponsesByAudienceQuery,
};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler};
pub use update_survey::{UpdateSurveyCommand, UpdateSurveyHandler};
