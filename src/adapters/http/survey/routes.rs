//! HTTP routes for the survey endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_survey, fill_survey, list_responses, update_survey, SurveyHandlers,
};

/// Creates the survey router. Mounted under `/surveys`.
///
/// The static `/fill` and `/responses` segments must win over the `/:id`
/// capture; axum resolves static routes first, so both coexist.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/", post(create_survey))
        .route("/fill", post(fill_survey))
        .route("/responses", get(list_responses))
        .route("/:id", put(update_survey))
        .with_state(handlers)
}
