//! HTTP handlers for the survey endpoints.
//!
//! Status mapping is endpoint-specific and intentionally uneven: a missing
//! update target is 400 while a missing fill target is 404. Existing clients
//! depend on both, so the mapping lives here per endpoint rather than in a
//! single error-to-status table.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson::oid::ObjectId;

use crate::application::handlers::survey::{
    CreateSurveyCommand, CreateSurveyHandler, ListResponsesByAudienceHandler,
    ListResponsesByAudienceQuery, SubmitResponseCommand, SubmitResponseHandler,
    UpdateSurveyCommand, UpdateSurveyHandler,
};
use crate::domain::survey::{Answer, SurveyError, Violation};

use super::dto::{
    CreateSurveyRequest, ErrorBody, ListResponsesQuery, ResponseBody, SubmitResponseRequest,
    SurveyBody, UpdateSurveyRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyHandlers {
    create_handler: Arc<CreateSurveyHandler>,
    update_handler: Arc<UpdateSurveyHandler>,
    submit_handler: Arc<SubmitResponseHandler>,
    list_handler: Arc<ListResponsesByAudienceHandler>,
}

impl SurveyHandlers {
    pub fn new(
        create_handler: Arc<CreateSurveyHandler>,
        update_handler: Arc<UpdateSurveyHandler>,
        submit_handler: Arc<SubmitResponseHandler>,
        list_handler: Arc<ListResponsesByAudienceHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            submit_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /surveys - create a survey form
pub async fn create_survey(
    State(handlers): State<SurveyHandlers>,
    Json(req): Json<CreateSurveyRequest>,
) -> Response {
    if let Err(violations) = req.validate() {
        return validation_failure(violations);
    }

    let cmd = CreateSurveyCommand {
        title: req.title,
        description: req.description,
        questions: req.questions,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(survey) => (StatusCode::CREATED, Json(SurveyBody::from(survey))).into_response(),
        Err(e) => handle_create_error(e),
    }
}

/// PUT /surveys/:id - partially update an existing survey
pub async fn update_survey(
    State(handlers): State<SurveyHandlers>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSurveyRequest>,
) -> Response {
    let id = match ObjectId::parse_str(&id) {
        Ok(id) => id,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "id must be a valid object id"),
    };

    if let Err(violations) = req.validate() {
        return validation_failure(violations);
    }

    let cmd = UpdateSurveyCommand {
        id,
        title: req.title,
        description: req.description,
        questions: req.questions,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(survey) => (StatusCode::OK, Json(SurveyBody::from(survey))).into_response(),
        // Every update failure is 400, not-found included.
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.message()),
    }
}

/// POST /surveys/fill - submit answers against an existing survey
pub async fn fill_survey(
    State(handlers): State<SurveyHandlers>,
    Json(req): Json<SubmitResponseRequest>,
) -> Response {
    let survey_id = match req.validate() {
        Ok(id) => id,
        Err(violations) => return validation_failure(violations),
    };

    let cmd = SubmitResponseCommand {
        survey: survey_id,
        responses: req
            .responses
            .into_iter()
            .map(|a| Answer {
                question: a.question,
                answer: a.answer,
            })
            .collect(),
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(response) => (StatusCode::CREATED, Json(ResponseBody::from(response))).into_response(),
        Err(e) => handle_fill_error(e),
    }
}

/// GET /surveys/responses - list responses by audience, ranked by stars
pub async fn list_responses(
    State(handlers): State<SurveyHandlers>,
    Query(params): Query<ListResponsesQuery>,
) -> Response {
    let (audience, sort) = match params.validate() {
        Ok(validated) => validated,
        Err(violations) => return validation_failure(violations),
    };

    let query = ListResponsesByAudienceQuery { audience, sort };

    match handlers.list_handler.handle(query).await {
        Ok(responses) => {
            let body: Vec<ResponseBody> = responses.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.message()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_create_error(error: SurveyError) -> Response {
    let status = match error {
        SurveyError::Duplicate => StatusCode::NOT_ACCEPTABLE,
        _ => StatusCode::BAD_REQUEST,
    };
    error_response(status, error.message())
}

fn handle_fill_error(error: SurveyError) -> Response {
    let status = match error {
        SurveyError::SurveyNotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    error_response(status, error.message())
}

fn validation_failure(violations: Vec<Violation>) -> Response {
    let message = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    error_response(StatusCode::BAD_REQUEST, message)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        message: message.into(),
        status_code: status.as_u16(),
    };
    tracing::debug!(status = %status, message = %body.message, "request rejected");
    (status, Json(body)).into_response()
}
