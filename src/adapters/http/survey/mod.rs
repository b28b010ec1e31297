//! HTTP adapter for the survey endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::SurveyHandlers;
pub use routes::survey_routes;
