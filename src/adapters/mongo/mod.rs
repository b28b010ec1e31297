//! MongoDB implementations of the repository ports.

mod documents;
mod response_repository;
mod survey_repository;

pub use response_repository::MongoResponseRepository;
pub use survey_repository::MongoSurveyRepository;
