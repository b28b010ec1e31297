//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod response_repository;
mod survey_repository;

pub use response_repository::ResponseRepository;
pub use survey_repository::SurveyRepository;
