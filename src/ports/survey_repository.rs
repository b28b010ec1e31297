//! Survey repository port.
//!
//! Defines the contract for persisting and retrieving Survey documents.
//! Implementations handle the actual database operations.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::survey::{Survey, SurveyError};

/// Repository port for Survey persistence.
///
/// Implementations must enforce title uniqueness at the storage layer so the
/// pre-insert existence check is not the only guard.
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Insert a new survey.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if the store rejects the title as already taken
    /// - `Store` on any other persistence failure
    async fn insert(&self, survey: &Survey) -> Result<(), SurveyError>;

    /// Replace an existing survey document.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no document matches the survey id
    /// - `Store` on any other persistence failure
    async fn update(&self, survey: &Survey) -> Result<(), SurveyError>;

    /// Find a survey by its exact title. Returns `None` if not found.
    async fn find_by_title(&self, title: &str) -> Result<Option<Survey>, SurveyError>;

    /// Find a survey by id. Returns `None` if not found.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Survey>, SurveyError>;
}
