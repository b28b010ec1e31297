//! MongoDB implementation of SurveyRepository.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::domain::survey::{Survey, SurveyError};
use crate::ports::SurveyRepository;

use super::documents::SurveyDocument;

const COLLECTION: &str = "surveys";

/// Server error code for a unique-index violation.
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB implementation of SurveyRepository.
#[derive(Clone)]
pub struct MongoSurveyRepository {
    collection: Collection<SurveyDocument>,
}

impl MongoSurveyRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// Creates the unique index on `title`.
    ///
    /// Called once at startup. The index is the authoritative guard against
    /// two concurrent creates slipping past the pre-insert title lookup.
    pub async fn ensure_indexes(&self) -> Result<(), SurveyError> {
        let index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index, None)
            .await
            .map_err(|e| SurveyError::store(format!("Failed to create title index: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl SurveyRepository for MongoSurveyRepository {
    async fn insert(&self, survey: &Survey) -> Result<(), SurveyError> {
        let document = SurveyDocument::from(survey);
        self.collection
            .insert_one(&document, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    SurveyError::Duplicate
                } else {
                    SurveyError::store(format!("Failed to insert survey: {}", e))
                }
            })?;

        Ok(())
    }

    async fn update(&self, survey: &Survey) -> Result<(), SurveyError> {
        let document = SurveyDocument::from(survey);
        let result = self
            .collection
            .replace_one(doc! { "_id": survey.id }, &document, None)
            .await
            .map_err(|e| SurveyError::store(format!("Failed to update survey: {}", e)))?;

        if result.matched_count == 0 {
            return Err(SurveyError::NotFound);
        }

        Ok(())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Survey>, SurveyError> {
        let document = self
            .collection
            .find_one(doc! { "title": title }, None)
            .await
            .map_err(|e| SurveyError::store(format!("Failed to fetch survey by title: {}", e)))?;

        Ok(document.map(Survey::from))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Survey>, SurveyError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| SurveyError::store(format!("Failed to fetch survey: {}", e)))?;

        Ok(document.map(Survey::from))
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        _ => false,
    }
}
