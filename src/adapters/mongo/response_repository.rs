//! MongoDB implementation of ResponseRepository, including the audience
//! aggregation pipeline.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, from_document, Document};
use mongodb::{Collection, Database};

use crate::domain::survey::{SortOrder, SurveyError, SurveyResponse};
use crate::ports::ResponseRepository;

use super::documents::ResponseDocument;

const COLLECTION: &str = "responses";

/// The question whose answer supplies the ranking key.
const STARS_QUESTION: &str = "Quantidade de estrelas";

/// MongoDB implementation of ResponseRepository.
#[derive(Clone)]
pub struct MongoResponseRepository {
    collection: Collection<ResponseDocument>,
}

impl MongoResponseRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ResponseRepository for MongoResponseRepository {
    async fn insert(&self, response: &SurveyResponse) -> Result<(), SurveyError> {
        let document = ResponseDocument::from(response);
        self.collection
            .insert_one(&document, None)
            .await
            .map_err(|e| SurveyError::store(format!("Failed to insert response: {}", e)))?;

        Ok(())
    }

    async fn list_by_audience(
        &self,
        audience: &str,
        sort: SortOrder,
    ) -> Result<Vec<SurveyResponse>, SurveyError> {
        let mut cursor = self
            .collection
            .aggregate(audience_pipeline(audience, sort), None)
            .await
            .map_err(|e| SurveyError::store(format!("Failed to run audience query: {}", e)))?;

        let mut responses = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| SurveyError::store(format!("Failed to read audience results: {}", e)))?
        {
            let document: ResponseDocument = from_document(document)
                .map_err(|e| SurveyError::store(format!("Failed to decode response: {}", e)))?;
            responses.push(SurveyResponse::from(document));
        }

        Ok(responses)
    }
}

/// Builds the audience listing pipeline.
///
/// The `$match` filters on any answer value, not only the target-audience
/// question. A transient `stars` field is derived from the
/// "Quantidade de estrelas" entry, used for the sort, then stripped so the
/// returned documents keep their stored shape. Documents without a stars
/// answer get a null sort key and rank per Mongo's null ordering.
fn audience_pipeline(audience: &str, sort: SortOrder) -> Vec<Document> {
    let direction = match sort {
        SortOrder::Asc => 1,
        SortOrder::Desc => -1,
    };

    vec![
        doc! { "$match": { "responses.answer": audience } },
        doc! { "$addFields": {
            "stars": {
                "$arrayElemAt": [
                    { "$filter": {
                        "input": "$responses",
                        "as": "response",
                        "cond": { "$eq": ["$$response.question", STARS_QUESTION] },
                    } },
                    0,
                ],
            },
        } },
        doc! { "$sort": { "stars.answer": direction } },
        doc! { "$project": { "stars": 0 } },
    ]
}
