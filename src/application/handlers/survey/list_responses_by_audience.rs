//! ListResponsesByAudienceHandler - Query handler for the audience listing.

use std::sync::Arc;

use crate::domain::survey::{SortOrder, SurveyError, SurveyResponse};
use crate::ports::ResponseRepository;

/// Query for responses whose answers contain the audience value, ranked by
/// the stars answer.
#[derive(Debug, Clone)]
pub struct ListResponsesByAudienceQuery {
    pub audience: String,
    pub sort: SortOrder,
}

/// Handler for the audience listing. Filtering and ranking run inside the
/// store's aggregation engine; this handler only delegates.
pub struct ListResponsesByAudienceHandler {
    responses: Arc<dyn ResponseRepository>,
}

impl ListResponsesByAudienceHandler {
    pub fn new(responses: Arc<dyn ResponseRepository>) -> Self {
        Self { responses }
    }

    pub async fn handle(
        &self,
        query: ListResponsesByAudienceQuery,
    ) -> Result<Vec<SurveyResponse>, SurveyError> {
        self.responses
            .list_by_audience(&query.audience, query.sort)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::{Answer, AnswerValue};
    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;
    use std::sync::Mutex;

    struct MockResponseRepository {
        results: Vec<SurveyResponse>,
        calls: Mutex<Vec<(String, SortOrder)>>,
        fail: bool,
    }

    impl MockResponseRepository {
        fn returning(results: Vec<SurveyResponse>) -> Self {
            Self {
                results,
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                results: Vec::new(),
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn calls(&self) -> Vec<(String, SortOrder)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResponseRepository for MockResponseRepository {
        async fn insert(&self, _response: &SurveyResponse) -> Result<(), SurveyError> {
            Ok(())
        }

        async fn list_by_audience(
            &self,
            audience: &str,
            sort: SortOrder,
        ) -> Result<Vec<SurveyResponse>, SurveyError> {
            if self.fail {
                return Err(SurveyError::store("Simulated aggregation failure"));
            }
            self.calls
                .lock()
                .unwrap()
                .push((audience.to_string(), sort));
            Ok(self.results.clone())
        }
    }

    fn sample_response() -> SurveyResponse {
        SurveyResponse::new(
            ObjectId::new(),
            vec![Answer {
                question: "Público-alvo".to_string(),
                answer: AnswerValue::Text("Teste".to_string()),
            }],
        )
    }

    #[tokio::test]
    async fn passes_filter_and_sort_to_the_repository() {
        let repo = Arc::new(MockResponseRepository::returning(vec![sample_response()]));
        let handler = ListResponsesByAudienceHandler::new(repo.clone());

        let query = ListResponsesByAudienceQuery {
            audience: "Teste".to_string(),
            sort: SortOrder::Desc,
        };

        let results = handler.handle(query).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(repo.calls(), vec![("Teste".to_string(), SortOrder::Desc)]);
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let repo = Arc::new(MockResponseRepository::failing());
        let handler = ListResponsesByAudienceHandler::new(repo);

        let query = ListResponsesByAudienceQuery {
            audience: "Teste".to_string(),
            sort: SortOrder::Asc,
        };

        let result = handler.handle(query).await;
        assert!(matches!(result, Err(SurveyError::Store(_))));
    }
}
