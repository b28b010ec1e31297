//! CreateSurveyHandler - Command handler for creating surveys.

use std::sync::Arc;

use crate::domain::survey::{Question, Survey, SurveyError};
use crate::ports::SurveyRepository;

/// Command to create a new survey.
#[derive(Debug, Clone)]
pub struct CreateSurveyCommand {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

/// Handler for creating surveys.
pub struct CreateSurveyHandler {
    surveys: Arc<dyn SurveyRepository>,
}

impl CreateSurveyHandler {
    pub fn new(surveys: Arc<dyn SurveyRepository>) -> Self {
        Self { surveys }
    }

    /// Creates a survey if no other survey carries the same title.
    ///
    /// The title lookup is a best-effort guard; the unique index at the
    /// storage layer is the authoritative one, and the repository reports a
    /// constraint violation as `Duplicate` too.
    pub async fn handle(&self, cmd: CreateSurveyCommand) -> Result<Survey, SurveyError> {
        if self.surveys.find_by_title(&cmd.title).await?.is_some() {
            return Err(SurveyError::Duplicate);
        }

        let survey = Survey::new(cmd.title, cmd.description, cmd.questions);
        self.surveys.insert(&survey).await?;

        Ok(survey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::QuestionType;
    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;
    use std::sync::Mutex;

    struct MockSurveyRepository {
        surveys: Mutex<Vec<Survey>>,
        fail_insert: bool,
    }

    impl MockSurveyRepository {
        fn new() -> Self {
            Self {
                surveys: Mutex::new(Vec::new()),
                fail_insert: false,
            }
        }

        fn failing() -> Self {
            Self {
                surveys: Mutex::new(Vec::new()),
                fail_insert: true,
            }
        }

        fn with_existing(survey: Survey) -> Self {
            Self {
                surveys: Mutex::new(vec![survey]),
                fail_insert: false,
            }
        }

        fn stored(&self) -> Vec<Survey> {
            self.surveys.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SurveyRepository for MockSurveyRepository {
        async fn insert(&self, survey: &Survey) -> Result<(), SurveyError> {
            if self.fail_insert {
                return Err(SurveyError::store("Simulated insert failure"));
            }
            self.surveys.lock().unwrap().push(survey.clone());
            Ok(())
        }

        async fn update(&self, _survey: &Survey) -> Result<(), SurveyError> {
            Ok(())
        }

        async fn find_by_title(&self, title: &str) -> Result<Option<Survey>, SurveyError> {
            Ok(self
                .surveys
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.title == title)
                .cloned())
        }

        async fn find_by_id(&self, id: ObjectId) -> Result<Option<Survey>, SurveyError> {
            Ok(self
                .surveys
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == id)
                .cloned())
        }
    }

    fn valid_questions() -> Vec<Question> {
        vec![
            Question::new("Público-alvo", QuestionType::Text),
            Question::new("Quantidade de estrelas", QuestionType::Rating),
            Question::new("e-mail para contato", QuestionType::Email),
        ]
    }

    #[tokio::test]
    async fn creates_survey_with_unique_title() {
        let repo = Arc::new(MockSurveyRepository::new());
        let handler = CreateSurveyHandler::new(repo.clone());

        let cmd = CreateSurveyCommand {
            title: "Pesquisa de Satisfação".to_string(),
            description: None,
            questions: valid_questions(),
        };

        let survey = handler.handle(cmd).await.unwrap();
        assert_eq!(survey.title, "Pesquisa de Satisfação");
        assert!(survey.updated_at.is_none());
        assert_eq!(repo.stored().len(), 1);
        assert_eq!(repo.stored()[0].id, survey.id);
    }

    #[tokio::test]
    async fn rejects_duplicate_title() {
        let existing = Survey::new("Pesquisa de Satisfação".to_string(), None, valid_questions());
        let repo = Arc::new(MockSurveyRepository::with_existing(existing));
        let handler = CreateSurveyHandler::new(repo.clone());

        let cmd = CreateSurveyCommand {
            title: "Pesquisa de Satisfação".to_string(),
            description: Some("different description".to_string()),
            questions: valid_questions(),
        };

        let result = handler.handle(cmd).await;
        assert_eq!(result, Err(SurveyError::Duplicate));
        assert_eq!(repo.stored().len(), 1);
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let repo = Arc::new(MockSurveyRepository::failing());
        let handler = CreateSurveyHandler::new(repo);

        let cmd = CreateSurveyCommand {
            title: "Pesquisa".to_string(),
            description: None,
            questions: valid_questions(),
        };

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(SurveyError::Store(_))));
    }

    #[tokio::test]
    async fn keeps_description_when_provided() {
        let repo = Arc::new(MockSurveyRepository::new());
        let handler = CreateSurveyHandler::new(repo);

        let cmd = CreateSurveyCommand {
            title: "Pesquisa".to_string(),
            description: Some("Pesquisa da loja".to_string()),
            questions: valid_questions(),
        };

        let survey = handler.handle(cmd).await.unwrap();
        assert_eq!(survey.description.as_deref(), Some("Pesquisa da loja"));
    }
}
