//! Survey bounded context: form definitions, submitted responses, and the
//! rules that tie them together.

mod errors;
mod response;
mod survey;
mod validation;

pub use errors::SurveyError;
pub use response::{Answer, AnswerValue, SortOrder, SurveyResponse};
pub use survey::{Question, QuestionType, Survey};
pub use validation::{has_required_questions, Violation, REQUIRED_QUESTIONS};
