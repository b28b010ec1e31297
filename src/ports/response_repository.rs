//! Response repository port.

use async_trait::async_trait;

use crate::domain::survey::{SortOrder, SurveyError, SurveyResponse};

/// Repository port for submitted-response persistence and the audience query.
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Insert a submitted response.
    ///
    /// # Errors
    ///
    /// - `Store` on persistence failure
    async fn insert(&self, response: &SurveyResponse) -> Result<(), SurveyError>;

    /// List every response having at least one answer value exactly equal to
    /// `audience`, ordered by the numeric "Quantidade de estrelas" answer.
    ///
    /// The filter matches any answer field, not only the target-audience
    /// question. Responses without a stars answer sort per the store's
    /// null ordering.
    async fn list_by_audience(
        &self,
        audience: &str,
        sort: SortOrder,
    ) -> Result<Vec<SurveyResponse>, SurveyError>;
}
