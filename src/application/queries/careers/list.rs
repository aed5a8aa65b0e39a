use super::CareerQueryService;
use crate::application::{
    dto::{AuthenticatedUser, CareerDto, PageDto},
    error::{ApplicationError, ApplicationResult},
    queries::listing::{normalize_search, page_request},
};

pub struct ListCareersQuery {
    pub search: Option<String>,
    pub page: u32,
}

impl CareerQueryService {
    /// Careers created by `actor`, optionally filtered by title.
    pub async fn list_careers(
        &self,
        actor: &AuthenticatedUser,
        query: ListCareersQuery,
    ) -> ApplicationResult<PageDto<CareerDto>> {
        let search = normalize_search(query.search);
        let page = self
            .repo
            .list_page(actor.id, search.as_deref(), page_request(query.page))
            .await
            .map_err(|err| ApplicationError::system(err.to_string()))?;

        Ok(PageDto::from_page(page, search))
    }
}
