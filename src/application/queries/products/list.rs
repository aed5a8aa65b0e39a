use super::ProductQueryService;
use crate::application::{
    dto::{AuthenticatedUser, PageDto, ProductDto},
    error::{ApplicationError, ApplicationResult},
    queries::listing::{normalize_search, page_request},
};

pub struct ListProductsQuery {
    pub search: Option<String>,
    pub page: u32,
}

impl ProductQueryService {
    /// Products created by `actor`, optionally filtered by name, about text or category name.
    pub async fn list_products(
        &self,
        actor: &AuthenticatedUser,
        query: ListProductsQuery,
    ) -> ApplicationResult<PageDto<ProductDto>> {
        let search = normalize_search(query.search);
        let page = self
            .repo
            .list_page(actor.id, search.as_deref(), page_request(query.page))
            .await
            .map_err(|err| ApplicationError::system(err.to_string()))?;

        Ok(PageDto::from_page(page, search))
    }
}
