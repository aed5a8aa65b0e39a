use super::ProductQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

pub struct GetProductQuery {
    pub id: i64,
}

impl ProductQueryService {
    pub async fn get_product(
        &self,
        actor: &AuthenticatedUser,
        query: GetProductQuery,
    ) -> ApplicationResult<ProductDto> {
        let not_found = || ApplicationError::not_found(format!("product {} not found", query.id));
        let id = ProductId::new(query.id).map_err(|_| not_found())?;

        let product = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|err| ApplicationError::system(err.to_string()))?
            .ok_or_else(not_found)?;
        actor.ensure_owner(&product)?;

        Ok(product.into())
    }
}
