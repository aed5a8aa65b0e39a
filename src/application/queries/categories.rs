// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryRepository,
};

/// Category options for the product form.
pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self
            .repo
            .list_all()
            .await
            .map_err(|err| ApplicationError::system(err.to_string()))?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
