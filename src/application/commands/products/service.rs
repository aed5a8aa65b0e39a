// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::workflow::EntityWorkflow,
        error::{ApplicationError, ApplicationResult, ValidationErrors},
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        product::ProductRepository,
    },
};

pub struct ProductCommandService {
    pub(super) repo: Arc<ProductRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) workflow: Arc<EntityWorkflow>,
}

impl ProductCommandService {
    pub fn new(
        repo: Arc<ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        workflow: Arc<EntityWorkflow>,
    ) -> Self {
        Self {
            repo,
            categories,
            workflow,
        }
    }

    /// Field-level check that `category_id` names a stored category. Ids that fail
    /// basic validation are left to the form validator.
    pub(super) async fn check_category(
        &self,
        raw_id: i64,
    ) -> ApplicationResult<Result<(), ValidationErrors>> {
        let Ok(id) = CategoryId::new(raw_id) else {
            return Ok(Ok(()));
        };

        let exists = self
            .categories
            .exists(id)
            .await
            .map_err(|err| ApplicationError::system(err.to_string()))?;
        if exists {
            Ok(Ok(()))
        } else {
            let mut errors = ValidationErrors::new();
            errors.add("category_id", "The selected category_id is invalid.");
            Ok(Err(errors))
        }
    }
}
