// src/application/commands/products/create.rs
use super::{ProductCommandService, form::ProductFields};
use crate::application::{
    commands::cover::{CoverFile, PRODUCT_COVER},
    dto::{AuthenticatedUser, ProductDto},
    error::{ApplicationResult, ValidationErrors},
};

pub struct CreateProductCommand {
    pub fields: ProductFields,
    pub cover: Option<CoverFile>,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        actor: &AuthenticatedUser,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let CreateProductCommand { fields, cover } = command;
        let category = self.check_category(fields.category_id).await?;
        let ((valid, cover), ()) = ValidationErrors::zip(
            ValidationErrors::zip(fields.validate(), PRODUCT_COVER.require(cover.as_ref())),
            category,
        )?;

        let created = self
            .workflow
            .create(self.repo.as_ref(), actor, valid, cover)
            .await?;
        Ok(created.into())
    }
}
