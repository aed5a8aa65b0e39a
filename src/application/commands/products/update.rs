// src/application/commands/products/update.rs
use super::{ProductCommandService, form::ProductFields};
use crate::{
    application::{
        commands::cover::{CoverFile, PRODUCT_COVER},
        dto::{AuthenticatedUser, ProductDto},
        error::{ApplicationError, ApplicationResult, ValidationErrors},
    },
    domain::product::ProductId,
};

pub struct UpdateProductCommand {
    pub id: i64,
    pub fields: ProductFields,
    /// `None` keeps the stored cover.
    pub cover: Option<CoverFile>,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let UpdateProductCommand { id, fields, cover } = command;
        let id = ProductId::new(id)
            .map_err(|_| ApplicationError::not_found(format!("product {id} not found")))?;

        let category = self.check_category(fields.category_id).await?;
        let ((valid, cover), ()) = ValidationErrors::zip(
            ValidationErrors::zip(fields.validate(), PRODUCT_COVER.optional(cover.as_ref())),
            category,
        )?;

        let updated = self
            .workflow
            .update(self.repo.as_ref(), actor, id, valid, cover)
            .await?;
        Ok(updated.into())
    }
}
