// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

pub struct DeleteProductCommand {
    pub id: i64,
}

impl ProductCommandService {
    pub async fn delete_product(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteProductCommand,
    ) -> ApplicationResult<()> {
        let id = ProductId::new(command.id).map_err(|_| {
            ApplicationError::not_found(format!("product {} not found", command.id))
        })?;
        self.workflow.delete(self.repo.as_ref(), actor, id).await
    }
}
