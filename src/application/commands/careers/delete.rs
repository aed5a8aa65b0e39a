// src/application/commands/careers/delete.rs
use super::CareerCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::career::CareerId,
};

pub struct DeleteCareerCommand {
    pub id: i64,
}

impl CareerCommandService {
    pub async fn delete_career(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCareerCommand,
    ) -> ApplicationResult<()> {
        let id = CareerId::new(command.id).map_err(|_| {
            ApplicationError::not_found(format!("career {} not found", command.id))
        })?;
        self.workflow.delete(self.repo.as_ref(), actor, id).await
    }
}
