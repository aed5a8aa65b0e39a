// src/application/commands/careers/update.rs
use super::{CareerCommandService, form::CareerFields};
use crate::{
    application::{
        commands::cover::{CAREER_COVER, CoverFile},
        dto::{AuthenticatedUser, CareerDto},
        error::{ApplicationError, ApplicationResult, ValidationErrors},
    },
    domain::career::CareerId,
};

pub struct UpdateCareerCommand {
    pub id: i64,
    pub fields: CareerFields,
    /// `None` keeps the stored cover.
    pub cover: Option<CoverFile>,
}

impl CareerCommandService {
    pub async fn update_career(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCareerCommand,
    ) -> ApplicationResult<CareerDto> {
        let UpdateCareerCommand { id, fields, cover } = command;
        let id = CareerId::new(id)
            .map_err(|_| ApplicationError::not_found(format!("career {id} not found")))?;
        let (valid, cover) =
            ValidationErrors::zip(fields.validate(), CAREER_COVER.optional(cover.as_ref()))?;

        let updated = self
            .workflow
            .update(self.repo.as_ref(), actor, id, valid, cover)
            .await?;
        Ok(updated.into())
    }
}
