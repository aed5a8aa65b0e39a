// src/application/commands/careers/create.rs
use super::{CareerCommandService, form::CareerFields};
use crate::application::{
    commands::cover::{CAREER_COVER, CoverFile},
    dto::{AuthenticatedUser, CareerDto},
    error::{ApplicationResult, ValidationErrors},
};

pub struct CreateCareerCommand {
    pub fields: CareerFields,
    pub cover: Option<CoverFile>,
}

impl CareerCommandService {
    pub async fn create_career(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCareerCommand,
    ) -> ApplicationResult<CareerDto> {
        let CreateCareerCommand { fields, cover } = command;
        let (valid, cover) =
            ValidationErrors::zip(fields.validate(), CAREER_COVER.require(cover.as_ref()))?;

        let created = self
            .workflow
            .create(self.repo.as_ref(), actor, valid, cover)
            .await?;
        Ok(created.into())
    }
}
