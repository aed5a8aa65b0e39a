use super::CareerQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CareerDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::career::CareerId,
};

pub struct GetCareerQuery {
    pub id: i64,
}

impl CareerQueryService {
    /// Loads a career for its edit screen; only the creator may open it.
    pub async fn get_career(
        &self,
        actor: &AuthenticatedUser,
        query: GetCareerQuery,
    ) -> ApplicationResult<CareerDto> {
        let not_found = || ApplicationError::not_found(format!("career {} not found", query.id));
        let id = CareerId::new(query.id).map_err(|_| not_found())?;

        let career = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|err| ApplicationError::system(err.to_string()))?
            .ok_or_else(not_found)?;
        actor.ensure_owner(&career)?;

        Ok(career.into())
    }
}
