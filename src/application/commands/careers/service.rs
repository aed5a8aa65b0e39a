// src/application/commands/careers/service.rs
use std::sync::Arc;

use crate::{application::commands::workflow::EntityWorkflow, domain::career::CareerRepository};

pub struct CareerCommandService {
    pub(super) repo: Arc<CareerRepository>,
    pub(super) workflow: Arc<EntityWorkflow>,
}

impl CareerCommandService {
    pub fn new(repo: Arc<CareerRepository>, workflow: Arc<EntityWorkflow>) -> Self {
        Self { repo, workflow }
    }
}
