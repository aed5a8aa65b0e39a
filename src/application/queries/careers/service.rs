use std::sync::Arc;

use crate::domain::career::CareerRepository;

pub struct CareerQueryService {
    pub(super) repo: Arc<CareerRepository>,
}

impl CareerQueryService {
    pub fn new(repo: Arc<CareerRepository>) -> Self {
        Self { repo }
    }
}
