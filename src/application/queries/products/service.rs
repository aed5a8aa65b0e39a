use std::sync::Arc;

use crate::domain::product::ProductRepository;

pub struct ProductQueryService {
    pub(super) repo: Arc<ProductRepository>,
}

impl ProductQueryService {
    pub fn new(repo: Arc<ProductRepository>) -> Self {
        Self { repo }
    }
}
