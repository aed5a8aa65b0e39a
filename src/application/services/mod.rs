// src/application/services/mod.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        commands::{
            careers::CareerCommandService, products::ProductCommandService,
            workflow::EntityWorkflow,
        },
        ports::{
            security::TokenManager, storage::AssetUploader, time::Clock, util::SlugGenerator,
        },
        queries::{
            careers::CareerQueryService, categories::CategoryQueryService,
            products::ProductQueryService,
        },
    },
    domain::{career::CareerRepository, category::CategoryRepository, product::ProductRepository},
};

pub struct ApplicationServices {
    pub career_commands: Arc<CareerCommandService>,
    pub career_queries: Arc<CareerQueryService>,
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        career_repo: Arc<CareerRepository>,
        product_repo: Arc<ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        uploader: Arc<dyn AssetUploader>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        upload_timeout: Duration,
    ) -> Self {
        let workflow = Arc::new(EntityWorkflow::new(
            Arc::clone(&uploader),
            Arc::clone(&slugger),
            Arc::clone(&clock),
            upload_timeout,
        ));

        let career_commands = Arc::new(CareerCommandService::new(
            Arc::clone(&career_repo),
            Arc::clone(&workflow),
        ));
        let career_queries = Arc::new(CareerQueryService::new(Arc::clone(&career_repo)));

        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_repo),
            Arc::clone(&category_repo),
            Arc::clone(&workflow),
        ));
        let product_queries = Arc::new(ProductQueryService::new(Arc::clone(&product_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        Self {
            career_commands,
            career_queries,
            product_commands,
            product_queries,
            category_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
