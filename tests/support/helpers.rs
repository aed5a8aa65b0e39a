// tests/support/helpers.rs
use super::mocks::{
    DummyClock, DummyTokenManager, InMemoryCategories, InMemoryRepo, ScriptedUploader,
};
use axum::{
    Router,
    body::{self, Body},
    http::Response,
};
use serde_json::Value;
use showcase_admin::{
    application::{
        dto::AuthenticatedUser,
        ports::{security::TokenManager, storage::AssetUploader, time::Clock, util::SlugGenerator},
        services::ApplicationServices,
    },
    domain::{career::Career, category::CategoryRepository, product::Product},
    infrastructure::util::DefaultSlugGenerator,
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{path::PathBuf, sync::Arc, time::Duration};

pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
pub const BOUNDARY: &str = "showcase-test-boundary";

/// Services wired to in-memory adapters, with handles kept for assertions.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub careers: InMemoryRepo<Career>,
    pub products: InMemoryRepo<Product>,
    pub categories: InMemoryCategories,
    pub uploader: Arc<ScriptedUploader>,
    pub upload_dir: PathBuf,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_uploader(ScriptedUploader::default())
    }

    pub fn with_uploader(uploader: ScriptedUploader) -> Self {
        Self::build(uploader, Duration::from_secs(5))
    }

    pub fn build(uploader: ScriptedUploader, upload_timeout: Duration) -> Self {
        let categories = InMemoryCategories::with(&[(1, "Peripherals"), (2, "Displays")]);
        let careers = InMemoryRepo::<Career>::new();
        let products = InMemoryRepo::<Product>::new().with_category_names(&categories);
        let uploader = Arc::new(uploader);

        let category_repo: Arc<dyn CategoryRepository> = Arc::new(categories.clone());
        let asset_uploader: Arc<dyn AssetUploader> = uploader.clone();
        let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);
        let clock: Arc<dyn Clock> = Arc::new(DummyClock);
        let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

        let services = Arc::new(ApplicationServices::new(
            Arc::new(careers.clone()),
            Arc::new(products.clone()),
            category_repo,
            asset_uploader,
            token_manager,
            clock,
            slugger,
            upload_timeout,
        ));

        Self {
            services,
            careers,
            products,
            categories,
            uploader,
            upload_dir: std::env::temp_dir(),
        }
    }

    pub fn router(&self) -> Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            upload_dir: self.upload_dir.clone(),
        };
        build_router(state, &["*".to_string()])
    }
}

pub fn actor(id: i64) -> AuthenticatedUser {
    super::mocks::security::admin(id)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// A `multipart/form-data` body with text fields and an optional `cover` part.
pub fn multipart_body(fields: &[(&str, &str)], cover: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = cover {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"cover\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
