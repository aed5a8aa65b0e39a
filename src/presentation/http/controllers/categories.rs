// src/presentation/http/controllers/categories.rs
use crate::application::dto::CategoryDto;
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::Authenticated,
    state::HttpState,
};
use axum::{Extension, Json};

/// Options for the product form's category select.
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}
