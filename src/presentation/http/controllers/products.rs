// src/presentation/http/controllers/products.rs
use super::ListParams;
use crate::application::{
    commands::products::{
        CreateProductCommand, DeleteProductCommand, ProductFields, UpdateProductCommand,
    },
    dto::{PageDto, ProductDto},
    error::ValidationErrors,
    queries::products::{GetProductQuery, ListProductsQuery},
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::Authenticated,
    state::HttpState,
    upload::AdminForm,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde_json::{Value, json};

/// Integers are parsed here; their errors travel with the fields so the 422 lists every field.
fn product_fields(form: &AdminForm) -> ProductFields {
    let mut unparsed = ValidationErrors::new();
    let category_id = form.integer("category_id", &mut unparsed);
    let price = form.integer("price", &mut unparsed);

    ProductFields {
        name: form.text("name"),
        about: form.text("about"),
        category_id,
        price,
        unparsed,
    }
}

pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<PageDto<ProductDto>>> {
    let page = params.page();
    state
        .services
        .product_queries
        .list_products(
            &user,
            ListProductsQuery {
                search: params.search,
                page,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product(&user, GetProductQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let form = AdminForm::read(multipart, &state.upload_dir).await?;
    let command = CreateProductCommand {
        fields: product_fields(&form),
        cover: form.cover(),
    };

    let created = state
        .services
        .product_commands
        .create_product(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<ProductDto>> {
    let form = AdminForm::read(multipart, &state.upload_dir).await?;
    let command = UpdateProductCommand {
        id,
        fields: product_fields(&form),
        cover: form.cover(),
    };

    state
        .services
        .product_commands
        .update_product(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Value>> {
    state
        .services
        .product_commands
        .delete_product(&user, DeleteProductCommand { id })
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
