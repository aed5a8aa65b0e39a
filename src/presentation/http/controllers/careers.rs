// src/presentation/http/controllers/careers.rs
use super::ListParams;
use crate::application::{
    commands::careers::{
        CareerFields, CreateCareerCommand, DeleteCareerCommand, UpdateCareerCommand,
    },
    dto::{CareerDto, PageDto},
    queries::careers::{GetCareerQuery, ListCareersQuery},
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

fn career_fields(form: &AdminForm) -> CareerFields {
    CareerFields {
        title: form.text("title"),
        description: form.text("description"),
        requirements: form.text("requirements"),
        benefits: form.text("benefits"),
        how_to_apply: form.text("how_to_apply"),
    }
}

pub async fn list_careers(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<PageDto<CareerDto>>> {
    let page = params.page();
    state
        .services
        .career_queries
        .list_careers(
            &user,
            ListCareersQuery {
                search: params.search,
                page,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn get_career(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CareerDto>> {
    state
        .services
        .career_queries
        .get_career(&user, GetCareerQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_career(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<CareerDto>)> {
    let form = AdminForm::read(multipart, &state.upload_dir).await?;
    let command = CreateCareerCommand {
        fields: career_fields(&form),
        cover: form.cover(),
    };

    let created = state
        .services
        .career_commands
        .create_career(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_career(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<CareerDto>> {
    let form = AdminForm::read(multipart, &state.upload_dir).await?;
    let command = UpdateCareerCommand {
        id,
        fields: career_fields(&form),
        cover: form.cover(),
    };

    state
        .services
        .career_commands
        .update_career(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_career(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Value>> {
    state
        .services
        .career_commands
        .delete_career(&user, DeleteCareerCommand { id })
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
