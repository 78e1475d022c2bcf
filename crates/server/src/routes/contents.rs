use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use service::content::domain::ContentTransfer;
use tracing::info;
use validator::Validate;

use crate::errors::ApiError;
use crate::extract::{year_param, ApiJson, ApiPath, ApiQuery, ContentId};
use crate::state::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only rows released strictly after this year
    #[serde(default, rename = "yearOfRelease", deserialize_with = "year_param")]
    pub year_of_release: Option<i64>,
}

#[utoipa::path(
    get, path = "/api/contents", tag = "contents",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ContentDoc]),
        (status = 500, description = "List Failed", body = [crate::openapi::ErrorEntryDoc])
    )
)]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<ListQuery>) -> Result<Json<Vec<ContentTransfer>>, ApiError> {
    let list = match q.year_of_release {
        // no result container is presented as an empty list
        Some(year) => state.contents.list_after_year(year).await?.unwrap_or_default(),
        None => state.contents.list_all().await?,
    };
    info!(count = list.len(), year_of_release = ?q.year_of_release, "list contents");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/contents/{id}", tag = "contents",
    params(("id" = i64, Path, description = "Content ID")),
    responses(
        (status = 200, description = "The content, or null when absent", body = crate::openapi::ContentDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, ApiPath(ContentId { id }): ApiPath<ContentId>) -> Result<Json<Option<ContentTransfer>>, ApiError> {
    let found = state.contents.get_by_id(id).await?;
    if found.is_none() {
        info!(id, "content not found");
    }
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/api/contents", tag = "contents",
    request_body = crate::openapi::ContentDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ContentDoc),
        (status = 400, description = "Validation Error", body = [crate::openapi::ErrorEntryDoc])
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(input): ApiJson<ContentTransfer>) -> Result<(StatusCode, Json<ContentTransfer>), ApiError> {
    input.validate()?;
    let created = state.contents.create(input).await?;
    info!(id = ?created.id, "created content");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/contents/{id}", tag = "contents",
    params(("id" = i64, Path, description = "Content ID")),
    request_body = crate::openapi::ContentDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error or unknown id", body = [crate::openapi::ErrorEntryDoc])
    )
)]
pub async fn update(State(state): State<ServerState>, ApiPath(ContentId { id }): ApiPath<ContentId>, ApiJson(input): ApiJson<ContentTransfer>) -> Result<StatusCode, ApiError> {
    input.validate()?;
    state.contents.update(id, input).await?;
    info!(id, "updated content");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/contents/{id}", tag = "contents",
    params(("id" = i64, Path, description = "Content ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Unknown id", body = [crate::openapi::ErrorEntryDoc])
    )
)]
pub async fn delete(State(state): State<ServerState>, ApiPath(ContentId { id }): ApiPath<ContentId>) -> Result<StatusCode, ApiError> {
    state.contents.delete(id).await?;
    info!(id, "deleted content");
    Ok(StatusCode::NO_CONTENT)
}
