use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DeleteStatusDto, ErrorDto},
        owner::{OwnerDto, OwnerFullDto},
    },
    server::{
        cache::{cached, request_key},
        error::Error,
        extract::{ObjectId, ValidJson},
        model::app::AppState,
        service::owner::OwnerService,
    },
};

/// OpenAPI tag grouping the owner endpoints
pub static OWNER_TAG: &str = "owner";

/// Create or update an owner, names, phones and passport data are normalized first
#[utoipa::path(
    put,
    path = "/owner",
    tag = OWNER_TAG,
    request_body = OwnerDto,
    responses(
        (status = 200, description = "Stored owner", body = OwnerFullDto),
        (status = 400, description = "Integrity constraint violated", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_owner(
    State(state): State<AppState>,
    ValidJson(owner): ValidJson<OwnerDto>,
) -> Result<impl IntoResponse, Error> {
    let owner = OwnerService::new(&state.db).upsert(owner).await?;

    Ok((StatusCode::OK, Json(owner)))
}

/// Create or update several owners, nothing is stored if one of them fails
#[utoipa::path(
    put,
    path = "/owner/many",
    tag = OWNER_TAG,
    request_body = Vec<OwnerDto>,
    responses(
        (status = 200, description = "Stored owners", body = Vec<OwnerFullDto>),
        (status = 400, description = "Integrity constraint violated", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_owners(
    State(state): State<AppState>,
    ValidJson(owners): ValidJson<Vec<OwnerDto>>,
) -> Result<impl IntoResponse, Error> {
    let owners = OwnerService::new(&state.db).upsert_many(owners).await?;

    Ok((StatusCode::OK, Json(owners)))
}

/// List owners with the apartments they own
#[utoipa::path(
    get,
    path = "/owner/all_full",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "All owners", body = Vec<OwnerFullDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners_full(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let owners = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { OwnerService::new(&state.db).get_all_full().await },
    )
    .await?;

    Ok((StatusCode::OK, Json(owners)))
}

/// List owners without their apartments
#[utoipa::path(
    get,
    path = "/owner/all_short",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "All owners", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners_short(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let owners = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { OwnerService::new(&state.db).get_all_short().await },
    )
    .await?;

    Ok((StatusCode::OK, Json(owners)))
}

#[utoipa::path(
    get,
    path = "/owner/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner id, at least 1")),
    responses(
        (status = 200, description = "Requested owner", body = OwnerFullDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 422, description = "Invalid id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let owner = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { OwnerService::new(&state.db).get_one_by_id(id).await },
    )
    .await?;

    Ok((StatusCode::OK, Json(owner)))
}

/// Delete an owner, their apartments are kept without an owner
#[utoipa::path(
    delete,
    path = "/owner/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner id, at least 1")),
    responses(
        (status = 200, description = "Whether the owner was deleted", body = DeleteStatusDto),
        (status = 422, description = "Invalid id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
) -> Result<impl IntoResponse, Error> {
    let status = OwnerService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(status)))
}

#[utoipa::path(
    delete,
    path = "/owner/many",
    tag = OWNER_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Whether all owners were deleted", body = DeleteStatusDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_owners(
    State(state): State<AppState>,
    ValidJson(ids): ValidJson<Vec<i32>>,
) -> Result<impl IntoResponse, Error> {
    let status = OwnerService::new(&state.db).delete_many(ids).await?;

    Ok((StatusCode::OK, Json(status)))
}
