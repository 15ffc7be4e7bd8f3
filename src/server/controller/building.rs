use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DeleteStatusDto, ErrorDto},
        building::{BuildingDto, BuildingFullDto},
    },
    server::{
        cache::{cached, request_key},
        error::Error,
        extract::{ObjectId, ValidJson},
        model::app::AppState,
        service::building::BuildingService,
    },
};

/// OpenAPI tag grouping the building endpoints
pub static BUILDING_TAG: &str = "building";

/// Create or update a building
#[utoipa::path(
    put,
    path = "/building",
    tag = BUILDING_TAG,
    request_body = BuildingDto,
    responses(
        (status = 200, description = "Stored building", body = BuildingDto),
        (status = 400, description = "Integrity constraint violated", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_building(
    State(state): State<AppState>,
    ValidJson(building): ValidJson<BuildingDto>,
) -> Result<impl IntoResponse, Error> {
    let building = BuildingService::new(&state.db).upsert(building).await?;

    Ok((StatusCode::OK, Json(building)))
}

/// Create or update several buildings, nothing is stored if one of them fails
#[utoipa::path(
    put,
    path = "/building/many",
    tag = BUILDING_TAG,
    request_body = Vec<BuildingDto>,
    responses(
        (status = 200, description = "Stored buildings", body = Vec<BuildingDto>),
        (status = 400, description = "Integrity constraint violated", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_buildings(
    State(state): State<AppState>,
    ValidJson(buildings): ValidJson<Vec<BuildingDto>>,
) -> Result<impl IntoResponse, Error> {
    let buildings = BuildingService::new(&state.db).upsert_many(buildings).await?;

    Ok((StatusCode::OK, Json(buildings)))
}

/// List buildings with their apartments
#[utoipa::path(
    get,
    path = "/building/all_full",
    tag = BUILDING_TAG,
    responses(
        (status = 200, description = "All buildings", body = Vec<BuildingFullDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_buildings_full(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let buildings = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { BuildingService::new(&state.db).get_all_full().await },
    )
    .await?;

    Ok((StatusCode::OK, Json(buildings)))
}

/// List buildings without their apartments
#[utoipa::path(
    get,
    path = "/building/all_short",
    tag = BUILDING_TAG,
    responses(
        (status = 200, description = "All buildings", body = Vec<BuildingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_buildings_short(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let buildings = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { BuildingService::new(&state.db).get_all_short().await },
    )
    .await?;

    Ok((StatusCode::OK, Json(buildings)))
}

#[utoipa::path(
    get,
    path = "/building/{id}",
    tag = BUILDING_TAG,
    params(("id" = i32, Path, description = "Building id, at least 1")),
    responses(
        (status = 200, description = "Requested building", body = BuildingDto),
        (status = 404, description = "Building not found", body = ErrorDto),
        (status = 422, description = "Invalid id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_building(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let building = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { BuildingService::new(&state.db).get_one_by_id(id).await },
    )
    .await?;

    Ok((StatusCode::OK, Json(building)))
}

/// Delete a building together with its apartments
#[utoipa::path(
    delete,
    path = "/building/{id}",
    tag = BUILDING_TAG,
    params(("id" = i32, Path, description = "Building id, at least 1")),
    responses(
        (status = 200, description = "Whether the building was deleted", body = DeleteStatusDto),
        (status = 400, description = "An apartment of the building still has bills", body = ErrorDto),
        (status = 422, description = "Invalid id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_building(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
) -> Result<impl IntoResponse, Error> {
    let status = BuildingService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(status)))
}

#[utoipa::path(
    delete,
    path = "/building/many",
    tag = BUILDING_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Whether all buildings were deleted", body = DeleteStatusDto),
        (status = 400, description = "An apartment of the building still has bills", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_buildings(
    State(state): State<AppState>,
    ValidJson(ids): ValidJson<Vec<i32>>,
) -> Result<impl IntoResponse, Error> {
    let status = BuildingService::new(&state.db).delete_many(ids).await?;

    Ok((StatusCode::OK, Json(status)))
}
