use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DeleteStatusDto, ErrorDto},
        apartment::{ApartmentDto, ApartmentFullDto, ApartmentWithDebtDto, ApartmentsWithDebtQuery},
    },
    server::{
        cache::{cached, request_key},
        error::Error,
        extract::{ObjectId, ValidJson, ValidQuery},
        model::app::AppState,
        service::apartment::ApartmentService,
    },
};

/// OpenAPI tag grouping the apartment endpoints
pub static APARTMENT_TAG: &str = "apartments";

/// Create or update an apartment together with its detail record
#[utoipa::path(
    put,
    path = "/apartments",
    tag = APARTMENT_TAG,
    request_body = ApartmentFullDto,
    responses(
        (status = 200, description = "Stored apartment", body = ApartmentFullDto),
        (status = 400, description = "Integrity constraint violated", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_apartment(
    State(state): State<AppState>,
    ValidJson(apartment): ValidJson<ApartmentFullDto>,
) -> Result<impl IntoResponse, Error> {
    let apartment = ApartmentService::new(&state.db).upsert(apartment).await?;

    Ok((StatusCode::OK, Json(apartment)))
}

/// Create or update several apartments, nothing is stored if one of them fails
#[utoipa::path(
    put,
    path = "/apartments/many",
    tag = APARTMENT_TAG,
    request_body = Vec<ApartmentFullDto>,
    responses(
        (status = 200, description = "Stored apartments", body = Vec<ApartmentFullDto>),
        (status = 400, description = "Integrity constraint violated", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_apartments(
    State(state): State<AppState>,
    ValidJson(apartments): ValidJson<Vec<ApartmentFullDto>>,
) -> Result<impl IntoResponse, Error> {
    let apartments = ApartmentService::new(&state.db)
        .upsert_many(apartments)
        .await?;

    Ok((StatusCode::OK, Json(apartments)))
}

/// List apartments with their detail records
#[utoipa::path(
    get,
    path = "/apartments/all_full",
    tag = APARTMENT_TAG,
    responses(
        (status = 200, description = "All apartments", body = Vec<ApartmentFullDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartments_full(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let apartments = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { ApartmentService::new(&state.db).get_all_full().await },
    )
    .await?;

    Ok((StatusCode::OK, Json(apartments)))
}

/// List apartments without their detail records
#[utoipa::path(
    get,
    path = "/apartments/all_short",
    tag = APARTMENT_TAG,
    responses(
        (status = 200, description = "All apartments", body = Vec<ApartmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartments_short(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let apartments = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { ApartmentService::new(&state.db).get_all_short().await },
    )
    .await?;

    Ok((StatusCode::OK, Json(apartments)))
}

/// Get one apartment with its detail record
#[utoipa::path(
    get,
    path = "/apartments/{id}",
    tag = APARTMENT_TAG,
    params(("id" = i32, Path, description = "Apartment id, at least 1")),
    responses(
        (status = 200, description = "Requested apartment", body = ApartmentFullDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 422, description = "Invalid id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartment(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let apartment = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { ApartmentService::new(&state.db).get_one_by_id(id).await },
    )
    .await?;

    Ok((StatusCode::OK, Json(apartment)))
}

/// Delete an apartment and its detail record
///
/// Apartments that still have bills cannot be deleted.
#[utoipa::path(
    delete,
    path = "/apartments/{id}",
    tag = APARTMENT_TAG,
    params(("id" = i32, Path, description = "Apartment id, at least 1")),
    responses(
        (status = 200, description = "Whether the apartment was deleted", body = DeleteStatusDto),
        (status = 400, description = "Apartment still has bills", body = ErrorDto),
        (status = 422, description = "Invalid id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_apartment(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
) -> Result<impl IntoResponse, Error> {
    let status = ApartmentService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Delete several apartments, `deleted` is false unless every id existed
#[utoipa::path(
    delete,
    path = "/apartments/many",
    tag = APARTMENT_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Whether all apartments were deleted", body = DeleteStatusDto),
        (status = 400, description = "An apartment still has bills", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_apartments(
    State(state): State<AppState>,
    ValidJson(ids): ValidJson<Vec<i32>>,
) -> Result<impl IntoResponse, Error> {
    let status = ApartmentService::new(&state.db).delete_many(ids).await?;

    Ok((StatusCode::OK, Json(status)))
}

/// List apartments with unpaid bills, optionally in one building
#[utoipa::path(
    get,
    path = "/apartments/get_apartments_with_debt",
    tag = APARTMENT_TAG,
    params(ApartmentsWithDebtQuery),
    responses(
        (status = 200, description = "Apartments with their unpaid bills", body = Vec<ApartmentWithDebtDto>),
        (status = 422, description = "Invalid query"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartments_with_debt(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ApartmentsWithDebtQuery>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let apartments = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async {
            ApartmentService::new(&state.db)
                .get_apartments_full_data_with_debt(query.building_id)
                .await
        },
    )
    .await?;

    Ok((StatusCode::OK, Json(apartments)))
}
