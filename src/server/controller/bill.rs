use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DeleteStatusDto, ErrorDto},
        bill::BillDto,
    },
    server::{
        cache::{cached, request_key},
        error::Error,
        extract::{ObjectId, ValidJson},
        model::app::AppState,
        service::bill::BillService,
    },
};

/// OpenAPI tag grouping the bill endpoints
pub static BILL_TAG: &str = "bill";

/// Create or update a bill
#[utoipa::path(
    put,
    path = "/bill",
    tag = BILL_TAG,
    request_body = BillDto,
    responses(
        (status = 200, description = "Stored bill", body = BillDto),
        (status = 400, description = "Integrity constraint violated", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_bill(
    State(state): State<AppState>,
    ValidJson(bill): ValidJson<BillDto>,
) -> Result<impl IntoResponse, Error> {
    let bill = BillService::new(&state.db).upsert(bill).await?;

    Ok((StatusCode::OK, Json(bill)))
}

/// Create or update several bills, nothing is stored if one of them fails
#[utoipa::path(
    put,
    path = "/bill/many",
    tag = BILL_TAG,
    request_body = Vec<BillDto>,
    responses(
        (status = 200, description = "Stored bills", body = Vec<BillDto>),
        (status = 400, description = "Integrity constraint violated", body = ErrorDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_bills(
    State(state): State<AppState>,
    ValidJson(bills): ValidJson<Vec<BillDto>>,
) -> Result<impl IntoResponse, Error> {
    let bills = BillService::new(&state.db).upsert_many(bills).await?;

    Ok((StatusCode::OK, Json(bills)))
}

/// List bills
#[utoipa::path(
    get,
    path = "/bill/all_full",
    tag = BILL_TAG,
    responses(
        (status = 200, description = "All bills", body = Vec<BillDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills_full(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let bills = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { BillService::new(&state.db).get_all_full().await },
    )
    .await?;

    Ok((StatusCode::OK, Json(bills)))
}

/// List bills, same shape as `all_full`
#[utoipa::path(
    get,
    path = "/bill/all_short",
    tag = BILL_TAG,
    responses(
        (status = 200, description = "All bills", body = Vec<BillDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills_short(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let bills = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { BillService::new(&state.db).get_all_short().await },
    )
    .await?;

    Ok((StatusCode::OK, Json(bills)))
}

#[utoipa::path(
    get,
    path = "/bill/{id}",
    tag = BILL_TAG,
    params(("id" = i32, Path, description = "Bill id, at least 1")),
    responses(
        (status = 200, description = "Requested bill", body = BillDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 422, description = "Invalid id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let bill = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async { BillService::new(&state.db).get_one_by_id(id).await },
    )
    .await?;

    Ok((StatusCode::OK, Json(bill)))
}

/// Delete a bill
#[utoipa::path(
    delete,
    path = "/bill/{id}",
    tag = BILL_TAG,
    params(("id" = i32, Path, description = "Bill id, at least 1")),
    responses(
        (status = 200, description = "Whether the bill was deleted", body = DeleteStatusDto),
        (status = 422, description = "Invalid id"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bill(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
) -> Result<impl IntoResponse, Error> {
    let status = BillService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(status)))
}

#[utoipa::path(
    delete,
    path = "/bill/many",
    tag = BILL_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Whether all bills were deleted", body = DeleteStatusDto),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bills(
    State(state): State<AppState>,
    ValidJson(ids): ValidJson<Vec<i32>>,
) -> Result<impl IntoResponse, Error> {
    let status = BillService::new(&state.db).delete_many(ids).await?;

    Ok((StatusCode::OK, Json(status)))
}
