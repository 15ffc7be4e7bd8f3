use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ProjectNameQuery},
        apartment::DebtorApartmentQuery,
        debtor::{DebtorInfoDto, DebtorMessageDto},
    },
    server::{
        cache::{cached, request_key},
        error::Error,
        extract::ValidQuery,
        model::app::AppState,
        service::assistant::AssistantService,
    },
};

/// OpenAPI tag grouping the assistant endpoints
pub static ASSISTANT_TAG: &str = "assistant";

/// Debt notice for the owner of one apartment
#[utoipa::path(
    get,
    path = "/assistant/get_message_body_for_debtor",
    tag = ASSISTANT_TAG,
    params(DebtorApartmentQuery),
    responses(
        (status = 200, description = "Rendered notice", body = DebtorMessageDto),
        (status = 404, description = "No owned apartment with unpaid bills matches", body = ErrorDto),
        (status = 422, description = "Invalid query"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message_body_for_debtor(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<DebtorApartmentQuery>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let message = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async {
            AssistantService::new(&state.db, &state.options.debtor_message_template)
                .message_for_debtor(query.apartment_number, query.building_id)
                .await
        },
    )
    .await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Debt notices for every owned apartment with unpaid bills
#[utoipa::path(
    get,
    path = "/assistant/get_message_body_for_debtors",
    tag = ASSISTANT_TAG,
    params(ProjectNameQuery),
    responses(
        (status = 200, description = "Rendered notices", body = Vec<DebtorMessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message_body_for_debtors(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ProjectNameQuery>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let messages = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async {
            AssistantService::new(&state.db, &state.options.debtor_message_template)
                .messages_for_debtors(query.building_project_name.as_deref())
                .await
        },
    )
    .await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// Debtors grouped by owner with per apartment totals, largest debt first
#[utoipa::path(
    get,
    path = "/assistant/get_all_debtors_with_debt_analyse",
    tag = ASSISTANT_TAG,
    params(ProjectNameQuery),
    responses(
        (status = 200, description = "Debtors with their debts", body = Vec<DebtorInfoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_debtors_with_debt_analyse(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ProjectNameQuery>,
    uri: Uri,
) -> Result<impl IntoResponse, Error> {
    let debtors = cached(
        &state.cache,
        || request_key(&uri),
        state.options.cache_lifetime,
        || async {
            AssistantService::new(&state.db, &state.options.debtor_message_template)
                .debtors_with_debt_analyse(query.building_project_name.as_deref())
                .await
        },
    )
    .await?;

    Ok((StatusCode::OK, Json(debtors)))
}
