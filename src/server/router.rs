//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa specification. The collected
//! document is served at `/openapi.json` and browsed through Swagger UI at `/docs`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, middleware::auth::basic_auth, model::app::AppState};

/// Builds the application router with all endpoints, Swagger UI and Basic authentication.
///
/// The OpenAPI title and version come from the runtime options so that deployments can set
/// them through the environment.
///
/// # Registered Endpoints
/// Resources `/apartments`, `/owner`, `/bill` and `/building` each expose
/// - `PUT /` and `PUT /many` - Create or update one or several objects
/// - `GET /all_full` and `GET /all_short` - List objects in either projection
/// - `GET /{id}`, `DELETE /{id}` and `DELETE /many` - Read and delete by id
///
/// plus `GET /apartments/get_apartments_with_debt` and the three `/assistant` reports.
///
/// # Returns
/// A router with the state applied, ready to be served.
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(tags(
        (name = controller::apartment::APARTMENT_TAG, description = "Apartments and their detail records"),
        (name = controller::owner::OWNER_TAG, description = "Apartment owners"),
        (name = controller::bill::BILL_TAG, description = "Utility bills"),
        (name = controller::building::BUILDING_TAG, description = "Buildings"),
        (name = controller::assistant::ASSISTANT_TAG, description = "Debtor notices and debt reports"),
    ))]
    struct ApiDoc;

    let mut doc = ApiDoc::openapi();
    doc.info.title = state.options.api_title.clone();
    doc.info.version = state.options.api_version.clone();

    let (router, api) = OpenApiRouter::with_openapi(doc)
        .routes(routes!(controller::apartment::upsert_apartment))
        .routes(routes!(
            controller::apartment::upsert_apartments,
            controller::apartment::delete_apartments
        ))
        .routes(routes!(controller::apartment::get_apartments_full))
        .routes(routes!(controller::apartment::get_apartments_short))
        .routes(routes!(controller::apartment::get_apartments_with_debt))
        .routes(routes!(
            controller::apartment::get_apartment,
            controller::apartment::delete_apartment
        ))
        .routes(routes!(controller::owner::upsert_owner))
        .routes(routes!(
            controller::owner::upsert_owners,
            controller::owner::delete_owners
        ))
        .routes(routes!(controller::owner::get_owners_full))
        .routes(routes!(controller::owner::get_owners_short))
        .routes(routes!(
            controller::owner::get_owner,
            controller::owner::delete_owner
        ))
        .routes(routes!(controller::bill::upsert_bill))
        .routes(routes!(
            controller::bill::upsert_bills,
            controller::bill::delete_bills
        ))
        .routes(routes!(controller::bill::get_bills_full))
        .routes(routes!(controller::bill::get_bills_short))
        .routes(routes!(
            controller::bill::get_bill,
            controller::bill::delete_bill
        ))
        .routes(routes!(controller::building::upsert_building))
        .routes(routes!(
            controller::building::upsert_buildings,
            controller::building::delete_buildings
        ))
        .routes(routes!(controller::building::get_buildings_full))
        .routes(routes!(controller::building::get_buildings_short))
        .routes(routes!(
            controller::building::get_building,
            controller::building::delete_building
        ))
        .routes(routes!(controller::assistant::get_message_body_for_debtor))
        .routes(routes!(controller::assistant::get_message_body_for_debtors))
        .routes(routes!(
            controller::assistant::get_all_debtors_with_debt_analyse
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/openapi.json", api))
        .layer(middleware::from_fn_with_state(state.clone(), basic_auth))
        .with_state(state)
}
