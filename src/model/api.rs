use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Machine readable error kind, e.g. `object_not_found_error`
    pub message: String,
}

/// The response when a submitted field fails validation
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DataErrorDto {
    /// Always `validation_error`
    pub message: String,
    /// Name of the offending field
    pub wrong_data_key: String,
    /// Value as it was submitted
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    /// Why the value was rejected
    pub reason: String,
}

/// One entry of the response when a request cannot be parsed
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RequestValidationErrorDto {
    /// Where the problem is, e.g. `["body", "utility_account"]`
    pub location: Vec<String>,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The response when a request is not authorized
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthErrorDto {
    pub detail: String,
}

/// Outcome of a delete request
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct DeleteStatusDto {
    /// `true` only when every requested row was removed
    pub deleted: bool,
}

/// Query string for routes filtering by building project name
#[derive(Serialize, Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct ProjectNameQuery {
    /// Project name of the building complex, all projects when omitted
    pub building_project_name: Option<String>,
}
