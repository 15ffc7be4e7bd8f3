//! HTTP controller endpoints of the Upravdom API.
//!
//! One module per resource. Handlers parse and validate the request with the extractors from
//! [`crate::server::extract`], call the matching service and serialize its result. Every GET
//! handler reads through the response cache.

pub mod apartment;
pub mod assistant;
pub mod bill;
pub mod building;
pub mod owner;
