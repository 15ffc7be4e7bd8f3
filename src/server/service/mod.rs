//! Service layer between the HTTP controllers and the repositories.
//!
//! Resource services wrap one repository each, turn missing rows into
//! [`DataError::ObjectNotFound`](crate::server::error::data::DataError::ObjectNotFound) and map
//! the stored projections to the shapes the API returns. The assistant service builds debtor
//! notices and debt summaries on top of the apartment debt queries.

pub mod apartment;
pub mod assistant;
pub mod bill;
pub mod building;
pub mod owner;
