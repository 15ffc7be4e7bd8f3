//! Wire-facing data transfer objects shared by the HTTP handlers and services.

pub mod api;
pub mod apartment;
pub mod bill;
pub mod building;
pub mod debtor;
pub mod owner;
