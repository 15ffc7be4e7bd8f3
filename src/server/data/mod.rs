//! Data access layer repositories.
//!
//! One repository per table. Read methods return `None` or an empty list when nothing matches,
//! they never produce a not-found error. Every write method runs in its own transaction and
//! commits before returning, so a failure leaves the database unchanged.

pub mod apartment;
pub mod bill;
pub mod building;
pub mod owner;
pub mod user;
pub mod util;

#[cfg(test)]
mod tests;
