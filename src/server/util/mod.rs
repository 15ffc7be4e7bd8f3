//! Helpers shared across the server modules.

pub mod password;
pub mod template;
pub mod validate;
