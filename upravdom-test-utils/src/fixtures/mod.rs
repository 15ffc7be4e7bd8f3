//! Test fixture modules for database record creation.
//!
//! - `property` - buildings, owners, apartments, apartment details and bills
//! - `user` - users for Basic authentication

pub mod property;
pub mod user;
