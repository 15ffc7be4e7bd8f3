//! Request middleware applied to the whole router.

pub mod auth;
