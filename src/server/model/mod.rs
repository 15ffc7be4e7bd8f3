//! Server-side state shared by handlers and middleware.

pub mod app;
