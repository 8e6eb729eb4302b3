//! HTTP handlers for the server.

pub mod labels;
pub mod templates;
