//! Shared wire and domain types for the listing studio client.

pub mod config;
pub mod content;
pub mod enums;
pub mod models;
pub mod response;
pub mod schema;
pub mod studio;
