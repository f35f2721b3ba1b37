//! Gemini client for product photo studio work: background replacement and
//! marketplace listing copy.

pub mod background;
pub mod client;
pub mod error;
pub mod image;
pub mod listing;
pub mod models;

#[cfg(test)]
mod test_support;

pub use listing_studio_types as types;

pub use background::Backgrounds;
pub use client::{Client, ClientBuilder, ClientConfig, HttpOptions};
pub use error::{Error, Result};
pub use listing::Listings;
pub use types::studio::{BackgroundCategory, ListingContent};
