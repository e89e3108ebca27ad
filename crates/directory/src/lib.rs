//! Upstream city and weather directory
//!
//! Cities and forecasts are owned by an external service. This crate hides it
//! behind the [`CityDirectory`] trait, with an HTTP client for production and
//! an in-memory implementation for offline serving and tests.

pub mod directory;
pub mod fixtures;
pub mod http;

// Re-export key types
pub use directory::{CityDirectory, DirectoryError};
pub use fixtures::{Fixtures, StaticDirectory};
pub use http::{HttpDirectory, HttpDirectoryConfig, DEFAULT_TIMEOUT, DEFAULT_UPSTREAM_URL};
