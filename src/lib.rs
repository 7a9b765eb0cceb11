//! Semsearch: a client for a semantic service-search backend
//!
//! The backend turns a free-text query (optionally with the searcher's
//! coordinates) into a list of candidate services; this crate fetches that
//! list, ranks it by a blend of semantic similarity and geographic distance,
//! and exposes a render-ready view for the terminal front end.

pub mod config;
pub mod controller;
pub mod network;
pub mod ranking;
pub mod results;
pub mod search;
pub mod view;

pub use config::Settings;
pub use controller::{ResultsView, SearchController};
pub use results::ServiceResult;
pub use search::{SearchBackend, SearchClient, SearchError, SearchRequest};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of results requested when no limit is configured
pub const DEFAULT_LIMIT: u32 = 10;

/// Default timeout for backend requests in seconds
pub const DEFAULT_TIMEOUT: f64 = 5.0;
