//! Search client module
//!
//! Request models, the typed failure taxonomy, and the HTTP client that
//! talks to the semantic search backend.

mod client;
mod error;
mod models;

pub use client::{SearchBackend, SearchClient};
pub use error::{ErrorKind, SearchError};
pub use models::{Coordinates, SearchRequest};
