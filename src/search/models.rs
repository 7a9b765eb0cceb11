//! Search request data models

use serde::{Deserialize, Serialize};

/// Searcher coordinates sent with a request.
///
/// Both values travel together; there is no partial-coordinate form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Complete search request as sent to the backend.
///
/// Optional fields are omitted from the JSON payload when unset; the
/// backend applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search query string, stored trimmed
    pub query: String,
    /// Maximum number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Searcher latitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Searcher longitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl SearchRequest {
    /// Create a request for a query string. Surrounding whitespace is
    /// removed up front so the payload always carries the trimmed query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().trim().to_string(),
            limit: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Set the result limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Attach searcher coordinates
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.latitude = Some(coordinates.latitude);
        self.longitude = Some(coordinates.longitude);
        self
    }

    /// Check if the query is empty after trimming
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }
}
