//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single service returned by the search backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResult {
    /// Identifier, unique within a response
    pub id: String,
    /// Service name
    pub name: String,
    /// Full description
    pub description: Option<String>,
    /// Shorter description, shown when the full one is absent
    pub short_description: Option<String>,
    /// Free-form status label
    pub status: String,
    /// Operating organization, when known
    pub organization_name: Option<String>,
    /// Semantic closeness to the query, in [0, 1]
    pub similarity: f64,
    /// Distance from the searcher in meters, present when the request
    /// carried coordinates
    pub distance: Option<f64>,
}

impl ServiceResult {
    /// Create a new result with the required fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: impl Into<String>,
        similarity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            short_description: None,
            status: status.into(),
            organization_name: None,
            similarity,
            distance: None,
        }
    }

    /// Set the full description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the short description
    pub fn with_short_description(mut self, short: impl Into<String>) -> Self {
        self.short_description = Some(short.into());
        self
    }

    /// Set the operating organization
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization_name = Some(organization.into());
        self
    }

    /// Set the distance in meters
    pub fn with_distance(mut self, meters: f64) -> Self {
        self.distance = Some(meters);
        self
    }

    /// Description to display: the full description when present, otherwise
    /// the short one. `None` means the description block is omitted.
    pub fn display_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.short_description.as_deref())
    }

    /// Whether a distance is available. Zero meters is a valid distance.
    pub fn has_distance(&self) -> bool {
        self.distance.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_fallback() {
        let full = ServiceResult::new("1", "Food Pantry", "active", 0.9)
            .with_description("Weekly groceries for families in need")
            .with_short_description("Weekly groceries");
        assert_eq!(
            full.display_description(),
            Some("Weekly groceries for families in need")
        );

        let short_only =
            ServiceResult::new("2", "Shelter", "active", 0.8).with_short_description("Beds");
        assert_eq!(short_only.display_description(), Some("Beds"));

        let neither = ServiceResult::new("3", "Clinic", "active", 0.7);
        assert_eq!(neither.display_description(), None);
    }

    #[test]
    fn test_zero_distance_is_available() {
        let at_origin = ServiceResult::new("1", "Clinic", "active", 0.5).with_distance(0.0);
        assert!(at_origin.has_distance());

        let unknown = ServiceResult::new("2", "Clinic", "active", 0.5);
        assert!(!unknown.has_distance());
    }

    #[test]
    fn test_deserialize_wire_record() {
        let json = r#"{
            "id": "svc-42",
            "name": "Community Kitchen",
            "short_description": "Hot meals",
            "status": "active",
            "organization_name": "Food Share",
            "similarity": 0.87,
            "distance": 1200.5
        }"#;
        let result: ServiceResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.id, "svc-42");
        assert_eq!(result.description, None);
        assert_eq!(result.short_description.as_deref(), Some("Hot meals"));
        assert_eq!(result.distance, Some(1200.5));
    }
}
