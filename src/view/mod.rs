//! Terminal rendering for the search screen
//!
//! Pure formatting of [`ResultsView`] into text: result cards, the
//! searching indicator, and the no-results / failure messages. Nothing
//! here touches controller state.

use crate::controller::ResultsView;
use crate::results::ServiceResult;
use crate::search::ErrorKind;
use std::fmt::Write;

/// Meters per statute mile, for displaying backend distances
const METERS_PER_MILE: f64 = 1609.34;

/// Convert a backend distance in meters to miles
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Similarity as a whole percentage
pub fn similarity_percent(similarity: f64) -> u32 {
    (similarity * 100.0).round() as u32
}

/// Render one result card.
///
/// The description line falls back from the full description to the short
/// one and is omitted when neither is present. Tags: organization,
/// distance in miles, status, similarity score.
pub fn render_card(result: &ServiceResult) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{}", result.name);

    if let Some(description) = result.display_description() {
        let _ = writeln!(card, "  {description}");
    }

    let mut tags: Vec<String> = Vec::new();
    if let Some(organization) = &result.organization_name {
        tags.push(organization.clone());
    }
    if let Some(distance) = result.distance {
        tags.push(format!("{:.2} miles", meters_to_miles(distance)));
    }
    tags.push(result.status.clone());
    tags.push(format!("Score: {}%", similarity_percent(result.similarity)));

    let _ = writeln!(card, "  [{}]", tags.join("] ["));
    card
}

/// Message for a settled failure, distinct per kind
pub fn failure_message(kind: ErrorKind) -> String {
    match kind {
        ErrorKind::Transport => {
            "Search service is unreachable. Check that the backend is running.".to_string()
        }
        ErrorKind::Backend(status) => {
            format!("Search service reported an error (status {status}).")
        }
        ErrorKind::Decode => "Search service returned a malformed response.".to_string(),
    }
}

/// Render the whole screen for a view state
pub fn render(view: &ResultsView) -> String {
    match view {
        ResultsView::Idle => String::new(),
        ResultsView::Searching => "Searching...\n".to_string(),
        ResultsView::NoMatches => {
            "No results found. Try a different search term.\n".to_string()
        }
        ResultsView::Failed(kind) => format!("{}\n", failure_message(*kind)),
        ResultsView::Ranked(results) => {
            let mut screen = String::new();
            let _ = writeln!(screen, "Results ({})", results.len());
            for result in results {
                let _ = writeln!(screen);
                screen.push_str(&render_card(result));
            }
            screen
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_miles() {
        assert!((meters_to_miles(1609.34) - 1.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", meters_to_miles(3218.68)), "2.00");
    }

    #[test]
    fn test_similarity_percent_rounds() {
        assert_eq!(similarity_percent(0.87), 87);
        assert_eq!(similarity_percent(0.875), 88);
        assert_eq!(similarity_percent(1.0), 100);
    }

    #[test]
    fn test_card_uses_short_description_fallback() {
        let result = ServiceResult::new("1", "Community Kitchen", "active", 0.9)
            .with_short_description("Hot meals daily")
            .with_organization("Food Share")
            .with_distance(1609.34);
        let card = render_card(&result);

        assert!(card.contains("Community Kitchen"));
        assert!(card.contains("Hot meals daily"));
        assert!(card.contains("[Food Share]"));
        assert!(card.contains("[1.00 miles]"));
        assert!(card.contains("[active]"));
        assert!(card.contains("[Score: 90%]"));
    }

    #[test]
    fn test_card_omits_missing_blocks() {
        let result = ServiceResult::new("1", "Clinic", "active", 0.5);
        let card = render_card(&result);

        assert!(!card.contains("miles"));
        // Name line plus a single tag line
        assert_eq!(card.lines().count(), 2);
    }

    #[test]
    fn test_screen_states() {
        assert_eq!(render(&ResultsView::Idle), "");
        assert_eq!(render(&ResultsView::Searching), "Searching...\n");
        assert_eq!(
            render(&ResultsView::NoMatches),
            "No results found. Try a different search term.\n"
        );
    }

    #[test]
    fn test_failure_messages_are_distinct() {
        let transport = render(&ResultsView::Failed(ErrorKind::Transport));
        let backend = render(&ResultsView::Failed(ErrorKind::Backend(502)));
        let decode = render(&ResultsView::Failed(ErrorKind::Decode));

        assert!(transport.contains("unreachable"));
        assert!(backend.contains("502"));
        assert!(decode.contains("malformed"));
        assert_ne!(transport, backend);
        assert_ne!(backend, decode);
    }

    #[test]
    fn test_ranked_screen_has_header_and_cards() {
        let results = vec![
            ServiceResult::new("1", "Food Pantry", "active", 0.9),
            ServiceResult::new("2", "Night Shelter", "active", 0.6),
        ];
        let screen = render(&ResultsView::Ranked(results));

        assert!(screen.starts_with("Results (2)\n"));
        assert!(screen.contains("Food Pantry"));
        assert!(screen.contains("Night Shelter"));
    }
}
