//! Result ordering: how search results get sorted for display.
//!
//! Two independently-scaled signals feed the order: semantic similarity in
//! [0, 1] from the backend, and geographic distance in meters when the
//! searcher supplied coordinates. Distance availability dominates: a result
//! with a known distance always sorts ahead of one without, and only when
//! both sides carry a distance does the blended score decide.
//!
//! The blended score mixes a raw similarity delta with kilometers on equal
//! weights. The units are intentionally asymmetric; see DESIGN.md before
//! touching the constants or the branch structure.

use crate::results::ServiceResult;
use std::cmp::Ordering;

/// Weight applied to the similarity component of the blended score
pub const SIMILARITY_WEIGHT: f64 = 0.5;

/// Weight applied to the distance component of the blended score
pub const DISTANCE_WEIGHT: f64 = 0.5;

/// Blended score for a result with a known distance. Lower is better.
fn blended_score(result: &ServiceResult, distance: f64) -> f64 {
    (1.0 - result.similarity) * SIMILARITY_WEIGHT + (distance / 1000.0) * DISTANCE_WEIGHT
}

/// Compare two results for display order.
///
/// Sort order:
/// 1. Both distances known - blended score, ascending
/// 2. One distance known - the result with a distance comes first,
///    regardless of similarity
/// 3. Neither known - similarity, descending
///
/// Availability is an explicit presence check: a distance of zero meters is
/// a known distance, not a missing one.
pub fn compare(a: &ServiceResult, b: &ServiceResult) -> Ordering {
    match (a.distance, b.distance) {
        (Some(da), Some(db)) => blended_score(a, da)
            .partial_cmp(&blended_score(b, db))
            .unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b
            .similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal),
    }
}

/// Rank results for display.
///
/// Returns a new vector ordered by [`compare`]; the input is never mutated.
/// The underlying sort is stable, so results with equal scores keep their
/// response order.
pub fn rank(results: &[ServiceResult]) -> Vec<ServiceResult> {
    let mut ranked = results.to_vec();
    ranked.sort_by(compare);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, similarity: f64, distance: Option<f64>) -> ServiceResult {
        let base = ServiceResult::new(id, format!("Service {id}"), "active", similarity);
        match distance {
            Some(meters) => base.with_distance(meters),
            None => base,
        }
    }

    #[test]
    fn test_blended_score_both_distances() {
        // scoreA = 0.1 * 0.5 + 0.5 * 0.5 = 0.3
        // scoreB = 0.5 * 0.5 + 2.0 * 0.5 = 1.25
        let a = result("a", 0.9, Some(500.0));
        let b = result("b", 0.5, Some(2000.0));
        assert_eq!(compare(&a, &b), Ordering::Less);

        let ranked = rank(&[b.clone(), a.clone()]);
        assert_eq!(ranked[0].id, "a");
        assert_eq!(ranked[1].id, "b");
    }

    #[test]
    fn test_distance_availability_beats_similarity() {
        let near_but_vague = result("b", 0.5, Some(1000.0));
        let similar_but_unknown = result("a", 0.9, None);
        assert_eq!(compare(&near_but_vague, &similar_but_unknown), Ordering::Less);
        assert_eq!(compare(&similar_but_unknown, &near_but_vague), Ordering::Greater);

        let ranked = rank(&[similar_but_unknown, near_but_vague]);
        assert_eq!(ranked[0].id, "b");
    }

    #[test]
    fn test_similarity_descending_without_distances() {
        let a = result("a", 0.3, None);
        let b = result("b", 0.8, None);
        let ranked = rank(&[a, b]);
        assert_eq!(ranked[0].id, "b");
        assert_eq!(ranked[1].id, "a");
    }

    #[test]
    fn test_zero_distance_counts_as_available() {
        // A result at the searcher's exact location must not fall into the
        // no-distance branch.
        let at_origin = result("a", 0.4, Some(0.0));
        let unknown = result("b", 0.99, None);
        assert_eq!(compare(&at_origin, &unknown), Ordering::Less);

        // And within the blended branch, zero distance is the best possible
        // distance component.
        let nearby = result("c", 0.4, Some(100.0));
        assert_eq!(compare(&at_origin, &nearby), Ordering::Less);
    }

    #[test]
    fn test_rank_is_pure_and_deterministic() {
        let input = vec![
            result("a", 0.2, None),
            result("b", 0.9, Some(4000.0)),
            result("c", 0.7, None),
            result("d", 0.8, Some(300.0)),
        ];
        let snapshot = input.clone();

        let first = rank(&input);
        let second = rank(&first);

        // Input untouched, re-ranking a ranked list is the identity
        assert_eq!(input, snapshot);
        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["d", "b", "c", "a"]);
    }

    #[test]
    fn test_equal_scores_keep_response_order() {
        let first = result("first", 0.6, Some(500.0));
        let second = result("second", 0.6, Some(500.0));
        let ranked = rank(&[first, second]);
        assert_eq!(ranked[0].id, "first");
        assert_eq!(ranked[1].id, "second");
    }
}
