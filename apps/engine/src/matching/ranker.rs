//! Ranker — batch scoring and descending ordering of candidates against one
//! project's required-skill list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::matching::composer::{MatchEngine, MatchScore};
use crate::models::candidate::CandidateProfile;
use crate::models::review::Review;

/// A candidate paired with its scoring result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: CandidateProfile,
    pub score: MatchScore,
}

impl MatchEngine {
    /// Scores every candidate and returns them ordered by descending total.
    ///
    /// A candidate with no entry in `reviews_by_candidate` scores as having
    /// an empty review history: all neutral defaults, no penalties. The sort
    /// is stable, so exactly-tied totals keep their input order.
    pub fn rank(
        &self,
        candidates: Vec<CandidateProfile>,
        reviews_by_candidate: &HashMap<Uuid, Vec<Review>>,
        required_skills: &[String],
    ) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let reviews = reviews_by_candidate
                    .get(&candidate.id)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                let score = self.score(&candidate, reviews, required_skills);
                RankedCandidate { candidate, score }
            })
            .collect();

        // Sort descending — highest total first
        ranked.sort_by(|a, b| {
            b.score
                .total
                .partial_cmp(&a.score.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        info!(
            "Ranked {} candidates against {} required skills",
            ranked.len(),
            required_skills.len()
        );

        ranked
    }
}

/// Ranks with the default policy config.
pub fn rank_candidates(
    candidates: Vec<CandidateProfile>,
    reviews_by_candidate: &HashMap<Uuid, Vec<Review>>,
    required_skills: &[String],
) -> Vec<RankedCandidate> {
    MatchEngine::default().rank(candidates, reviews_by_candidate, required_skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::{ReviewFlags, ReviewMetrics};
    use chrono::Utc;

    fn make_candidate(name: &str, roles: &[&str]) -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            display_name: name.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn make_review(candidate_id: Uuid, rating: f64, would_work_again: bool) -> Review {
        Review {
            id: Uuid::new_v4(),
            reviewer_id: Uuid::new_v4(),
            candidate_id,
            rating_overall: rating,
            metrics: ReviewMetrics::default(),
            would_work_again: Some(would_work_again),
            flags: ReviewFlags::default(),
            created_at: Utc::now(),
        }
    }

    fn skills(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn review_map(reviews: Vec<Review>) -> HashMap<Uuid, Vec<Review>> {
        let mut map: HashMap<Uuid, Vec<Review>> = HashMap::new();
        for review in reviews {
            map.entry(review.candidate_id).or_default().push(review);
        }
        map
    }

    #[test]
    fn test_rank_orders_by_descending_total() {
        let strong = make_candidate("strong", &["Artist", "Programmer"]);
        let weak = make_candidate("weak", &[]);
        let reviews = review_map(vec![
            make_review(strong.id, 5.0, true),
            make_review(weak.id, 2.0, false),
        ]);
        let required = skills(&["Artist", "Programmer"]);

        let ranked = rank_candidates(vec![weak.clone(), strong.clone()], &reviews, &required);

        assert_eq!(ranked[0].candidate.id, strong.id);
        assert_eq!(ranked[1].candidate.id, weak.id);
        assert!(ranked[0].score.total > ranked[1].score.total);
    }

    #[test]
    fn test_rank_is_invariant_under_input_reversal() {
        let a = make_candidate("a", &["Artist"]);
        let b = make_candidate("b", &["Writer"]);
        let c = make_candidate("c", &["Artist", "Writer"]);
        let reviews = review_map(vec![
            make_review(a.id, 4.0, true),
            make_review(b.id, 3.0, false),
            make_review(c.id, 5.0, true),
        ]);
        let required = skills(&["Artist", "Writer"]);

        let forward = rank_candidates(
            vec![a.clone(), b.clone(), c.clone()],
            &reviews,
            &required,
        );
        let backward = rank_candidates(vec![c, b, a], &reviews, &required);

        let forward_ids: Vec<Uuid> = forward.iter().map(|r| r.candidate.id).collect();
        let backward_ids: Vec<Uuid> = backward.iter().map(|r| r.candidate.id).collect();
        assert_eq!(forward_ids, backward_ids);
    }

    #[test]
    fn test_exact_ties_keep_input_order() {
        // Identical roles and no reviews → identical totals.
        let first = make_candidate("first", &["Artist"]);
        let second = make_candidate("second", &["Artist"]);
        let reviews = HashMap::new();

        let ranked = rank_candidates(
            vec![first.clone(), second.clone()],
            &reviews,
            &skills(&["Artist"]),
        );

        assert_eq!(ranked[0].score.total, ranked[1].score.total);
        assert_eq!(ranked[0].candidate.id, first.id);
        assert_eq!(ranked[1].candidate.id, second.id);
    }

    #[test]
    fn test_candidate_missing_from_review_map_scores_neutral() {
        // skill 40 + reputation 18 + reliability 12 + compatibility 5
        let unreviewed = make_candidate("new", &["Artist"]);
        let ranked = rank_candidates(
            vec![unreviewed],
            &HashMap::new(),
            &skills(&["Artist"]),
        );

        assert_eq!(ranked.len(), 1);
        assert!(!ranked[0].score.penalties.toxic);
        assert!((ranked[0].score.total - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_does_not_drop_or_duplicate_candidates() {
        let candidates: Vec<CandidateProfile> = (0..10)
            .map(|i| make_candidate(&format!("c{i}"), &["Artist"]))
            .collect();
        let ids: Vec<Uuid> = candidates.iter().map(|c| c.id).collect();

        let ranked = rank_candidates(candidates, &HashMap::new(), &skills(&["Artist"]));

        assert_eq!(ranked.len(), 10);
        let mut ranked_ids: Vec<Uuid> = ranked.iter().map(|r| r.candidate.id).collect();
        let mut expected = ids;
        ranked_ids.sort();
        expected.sort();
        assert_eq!(ranked_ids, expected);
    }

    #[test]
    fn test_flagged_candidate_drops_below_clean_peers() {
        let clean = make_candidate("clean", &["Artist"]);
        let flagged = make_candidate("flagged", &["Artist"]);
        let mut bad_review = make_review(flagged.id, 5.0, true);
        bad_review.flags.toxic = Some(true);
        let reviews = review_map(vec![make_review(clean.id, 4.0, true), bad_review]);

        let ranked = rank_candidates(
            vec![flagged.clone(), clean.clone()],
            &reviews,
            &skills(&["Artist"]),
        );

        assert_eq!(ranked[0].candidate.id, clean.id);
        assert!(ranked[1].score.penalties.toxic);
    }
}
