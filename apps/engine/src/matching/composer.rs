//! Score Composer — produces one `MatchScore` for a
//! (candidate, reviews, required skills) triple.
//!
//! Four weighted components plus flat misconduct penalties, clamped to the
//! score scale only at the very end. Every policy number lives in
//! `ScoringConfig`; nothing here is hard-coded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ScoringConfig, RATING_SCALE_MAX, SCORE_CEILING, SCORE_FLOOR};
use crate::matching::aggregation::{
    average_metric, average_overall_rating, has_flag, repeat_hire_rate,
};
use crate::matching::skill_match::compute_skill_overlap;
use crate::models::candidate::CandidateProfile;
use crate::models::review::{FlagKind, MetricKind, Review};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// The four weighted components, before penalties. Each is non-negative and
/// bounded by its weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub reputation: f64,
    pub reliability: f64,
    pub compatibility: f64,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> f64 {
        self.skill_match + self.reputation + self.reliability + self.compatibility
    }
}

/// Misconduct flags observed anywhere in the review history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyFlags {
    pub toxic: bool,
    pub abandoned: bool,
}

/// Full scoring result for one candidate evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    /// Composite score, clamped to [0, 100].
    pub total: f64,
    pub breakdown: ScoreBreakdown,
    pub penalties: PenaltyFlags,
    /// Raw average overall rating on the 1–5 scale (midpoint when
    /// unreviewed).
    pub average_rating: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Stateless scoring engine, parameterized by policy config. Cheap to build;
/// holds no caches and owns no I/O.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: ScoringConfig,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl MatchEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one candidate against a project's required skills.
    ///
    /// Input ranges are not validated: an out-of-range `rating_overall`
    /// propagates arithmetically and is absorbed by the final clamp. Data
    /// quality is the storage layer's concern.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        reviews: &[Review],
        required_skills: &[String],
    ) -> MatchScore {
        let weights = &self.config.weights;

        // Skill match. A project with no stated requirements can neither
        // reward nor penalize a candidate on skill — half credit.
        let skill_match = if required_skills.is_empty() {
            self.config.skill_half_credit()
        } else {
            let overlap = compute_skill_overlap(required_skills, &candidate.roles);
            weights.skill_match * overlap.ratio()
        };

        let average_rating = average_overall_rating(reviews);
        let reputation = weights.reputation * average_rating / RATING_SCALE_MAX;

        // Reliability reads only the deadlines metric; the other five
        // dimensions are recorded but do not enter the composite.
        let reliability =
            weights.reliability * average_metric(reviews, MetricKind::Deadlines) / RATING_SCALE_MAX;

        // Compatibility. Unreviewed candidates get half credit instead of a
        // 0% repeat-hire rate.
        let compatibility = match repeat_hire_rate(reviews) {
            Some(rate) => weights.compatibility * rate,
            None => self.config.compatibility_half_credit(),
        };

        let breakdown = ScoreBreakdown {
            skill_match,
            reputation,
            reliability,
            compatibility,
        };

        let penalties = PenaltyFlags {
            toxic: has_flag(reviews, FlagKind::Toxic),
            abandoned: has_flag(reviews, FlagKind::Abandoned),
        };

        // Flat deductions off the component sum; both can apply. The sum may
        // go negative here — only the final total is clamped.
        let mut deduction = 0.0;
        if penalties.toxic {
            deduction += self.config.penalties.toxic;
        }
        if penalties.abandoned {
            deduction += self.config.penalties.abandoned;
        }

        let total = (breakdown.sum() - deduction).clamp(SCORE_FLOOR, SCORE_CEILING);

        debug!(
            "Scored candidate {} against {} required skills: total {total:.1} \
             (skill {skill_match:.1}, reputation {reputation:.1}, reliability \
             {reliability:.1}, compatibility {compatibility:.1})",
            candidate.id,
            required_skills.len(),
        );

        MatchScore {
            total,
            breakdown,
            penalties,
            average_rating,
        }
    }
}

/// Scores with the default policy config.
pub fn score_candidate(
    candidate: &CandidateProfile,
    reviews: &[Review],
    required_skills: &[String],
) -> MatchScore {
    MatchEngine::default().score(candidate, reviews, required_skills)
}
