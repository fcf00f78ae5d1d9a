//! Matching & Ranking Engine — scores collaborators against a project's
//! required skills from their role labels and peer-review history, and ranks
//! a batch of candidates by the resulting composite.
//!
//! Pure and synchronous: callers supply fully materialized collections and
//! receive transient results. The engine performs no I/O, owns no state, and
//! exposes exactly two operations — [`score_candidate`] and
//! [`rank_candidates`] (or their [`MatchEngine`] method forms for a custom
//! [`ScoringConfig`]).

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;

pub use config::{ComponentWeights, PenaltyWeights, ScoringConfig};
pub use errors::EngineError;
pub use matching::composer::{score_candidate, MatchEngine, MatchScore, PenaltyFlags, ScoreBreakdown};
pub use matching::ranker::{rank_candidates, RankedCandidate};
pub use matching::skill_match::SkillOverlap;
pub use models::candidate::CandidateProfile;
pub use models::review::{FlagKind, MetricKind, Review, ReviewFlags, ReviewMetrics};
