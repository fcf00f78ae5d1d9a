// Matching & Ranking Engine core.
// Implements: review aggregation, skill overlap, score composition, ranking.
// Fully synchronous and side-effect-free — callers hand in materialized
// collections and own all I/O.

pub mod aggregation;
pub mod composer;
pub mod ranker;
pub mod skill_match;
