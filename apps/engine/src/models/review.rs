use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

/// One named dimension of a peer review, scored 1–5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Deadlines,
    Quality,
    Communication,
    Teamwork,
    Professionalism,
    ProblemSolving,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Deadlines => "deadlines",
            MetricKind::Quality => "quality",
            MetricKind::Communication => "communication",
            MetricKind::Teamwork => "teamwork",
            MetricKind::Professionalism => "professionalism",
            MetricKind::ProblemSolving => "problem_solving",
        }
    }
}

impl FromStr for MetricKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deadlines" => Ok(MetricKind::Deadlines),
            "quality" => Ok(MetricKind::Quality),
            "communication" => Ok(MetricKind::Communication),
            "teamwork" => Ok(MetricKind::Teamwork),
            "professionalism" => Ok(MetricKind::Professionalism),
            "problem_solving" => Ok(MetricKind::ProblemSolving),
            other => Err(EngineError::UnknownMetric(other.to_string())),
        }
    }
}

/// A misconduct indicator on a review. Only toxic and abandoned currently
/// carry a scoring penalty; broken_rules is recorded for moderation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    Toxic,
    Abandoned,
    BrokenRules,
}

impl FromStr for FlagKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toxic" => Ok(FlagKind::Toxic),
            "abandoned" => Ok(FlagKind::Abandoned),
            "broken_rules" => Ok(FlagKind::BrokenRules),
            other => Err(EngineError::UnknownFlag(other.to_string())),
        }
    }
}

/// Optional per-dimension sub-scores of a review. An absent dimension means
/// the reviewer skipped it — "unknown", never zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewMetrics {
    pub deadlines: Option<f64>,
    pub quality: Option<f64>,
    pub communication: Option<f64>,
    pub teamwork: Option<f64>,
    pub professionalism: Option<f64>,
    pub problem_solving: Option<f64>,
}

impl ReviewMetrics {
    pub fn get(&self, metric: MetricKind) -> Option<f64> {
        match metric {
            MetricKind::Deadlines => self.deadlines,
            MetricKind::Quality => self.quality,
            MetricKind::Communication => self.communication,
            MetricKind::Teamwork => self.teamwork,
            MetricKind::Professionalism => self.professionalism,
            MetricKind::ProblemSolving => self.problem_solving,
        }
    }
}

/// Optional misconduct indicators on a review. An absent flag means
/// "not reported", which is weaker than an explicit `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewFlags {
    pub toxic: Option<bool>,
    pub abandoned: Option<bool>,
    pub broken_rules: Option<bool>,
}

impl ReviewFlags {
    pub fn get(&self, flag: FlagKind) -> Option<bool> {
        match flag {
            FlagKind::Toxic => self.toxic,
            FlagKind::Abandoned => self.abandoned,
            FlagKind::BrokenRules => self.broken_rules,
        }
    }

    /// True only when the flag was explicitly reported as true.
    pub fn is_raised(&self, flag: FlagKind) -> bool {
        self.get(flag) == Some(true)
    }
}

/// One peer review, written after a completed collaboration between a
/// reviewer and a candidate. Immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub reviewer_id: Uuid,
    pub candidate_id: Uuid,
    /// Overall rating on the 1–5 scale. Required on every review.
    pub rating_overall: f64,
    #[serde(default)]
    pub metrics: ReviewMetrics,
    pub would_work_again: Option<bool>,
    #[serde(default)]
    pub flags: ReviewFlags,
    pub created_at: DateTime<Utc>,
}
