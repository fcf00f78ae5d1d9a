use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Upper bound of the 1–5 review rating scale.
pub const RATING_SCALE_MAX: f64 = 5.0;
/// Midpoint of the rating scale, substituted when a candidate has no data.
pub const RATING_SCALE_MIDPOINT: f64 = 3.0;
/// Bounds of the composite score. Applied once, after penalties.
pub const SCORE_FLOOR: f64 = 0.0;
pub const SCORE_CEILING: f64 = 100.0;

/// Maximum contribution of each weighted component to the composite score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub skill_match: f64,
    pub reputation: f64,
    pub reliability: f64,
    pub compatibility: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            skill_match: 40.0,
            reputation: 30.0,
            reliability: 20.0,
            compatibility: 10.0,
        }
    }
}

impl ComponentWeights {
    pub fn sum(&self) -> f64 {
        self.skill_match + self.reputation + self.reliability + self.compatibility
    }
}

/// Flat deductions applied to the component sum when a misconduct flag is
/// present anywhere in the review history. Both can apply at once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PenaltyWeights {
    pub toxic: f64,
    pub abandoned: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            toxic: 50.0,
            abandoned: 30.0,
        }
    }
}

/// Scoring policy. Every number that shapes a composite score lives here so
/// a policy change never touches the composition logic.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ComponentWeights,
    pub penalties: PenaltyWeights,
}

impl ScoringConfig {
    /// Loads the default policy with optional environment overrides.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScoringConfig::default();
        let config = ScoringConfig {
            weights: ComponentWeights {
                skill_match: env_f64("MATCH_WEIGHT_SKILL", defaults.weights.skill_match)?,
                reputation: env_f64("MATCH_WEIGHT_REPUTATION", defaults.weights.reputation)?,
                reliability: env_f64("MATCH_WEIGHT_RELIABILITY", defaults.weights.reliability)?,
                compatibility: env_f64("MATCH_WEIGHT_COMPATIBILITY", defaults.weights.compatibility)?,
            },
            penalties: PenaltyWeights {
                toxic: env_f64("MATCH_PENALTY_TOXIC", defaults.penalties.toxic)?,
                abandoned: env_f64("MATCH_PENALTY_ABANDONED", defaults.penalties.abandoned)?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects policy values that would corrupt every downstream score.
    pub fn validate(&self) -> Result<(), EngineError> {
        let named = [
            ("weights.skill_match", self.weights.skill_match),
            ("weights.reputation", self.weights.reputation),
            ("weights.reliability", self.weights.reliability),
            ("weights.compatibility", self.weights.compatibility),
            ("penalties.toxic", self.penalties.toxic),
            ("penalties.abandoned", self.penalties.abandoned),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Neutral skill credit when a project states no requirements:
    /// half the component's maximum.
    pub fn skill_half_credit(&self) -> f64 {
        self.weights.skill_match / 2.0
    }

    /// Neutral compatibility credit for an unreviewed candidate:
    /// half the component's maximum.
    pub fn compatibility_half_credit(&self) -> f64 {
        self.weights.compatibility / 2.0
    }
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
