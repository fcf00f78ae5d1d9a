use thiserror::Error;

/// Engine-level error type. Scoring itself never fails — missing or
/// out-of-range data resolves through neutral defaults — so errors arise
/// only where configuration or label strings from the platform are invalid.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("Unknown review metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown review flag: {0}")]
    UnknownFlag(String),
}
