use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A platform user under evaluation for a project's open slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub display_name: String,
    /// Role/skill labels as entered on the profile. Order is preserved and
    /// duplicates are kept; matching folds case but never deduplicates.
    pub roles: Vec<String>,
}
