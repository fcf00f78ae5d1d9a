//! Skill overlap between a project's required skills and a candidate's role
//! labels. Exact string equality after case folding — no fuzzy or substring
//! matching.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Overlap of a candidate's roles against one required-skill list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillOverlap {
    /// Required labels the candidate covers, in required-list order and with
    /// the project's original casing.
    pub matched: Vec<String>,
    /// Number of required entries, duplicates included.
    pub required_count: usize,
}

impl SkillOverlap {
    /// Matched share of the required list. 0.0 when nothing was required —
    /// the composer substitutes half credit before this matters.
    pub fn ratio(&self) -> f64 {
        if self.required_count == 0 {
            return 0.0;
        }
        self.matched.len() as f64 / self.required_count as f64
    }
}

/// Computes the overlap. Candidate roles fold into a set, so duplicate roles
/// on the profile are harmless; duplicate entries in the required list count
/// toward the denominator (and the numerator, when covered) each time.
pub fn compute_skill_overlap(required_skills: &[String], roles: &[String]) -> SkillOverlap {
    let role_set: HashSet<String> = roles.iter().map(|r| r.to_lowercase()).collect();

    let matched: Vec<String> = required_skills
        .iter()
        .filter(|skill| role_set.contains(&skill.to_lowercase()))
        .cloned()
        .collect();

    SkillOverlap {
        matched,
        required_count: required_skills.len(),
    }
}
