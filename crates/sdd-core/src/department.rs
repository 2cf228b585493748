use crate::catalog::Catalog;
use crate::scorer::{score, ScoreEntry};
use crate::types::Department;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ---------------------------------------------------------------------------
// DepartmentAssignment
// ---------------------------------------------------------------------------

/// Outcome of classifying an agent-purpose description into a department,
/// with the defaults an agent definition created under it would inherit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentAssignment {
    pub department: Department,
    pub score: u32,
    pub agent: String,
    pub tools: Vec<String>,
    pub permission_mode: String,
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

/// Assign a department to a free-text purpose description.
///
/// Same scoring engine as domain detection, second vocabulary. When nothing
/// matches (score 0 across the board) the assignment falls back to
/// Engineering, so classification always succeeds on valid input. Ties go to
/// the earlier catalog entry.
pub fn classify(catalog: &Catalog<Department>, purpose: &str) -> DepartmentAssignment {
    let scores: Vec<ScoreEntry<Department>> = score(catalog, purpose);

    // Scan in catalog order and keep the first maximum, so ties resolve to
    // the earlier declaration deterministically.
    let mut department = Department::Engineering;
    let mut best_score = 0;
    for e in &scores {
        if e.score > best_score {
            department = e.label;
            best_score = e.score;
        }
    }
    debug!(
        department = department.as_str(),
        score = best_score,
        fallback = best_score == 0,
        "department assignment"
    );

    DepartmentAssignment {
        department,
        score: best_score,
        agent: catalog.agent_for(department).to_string(),
        tools: department
            .default_tools()
            .iter()
            .map(|t| (*t).to_string())
            .collect(),
        permission_mode: department.default_permission_mode().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::department_catalog;

    fn assign(purpose: &str) -> DepartmentAssignment {
        let catalog = department_catalog().unwrap();
        classify(&catalog, purpose)
    }

    #[test]
    fn architecture_purpose_maps_to_architecture() {
        let a = assign("design the system architecture and record tradeoffs");
        assert_eq!(a.department, Department::Architecture);
        assert!(a.score >= 2);
        assert_eq!(a.permission_mode, "plan");
    }

    #[test]
    fn quality_purpose_maps_to_quality() {
        let a = assign("review code quality and enforce test coverage");
        assert_eq!(a.department, Department::Quality);
        assert!(a.tools.contains(&"Bash".to_string()));
    }

    #[test]
    fn zero_match_falls_back_to_engineering() {
        let a = assign("do something nice");
        assert_eq!(a.department, Department::Engineering);
        assert_eq!(a.score, 0);
        assert_eq!(a.permission_mode, "acceptEdits");
    }

    #[test]
    fn empty_purpose_falls_back_to_engineering() {
        let a = assign("");
        assert_eq!(a.department, Department::Engineering);
        assert_eq!(a.score, 0);
    }

    #[test]
    fn tie_resolves_to_earlier_catalog_entry() {
        // "design" hits architecture, "implement" hits engineering, one each;
        // architecture is declared first.
        let a = assign("design and implement");
        assert_eq!(a.department, Department::Architecture);
    }

    #[test]
    fn assignment_carries_department_defaults() {
        let a = assign("deploy and monitor the release");
        assert_eq!(a.department, Department::Operations);
        assert_eq!(
            a.tools,
            vec!["Read".to_string(), "Bash".to_string(), "Grep".to_string()]
        );
    }
}
