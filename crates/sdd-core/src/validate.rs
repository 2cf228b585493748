use crate::error::SddError;
use crate::types::{CheckResult, ReportStatus, Severity};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ArtifactKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Spec,
    Plan,
    Tasks,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Spec => "spec",
            ArtifactKind::Plan => "plan",
            ArtifactKind::Tasks => "tasks",
        }
    }

    /// The check battery for this kind, in declaration order.
    pub fn checks(self) -> &'static [Check] {
        match self {
            ArtifactKind::Spec => SPEC_CHECKS,
            ArtifactKind::Plan => PLAN_CHECKS,
            ArtifactKind::Tasks => TASKS_CHECKS,
        }
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = SddError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spec" => Ok(ArtifactKind::Spec),
            "plan" => Ok(ArtifactKind::Plan),
            "tasks" => Ok(ArtifactKind::Tasks),
            _ => Err(SddError::InvalidArtifactKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Check
// ---------------------------------------------------------------------------

/// One heuristic presence check, fn-pointer predicate, evaluated uniformly.
pub struct Check {
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub predicate: fn(&str) -> bool,
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn has_title(text: &str) -> bool {
    text.lines().any(|l| l.starts_with("# "))
}

fn heading_contains(text: &str, terms: &[&str]) -> bool {
    text.lines()
        .filter(|l| l.trim_start().starts_with('#'))
        .any(|l| {
            let lower = l.to_lowercase();
            terms.iter().any(|t| lower.contains(t))
        })
}

fn body_contains(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|t| lower.contains(t))
}

fn checkbox_count(text: &str) -> usize {
    text.lines()
        .filter(|l| {
            let t = l.trim_start();
            t.starts_with("- [ ]") || t.starts_with("- [x]") || t.starts_with("- [X]")
        })
        .count()
}

fn has_overview(text: &str) -> bool {
    heading_contains(text, &["overview", "summary", "purpose"])
}

fn has_requirements(text: &str) -> bool {
    heading_contains(text, &["requirement", "functional", "capabilities"])
}

fn has_user_stories(text: &str) -> bool {
    body_contains(text, &["user stor", "as a ", "as an "])
}

fn has_acceptance_criteria(text: &str) -> bool {
    body_contains(text, &["acceptance criteria", "success criteria"])
}

fn has_edge_cases(text: &str) -> bool {
    body_contains(text, &["edge case", "error handling", "failure"])
}

fn has_non_goals(text: &str) -> bool {
    body_contains(text, &["non-goals", "non goals", "out of scope"])
}

fn no_implementation_code(text: &str) -> bool {
    !text.contains("```")
}

fn has_architecture(text: &str) -> bool {
    heading_contains(text, &["architecture", "design", "approach"])
}

fn has_tech_stack(text: &str) -> bool {
    body_contains(text, &["stack", "technolog", "dependencies", "libraries"])
}

fn has_phases(text: &str) -> bool {
    body_contains(text, &["phase", "milestone", "step"])
}

fn test_first_ordering(text: &str) -> bool {
    body_contains(text, &["test-first", "test first"])
}

fn references_spec(text: &str) -> bool {
    body_contains(text, &["spec"])
}

fn has_checklist(text: &str) -> bool {
    checkbox_count(text) >= 1
}

fn has_enough_tasks(text: &str) -> bool {
    checkbox_count(text) >= 3
}

fn has_test_tasks(text: &str) -> bool {
    // word-boundary match so "latest" does not count as a test task
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:tests?|testing|tdd)\b").expect("static pattern compiles")
    })
    .is_match(text)
}

fn has_dependency_notes(text: &str) -> bool {
    body_contains(
        text,
        &["depends on", "dependency", "dependencies", "blocked by", "prerequisite"],
    )
}

fn has_parallel_markers(text: &str) -> bool {
    text.contains("[P]")
}

// ---------------------------------------------------------------------------
// Check batteries
// ---------------------------------------------------------------------------

const SPEC_CHECKS: &[Check] = &[
    Check {
        name: "has_title",
        severity: Severity::Required,
        description: "spec has a top-level title heading",
        predicate: has_title,
    },
    Check {
        name: "has_overview",
        severity: Severity::Required,
        description: "spec has an overview, summary, or purpose section",
        predicate: has_overview,
    },
    Check {
        name: "has_requirements",
        severity: Severity::Required,
        description: "spec has a requirements or capabilities section",
        predicate: has_requirements,
    },
    Check {
        name: "has_user_stories",
        severity: Severity::Recommended,
        description: "spec describes user stories",
        predicate: has_user_stories,
    },
    Check {
        name: "has_acceptance_criteria",
        severity: Severity::Recommended,
        description: "spec states acceptance or success criteria",
        predicate: has_acceptance_criteria,
    },
    Check {
        name: "has_edge_cases",
        severity: Severity::Recommended,
        description: "spec covers edge cases or failure handling",
        predicate: has_edge_cases,
    },
    Check {
        name: "has_non_goals",
        severity: Severity::Optional,
        description: "spec declares non-goals or out-of-scope items",
        predicate: has_non_goals,
    },
    Check {
        name: "no_implementation_code",
        severity: Severity::Optional,
        description: "spec stays free of implementation code blocks",
        predicate: no_implementation_code,
    },
];

const PLAN_CHECKS: &[Check] = &[
    Check {
        name: "has_title",
        severity: Severity::Required,
        description: "plan has a top-level title heading",
        predicate: has_title,
    },
    Check {
        name: "has_architecture",
        severity: Severity::Required,
        description: "plan has an architecture, design, or approach section",
        predicate: has_architecture,
    },
    Check {
        name: "has_tech_stack",
        severity: Severity::Recommended,
        description: "plan names its technology stack or dependencies",
        predicate: has_tech_stack,
    },
    Check {
        name: "has_phases",
        severity: Severity::Recommended,
        description: "plan breaks work into phases, milestones, or steps",
        predicate: has_phases,
    },
    Check {
        name: "test_first_ordering",
        severity: Severity::Recommended,
        description: "plan commits to test-first ordering",
        predicate: test_first_ordering,
    },
    Check {
        name: "references_spec",
        severity: Severity::Optional,
        description: "plan references the spec it implements",
        predicate: references_spec,
    },
];

const TASKS_CHECKS: &[Check] = &[
    Check {
        name: "has_title",
        severity: Severity::Required,
        description: "task list has a top-level title heading",
        predicate: has_title,
    },
    Check {
        name: "has_checklist",
        severity: Severity::Required,
        description: "task list has at least one checkbox item",
        predicate: has_checklist,
    },
    Check {
        name: "has_enough_tasks",
        severity: Severity::Recommended,
        description: "task list has at least three checkbox items",
        predicate: has_enough_tasks,
    },
    Check {
        name: "has_test_tasks",
        severity: Severity::Recommended,
        description: "task list includes testing tasks",
        predicate: has_test_tasks,
    },
    Check {
        name: "has_dependency_notes",
        severity: Severity::Optional,
        description: "task list notes dependencies between tasks",
        predicate: has_dependency_notes,
    },
    Check {
        name: "has_parallel_markers",
        severity: Severity::Optional,
        description: "task list marks parallelizable tasks with [P]",
        predicate: has_parallel_markers,
    },
];

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub result: CheckResult,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub file: String,
    pub status: ReportStatus,
    pub score: u32,
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub checks: BTreeMap<String, CheckOutcome>,
}

#[derive(Debug, Clone, Copy)]
pub struct ValidateOptions {
    /// In strict mode, more than `max_warnings` warnings demotes PASS to WARN.
    pub strict: bool,
    pub max_warnings: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_warnings: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// Run the battery for `kind` against `text`. Pure: identical input yields an
/// identical report.
pub fn validate(
    kind: ArtifactKind,
    file: &str,
    text: &str,
    options: ValidateOptions,
) -> ValidationReport {
    let battery = kind.checks();
    let mut checks = BTreeMap::new();
    let mut passed = 0;
    let mut failed = 0;
    let mut warnings = 0;

    for check in battery {
        let ok = (check.predicate)(text);
        let result = match (ok, check.severity) {
            (true, _) => {
                passed += 1;
                CheckResult::Pass
            }
            (false, Severity::Required) => {
                failed += 1;
                CheckResult::Fail
            }
            (false, _) => {
                warnings += 1;
                CheckResult::Warn
            }
        };
        checks.insert(
            check.name.to_string(),
            CheckOutcome {
                result,
                description: check.description.to_string(),
            },
        );
    }

    let total_checks = battery.len();
    let score = ((passed as f64 / total_checks as f64) * 100.0).round() as u32;
    let status = if failed > 0 {
        ReportStatus::Fail
    } else if options.strict && warnings > options.max_warnings {
        ReportStatus::Warn
    } else {
        ReportStatus::Pass
    };

    ValidationReport {
        file: file.to_string(),
        status,
        score,
        total_checks,
        passed,
        failed,
        warnings,
        checks,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const GOOD_SPEC: &str = "\
# Payments Spec

## Overview
Customers pay invoices online.

## Requirements
- Accept cards

User stories: as a customer I pay an invoice.
Acceptance criteria: payment settles.
Edge cases: declined card is a failure path.
Non-goals: refunds are out of scope.
";

    const GOOD_TASKS: &str = "\
# Tasks

- [ ] write failing test for checkout
- [ ] implement checkout [P]
- [ ] run integration tests
- [ ] update docs (depends on checkout)
";

    fn run(kind: ArtifactKind, text: &str) -> ValidationReport {
        validate(kind, "artifact.md", text, ValidateOptions::default())
    }

    #[test]
    fn artifact_kind_from_str() {
        assert_eq!(ArtifactKind::from_str("spec").unwrap(), ArtifactKind::Spec);
        assert_eq!(ArtifactKind::from_str("plan").unwrap(), ArtifactKind::Plan);
        assert_eq!(ArtifactKind::from_str("tasks").unwrap(), ArtifactKind::Tasks);
        assert!(ArtifactKind::from_str("design").is_err());
    }

    #[test]
    fn complete_spec_passes_with_full_score() {
        let report = run(ArtifactKind::Spec, GOOD_SPEC);
        assert_eq!(report.status, ReportStatus::Pass);
        assert_eq!(report.score, 100);
        assert_eq!(report.failed, 0);
        assert_eq!(report.warnings, 0);
    }

    #[test]
    fn missing_required_section_fails_regardless_of_rest() {
        let text = "no heading at all, but acceptance criteria and edge cases";
        let report = run(ArtifactKind::Spec, text);
        assert_eq!(report.status, ReportStatus::Fail);
        assert_eq!(report.checks["has_title"].result, CheckResult::Fail);
    }

    #[test]
    fn score_law_holds() {
        let report = run(ArtifactKind::Tasks, GOOD_TASKS);
        let expected =
            ((report.passed as f64 / report.total_checks as f64) * 100.0).round() as u32;
        assert_eq!(report.score, expected);
    }

    #[test]
    fn tasks_without_tests_warn_but_pass() {
        // title + five checkboxes, no test keyword, no dependency language
        let text = "\
# Tasks

- [ ] scaffold module
- [ ] add parser
- [ ] add renderer
- [ ] wire cli
- [ ] write docs
";
        let report = run(ArtifactKind::Tasks, text);
        assert_eq!(report.status, ReportStatus::Pass);
        assert_eq!(report.checks["has_test_tasks"].result, CheckResult::Warn);
        assert!(report.score < 100);
    }

    #[test]
    fn strict_mode_demotes_warnings_to_warn_status() {
        let text = "# Tasks\n\n- [ ] single item\n";
        let lax = validate(
            ArtifactKind::Tasks,
            "t.md",
            text,
            ValidateOptions::default(),
        );
        assert_eq!(lax.status, ReportStatus::Pass);

        let strict = validate(
            ArtifactKind::Tasks,
            "t.md",
            text,
            ValidateOptions {
                strict: true,
                max_warnings: 0,
            },
        );
        assert_eq!(strict.status, ReportStatus::Warn);

        let lenient_strict = validate(
            ArtifactKind::Tasks,
            "t.md",
            text,
            ValidateOptions {
                strict: true,
                max_warnings: 10,
            },
        );
        assert_eq!(lenient_strict.status, ReportStatus::Pass);
    }

    #[test]
    fn required_failure_dominates_strict_warn() {
        let text = "no checkboxes here";
        let report = validate(
            ArtifactKind::Tasks,
            "t.md",
            text,
            ValidateOptions {
                strict: true,
                max_warnings: 0,
            },
        );
        assert_eq!(report.status, ReportStatus::Fail);
    }

    #[test]
    fn validation_is_idempotent() {
        let a = run(ArtifactKind::Spec, GOOD_SPEC);
        let b = run(ArtifactKind::Spec, GOOD_SPEC);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn word_boundary_in_test_task_detection() {
        let text = "# Tasks\n\n- [ ] fetch the latest release\n- [ ] b\n- [ ] c\n";
        let report = run(ArtifactKind::Tasks, text);
        assert_eq!(report.checks["has_test_tasks"].result, CheckResult::Warn);
    }

    #[test]
    fn plan_test_first_check() {
        let text = "# Plan\n\n## Approach\nWe work test-first with a clear stack, \
                    in three phases, per the spec.\n";
        let report = run(ArtifactKind::Plan, text);
        assert_eq!(report.status, ReportStatus::Pass);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn report_json_matches_schema_field_names() {
        let report = run(ArtifactKind::Tasks, GOOD_TASKS);
        let json = serde_json::to_value(&report).unwrap();
        for field in [
            "file",
            "status",
            "score",
            "total_checks",
            "passed",
            "failed",
            "warnings",
            "checks",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        let check = &json["checks"]["has_title"];
        assert_eq!(check["result"], "PASS");
        assert!(check.get("description").is_some());
    }
}
