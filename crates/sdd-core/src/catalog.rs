use crate::error::{Result, SddError};
use crate::types::{Domain, Department, Vocabulary};
use regex::Regex;

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// One label of a catalog: its trigger patterns and the agent that handles it.
#[derive(Debug)]
pub struct CatalogEntry<V> {
    pub label: V,
    pub agent: &'static str,
    patterns: Vec<Regex>,
}

impl<V: Vocabulary> CatalogEntry<V> {
    /// Count of distinct patterns that match `text` at least once. A pattern
    /// matching many times still contributes exactly 1.
    pub fn distinct_matches(&self, text: &str) -> u32 {
        self.patterns.iter().filter(|p| p.is_match(text)).count() as u32
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// An immutable, compiled keyword catalog over a closed vocabulary.
///
/// Entries are stored in declaration order and iterated in that order
/// everywhere. Declaration order is the documented tie-break order for
/// routing, so the backing store must never become a hash map.
#[derive(Debug)]
pub struct Catalog<V: Vocabulary> {
    entries: Vec<CatalogEntry<V>>,
}

impl<V: Vocabulary> Catalog<V> {
    /// Compile a catalog from `(label, agent, keywords)` rows.
    ///
    /// Keywords may be literal words or lightweight regex fragments (e.g.
    /// `row.level.security`); each is wrapped as a case-insensitive
    /// word-boundary pattern. All configuration defects fail here, at load
    /// time, never at match time:
    /// - a keyword that does not compile as a regex,
    /// - a label declared twice,
    /// - a label of `V::all()` with no row (agent lookup must be total).
    pub fn compile(rows: &[(V, &'static str, &[&'static str])]) -> Result<Self> {
        let mut entries: Vec<CatalogEntry<V>> = Vec::with_capacity(rows.len());

        for &(label, agent, keywords) in rows {
            if entries.iter().any(|e| e.label == label) {
                return Err(SddError::DuplicateCatalogEntry(label.as_str().to_string()));
            }
            let mut patterns = Vec::with_capacity(keywords.len());
            for kw in keywords {
                let pattern =
                    Regex::new(&format!(r"(?i)\b(?:{kw})\b")).map_err(|source| {
                        SddError::InvalidPattern {
                            label: label.as_str().to_string(),
                            pattern: (*kw).to_string(),
                            source,
                        }
                    })?;
                patterns.push(pattern);
            }
            entries.push(CatalogEntry {
                label,
                agent,
                patterns,
            });
        }

        for &label in V::all() {
            if !entries.iter().any(|e| e.label == label) {
                return Err(SddError::MissingCatalogEntry(label.as_str().to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Entries in declaration (tie-break) order.
    pub fn entries(&self) -> &[CatalogEntry<V>] {
        &self.entries
    }

    /// Total agent lookup. `compile` guarantees every label has an entry.
    pub fn agent_for(&self, label: V) -> &'static str {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.agent)
            .expect("catalog validated complete at compile time")
    }
}

// ---------------------------------------------------------------------------
// Domain catalog
// ---------------------------------------------------------------------------

/// Keyword data for task-text domain detection. Rows are data, not logic:
/// adding a domain means adding a `Domain` variant and a row here.
const DOMAIN_ROWS: &[(Domain, &'static str, &[&'static str])] = &[
    (
        Domain::Frontend,
        "frontend-developer",
        &[
            "components?", "ui", "interface", "react", "vue", "svelte", "css",
            "style", "styling", "buttons?", "forms?", "pages?", "screens?",
            "layout", "responsive", "animation", "render", "frontend",
        ],
    ),
    (
        Domain::Backend,
        "backend-developer",
        &[
            "api", "endpoints?", "server", "routes?", "controllers?",
            "services?", "rest", "graphql", "middleware", "webhooks?",
            "handlers?", "backend", "business.logic",
        ],
    ),
    (
        Domain::Database,
        "database-specialist",
        &[
            "database", "schema", "migrations?", "quer(?:y|ies)", "sql",
            "tables?", "postgres", "supabase", "rls", "row.level.security",
            "orm", "transactions?", "seed.data",
        ],
    ),
    (
        Domain::Testing,
        "test-engineer",
        &[
            "tests?", "testing", "unit.tests?", "integration.tests?", "e2e",
            "coverage", "tdd", "assertions?", "mocks?", "regression",
            "test.first",
        ],
    ),
    (
        Domain::Security,
        "security-auditor",
        &[
            "security", "vulnerabilit(?:y|ies)", "auth", "authentication",
            "authorization", "encryption", "owasp", "xss", "csrf", "injection",
            "secrets?", "permissions?", "tokens?",
        ],
    ),
    (
        Domain::Performance,
        "performance-engineer",
        &[
            "performance", "optimize", "optimization", "slow", "latency",
            "cache", "caching", "profiling", "bottleneck", "memory",
            "benchmark", "throughput",
        ],
    ),
    (
        Domain::Devops,
        "devops-engineer",
        &[
            "deploy", "deployment", "docker", "kubernetes", "ci.cd",
            "pipelines?", "infrastructure", "terraform", "monitoring",
            "containers?", "rollback", "github.actions",
        ],
    ),
    (
        Domain::Specification,
        "spec-writer",
        &[
            "specifications?", "specify", "requirements?", "user.stor(?:y|ies)",
            "acceptance.criteria", "clarify", "prd", "scope", "stakeholders?",
        ],
    ),
    (
        Domain::Tasks,
        "task-planner",
        &[
            "tasks?", "breakdown", "estimates?", "backlog", "sprint",
            "checklists?", "dependenc(?:y|ies)", "parallelize", "work.items?",
        ],
    ),
    (
        Domain::Orchestration,
        "orchestrator",
        &[
            "orchestrate", "orchestration", "workflow", "coordinate",
            "multi.agent", "delegate", "delegation", "handoff",
        ],
    ),
    (
        Domain::AgentCreation,
        "agent-architect",
        &[
            "new.agent", "create.an.agent", "persona", "subagent",
            "agent.definition", "system.prompt",
        ],
    ),
];

/// Build the compiled domain-detection catalog. Configuration defects in
/// `DOMAIN_ROWS` surface here as errors.
pub fn domain_catalog() -> Result<Catalog<Domain>> {
    Catalog::compile(DOMAIN_ROWS)
}

// ---------------------------------------------------------------------------
// Department catalog
// ---------------------------------------------------------------------------

/// Keyword data for mapping an agent-purpose description to a department.
const DEPARTMENT_ROWS: &[(Department, &'static str, &[&'static str])] = &[
    (
        Department::Architecture,
        "system-architect",
        &[
            "architecture", "architect", "design", "systems?", "scalability",
            "patterns?", "adr", "diagrams?", "tradeoffs?",
        ],
    ),
    (
        Department::Engineering,
        "senior-engineer",
        &[
            "implement", "build", "code", "develop", "features?", "refactor",
            "bugs?", "fix",
        ],
    ),
    (
        Department::Quality,
        "qa-lead",
        &[
            "tests?", "quality", "reviews?", "validate", "audit", "coverage",
            "lint",
        ],
    ),
    (
        Department::Data,
        "data-engineer",
        &[
            "data", "database", "schema", "pipelines?", "analytics", "etl",
            "migrations?", "warehouse",
        ],
    ),
    (
        Department::Product,
        "product-manager",
        &[
            "product", "requirements?", "users?", "stor(?:y|ies)", "roadmap",
            "prioritize", "ux", "customers?",
        ],
    ),
    (
        Department::Operations,
        "ops-engineer",
        &[
            "deploy", "infrastructure", "monitor", "incidents?", "devops",
            "release", "on.call", "alerting",
        ],
    ),
];

/// Build the compiled department-assignment catalog.
pub fn department_catalog() -> Result<Catalog<Department>> {
    Catalog::compile(DEPARTMENT_ROWS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
