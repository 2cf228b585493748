use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// A closed set of classification labels that a `Catalog` can be built over.
///
/// `all()` defines the canonical declaration order; the catalog and router
/// use it both for completeness checks and as the deterministic tie-break
/// order when scores are equal.
pub trait Vocabulary: Copy + Eq + fmt::Debug + 'static {
    fn all() -> &'static [Self];
    fn as_str(self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Frontend,
    Backend,
    Database,
    Testing,
    Security,
    Performance,
    Devops,
    Specification,
    Tasks,
    Orchestration,
    AgentCreation,
}

impl Domain {
    pub fn all() -> &'static [Domain] {
        &[
            Domain::Frontend,
            Domain::Backend,
            Domain::Database,
            Domain::Testing,
            Domain::Security,
            Domain::Performance,
            Domain::Devops,
            Domain::Specification,
            Domain::Tasks,
            Domain::Orchestration,
            Domain::AgentCreation,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Frontend => "frontend",
            Domain::Backend => "backend",
            Domain::Database => "database",
            Domain::Testing => "testing",
            Domain::Security => "security",
            Domain::Performance => "performance",
            Domain::Devops => "devops",
            Domain::Specification => "specification",
            Domain::Tasks => "tasks",
            Domain::Orchestration => "orchestration",
            Domain::AgentCreation => "agent_creation",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = crate::error::SddError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| crate::error::SddError::InvalidDomain(s.to_string()))
    }
}

impl Vocabulary for Domain {
    fn all() -> &'static [Domain] {
        Domain::all()
    }

    fn as_str(self) -> &'static str {
        Domain::as_str(self)
    }
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Architecture,
    Engineering,
    Quality,
    Data,
    Product,
    Operations,
}

impl Department {
    pub fn all() -> &'static [Department] {
        &[
            Department::Architecture,
            Department::Engineering,
            Department::Quality,
            Department::Data,
            Department::Product,
            Department::Operations,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Architecture => "architecture",
            Department::Engineering => "engineering",
            Department::Quality => "quality",
            Department::Data => "data",
            Department::Product => "product",
            Department::Operations => "operations",
        }
    }

    /// Default tool grant for agents created under this department.
    pub fn default_tools(self) -> &'static [&'static str] {
        match self {
            Department::Architecture => &["Read", "Grep", "Glob", "WebSearch"],
            Department::Engineering => &["Read", "Write", "Edit", "Bash", "Grep", "Glob"],
            Department::Quality => &["Read", "Bash", "Grep", "Glob"],
            Department::Data => &["Read", "Write", "Edit", "Bash", "Grep"],
            Department::Product => &["Read", "Write", "WebSearch"],
            Department::Operations => &["Read", "Bash", "Grep"],
        }
    }

    /// Default permission mode for agents created under this department.
    /// Only engineering and data agents get edit acceptance by default.
    pub fn default_permission_mode(self) -> &'static str {
        match self {
            Department::Engineering | Department::Data => "acceptEdits",
            Department::Architecture => "plan",
            Department::Quality | Department::Product | Department::Operations => "default",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Department {
    type Err = crate::error::SddError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| crate::error::SddError::InvalidDepartment(s.to_string()))
    }
}

impl Vocabulary for Department {
    fn all() -> &'static [Department] {
        Department::all()
    }

    fn as_str(self) -> &'static str {
        Department::as_str(self)
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "single-agent")]
    SingleAgent,
    #[serde(rename = "multi-agent")]
    MultiAgent,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::None => "none",
            Strategy::SingleAgent => "single-agent",
            Strategy::MultiAgent => "multi-agent",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity / CheckResult / ReportStatus
// ---------------------------------------------------------------------------

/// How much weight a validator check carries. A failing `Required` check
/// fails the whole report; the other two only warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Required,
    Recommended,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckResult {
    Pass,
    Fail,
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Pass,
    Fail,
    Warn,
}

impl ReportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pass => "PASS",
            ReportStatus::Fail => "FAIL",
            ReportStatus::Warn => "WARN",
        }
    }

    /// Process exit code for the validator contract: PASS=0, FAIL=1, WARN=2.
    pub fn exit_code(self) -> i32 {
        match self {
            ReportStatus::Pass => 0,
            ReportStatus::Fail => 1,
            ReportStatus::Warn => 2,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
