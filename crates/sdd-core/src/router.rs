use crate::catalog::Catalog;
use crate::scorer::ScoreEntry;
use crate::types::{Strategy, Vocabulary};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A domain needs at least this many distinct keyword hits to count as
/// "significant" for the multi-agent decision.
pub const SIGNIFICANT_SCORE: u32 = 2;

/// How many top domains contribute agents to a multi-agent suggestion.
const MAX_SUGGESTED_DOMAINS: usize = 3;

/// Agent prepended to every multi-agent suggestion list.
pub const ORCHESTRATOR_AGENT: &str = "orchestrator";

/// Label excluded from multi-agent suggestions to avoid suggesting the
/// orchestrator twice under its own domain.
const ORCHESTRATION_LABEL: &str = "orchestration";

// ---------------------------------------------------------------------------
// RoutingDecision
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedDomain {
    pub domain: String,
    pub score: u32,
    pub agent: String,
}

/// The complete outcome of one classification request. Both the JSON output
/// and the human-readable summary render from this one struct, so the two
/// can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub strategy: Strategy,
    pub total_matches: u32,
    pub domain_count: usize,
    pub domains: Vec<RankedDomain>,
    pub suggested_agents: Vec<String>,
}

impl RoutingDecision {
    /// Exit code contract for CLI callers: any match succeeds.
    pub fn exit_code(&self) -> i32 {
        if self.total_matches > 0 {
            0
        } else {
            1
        }
    }
}

// ---------------------------------------------------------------------------
// decide
// ---------------------------------------------------------------------------

/// Turn per-label scores into a delegation decision.
///
/// - no matched label: `none`
/// - one matched label: `single-agent`
/// - two or more matched labels, at least two significant: `multi-agent`,
///   orchestrator first, then the agents of the top 3 labels
/// - two or more matched labels, fewer than two significant: `single-agent`
///   on the top label
///
/// Ties sort by catalog declaration order (the scorer emits entries in that
/// order and the sort is stable).
pub fn decide<V: Vocabulary>(catalog: &Catalog<V>, scores: &[ScoreEntry<V>]) -> RoutingDecision {
    let mut matched: Vec<ScoreEntry<V>> =
        scores.iter().copied().filter(|e| e.score > 0).collect();
    matched.sort_by(|a, b| b.score.cmp(&a.score));

    let total_matches: u32 = matched.iter().map(|e| e.score).sum();
    let domain_count = matched.len();
    let significant = matched
        .iter()
        .filter(|e| e.score >= SIGNIFICANT_SCORE)
        .count();

    let (strategy, suggested_agents) = match domain_count {
        0 => (Strategy::None, Vec::new()),
        1 => (
            Strategy::SingleAgent,
            vec![catalog.agent_for(matched[0].label).to_string()],
        ),
        _ if significant >= 2 => {
            let mut agents = vec![ORCHESTRATOR_AGENT.to_string()];
            for entry in matched
                .iter()
                .filter(|e| e.label.as_str() != ORCHESTRATION_LABEL)
                .take(MAX_SUGGESTED_DOMAINS)
            {
                let agent = catalog.agent_for(entry.label).to_string();
                if !agents.contains(&agent) {
                    agents.push(agent);
                }
            }
            (Strategy::MultiAgent, agents)
        }
        _ => (
            Strategy::SingleAgent,
            vec![catalog.agent_for(matched[0].label).to_string()],
        ),
    };

    debug!(
        strategy = strategy.as_str(),
        domain_count, total_matches, significant, "routing decision"
    );

    RoutingDecision {
        strategy,
        total_matches,
        domain_count,
        domains: matched
            .iter()
            .map(|e| RankedDomain {
                domain: e.label.as_str().to_string(),
                score: e.score,
                agent: e.agent.to_string(),
            })
            .collect(),
        suggested_agents,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
