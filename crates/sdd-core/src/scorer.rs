use crate::catalog::Catalog;
use crate::types::Vocabulary;
use tracing::debug;

// ---------------------------------------------------------------------------
// ScoreEntry
// ---------------------------------------------------------------------------

/// Match result for one label: how many distinct keywords hit the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry<V> {
    pub label: V,
    pub score: u32,
    pub agent: &'static str,
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

/// Score `text` against every label of the catalog, in catalog order.
///
/// Matching is case-insensitive with word boundaries; each keyword
/// contributes at most 1 regardless of occurrence count. Total over all
/// string inputs: empty or whitespace-only text yields all-zero scores,
/// never an error.
pub fn score<V: Vocabulary>(catalog: &Catalog<V>, text: &str) -> Vec<ScoreEntry<V>> {
    let entries: Vec<ScoreEntry<V>> = catalog
        .entries()
        .iter()
        .map(|entry| ScoreEntry {
            label: entry.label,
            score: entry.distinct_matches(text),
            agent: entry.agent,
        })
        .collect();

    for e in entries.iter().filter(|e| e.score > 0) {
        debug!(label = e.label.as_str(), score = e.score, "keyword match");
    }
    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain_catalog;
    use crate::types::Domain;

    fn score_of(entries: &[ScoreEntry<Domain>], d: Domain) -> u32 {
        entries.iter().find(|e| e.label == d).map(|e| e.score).unwrap()
    }

    #[test]
    fn empty_input_scores_zero_everywhere() {
        let catalog = domain_catalog().unwrap();
        for e in score(&catalog, "") {
            assert_eq!(e.score, 0);
        }
    }

    #[test]
    fn whitespace_and_control_chars_score_zero() {
        let catalog = domain_catalog().unwrap();
        for e in score(&catalog, " \t\n\u{0007}\u{0000} ") {
            assert_eq!(e.score, 0);
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let catalog = domain_catalog().unwrap();
        let text = "add an api endpoint and a react component";
        let a = score(&catalog, text);
        let b = score(&catalog, text);
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let catalog = domain_catalog().unwrap();
        let once = score(&catalog, "api");
        let thrice = score(&catalog, "api api api");
        assert_eq!(
            score_of(&once, Domain::Backend),
            score_of(&thrice, Domain::Backend)
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = domain_catalog().unwrap();
        let upper = score(&catalog, "API endpoint");
        let lower = score(&catalog, "api ENDPOINT");
        assert_eq!(upper, lower);
        assert_eq!(score_of(&upper, Domain::Backend), 2);
    }

    #[test]
    fn no_substring_match_inside_words() {
        let catalog = domain_catalog().unwrap();
        let entries = score(&catalog, "rapid prototyping");
        assert_eq!(score_of(&entries, Domain::Backend), 0);
    }

    #[test]
    fn overlapping_keywords_count_in_both_domains() {
        // "auth" triggers security; no cross-domain dedup is performed.
        let catalog = domain_catalog().unwrap();
        let entries = score(&catalog, "test the auth flow");
        assert!(score_of(&entries, Domain::Testing) >= 1);
        assert!(score_of(&entries, Domain::Security) >= 1);
    }

    #[test]
    fn results_follow_catalog_order() {
        let catalog = domain_catalog().unwrap();
        let entries = score(&catalog, "anything");
        let labels: Vec<Domain> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, Domain::all().to_vec());
    }
}
