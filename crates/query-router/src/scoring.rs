//! Keyword-overlap scoring of catalog tools.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use router_core::ToolMetadata;

use crate::synonyms::SynonymTable;
use crate::vocab;

/// Additive bonus when a recognized action verb matches the tool's name
/// suffix. Re-ranks among tools that already matched on subject keywords;
/// never the sole reason a tool is suggested.
const ACTION_VERB_BONUS: f64 = 0.5;

/// Scores catalog tools by token overlap with their keyword sets.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    stop_words: HashSet<&'static str>,
    action_verbs: IndexMap<&'static str, &'static str>,
}

impl KeywordScorer {
    /// Scorer with the built-in bilingual stop-word and verb tables.
    pub fn new() -> Self {
        Self {
            stop_words: vocab::STOP_WORDS.iter().copied().collect(),
            action_verbs: vocab::ACTION_VERBS.iter().copied().collect(),
        }
    }

    /// Lower-case, split on everything non-alphanumeric, drop stop-words.
    pub fn content_tokens(&self, query: &str) -> Vec<String> {
        query
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty() && !self.stop_words.contains(t))
            .map(str::to_string)
            .collect()
    }

    /// Tool-name suffixes for every recognized action verb in the tokens.
    pub fn verb_suffixes(&self, tokens: &[String]) -> Vec<&'static str> {
        tokens
            .iter()
            .filter_map(|t| self.action_verbs.get(t.as_str()).copied())
            .collect()
    }

    /// Score one tool against the normalized query tokens.
    ///
    /// The base score is the size of the intersection between the tokens
    /// and the tool's keyword set; a token also counts when the synonym
    /// table's concept-to-tools map lists this tool for it. The action-verb
    /// bonus applies only on top of a positive base score: a verb match
    /// with zero keyword overlap scores zero.
    pub fn score(
        &self,
        tokens: &IndexSet<String>,
        verb_suffixes: &[&str],
        tool: &ToolMetadata,
        synonyms: &SynonymTable,
    ) -> f64 {
        let hits = tokens
            .iter()
            .filter(|token| {
                tool.keywords.contains(token.as_str())
                    || synonyms.tools_for(token).iter().any(|t| *t == tool.name)
            })
            .count();

        let mut score = hits as f64;
        if score > 0.0 && verb_suffixes.iter().any(|s| tool.name.ends_with(s)) {
            score += ACTION_VERB_BONUS;
        }
        if score > 0.0 {
            trace!("Scored '{}': {} ({} keyword hits)", tool.name, score, hits);
        }
        score
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}
