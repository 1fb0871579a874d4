use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::feedback::models::KeywordSummary;

pub const MAX_KEYWORDS: usize = 10;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b\w+\b").expect("word regex is valid"))
}

/// Most frequent tokens of the lowercased text.
///
/// The ten most frequent word tokens are taken first (ties keep first-occurrence
/// order), then tokens containing digits or underscores are dropped. Dropped slots
/// are not backfilled, so fewer than ten keywords may come back.
pub fn extract_keywords(text: &str) -> KeywordSummary {
    let lower = text.to_lowercase();
    let top = most_common(&lower, MAX_KEYWORDS);

    let top_token = top.first().map(|(token, _)| token.to_string());
    let keywords = top
        .iter()
        .filter(|(token, _)| token.chars().all(char::is_alphabetic))
        .map(|(token, _)| token.to_string())
        .collect();

    KeywordSummary {
        keywords,
        top_token,
    }
}

/// Counts tokens and returns the `limit` most frequent. The sort is stable, so equal
/// counts stay in the order the tokens were first seen.
fn most_common(lower: &str, limit: usize) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in word_regex().find_iter(lower).map(|m| m.as_str()) {
        match positions.get(token) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
