use std::collections::HashSet;

use crate::feedback::models::{GrammarIssue, GrammarOutcome};
use crate::grammar::{issue_span, RawIssue};

pub const MAX_GRAMMAR_ISSUES: usize = 5;

/// Spelling noise is dropped; only grammar and style issues surface.
const SPELLING_PREFIX: &str = "possible spelling mistake";

/// Turns raw checker output into at most five ranked issues.
///
/// Messages are trimmed, deduplicated by exact text (first occurrence wins),
/// spelling reports are dropped, and the survivors keep the checker's order.
pub fn summarize_issues(text: &str, raw_issues: &[RawIssue]) -> GrammarOutcome {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut issues: Vec<GrammarIssue> = Vec::new();

    for raw in raw_issues {
        let message = raw.message.trim();
        if message.to_lowercase().starts_with(SPELLING_PREFIX) {
            continue;
        }
        if !seen.insert(message) {
            continue;
        }

        let example = issue_span(text, raw.offset, raw.length).to_string();
        issues.push(GrammarIssue::new(message.to_string(), example, issues.len()));

        if issues.len() == MAX_GRAMMAR_ISSUES {
            break;
        }
    }

    if issues.is_empty() {
        GrammarOutcome::NoIssues
    } else {
        GrammarOutcome::Issues(issues)
    }
}
