//! Grammar checking: pluggable, trait-based collaborator that flags writing issues.
//!
//! Default: `LanguageToolChecker` (LanguageTool HTTP API).
//!
//! The checker is built once at startup and carried in `AppState` as
//! `Arc<dyn GrammarChecker>`; implementations must tolerate concurrent `check` calls.

pub mod language_tool;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub use language_tool::LanguageToolChecker;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Checker returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Checker did not answer within {0}s")]
    Timeout(u64),
}

/// One issue as reported by the checker, before any filtering.
/// `offset` and `length` are measured in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawIssue {
    pub message: String,
    pub offset: usize,
    pub length: usize,
}

/// The grammar checker trait. Implement this to swap backends without touching
/// the feedback engine or the handlers.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn check(&self, text: &str) -> Result<Vec<RawIssue>, GrammarError>;
}

/// Returns the slice of `text` covered by an issue.
///
/// Offsets count UTF-16 code units. Out-of-range spans are clamped to the text,
/// so a misreported offset yields a shorter (possibly empty) excerpt rather than an error.
pub fn issue_span<'a>(text: &'a str, offset: usize, length: usize) -> &'a str {
    let end_unit = offset.saturating_add(length);
    let mut start_byte = None;
    let mut end_byte = None;
    let mut units = 0usize;

    for (byte_idx, ch) in text.char_indices() {
        if start_byte.is_none() && units >= offset {
            start_byte = Some(byte_idx);
        }
        if units >= end_unit {
            end_byte = Some(byte_idx);
            break;
        }
        units += ch.len_utf16();
    }

    let start = start_byte.unwrap_or(text.len());
    let end = end_byte.unwrap_or(text.len()).max(start);
    &text[start..end]
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    /// Scripted checker for tests: returns the same issues for every call.
    pub struct ScriptedChecker(pub Vec<RawIssue>);

    impl ScriptedChecker {
        pub fn clean() -> Self {
            ScriptedChecker(vec![])
        }

        pub fn with_messages(messages: &[&str]) -> Self {
            ScriptedChecker(
                messages
                    .iter()
                    .map(|m| RawIssue {
                        message: m.to_string(),
                        offset: 0,
                        length: 0,
                    })
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl GrammarChecker for ScriptedChecker {
        async fn check(&self, _text: &str) -> Result<Vec<RawIssue>, GrammarError> {
            Ok(self.0.clone())
        }
    }

    /// Checker that is never reachable.
    pub struct DownChecker;

    #[async_trait]
    impl GrammarChecker for DownChecker {
        async fn check(&self, _text: &str) -> Result<Vec<RawIssue>, GrammarError> {
            Err(GrammarError::Api {
                status: 502,
                message: "bad gateway".to_string(),
            })
        }
    }
}
