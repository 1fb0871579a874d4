use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::extract::ExtractedText;
use crate::feedback::grammar::summarize_issues;
use crate::feedback::keywords::extract_keywords;
use crate::feedback::models::{FeedbackReport, ScoreBreakdown};
use crate::feedback::scoring::{grammar_score, section_score};
use crate::feedback::sections::check_sections;
use crate::feedback::suggestions::build_suggestions;
use crate::grammar::{GrammarChecker, GrammarError, RawIssue};

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("No readable text found in the uploaded file.")]
    EmptyDocument,

    #[error("Grammar checker unavailable: {0}")]
    CheckerUnavailable(#[from] GrammarError),
}

/// Runs the feedback pipeline against an explicitly supplied grammar checker.
/// Cheap to clone; the checker is shared.
#[derive(Clone)]
pub struct FeedbackEngine {
    checker: Arc<dyn GrammarChecker>,
    checker_timeout: Duration,
}

impl FeedbackEngine {
    pub fn new(checker: Arc<dyn GrammarChecker>, checker_timeout: Duration) -> Self {
        Self {
            checker,
            checker_timeout,
        }
    }

    /// Analyses extracted resume text.
    ///
    /// Blank text is rejected before the checker is called. A checker failure or
    /// timeout aborts the analysis.
    pub async fn analyze(&self, text: &ExtractedText) -> Result<FeedbackReport, FeedbackError> {
        if text.is_blank() {
            return Err(FeedbackError::EmptyDocument);
        }

        let raw_issues = tokio::time::timeout(self.checker_timeout, self.checker.check(text.as_str()))
            .await
            .map_err(|_| GrammarError::Timeout(self.checker_timeout.as_secs()))??;
        debug!("Grammar checker reported {} raw issues", raw_issues.len());

        let report = build_report(text.as_str(), &raw_issues);
        info!(
            grammar_score = report.scores.grammar_score,
            section_score = report.scores.section_score,
            overall_score = report.scores.overall_score,
            "Feedback report built"
        );
        Ok(report)
    }
}

/// Pure half of the pipeline: everything after the checker has answered.
pub fn build_report(text: &str, raw_issues: &[RawIssue]) -> FeedbackReport {
    let grammar = summarize_issues(text, raw_issues);
    let sections = check_sections(text);
    let keywords = extract_keywords(text);

    let scores = ScoreBreakdown::new(
        grammar_score(grammar.issues().len()),
        section_score(sections.missing_sections.len()),
    );

    let suggestions = build_suggestions(
        scores.overall_score,
        &sections.missing_sections,
        keywords.top_token.as_deref(),
    );

    FeedbackReport {
        grammar,
        sections,
        keywords,
        scores,
        suggestions,
    }
}
