//! Plain-text report rendering for the downloadable feedback file.

use crate::feedback::models::{KeywordSummary, SectionCheckResult};
use crate::feedback::{FeedbackReport, GrammarOutcome};

/// File name offered for the downloadable report.
pub const REPORT_FILE_NAME: &str = "resume_feedback_report.txt";

/// Renders the report as UTF-8 text with four sections in fixed order:
/// Grammar & Writing, Structure & Sections, Keyword Analysis, Overall Score.
pub fn render(report: &FeedbackReport) -> String {
    let mut out = String::from("Resume Feedback Report\n\n");

    out.push_str("Grammar & Writing:\n");
    match &report.grammar {
        GrammarOutcome::NoIssues => out.push_str("✅ No major grammar issues detected.\n"),
        GrammarOutcome::Issues(issues) => {
            for issue in issues {
                out.push_str(&format!("- {} → \"{}\"\n", issue.message, issue.example));
            }
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "Structure & Sections:\n{}\n\n",
        section_summary(&report.sections)
    ));
    out.push_str(&format!(
        "Keyword Analysis:\n{}\n\n",
        keyword_summary(&report.keywords)
    ));

    out.push_str(&format!(
        "Overall Score: {}/100\n",
        report.scores.overall_score
    ));
    for suggestion in &report.suggestions {
        out.push_str(&format!("- {suggestion}\n"));
    }

    out
}

pub fn section_summary(sections: &SectionCheckResult) -> String {
    if sections.present_all {
        "✅ All major resume sections are present.".to_string()
    } else {
        format!(
            "⚠️ **Missing Sections:** {}",
            sections.missing_sections.join(", ")
        )
    }
}

pub fn keyword_summary(keywords: &KeywordSummary) -> String {
    format!(
        "💡 **Most Frequent Keywords:** {}",
        keywords.keywords.join(", ")
    )
}
