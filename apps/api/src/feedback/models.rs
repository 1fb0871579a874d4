use serde::Serialize;

/// A deduplicated, non-spelling writing issue with its excerpt from the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarIssue {
    pub message: String,
    pub example: String,
    /// Position in the final issue list (0-based). Only drives the display colour.
    pub rank: usize,
    pub color: String,
    pub border_color: String,
}

impl GrammarIssue {
    pub fn new(message: String, example: String, rank: usize) -> Self {
        let hue = rank_hue(rank);
        Self {
            message,
            example,
            rank,
            color: format!("hsl({hue}, 70%, 80%)"),
            border_color: format!("hsl({hue}, 70%, 50%)"),
        }
    }
}

/// Each rank gets its own hue, 60 degrees apart.
pub fn rank_hue(rank: usize) -> usize {
    (rank * 60) % 360
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "issues", rename_all = "snake_case")]
pub enum GrammarOutcome {
    NoIssues,
    Issues(Vec<GrammarIssue>),
}

impl GrammarOutcome {
    pub fn issues(&self) -> &[GrammarIssue] {
        match self {
            GrammarOutcome::NoIssues => &[],
            GrammarOutcome::Issues(issues) => issues,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCheckResult {
    /// Title-cased, in vocabulary order.
    pub missing_sections: Vec<String>,
    pub present_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSummary {
    /// Alphabetic tokens among the ten most frequent, most frequent first.
    pub keywords: Vec<String>,
    /// Most frequent token before the alphabetic filter, if the text had any tokens.
    pub top_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub grammar_score: u32,
    pub section_score: u32,
    pub overall_score: u32,
}

/// Headline classification of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(overall_score: u32) -> Self {
        if overall_score >= 85 {
            ScoreBand::Excellent
        } else if overall_score >= 70 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Ready for applications",
            ScoreBand::Good => "Good, but could use improvements",
            ScoreBand::NeedsWork => "Needs work - see suggestions below",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#4CAF50",
            ScoreBand::Good => "#FF9800",
            ScoreBand::NeedsWork => "#F44336",
        }
    }
}

/// Full result of one analysis. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackReport {
    pub grammar: GrammarOutcome,
    pub sections: SectionCheckResult,
    pub keywords: KeywordSummary,
    pub scores: ScoreBreakdown,
    pub suggestions: Vec<String>,
}
