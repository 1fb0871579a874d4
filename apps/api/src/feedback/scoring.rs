use crate::feedback::models::ScoreBreakdown;

pub const SCORE_FLOOR: u32 = 60;
const GRAMMAR_PENALTY: u32 = 8;
const SECTION_PENALTY: u32 = 5;

/// 100 with no issues, otherwise 8 points off per issue, never below 60.
pub fn grammar_score(issue_count: usize) -> u32 {
    penalized(issue_count, GRAMMAR_PENALTY)
}

/// 100 with nothing missing, otherwise 5 points off per missing section, never below 60.
pub fn section_score(missing_count: usize) -> u32 {
    penalized(missing_count, SECTION_PENALTY)
}

fn penalized(count: usize, penalty: u32) -> u32 {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    100u32
        .saturating_sub(count.saturating_mul(penalty))
        .max(SCORE_FLOOR)
}

impl ScoreBreakdown {
    /// Overall score is the floored mean of the two component scores.
    pub fn new(grammar_score: u32, section_score: u32) -> Self {
        Self {
            grammar_score,
            section_score,
            overall_score: (grammar_score + section_score) / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_score_curve() {
        assert_eq!(grammar_score(0), 100);
        assert_eq!(grammar_score(1), 92);
        assert_eq!(grammar_score(3), 76);
        assert_eq!(grammar_score(5), 60);
        assert_eq!(grammar_score(6), 60);
        assert_eq!(grammar_score(usize::MAX), 60);
    }

    #[test]
    fn test_section_score_curve() {
        assert_eq!(section_score(0), 100);
        assert_eq!(section_score(2), 90);
        assert_eq!(section_score(6), 70);
        assert_eq!(section_score(20), 60);
    }

    #[test]
    fn test_overall_is_floored_mean() {
        assert_eq!(ScoreBreakdown::new(100, 100).overall_score, 100);
        assert_eq!(ScoreBreakdown::new(92, 95).overall_score, 93);
        assert_eq!(ScoreBreakdown::new(60, 61).overall_score, 60);
    }
}
