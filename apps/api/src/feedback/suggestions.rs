pub const MAX_SUGGESTIONS: usize = 5;

const TIER_EXCELLENT: &str = "🎯 Your resume is excellent! Consider adding quantifiable achievements.";
const TIER_GOOD: &str =
    "🎯 Good foundation. Focus on adding missing sections and quantifying results.";
const TIER_NEEDS_WORK: &str = "🎯 Start by fixing grammar issues and adding missing sections.";

const ADD_PROJECTS: &str = "🛠️ Add a Projects section to showcase your work.";
const ADD_CERTIFICATIONS: &str = "📜 Include relevant certifications with issuing organizations.";
const REDUCE_PRONOUNS: &str = "📝 Reduce first-person pronouns for more professional tone.";

const GENERAL_TIPS: &[&str] = &[
    "⏳ Use standard section headings (e.g., 'Work Experience')",
    "🔍 Quantify achievements with numbers where possible",
    "✨ Start bullet points with strong action verbs",
    "📏 Keep to 1 page unless you have 10+ years experience",
];

const FIRST_PERSON: &[&str] = &["i", "my", "me"];

/// Builds the ordered advice list: one score tier message, targeted tips for
/// missing Projects/Certifications and pronoun-heavy writing, then general tips,
/// cut to five.
pub fn build_suggestions(
    overall_score: u32,
    missing_sections: &[String],
    top_token: Option<&str>,
) -> Vec<String> {
    let mut suggestions: Vec<&str> = Vec::with_capacity(MAX_SUGGESTIONS + GENERAL_TIPS.len());

    suggestions.push(if overall_score >= 90 {
        TIER_EXCELLENT
    } else if overall_score >= 70 {
        TIER_GOOD
    } else {
        TIER_NEEDS_WORK
    });

    if missing_sections.iter().any(|s| s == "Projects") {
        suggestions.push(ADD_PROJECTS);
    }
    if missing_sections.iter().any(|s| s == "Certifications") {
        suggestions.push(ADD_CERTIFICATIONS);
    }
    if top_token.is_some_and(|token| FIRST_PERSON.contains(&token)) {
        suggestions.push(REDUCE_PRONOUNS);
    }

    suggestions.extend_from_slice(GENERAL_TIPS);
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(build_suggestions(100, &[], None)[0], TIER_EXCELLENT);
        assert_eq!(build_suggestions(90, &[], None)[0], TIER_EXCELLENT);
        assert_eq!(build_suggestions(89, &[], None)[0], TIER_GOOD);
        assert_eq!(build_suggestions(70, &[], None)[0], TIER_GOOD);
        assert_eq!(build_suggestions(69, &[], None)[0], TIER_NEEDS_WORK);
    }

    #[test]
    fn test_clean_resume_gets_general_tips() {
        let suggestions = build_suggestions(100, &[], Some("engineer"));
        assert_eq!(suggestions.len(), 5);
        assert_eq!(&suggestions[1..], GENERAL_TIPS);
    }

    #[test]
    fn test_targeted_tips_push_out_general_ones() {
        let suggestions = build_suggestions(
            75,
            &missing(&["Projects", "Certifications"]),
            Some("my"),
        );
        assert_eq!(
            suggestions,
            vec![
                TIER_GOOD,
                ADD_PROJECTS,
                ADD_CERTIFICATIONS,
                REDUCE_PRONOUNS,
                GENERAL_TIPS[0],
            ]
        );
    }

    #[test]
    fn test_pronoun_tip_needs_pronoun_top_token() {
        let with = build_suggestions(95, &[], Some("i"));
        assert!(with.contains(&REDUCE_PRONOUNS.to_string()));

        let without = build_suggestions(95, &[], Some("python"));
        assert!(!without.contains(&REDUCE_PRONOUNS.to_string()));

        let none = build_suggestions(95, &[], None);
        assert!(!none.contains(&REDUCE_PRONOUNS.to_string()));
    }

    #[test]
    fn test_other_missing_sections_add_nothing() {
        let suggestions = build_suggestions(85, &missing(&["Summary", "Education"]), None);
        assert_eq!(suggestions[0], TIER_GOOD);
        assert_eq!(&suggestions[1..], GENERAL_TIPS);
    }

    #[test]
    fn test_deterministic() {
        let missing = missing(&["Projects"]);
        assert_eq!(
            build_suggestions(64, &missing, Some("me")),
            build_suggestions(64, &missing, Some("me"))
        );
    }
}
