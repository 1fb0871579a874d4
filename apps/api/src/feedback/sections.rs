use crate::feedback::models::SectionCheckResult;

/// Headings every resume is expected to carry, in reporting order.
pub const SECTION_VOCABULARY: &[&str] = &[
    "summary",
    "skills",
    "projects",
    "experience",
    "education",
    "certifications",
];

/// Checks which vocabulary sections appear anywhere in the text.
///
/// Plain case-insensitive substring containment: "experience" inside
/// "inexperienced" counts as present.
pub fn check_sections(text: &str) -> SectionCheckResult {
    let lower = text.to_lowercase();

    let missing_sections: Vec<String> = SECTION_VOCABULARY
        .iter()
        .filter(|section| !lower.contains(*section))
        .map(|section| title_case(section))
        .collect();

    SectionCheckResult {
        present_all: missing_sections.is_empty(),
        missing_sections,
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_present_case_insensitive() {
        let result = check_sections(
            "SUMMARY\nTechnical Skills\nProjects\nWork Experience\nEducation\nCertifications",
        );
        assert!(result.present_all);
        assert!(result.missing_sections.is_empty());
    }

    #[test]
    fn test_missing_sections_keep_vocabulary_order() {
        let result = check_sections("Summary Experience Skills Education");
        assert!(!result.present_all);
        assert_eq!(result.missing_sections, vec!["Projects", "Certifications"]);
    }

    #[test]
    fn test_substring_inside_word_counts() {
        let result = check_sections("inexperienced");
        assert!(!result.missing_sections.contains(&"Experience".to_string()));
    }

    #[test]
    fn test_empty_text_misses_everything() {
        let result = check_sections("");
        assert_eq!(
            result.missing_sections,
            vec![
                "Summary",
                "Skills",
                "Projects",
                "Experience",
                "Education",
                "Certifications"
            ]
        );
    }

    #[test]
    fn test_singular_heading_does_not_match_plural() {
        let result = check_sections("Project Certification");
        assert_eq!(
            result.missing_sections,
            vec![
                "Summary",
                "Skills",
                "Projects",
                "Experience",
                "Education",
                "Certifications"
            ]
        );
    }
}
