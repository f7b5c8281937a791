//! Skill and language detection plus job-category classification.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::resume::vocab::{title_case, JOB_CATEGORIES, LANGUAGE_KEYWORDS, SKILLS_DB};

const MAX_CATEGORY_RESULTS: usize = 5;

// lazily captures a skills-like section up to the next blank line or
// capitalized heading
static SKILLS_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:skills|technical skills|competencies)[:\s]*(.*?)(?:\n\n|\n[A-Z]|$)")
        .expect("skills section regex")
});

static SKILLS_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\n•\-*]").expect("skills split regex"));

static LANGUAGE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    LANGUAGE_KEYWORDS
        .iter()
        .map(|&keyword| {
            let pattern = format!(
                "(?i)(?:^|[^a-z0-9+#]){}(?:$|[^a-z0-9+#])",
                regex::escape(keyword)
            );
            (keyword, Regex::new(&pattern).expect("language pattern"))
        })
        .collect()
});

#[derive(Debug, Clone, Serialize)]
pub struct JobCategoryMatch {
    pub category: String,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
}

/// Skills from two passes: a substring sweep of the full text against the
/// dictionary, then fragments of a detected skills section. Results are
/// title-cased and deduplicated in order of first appearance. The substring
/// sweep knowingly over-matches short names ("go" inside "mongodb").
pub(crate) fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut skills: Vec<String> = Vec::new();

    for skill in SKILLS_DB {
        if lowered.contains(skill) {
            push_unique(&mut skills, title_case(skill));
        }
    }

    if let Some(caps) = SKILLS_SECTION_RE.captures(text) {
        if let Some(section) = caps.get(1) {
            for fragment in SKILLS_SPLIT_RE.split(section.as_str()) {
                let fragment = fragment.trim();
                let words = fragment.split_whitespace().count();
                if (1..=3).contains(&words) {
                    push_unique(&mut skills, title_case(fragment));
                }
            }
        }
    }

    skills
}

/// Programming languages, matched with explicit boundaries so that short
/// names stay exact ("r" never fires inside a word, "java" never fires
/// inside "javascript").
pub(crate) fn extract_languages(text: &str) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for (keyword, re) in LANGUAGE_PATTERNS.iter() {
        if re.is_match(text) {
            push_unique(&mut languages, title_case(keyword));
        }
    }
    languages
}

/// Ranks job categories by how many candidate skills overlap each
/// category's reference list. Zero-overlap categories are dropped; ties
/// keep table order.
pub(crate) fn classify_job_categories(candidates: &[String]) -> Vec<JobCategoryMatch> {
    let mut matches: Vec<JobCategoryMatch> = Vec::new();

    for (category, keywords) in JOB_CATEGORIES {
        let matched: Vec<String> = candidates
            .iter()
            .filter(|candidate| {
                let lowered = candidate.to_lowercase();
                keywords.iter().any(|kw| lowered.contains(kw))
            })
            .cloned()
            .collect();
        if matched.is_empty() {
            continue;
        }

        let pct = (matched.len() as f64 / keywords.len() as f64 * 100.0).min(100.0);
        matches.push(JobCategoryMatch {
            category: (*category).to_string(),
            match_score: round1(pct),
            matched_skills: matched,
        });
    }

    matches.sort_by_key(|m| std::cmp::Reverse(m.matched_skills.len()));
    matches.truncate(MAX_CATEGORY_RESULTS);
    matches
}

fn push_unique(items: &mut Vec<String>, candidate: String) {
    if !items.contains(&candidate) {
        items.push(candidate);
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_sweep_finds_known_skills() {
        let skills = extract_skills("Built services in Python with Docker and Kubernetes");
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
        assert!(skills.contains(&"Kubernetes".to_string()));
    }

    #[test]
    fn test_substring_sweep_over_matches_short_names() {
        let skills = extract_skills("Stored everything in MongoDB");
        // "go" and "r" ride along inside other words
        assert!(skills.contains(&"Mongodb".to_string()));
        assert!(skills.contains(&"Go".to_string()));
        assert!(skills.contains(&"R".to_string()));
    }

    #[test]
    fn test_skills_section_fragments_are_included() {
        let text = "SKILLS\nTerraform, Figma, Embedded Linux Development Experience, Zig\n\nEXPERIENCE\n";
        let skills = extract_skills(text);
        assert!(skills.contains(&"Figma".to_string()));
        assert!(skills.contains(&"Zig".to_string()));
        // four-word fragments are treated as prose, not skills
        assert!(!skills.iter().any(|s| s.contains("Embedded")));
        // dictionary hit and section hit deduplicate
        assert_eq!(skills.iter().filter(|s| *s == "Terraform").count(), 1);
    }

    #[test]
    fn test_languages_respect_boundaries() {
        let languages = extract_languages("JavaScript and TypeScript on the front end");
        assert!(languages.contains(&"Javascript".to_string()));
        assert!(languages.contains(&"Typescript".to_string()));
        // "java" must not fire inside "javascript"
        assert!(!languages.contains(&"Java".to_string()));
    }

    #[test]
    fn test_languages_match_symbolic_names() {
        let languages = extract_languages("Fluent in C++, C# and R.");
        assert_eq!(languages, vec!["C++", "C#", "R"]);
    }

    #[test]
    fn test_classification_drops_zero_overlap_categories() {
        let candidates = vec!["Python".to_string(), "Sql".to_string()];
        let matches = classify_job_categories(&candidates);
        assert!(matches.iter().all(|m| !m.matched_skills.is_empty()));
        assert!(!matches.iter().any(|m| m.category == "UI/UX Designer"));
    }

    #[test]
    fn test_classification_ranks_by_overlap() {
        let candidates: Vec<String> = ["Python", "Java", "Javascript", "Git", "React", "Html"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let matches = classify_job_categories(&candidates);

        assert_eq!(matches[0].category, "Software Developer");
        // python, java, javascript, git out of six reference skills
        assert!((matches[0].match_score - 66.7).abs() < f64::EPSILON);
        assert_eq!(
            matches[0].matched_skills,
            vec!["Python", "Java", "Javascript", "Git"]
        );
    }

    #[test]
    fn test_classification_percentage_bounds() {
        let candidates: Vec<String> = SKILLS_DB.iter().map(|s| title_case(s)).collect();
        for m in classify_job_categories(&candidates) {
            assert!(m.match_score >= 0.0 && m.match_score <= 100.0);
        }
    }

    #[test]
    fn test_no_candidates_no_categories() {
        assert!(classify_job_categories(&[]).is_empty());
    }
}
