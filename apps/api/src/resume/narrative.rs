//! Narrative summary and recommendation lists for resume reports.

use crate::resume::skills::JobCategoryMatch;

const MAX_RECOMMENDATIONS: usize = 5;
const NARRATIVE_SKILL_SAMPLE: usize = 5;

const IMPROVEMENT_RECOMMENDATIONS: &[&str] = &[
    "Add more skills: include both technical and soft skills.",
    "Quantify achievements: use numbers to show impact.",
    "Improve formatting: use clear sections and bullet points.",
    "Include projects: add personal or academic projects.",
    "Get certifications: consider relevant online certifications.",
];

const GENERAL_RECOMMENDATIONS: &[&str] = &[
    "Customize for each job: tailor your resume for specific roles.",
    "Proofread carefully: check for spelling and grammar errors.",
    "Use action verbs: start bullet points with strong verbs.",
    "Keep it professional: use clean, readable formatting.",
    "Highlight achievements: focus on results, not just responsibilities.",
];

/// Single-paragraph assessment: a score-banded opener followed by
/// fixed-template sentences for each signal that was detected.
pub(crate) fn analysis_narrative(
    score: u32,
    skills: &[String],
    languages: &[String],
    experience_years: u32,
    top_category: Option<&JobCategoryMatch>,
    confidence: f64,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        if score >= 85 {
            "Excellent resume! Your resume shows strong potential for job applications."
        } else if score >= 70 {
            "Good resume! Your resume is well-structured with room for improvement."
        } else if score >= 50 {
            "Average resume. Consider enhancing certain sections for better impact."
        } else {
            "Needs improvement. Focus on adding more relevant content and skills."
        }
        .to_string(),
    );

    if skills.is_empty() {
        parts.push("Skills: consider adding more technical and soft skills.".to_string());
    } else {
        let sample: Vec<&str> = skills
            .iter()
            .take(NARRATIVE_SKILL_SAMPLE)
            .map(String::as_str)
            .collect();
        parts.push(format!(
            "Skills identified: {} relevant skills including {}.",
            skills.len(),
            sample.join(", ")
        ));
    }

    if !languages.is_empty() {
        parts.push(format!("Technical skills: strong in {}.", languages.join(", ")));
    }

    if experience_years >= 3 {
        parts.push(format!(
            "Experience: good professional experience ({experience_years} years)."
        ));
    } else if experience_years > 0 {
        parts.push(format!(
            "Experience: some professional experience ({experience_years} years)."
        ));
    } else {
        parts.push("Experience: consider adding internships or project experience.".to_string());
    }

    if let Some(top) = top_category {
        parts.push(format!(
            "Best fit: {} ({}% match).",
            top.category, top.match_score
        ));
    }

    if confidence >= 80.0 {
        parts.push("Confidence: resume shows high confidence and professionalism.".to_string());
    }

    parts.join(" ")
}

/// Up to five recommendations: improvement bullets for weak scores, targeted
/// bullets for thin skill or language lists, general bullets as filler.
pub(crate) fn recommendations(
    score: u32,
    skill_count: usize,
    language_count: usize,
) -> Vec<String> {
    let mut recs: Vec<String> = Vec::new();

    if score < 70 {
        recs.extend(IMPROVEMENT_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    }
    if language_count < 3 {
        recs.push("Learn new technologies: expand your technical skill set.".to_string());
    }
    if skill_count < 10 {
        recs.push("Diversify skills: add industry-relevant skills.".to_string());
    }

    if recs.len() < MAX_RECOMMENDATIONS {
        let remaining = MAX_RECOMMENDATIONS - recs.len();
        recs.extend(
            GENERAL_RECOMMENDATIONS
                .iter()
                .take(remaining)
                .map(|s| s.to_string()),
        );
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_narrative_opens_with_score_band() {
        let narrative = analysis_narrative(90, &[], &[], 0, None, 50.0);
        assert!(narrative.starts_with("Excellent resume!"));
        let narrative = analysis_narrative(72, &[], &[], 0, None, 50.0);
        assert!(narrative.starts_with("Good resume!"));
        let narrative = analysis_narrative(55, &[], &[], 0, None, 50.0);
        assert!(narrative.starts_with("Average resume."));
        let narrative = analysis_narrative(20, &[], &[], 0, None, 50.0);
        assert!(narrative.starts_with("Needs improvement."));
    }

    #[test]
    fn test_narrative_samples_first_five_skills() {
        let skills = strings(&["Python", "Java", "Go", "Rust", "Sql", "Docker"]);
        let narrative = analysis_narrative(75, &skills, &[], 4, None, 50.0);
        assert!(narrative
            .contains("Skills identified: 6 relevant skills including Python, Java, Go, Rust, Sql."));
        assert!(!narrative.contains("Docker"));
        assert!(narrative.contains("Experience: good professional experience (4 years)."));
    }

    #[test]
    fn test_narrative_reports_best_fit_and_confidence() {
        let top = JobCategoryMatch {
            category: "Software Developer".to_string(),
            match_score: 66.7,
            matched_skills: strings(&["Python"]),
        };
        let narrative = analysis_narrative(60, &[], &strings(&["Python"]), 1, Some(&top), 85.0);
        assert!(narrative.contains("Technical skills: strong in Python."));
        assert!(narrative.contains("Experience: some professional experience (1 years)."));
        assert!(narrative.contains("Best fit: Software Developer (66.7% match)."));
        assert!(narrative.ends_with("Confidence: resume shows high confidence and professionalism."));
    }

    #[test]
    fn test_low_score_gets_improvement_bullets() {
        let recs = recommendations(40, 20, 5);
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0], "Add more skills: include both technical and soft skills.");
        assert_eq!(recs[4], "Get certifications: consider relevant online certifications.");
    }

    #[test]
    fn test_targeted_bullets_then_general_filler() {
        let recs = recommendations(80, 4, 1);
        assert_eq!(
            recs,
            vec![
                "Learn new technologies: expand your technical skill set.",
                "Diversify skills: add industry-relevant skills.",
                "Customize for each job: tailor your resume for specific roles.",
                "Proofread carefully: check for spelling and grammar errors.",
                "Use action verbs: start bullet points with strong verbs.",
            ]
        );
    }

    #[test]
    fn test_strong_resume_gets_general_advice_only() {
        let recs = recommendations(90, 20, 5);
        assert_eq!(recs.len(), 5);
        assert!(recs.iter().all(|r| GENERAL_RECOMMENDATIONS.contains(&r.as_str())));
    }

    #[test]
    fn test_never_more_than_five() {
        // weak score plus both targeted bullets would give seven
        let recs = recommendations(10, 2, 0);
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[4], "Get certifications: consider relevant online certifications.");
    }
}
