//! Composite resume scoring.
//!
//! Each signal contributes a capped number of points so that no single
//! dimension can dominate: skills up to 40, languages up to 20, education
//! up to 20, experience up to 20, certifications up to 10, and the total
//! is clamped to 100.

/// Confidence reported when the sentiment collaborator is unavailable.
pub(crate) const DEFAULT_CONFIDENCE: f64 = 70.0;

pub(crate) fn composite_score(
    skill_count: usize,
    language_count: usize,
    degrees: &[String],
    experience_years: u32,
    certification_count: usize,
) -> u32 {
    let skills = (2 * skill_count as u32).min(40);
    let languages = (4 * language_count as u32).min(20);
    let education = education_points(degrees);
    let experience = experience_points(experience_years);
    let certifications = (2 * certification_count as u32).min(10);

    (skills + languages + education + experience + certifications).min(100)
}

/// Highest degree tier wins: doctorate 20, master 15, bachelor 10, any
/// other credential 5, none 0.
fn education_points(degrees: &[String]) -> u32 {
    if degrees.is_empty() {
        return 0;
    }
    let has = |needles: &[&str]| {
        degrees.iter().any(|degree| {
            let lowered = degree.to_lowercase();
            needles.iter().any(|needle| lowered.contains(needle))
        })
    };

    if has(&["ph.d", "phd", "doctor"]) {
        20
    } else if has(&["master", "m."]) {
        15
    } else if has(&["bachelor", "b."]) {
        10
    } else {
        5
    }
}

fn experience_points(years: u32) -> u32 {
    match years {
        5.. => 20,
        3..=4 => 15,
        1..=2 => 10,
        0 => 5,
    }
}

/// Maps a sentiment polarity in [-1, 1] onto a 0..=100 confidence score.
pub(crate) fn confidence_from_polarity(polarity: f64) -> f64 {
    (50.0 + 50.0 * polarity).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_each_component_is_capped() {
        // 30 skills, 10 languages, 8 certifications all hit their caps
        let score = composite_score(30, 10, &degrees(&["Ph.D"]), 10, 8);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_modest_resume_lands_mid_range() {
        let score = composite_score(6, 2, &degrees(&["Bachelor"]), 2, 0);
        assert_eq!(score, 12 + 8 + 10 + 10);
    }

    #[test]
    fn test_empty_resume_still_earns_baseline_experience_points() {
        assert_eq!(composite_score(0, 0, &[], 0, 0), 5);
    }

    #[test]
    fn test_education_tiers() {
        assert_eq!(education_points(&[]), 0);
        assert_eq!(education_points(&degrees(&["Diploma"])), 5);
        assert_eq!(education_points(&degrees(&["Bachelor"])), 10);
        assert_eq!(education_points(&degrees(&["B.Tech"])), 10);
        assert_eq!(education_points(&degrees(&["Master"])), 15);
        assert_eq!(education_points(&degrees(&["M.S"])), 15);
        assert_eq!(education_points(&degrees(&["Ph.D"])), 20);
        // best tier wins regardless of order
        assert_eq!(education_points(&degrees(&["Bachelor", "Doctorate"])), 20);
    }

    #[test]
    fn test_experience_bands() {
        assert_eq!(experience_points(0), 5);
        assert_eq!(experience_points(1), 10);
        assert_eq!(experience_points(2), 10);
        assert_eq!(experience_points(3), 15);
        assert_eq!(experience_points(4), 15);
        assert_eq!(experience_points(5), 20);
        assert_eq!(experience_points(40), 20);
    }

    #[test]
    fn test_confidence_maps_polarity_onto_percentage() {
        assert_eq!(confidence_from_polarity(0.0), 50.0);
        assert_eq!(confidence_from_polarity(1.0), 100.0);
        assert_eq!(confidence_from_polarity(-1.0), 0.0);
        assert_eq!(confidence_from_polarity(0.4), 70.0);
        // out-of-range polarities clamp rather than overflow
        assert_eq!(confidence_from_polarity(3.0), 100.0);
    }
}
