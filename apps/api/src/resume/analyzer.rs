//! Resume scoring pipeline: extract contact, skill, education, experience
//! and certification signals from raw text, then fold them into a composite
//! score with a narrative summary.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::collaborators::SentimentScorer;
use crate::report::{round2, AnalysisError, AnalysisReport};
use crate::resume::score::DEFAULT_CONFIDENCE;
use crate::resume::skills::JobCategoryMatch;
use crate::resume::{narrative, score, sections, skills};

const MIN_RESUME_CHARS: usize = 50;
const MAX_LISTED_SKILLS: usize = 15;
const MAX_CATEGORY_MATCHES: usize = 3;
const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Serialize)]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degrees: Vec<String>,
    pub institutions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeReport {
    pub basic_info: BasicInfo,
    pub skills: Vec<String>,
    pub programming_languages: Vec<String>,
    pub education: Education,
    pub experience_years: u32,
    pub certifications: Vec<String>,
    pub job_categories: Vec<JobCategoryMatch>,
    pub score: u32,
    pub confidence_score: f64,
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub word_count: usize,
    pub text_preview: String,
}

pub struct ResumeAnalyzer {
    sentiment: Arc<dyn SentimentScorer>,
}

impl ResumeAnalyzer {
    pub fn new(sentiment: Arc<dyn SentimentScorer>) -> Self {
        Self { sentiment }
    }

    pub async fn analyze(&self, text: &str) -> AnalysisReport<ResumeReport> {
        match self.run(text).await {
            Ok(report) => AnalysisReport::success(report),
            Err(e) => {
                warn!(error = %e, "resume analysis failed");
                AnalysisReport::failure(e.to_string())
            }
        }
    }

    async fn run(&self, text: &str) -> Result<ResumeReport, AnalysisError> {
        if text.trim().chars().count() < MIN_RESUME_CHARS {
            return Err(AnalysisError::Input(
                "Resume text too short or could not be extracted".to_string(),
            ));
        }

        let name = sections::extract_name(text);
        let email = sections::extract_email(text);
        let phone = sections::extract_phone(text);

        let mut skills = skills::extract_skills(text);
        let languages = skills::extract_languages(text);

        let degrees = sections::extract_degrees(text);
        let institutions = sections::extract_institutions(text);
        let gpa = sections::extract_gpa(text);
        let experience_years = sections::extract_experience_years(text);
        let certifications = sections::extract_certifications(text);

        // category classification sees each distinct skill or language once
        let mut candidates = skills.clone();
        for language in &languages {
            if !candidates.contains(language) {
                candidates.push(language.clone());
            }
        }
        let mut job_categories = skills::classify_job_categories(&candidates);
        job_categories.truncate(MAX_CATEGORY_MATCHES);

        let score = score::composite_score(
            skills.len(),
            languages.len(),
            &degrees,
            experience_years,
            certifications.len(),
        );

        let confidence_score = match self.sentiment.polarity(text).await {
            Ok(polarity) => score::confidence_from_polarity(polarity),
            Err(e) => {
                warn!(error = %e, "sentiment scoring failed, using default confidence");
                DEFAULT_CONFIDENCE
            }
        };

        let analysis = narrative::analysis_narrative(
            score,
            &skills,
            &languages,
            experience_years,
            job_categories.first(),
            confidence_score,
        );
        let recommendations = narrative::recommendations(score, skills.len(), languages.len());

        let word_count = text.split_whitespace().count();
        let text_preview = preview(text);

        skills.truncate(MAX_LISTED_SKILLS);

        Ok(ResumeReport {
            basic_info: BasicInfo { name, email, phone },
            skills,
            programming_languages: languages,
            education: Education {
                degrees,
                institutions,
                gpa,
            },
            experience_years,
            certifications,
            job_categories,
            score,
            confidence_score: round2(confidence_score),
            analysis,
            recommendations,
            word_count,
            text_preview,
        })
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::CollaboratorError;
    use async_trait::async_trait;

    const SAMPLE_RESUME: &str = "\
John Doe
Software Developer
Phone: (123) 456-7890
Email: john.doe@email.com
LinkedIn: linkedin.com/in/johndoe

SUMMARY
Experienced software developer with 5 years of expertise in Python, JavaScript, and cloud technologies.

SKILLS
Python, JavaScript, React, Node.js, AWS, Docker, Git, SQL, MongoDB

EXPERIENCE
Senior Developer - Tech Corp (2019-2024)
- Developed web applications using Python and React
- Implemented AWS cloud solutions saving $50k annually
- Led team of 5 developers

EDUCATION
Bachelor of Science in Computer Science
State University (2015-2019)
GPA: 3.8

CERTIFICATIONS
AWS Certified Solutions Architect
Python Developer Certificate
";

    struct FixedSentiment(f64);

    #[async_trait]
    impl SentimentScorer for FixedSentiment {
        async fn polarity(&self, _text: &str) -> Result<f64, CollaboratorError> {
            Ok(self.0)
        }
    }

    struct FailingSentiment;

    #[async_trait]
    impl SentimentScorer for FailingSentiment {
        async fn polarity(&self, _text: &str) -> Result<f64, CollaboratorError> {
            Err(CollaboratorError::Api {
                status: 500,
                message: "sentiment service down".to_string(),
            })
        }
    }

    fn make_analyzer(polarity: f64) -> ResumeAnalyzer {
        ResumeAnalyzer::new(Arc::new(FixedSentiment(polarity)))
    }

    #[tokio::test]
    async fn test_sample_resume_full_report() {
        let analyzer = make_analyzer(0.4);
        let report = analyzer.analyze(SAMPLE_RESUME).await;
        assert!(report.is_success());
        let body = report.report().unwrap();

        assert_eq!(body.basic_info.name, "John Doe");
        assert_eq!(body.basic_info.email, "john.doe@email.com");
        assert_eq!(body.basic_info.phone, "123) 456-7890");

        assert_eq!(
            body.skills,
            vec![
                "Python",
                "Java",
                "Javascript",
                "Go",
                "R",
                "React",
                "Node.Js",
                "Mongodb",
                "Aws",
                "Docker",
                "Git",
                "Sql",
            ]
        );
        assert_eq!(body.programming_languages, vec!["Python", "Javascript", "Sql"]);

        assert_eq!(body.education.degrees, vec!["Bachelor", "Certificate"]);
        assert_eq!(body.education.institutions, vec!["State University (2015-2019)"]);
        assert_eq!(body.education.gpa, Some(3.8));
        assert_eq!(body.experience_years, 5);
        assert_eq!(
            body.certifications,
            vec!["Certified Solutions Architect", "Certificate", "AWS"]
        );

        // 24 skills + 12 languages + 10 bachelor + 20 experience + 6 certifications
        assert_eq!(body.score, 72);
        assert_eq!(body.confidence_score, 70.0);
        assert!(body.word_count > 80);
        assert!(body.text_preview.ends_with("..."));
        assert!(body.analysis.starts_with("Good resume!"));
        assert!(body.analysis.contains("Best fit: Software Developer (66.7% match)."));
        assert_eq!(body.recommendations.len(), 5);
    }

    #[tokio::test]
    async fn test_top_three_categories_ranked_by_overlap() {
        let analyzer = make_analyzer(0.0);
        let report = analyzer.analyze(SAMPLE_RESUME).await;
        let body = report.report().unwrap();

        let names: Vec<&str> = body
            .job_categories
            .iter()
            .map(|m| m.category.as_str())
            .collect();
        assert_eq!(names, vec!["Software Developer", "Web Developer", "Data Scientist"]);
        assert!((body.job_categories[0].match_score - 66.7).abs() < 1e-9);
        assert!((body.job_categories[1].match_score - 50.0).abs() < 1e-9);
        assert!((body.job_categories[2].match_score - 40.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_short_text_is_rejected() {
        let analyzer = make_analyzer(0.0);
        let report = analyzer.analyze("too short").await;
        assert!(!report.is_success());
        assert_eq!(
            report.error(),
            Some("Resume text too short or could not be extracted")
        );
    }

    #[tokio::test]
    async fn test_sentiment_failure_falls_back_to_default_confidence() {
        let analyzer = ResumeAnalyzer::new(Arc::new(FailingSentiment));
        let report = analyzer.analyze(SAMPLE_RESUME).await;
        assert!(report.is_success());
        assert_eq!(report.report().unwrap().confidence_score, 70.0);
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long_text = "word ".repeat(200);
        let snippet = preview(&long_text);
        assert_eq!(snippet.chars().count(), PREVIEW_CHARS + 3);
        assert!(snippet.ends_with("..."));

        let short_text = "short resume text";
        assert_eq!(preview(short_text), short_text);
    }

    #[tokio::test]
    async fn test_skills_list_is_capped_for_display() {
        let mut text = String::from("Resume of a generalist engineer with broad exposure.\nSKILLS\n");
        text.push_str("Python, Java, Rust, Go, Ruby, Swift, Kotlin, Scala, Perl, Php\n");
        text.push_str("React, Angular, Vue, Django, Flask, Spring, Redis, Mysql\n");
        let report = make_analyzer(0.0).analyze(&text).await;
        let body = report.report().unwrap();
        assert_eq!(body.skills.len(), MAX_LISTED_SKILLS);
    }
}
