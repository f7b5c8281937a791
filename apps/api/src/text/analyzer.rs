//! Scores a written interview answer against the question it addresses.
//! Grammar issues come from the checker service; every other metric is
//! computed locally from token and sentence statistics.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::collaborators::{GrammarIssue, TextChecker};
use crate::report::{round2, AnalysisError, AnalysisReport};
use crate::text::metrics;

const MAX_SUGGESTIONS: usize = 3;
const SUGGESTION_POOL: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct TextReport {
    pub grammar_errors: usize,
    pub spelling_errors: usize,
    pub grammar_score: f64,
    pub vocabulary_score: f64,
    pub clarity_score: f64,
    pub relevance_score: f64,
    pub overall_score: f64,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

pub struct TextAnalyzer {
    checker: Arc<dyn TextChecker>,
}

impl TextAnalyzer {
    pub fn new(checker: Arc<dyn TextChecker>) -> Self {
        Self { checker }
    }

    pub async fn analyze(&self, question: &str, answer: &str) -> AnalysisReport<TextReport> {
        match self.run(question, answer).await {
            Ok(report) => AnalysisReport::success(report),
            Err(e) => {
                warn!(error = %e, "text analysis failed");
                AnalysisReport::failure(e.to_string())
            }
        }
    }

    async fn run(&self, question: &str, answer: &str) -> Result<TextReport, AnalysisError> {
        let issues = self.checker.check(answer).await?;
        let grammar_errors = issues.len();
        let spelling_errors = issues.iter().filter(|i| i.is_misspelling()).count();

        let grammar = metrics::grammar_score(grammar_errors);
        let vocabulary = metrics::vocabulary_score(answer);
        let clarity = metrics::clarity_score(answer);
        let relevance = metrics::relevance_score(question, answer);
        let overall = 0.3 * grammar + 0.2 * vocabulary + 0.3 * clarity + 0.2 * relevance;

        Ok(TextReport {
            grammar_errors,
            spelling_errors,
            grammar_score: round2(grammar),
            vocabulary_score: round2(vocabulary),
            clarity_score: round2(clarity),
            relevance_score: round2(relevance),
            overall_score: round2(overall),
            feedback: feedback(grammar_errors, spelling_errors, vocabulary, clarity, relevance),
            suggestions: suggestions(&issues),
        })
    }
}

fn feedback(
    grammar_errors: usize,
    spelling_errors: usize,
    vocabulary: f64,
    clarity: f64,
    relevance: f64,
) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(5);

    lines.push(match grammar_errors {
        0 => "Excellent grammar! No errors detected.".to_string(),
        n if n <= 3 => format!("Good grammar with only {} minor errors.", n),
        n => format!("Needs improvement: {} grammar errors found.", n),
    });

    lines.push(match spelling_errors {
        0 => "Perfect spelling!".to_string(),
        n if n <= 2 => format!("Minor spelling issues: {} errors.", n),
        n => format!("Spelling needs attention: {} errors found.", n),
    });

    lines.push(
        if vocabulary >= 80.0 {
            "Rich vocabulary usage."
        } else if vocabulary >= 60.0 {
            "Good vocabulary range."
        } else {
            "Consider using more varied vocabulary."
        }
        .to_string(),
    );

    lines.push(
        if clarity >= 80.0 {
            "Clear and well-structured answers."
        } else if clarity >= 60.0 {
            "Generally clear, but could be more concise."
        } else {
            "Try to structure your answers more clearly."
        }
        .to_string(),
    );

    lines.push(
        if relevance >= 80.0 {
            "Answers are highly relevant to questions."
        } else if relevance >= 60.0 {
            "Answers are mostly relevant."
        } else {
            "Try to focus your answers more directly on the questions."
        }
        .to_string(),
    );

    lines.join(" ")
}

/// Up to three rule/message pairs drawn from the first few issues, one per
/// distinct rule id.
fn suggestions(issues: &[GrammarIssue]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for issue in issues.iter().take(SUGGESTION_POOL) {
        if seen.contains(&issue.rule_id.as_str()) {
            continue;
        }
        seen.push(&issue.rule_id);
        out.push(format!("{}: {}", issue.rule_id, issue.message));
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    out
}
