//! Token and sentence statistics shared by the written-answer and spoken
//! transcript scorers.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("word regex"));
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence regex"));

/// Lowercased word tokens in order of appearance.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Each grammar issue costs two points off a 100-point base.
pub(crate) fn grammar_score(error_count: usize) -> f64 {
    (100.0 - 2.0 * error_count as f64).max(0.0)
}

/// Type-token ratio scaled to a 50-point ceiling. Vocabulary is deliberately
/// a minority contributor to the overall score.
pub(crate) fn vocabulary_score(text: &str) -> f64 {
    let words = tokenize(text);
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    unique.len() as f64 / words.len() as f64 * 50.0
}

/// Average of a sentence-length band score and a structure-variety score.
/// Text with no sentence terminators scores zero.
pub(crate) fn clarity_score(text: &str) -> f64 {
    let lengths: Vec<usize> = SENTENCE_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.split_whitespace().count())
        .collect();
    if lengths.is_empty() {
        return 0.0;
    }

    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    let length_score = if (10.0..=20.0).contains(&mean) {
        100.0
    } else if (5.0..10.0).contains(&mean) || (mean > 20.0 && mean <= 25.0) {
        70.0
    } else {
        40.0
    };

    let distinct: HashSet<usize> = lengths.iter().copied().collect();
    let variety_score = (distinct.len() as f64 * 20.0).min(100.0);

    (length_score + variety_score) / 2.0
}

/// Share of question tokens that reappear in the answer, as a percentage.
/// A question with no tokens cannot anchor the comparison and yields 50.
pub(crate) fn relevance_score(question: &str, answer: &str) -> f64 {
    let question_tokens: HashSet<String> = tokenize(question).into_iter().collect();
    if question_tokens.is_empty() {
        return 50.0;
    }
    let answer_tokens: HashSet<String> = tokenize(answer).into_iter().collect();
    let overlap = question_tokens.intersection(&answer_tokens).count();
    (overlap as f64 / question_tokens.len() as f64 * 100.0).min(100.0)
}
