//! Lexicon sentiment scorer — the in-process backend for `SentimentScorer`.
//!
//! Polarity is `(positive − negative) / (positive + negative)` over wordlist
//! hits, 0.0 when the text contains no scored words. Resumes lean on a small
//! professional-register lexicon rather than a general-purpose one.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::collaborators::{CollaboratorError, SentimentScorer};

const POSITIVE_WORDS: &[&str] = &[
    "accomplished",
    "achieved",
    "awarded",
    "confident",
    "dedicated",
    "delivered",
    "effective",
    "excellent",
    "expert",
    "improved",
    "innovative",
    "led",
    "motivated",
    "optimized",
    "passionate",
    "proficient",
    "reliable",
    "skilled",
    "strong",
    "successful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "difficult",
    "failed",
    "fired",
    "lack",
    "limited",
    "poor",
    "problem",
    "terminated",
    "unable",
    "weak",
    "worst",
];

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

pub struct LexiconSentiment;

impl LexiconSentiment {
    fn score_text(text: &str) -> f64 {
        let positive: HashSet<&str> = POSITIVE_WORDS.iter().copied().collect();
        let negative: HashSet<&str> = NEGATIVE_WORDS.iter().copied().collect();

        let lower = text.to_lowercase();
        let mut pos = 0u32;
        let mut neg = 0u32;
        for word in WORD_RE.find_iter(&lower) {
            let word = word.as_str();
            if positive.contains(word) {
                pos += 1;
            } else if negative.contains(word) {
                neg += 1;
            }
        }

        if pos + neg == 0 {
            return 0.0;
        }
        (pos as f64 - neg as f64) / (pos + neg) as f64
    }
}

#[async_trait]
impl SentimentScorer for LexiconSentiment {
    async fn polarity(&self, text: &str) -> Result<f64, CollaboratorError> {
        Ok(Self::score_text(text))
    }
}
