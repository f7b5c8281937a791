//! Field extraction from raw resume text: contact details, education,
//! experience, and certifications. Every extractor is best-effort and
//! degrades to "Not Found" or an empty collection, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::vocab::{title_case, COMMON_CERTIFICATIONS, INSTITUTION_KEYWORDS};

pub(crate) const NOT_FOUND: &str = "Not Found";

const NAME_SCAN_LINES: usize = 10;
const MAX_CERTIFICATIONS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email regex")
});

// most specific first; the first pattern with any match wins
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+?\d{1,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}",
        r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}",
        r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone regex"))
    .collect()
});

static DEGREE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(bachelor|b\.?s\.?|b\.?a\.?|b\.?tech|b\.?e)\b",
        r"\b(master|m\.?s\.?|m\.?a\.?|m\.?tech|m\.?e)\b",
        r"\b(ph\.?d|doctorate|doctoral)\b",
        r"\b(diploma|certificate)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("degree regex"))
    .collect()
});

static GPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bgpa\s*:?\s*(\d+\.\d+)\b").expect("gpa regex"));

static EXPERIENCE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\s*(?:year|yr)s?\s*(?:of)?\s*experience",
        r"experience\s*(?:of)?\s*(\d+)\s*(?:year|yr)s?",
        r"(\d+)\+?\s*(?:year|yr)s?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience regex"))
    .collect()
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year regex"));

static CERT_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:certified|certification|certificate)\b[^\n,]*").expect("cert regex")
});

/// The candidate's name: the first early line of two to four words that all
/// start uppercase. Lines like "Phone: ..." fail the capitalization test.
pub(crate) fn extract_name(text: &str) -> String {
    for line in text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(NAME_SCAN_LINES)
    {
        let words: Vec<&str> = line.split_whitespace().collect();
        if (2..=4).contains(&words.len())
            && words
                .iter()
                .all(|w| w.chars().next().map_or(false, |c| c.is_uppercase()))
        {
            return line.to_string();
        }
    }
    NOT_FOUND.to_string()
}

pub(crate) fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

pub(crate) fn extract_phone(text: &str) -> String {
    for re in PHONE_RES.iter() {
        if let Some(m) = re.find(text) {
            return m.as_str().to_string();
        }
    }
    NOT_FOUND.to_string()
}

/// All degree keywords found, title-cased, in tier order (bachelor's,
/// master's, doctoral, then diplomas/certificates).
pub(crate) fn extract_degrees(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut degrees = Vec::new();
    for re in DEGREE_RES.iter() {
        for caps in re.captures_iter(&lowered) {
            if let Some(m) = caps.get(1) {
                degrees.push(title_case(m.as_str()));
            }
        }
    }
    degrees
}

/// Short lines mentioning a school-like keyword. Long prose lines are
/// assumed to be descriptions, not institution names.
pub(crate) fn extract_institutions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| {
            let lowered = line.to_lowercase();
            line.len() > 5
                && line.split_whitespace().count() <= 5
                && INSTITUTION_KEYWORDS.iter().any(|k| lowered.contains(k))
        })
        .map(str::to_string)
        .collect()
}

pub(crate) fn extract_gpa(text: &str) -> Option<f64> {
    let lowered = text.to_lowercase();
    GPA_RE
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Years of experience from explicit phrasing, falling back to counting
/// year mentions (two per employment span).
pub(crate) fn extract_experience_years(text: &str) -> u32 {
    let lowered = text.to_lowercase();
    for re in EXPERIENCE_RES.iter() {
        if let Some(caps) = re.captures(&lowered) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse().ok()) {
                return years;
            }
        }
    }

    let year_mentions = YEAR_RE.find_iter(&lowered).count() as u32;
    if year_mentions > 0 {
        (year_mentions / 2).max(1)
    } else {
        0
    }
}

/// Certification-labeled fragments plus well-known acronyms, deduplicated
/// in order of appearance and capped.
pub(crate) fn extract_certifications(text: &str) -> Vec<String> {
    let mut certifications: Vec<String> = Vec::new();

    for m in CERT_LABEL_RE.find_iter(text) {
        let fragment = m.as_str().trim();
        if fragment.len() > 3 && !certifications.iter().any(|c| c == fragment) {
            certifications.push(fragment.to_string());
        }
    }

    let upper = text.to_uppercase();
    for name in COMMON_CERTIFICATIONS {
        if upper.contains(&name.to_uppercase()) && !certifications.iter().any(|c| c == name) {
            certifications.push((*name).to_string());
        }
    }

    certifications.truncate(MAX_CERTIFICATIONS);
    certifications
}
