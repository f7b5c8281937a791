//! Static vocabularies behind resume extraction: the skills dictionary,
//! language keywords, job-category reference lists, and certification
//! acronyms. Read-only after initialization, safe to share across requests.

/// Skills matched by case-insensitive substring search over the full text.
/// Spans languages, frameworks, databases, cloud/devops, data science,
/// mobile, and soft skills.
pub(crate) const SKILLS_DB: &[&str] = &[
    // languages
    "python",
    "java",
    "javascript",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "go",
    "rust",
    "typescript",
    "scala",
    "perl",
    "r",
    // web
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "express",
    "spring",
    "laravel",
    "bootstrap",
    "jquery",
    "sass",
    "less",
    // databases
    "mysql",
    "postgresql",
    "mongodb",
    "sqlite",
    "oracle",
    "redis",
    "elasticsearch",
    "cassandra",
    "dynamodb",
    // cloud and devops
    "aws",
    "azure",
    "google cloud",
    "docker",
    "kubernetes",
    "jenkins",
    "ansible",
    "terraform",
    "git",
    "github",
    "gitlab",
    "ci/cd",
    // data science
    "machine learning",
    "deep learning",
    "data science",
    "artificial intelligence",
    "tensorflow",
    "pytorch",
    "keras",
    "scikit-learn",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "jupyter",
    "tableau",
    "power bi",
    // mobile
    "android",
    "ios",
    "react native",
    "flutter",
    "xamarin",
    // soft skills
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "agile",
    "scrum",
    "time management",
    "critical thinking",
    "creativity",
    "adaptability",
];

/// Programming languages matched with hard word boundaries (so "java" does
/// not fire inside "javascript"). `+` and `#` count as name characters.
pub(crate) const LANGUAGE_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "go",
    "rust",
    "typescript",
    "scala",
    "perl",
    "r",
    "html",
    "css",
    "sql",
    "nosql",
    "bash",
    "shell",
];

/// Reference skills per job category, in display order.
pub(crate) const JOB_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Software Developer",
        &["python", "java", "javascript", "c++", "git", "agile"],
    ),
    (
        "Web Developer",
        &["html", "css", "javascript", "react", "node.js", "php"],
    ),
    (
        "Data Scientist",
        &["python", "machine learning", "data analysis", "statistics", "sql"],
    ),
    (
        "DevOps Engineer",
        &["aws", "docker", "kubernetes", "jenkins", "linux"],
    ),
    (
        "Mobile Developer",
        &["android", "ios", "react native", "swift", "kotlin"],
    ),
    (
        "UI/UX Designer",
        &["figma", "adobe xd", "sketch", "photoshop", "illustrator"],
    ),
    (
        "Project Manager",
        &["project management", "agile", "scrum", "leadership", "communication"],
    ),
    (
        "Business Analyst",
        &["data analysis", "sql", "excel", "requirements gathering", "documentation"],
    ),
];

/// Well-known certification names matched case-insensitively anywhere.
pub(crate) const COMMON_CERTIFICATIONS: &[&str] = &[
    "AWS",
    "Azure",
    "Google Cloud",
    "PMP",
    "Scrum",
    "CISSP",
    "CEH",
    "CCNA",
    "OCP",
    "MCSE",
    "CISM",
    "ITIL",
];

pub(crate) const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school"];

/// Uppercases the first letter of every alphabetic run and lowercases the
/// rest, leaving non-letters untouched ("node.js" becomes "Node.Js").
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_plain_words() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("JAVASCRIPT"), "Javascript");
    }

    #[test]
    fn test_title_case_restarts_after_non_letters() {
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
    }

    #[test]
    fn test_category_tables_are_well_formed() {
        for (category, keywords) in JOB_CATEGORIES {
            assert!(!category.is_empty());
            assert!(!keywords.is_empty());
        }
    }
}
