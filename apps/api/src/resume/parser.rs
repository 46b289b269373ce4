//! Pulls name, skills, experience and job interests out of résumé text by
//! pattern matching.
//!
//! Deliberately literal: a fixed skill vocabulary, one regex per field, and a
//! single keyword deciding job interests. Every field has a default, so any
//! input (including an empty string) parses.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Technologies recognised as skills. Matched case-insensitively on word boundaries.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "FastAPI",
    "React",
    "JavaScript",
    "Node.js",
    "SQL",
    "MongoDB",
    "Django",
    "Flask",
    "Tailwind CSS",
];

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_SKILLS_SENTINEL: &str = "General IT Skills";
pub const EXPERIENCE_NOT_SPECIFIED: &str = "Not specified";

/// Interests returned when the text mentions "backend".
pub const BACKEND_INTERESTS: &[&str] = &["Software Engineer", "Backend Developer"];
/// Interests returned otherwise.
pub const FRONTEND_INTERESTS: &[&str] = &["Frontend Developer"];

// Placeholders: not derived from the document.
const PLACEHOLDER_PROJECTS: &[&str] = &["Project A", "Project B"];
const PLACEHOLDER_ACHIEVEMENTS: &[&str] = &["Achievement 1", "Achievement 2"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub projects: Vec<String>,
    pub achievements: Vec<String>,
    #[serde(rename = "jobInterests")]
    pub job_interests: Vec<String>,
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z][a-z]+(?:\s[A-Z][a-z]+)*").expect("Invalid name regex"))
}

fn skills_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = SKILL_VOCABULARY
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("Invalid skills regex")
    })
}

fn experience_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\d+)\s+years?.*experience").expect("Invalid experience regex")
    })
}

/// Parses extracted résumé text into a `ResumeRecord`. Never fails.
pub fn parse_resume(text: &str) -> ResumeRecord {
    ResumeRecord {
        name: extract_name(text),
        skills: extract_skills(text),
        experience: extract_experience(text),
        projects: to_owned_list(PLACEHOLDER_PROJECTS),
        achievements: to_owned_list(PLACEHOLDER_ACHIEVEMENTS),
        job_interests: infer_job_interests(text),
    }
}

fn extract_name(text: &str) -> String {
    name_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Skills in first-seen order, as spelled in the text. Later spellings of an
/// already-seen skill ("python" after "Python") are dropped.
fn extract_skills(text: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for m in skills_regex().find_iter(text) {
        let found = m.as_str();
        if !skills.iter().any(|s| s.eq_ignore_ascii_case(found)) {
            skills.push(found.to_string());
        }
    }

    if skills.is_empty() {
        skills.push(NO_SKILLS_SENTINEL.to_string());
    }
    skills
}

fn extract_experience(text: &str) -> String {
    experience_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|years| format!("{} years", years.as_str()))
        .unwrap_or_else(|| EXPERIENCE_NOT_SPECIFIED.to_string())
}

fn infer_job_interests(text: &str) -> Vec<String> {
    if text.to_lowercase().contains("backend") {
        to_owned_list(BACKEND_INTERESTS)
    } else {
        to_owned_list(FRONTEND_INTERESTS)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "John Smith has 3 years of experience in Python and React. backend development.";

    #[test]
    fn test_empty_text_yields_all_defaults() {
        let record = parse_resume("");
        assert_eq!(record.name, "Unknown");
        assert_eq!(record.skills, vec!["General IT Skills"]);
        assert_eq!(record.experience, "Not specified");
        assert_eq!(record.job_interests, vec!["Frontend Developer"]);
        assert_eq!(record.projects, vec!["Project A", "Project B"]);
        assert_eq!(record.achievements, vec!["Achievement 1", "Achievement 2"]);
    }

    #[test]
    fn test_name_unknown_without_capitalized_word() {
        let record = parse_resume("all lowercase text, 42 and ALLCAPS");
        assert_eq!(record.name, "Unknown");
    }

    #[test]
    fn test_name_is_first_capitalized_sequence() {
        let record = parse_resume("resume of Ada Lovelace\nAnalytical Engine");
        assert_eq!(record.name, "Ada Lovelace\nAnalytical Engine");

        let record = parse_resume("contact: Grace Hopper, navy");
        assert_eq!(record.name, "Grace Hopper");
    }

    #[test]
    fn test_skills_sentinel_is_single_entry() {
        let record = parse_resume("Cobol and Fortran veteran");
        assert_eq!(record.skills, vec![NO_SKILLS_SENTINEL]);
    }

    #[test]
    fn test_skills_preserve_first_spelling_and_dedup() {
        let record = parse_resume("python, SQL, Python again, sql, node.js and Tailwind CSS");
        assert_eq!(record.skills, vec!["python", "SQL", "node.js", "Tailwind CSS"]);
    }

    #[test]
    fn test_skills_require_word_boundaries() {
        let record = parse_resume("Reactive systems in Pythonic style");
        assert_eq!(record.skills, vec![NO_SKILLS_SENTINEL]);
    }

    #[test]
    fn test_javascript_is_not_java() {
        let record = parse_resume("Java and JavaScript");
        assert_eq!(record.skills, vec!["JavaScript"]);
    }

    #[test]
    fn test_experience_with_intervening_words() {
        assert_eq!(parse_resume("5 years of experience").experience, "5 years");
        assert_eq!(
            parse_resume("I have 12 Years of professional Experience").experience,
            "12 years"
        );
        assert_eq!(parse_resume("1 year experience").experience, "1 years");
    }

    #[test]
    fn test_experience_does_not_cross_lines() {
        let record = parse_resume("5 years\nof experience");
        assert_eq!(record.experience, "Not specified");
    }

    #[test]
    fn test_backend_interests_case_insensitive() {
        let record = parse_resume("Worked on BACKEND services");
        assert_eq!(
            record.job_interests,
            vec!["Software Engineer", "Backend Developer"]
        );
    }

    #[test]
    fn test_sample_resume() {
        let record = parse_resume(SAMPLE);
        assert_eq!(record.name, "John Smith");
        assert_eq!(record.skills, vec!["Python", "React"]);
        assert_eq!(record.experience, "3 years");
        assert_eq!(record.job_interests, to_owned_list(BACKEND_INTERESTS));
    }

    #[test]
    fn test_record_serializes_job_interests_camel_case() {
        let json = serde_json::to_value(parse_resume(SAMPLE)).unwrap();
        assert!(json.get("jobInterests").is_some());
        assert!(json.get("job_interests").is_none());
    }
}
