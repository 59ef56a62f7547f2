//! Turns a profile reference (URL or bare slug) into a [`Person`].

use crate::domain::model::{Person, Role, FALLBACK_ROLE};
use url::Url;

/// Slug keywords and the role they signal. Keywords are compared with
/// non-letters removed on both sides.
const ROLE_KEYWORDS: &[(&str, Role)] = &[
    ("founder", Role::Founder),
    ("cofounder", Role::Founder),
    ("co-founder", Role::Founder),
    ("ceo", Role::Ceo),
    ("chiefexecutiveofficer", Role::Ceo),
    ("c-suite", Role::Executive),
    ("executive", Role::Executive),
    ("cfo", Role::FinanceHead),
    ("chieffinancialofficer", Role::FinanceHead),
    ("financehead", Role::FinanceHead),
    ("finance", Role::FinanceHead),
    ("operations", Role::OperationsHead),
    ("ops", Role::OperationsHead),
    ("headoperations", Role::OperationsHead),
    ("operationshead", Role::OperationsHead),
];

fn letters_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn last_segment(path: &str) -> Option<&str> {
    path.split('/').filter(|s| !s.is_empty()).last()
}

/// The identifying slug of a profile reference: the last non-empty path
/// segment of a URL, or of the raw string when it is not a URL.
pub fn extract_slug(reference: &str) -> Option<String> {
    let trimmed = reference.trim();

    match Url::parse(trimmed) {
        Ok(url) => match url.path_segments() {
            Some(segments) => segments
                .filter(|s| !s.is_empty())
                .last()
                .map(str::to_string),
            None => last_segment(url.path()).map(str::to_string),
        },
        Err(_) => last_segment(trimmed).map(str::to_string),
    }
}

pub fn tokenize_slug(slug: &str) -> Vec<String> {
    let cleaned: String = slug
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' | '_' | ' ' => c,
            _ => ' ',
        })
        .collect();

    cleaned
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn match_role(token: &str) -> Option<Role> {
    let letters = letters_only(token);
    if letters.is_empty() {
        return None;
    }
    ROLE_KEYWORDS
        .iter()
        .find(|(keyword, _)| letters_only(keyword) == letters)
        .map(|(_, role)| *role)
}

/// Role labels ordered by priority, joined with ` & `.
pub fn format_roles(roles: &[Role]) -> String {
    if roles.is_empty() {
        return FALLBACK_ROLE.to_string();
    }

    let mut ordered = roles.to_vec();
    ordered.sort_by(|a, b| b.priority().cmp(&a.priority()));
    ordered
        .iter()
        .map(Role::label)
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Parse one profile reference. References with no usable name token yield
/// `None`.
pub fn parse_profile_ref(reference: &str, company: &str) -> Option<Person> {
    let slug = extract_slug(reference)?;

    let mut roles: Vec<Role> = Vec::new();
    let mut name_tokens: Vec<String> = Vec::new();

    for token in tokenize_slug(&slug) {
        if let Some(role) = match_role(&token) {
            if !roles.contains(&role) {
                roles.push(role);
            }
        } else if token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        } else {
            let letters = letters_only(&token);
            if !letters.is_empty() {
                name_tokens.push(letters);
            }
        }
    }

    let first_name = capitalize(name_tokens.first()?);
    let last_name = if name_tokens.len() > 1 {
        name_tokens.last().map(|t| capitalize(t))
    } else {
        None
    };

    let full_name = match &last_name {
        Some(last) => format!("{} {}", first_name, last),
        None => first_name.clone(),
    };

    Some(Person {
        first_name,
        last_name,
        full_name,
        role: format_roles(&roles),
        company: company.to_string(),
        source: reference.to_string(),
    })
}
