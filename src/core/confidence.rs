use crate::core::synthesizer::synthesize_email;
use crate::domain::model::{
    Confidence, ContactResult, EmailPattern, PatternDiscoveryResult, Person,
};
use std::collections::HashSet;

const SOURCE_SEPARATOR: &str = " | ";

/// Pattern to apply for one person when discovery may have come up empty.
pub fn select_pattern(discovered: Option<EmailPattern>, person: &Person) -> EmailPattern {
    match discovered {
        Some(pattern) => pattern,
        None if person.last_name.is_none() => EmailPattern::First,
        None => EmailPattern::FirstDotLast,
    }
}

pub fn derive_confidence(
    discovery: Confidence,
    person: &Person,
    applied: EmailPattern,
) -> Confidence {
    if person.last_name.is_none() || applied == EmailPattern::First {
        discovery.downgrade()
    } else {
        discovery
    }
}

fn join_sources(profile_source: &str, pattern_source: &str) -> String {
    match (profile_source.is_empty(), pattern_source.is_empty()) {
        (false, false) => format!("{}{}{}", profile_source, SOURCE_SEPARATOR, pattern_source),
        (false, true) => profile_source.to_string(),
        _ => pattern_source.to_string(),
    }
}

/// Build the output row for one person, or `None` if no address can be
/// synthesized for them.
pub fn build_contact(
    person: &Person,
    domain: &str,
    discovery: &PatternDiscoveryResult,
) -> Option<ContactResult> {
    let pattern = select_pattern(discovery.pattern, person);
    let email = synthesize_email(person, domain, pattern)?;

    Some(ContactResult {
        name: person.full_name.clone(),
        role: person.role.clone(),
        company: person.company.clone(),
        email,
        confidence: derive_confidence(discovery.confidence, person, pattern),
        source: join_sources(&person.source, &discovery.source),
    })
}

/// Keep the first row for each case-insensitive (company, email) pair.
pub fn dedup_contacts(contacts: Vec<ContactResult>) -> Vec<ContactResult> {
    let mut seen = HashSet::new();
    contacts
        .into_iter()
        .filter(|c| {
            seen.insert(format!(
                "{}|{}",
                c.company.to_lowercase(),
                c.email.to_lowercase()
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, last: Option<&str>) -> Person {
        Person {
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            full_name: match last {
                Some(l) => format!("{} {}", first, l),
                None => first.to_string(),
            },
            role: "Founder".to_string(),
            company: "Acme".to_string(),
            source: "https://www.linkedin.com/in/jordan-lee".to_string(),
        }
    }

    fn discovery(pattern: Option<EmailPattern>, confidence: Confidence) -> PatternDiscoveryResult {
        PatternDiscoveryResult {
            pattern,
            confidence,
            source: "https://acme.io/team".to_string(),
        }
    }

    fn contact(company: &str, email: &str, name: &str) -> ContactResult {
        ContactResult {
            name: name.to_string(),
            role: "Decision Maker".to_string(),
            company: company.to_string(),
            email: email.to_string(),
            confidence: Confidence::High,
            source: String::new(),
        }
    }

    #[test]
    fn test_fallback_pattern_selection() {
        assert_eq!(select_pattern(None, &person("Priya", None)), EmailPattern::First);
        assert_eq!(
            select_pattern(None, &person("Jordan", Some("Lee"))),
            EmailPattern::FirstDotLast
        );
        assert_eq!(
            select_pattern(Some(EmailPattern::FirstLast), &person("Priya", None)),
            EmailPattern::FirstLast
        );
    }

    #[test]
    fn test_confidence_downgrades() {
        let jordan = person("Jordan", Some("Lee"));
        let priya = person("Priya", None);
        assert_eq!(
            derive_confidence(Confidence::High, &jordan, EmailPattern::FirstDotLast),
            Confidence::High
        );
        assert_eq!(
            derive_confidence(Confidence::High, &jordan, EmailPattern::First),
            Confidence::Medium
        );
        assert_eq!(
            derive_confidence(Confidence::Medium, &priya, EmailPattern::First),
            Confidence::Low
        );
        assert_eq!(
            derive_confidence(Confidence::Low, &priya, EmailPattern::First),
            Confidence::Low
        );
    }

    #[test]
    fn test_build_contact_joins_sources() {
        let result = build_contact(
            &person("Jordan", Some("Lee")),
            "acme.io",
            &discovery(Some(EmailPattern::FirstDotLast), Confidence::High),
        )
        .unwrap();

        assert_eq!(result.name, "Jordan Lee");
        assert_eq!(result.email, "jordan.lee@acme.io");
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(
            result.source,
            "https://www.linkedin.com/in/jordan-lee | https://acme.io/team"
        );
    }

    #[test]
    fn test_unknown_pattern_single_name_uses_first() {
        let result = build_contact(
            &person("Priya", None),
            "example-corp.com",
            &discovery(None, Confidence::Low),
        )
        .unwrap();
        assert_eq!(result.email, "priya@example-corp.com");
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_two_part_pattern_without_last_name_is_dropped() {
        let result = build_contact(
            &person("Priya", None),
            "acme.io",
            &discovery(Some(EmailPattern::InitialDotLast), Confidence::High),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_dedup_is_case_insensitive_and_keeps_first() {
        let contacts = vec![
            contact("Acme", "jordan.lee@acme.io", "Jordan Lee"),
            contact("Other", "jordan.lee@acme.io", "Jordan Lee"),
            contact("ACME", "Jordan.Lee@ACME.io", "J. Lee"),
            contact("Acme", "sam.ray@acme.io", "Sam Ray"),
        ];
        let deduped = dedup_contacts(contacts);
        let names: Vec<(&str, &str)> = deduped
            .iter()
            .map(|c| (c.company.as_str(), c.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("Acme", "Jordan Lee"), ("Other", "Jordan Lee"), ("Acme", "Sam Ray")]
        );
    }
}
