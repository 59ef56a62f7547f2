use crate::domain::model::{EmailPattern, Person};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a name to lowercase ASCII letters: accents are decomposed and their
/// marks dropped, everything else outside `a-z` is removed.
pub fn sanitize_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Local part for `pattern`, or `None` when the names cannot fill it.
pub fn build_local_part(pattern: EmailPattern, first: &str, last: Option<&str>) -> Option<String> {
    let first = sanitize_name(first);
    if first.is_empty() {
        return None;
    }

    if pattern == EmailPattern::First {
        return Some(first);
    }

    let last = last.map(sanitize_name).filter(|l| !l.is_empty())?;
    let local = match pattern {
        EmailPattern::FirstDotLast => format!("{}.{}", first, last),
        EmailPattern::FirstLast => format!("{}{}", first, last),
        EmailPattern::InitialDotLast => format!("{}.{}", &first[..1], last),
        EmailPattern::FirstDotInitial => format!("{}.{}", first, &last[..1]),
        EmailPattern::First => first,
    };
    Some(local)
}

pub fn synthesize_email(person: &Person, domain: &str, pattern: EmailPattern) -> Option<String> {
    let local = build_local_part(pattern, &person.first_name, person.last_name.as_deref())?;
    Some(format!("{}@{}", local, domain))
}
