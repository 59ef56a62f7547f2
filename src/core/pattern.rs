//! Scores which local-part convention an organization uses, based on the
//! addresses that appear in scraped page text.

use crate::domain::model::EmailPattern;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([a-z0-9._%+-]+)@([a-z0-9.-]+\.[a-z]{2,})").unwrap()
});

static DOTTED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+\.[a-z]+$").unwrap());
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").unwrap());
static INITIAL_DOT_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]\.[a-z]+$").unwrap());
static WORD_DOT_INITIAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+\.[a-z]$").unwrap());

/// Local parts of every address in `text` whose host is exactly `domain`.
pub fn extract_local_parts(domain: &str, text: &str) -> Vec<String> {
    EMAIL_REGEX
        .captures_iter(text)
        .filter(|caps| caps[2].eq_ignore_ascii_case(domain))
        .map(|caps| caps[1].to_lowercase())
        .collect()
}

/// Classify a lowercase local part. Rules are checked in order and the first
/// match wins, so `j.lee` is claimed by the dotted rule before the initial
/// rules are consulted.
pub fn classify_local_part(local: &str) -> Option<EmailPattern> {
    if DOTTED_REGEX.is_match(local) {
        Some(EmailPattern::FirstDotLast)
    } else if WORD_REGEX.is_match(local) && local.len() >= 4 {
        Some(EmailPattern::FirstLast)
    } else if INITIAL_DOT_WORD_REGEX.is_match(local) {
        Some(EmailPattern::InitialDotLast)
    } else if WORD_DOT_INITIAL_REGEX.is_match(local) {
        Some(EmailPattern::FirstDotInitial)
    } else if WORD_REGEX.is_match(local) {
        Some(EmailPattern::First)
    } else {
        None
    }
}

/// Accumulated weight per pattern, indexed like [`EmailPattern::ALL`].
pub fn score_patterns(domain: &str, text: &str) -> [u32; 5] {
    let mut scores = [0u32; 5];
    for local in extract_local_parts(domain, text) {
        if let Some(pattern) = classify_local_part(&local) {
            scores[pattern.index()] += pattern.weight();
        }
    }
    scores
}

/// Highest-scoring pattern for `domain` in `text`; ties go to the pattern
/// declared first.
pub fn infer_pattern(domain: &str, text: &str) -> Option<EmailPattern> {
    let scores = score_patterns(domain, text);

    let mut best: Option<(EmailPattern, u32)> = None;
    for (pattern, score) in EmailPattern::ALL.iter().zip(scores) {
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((*pattern, score)),
        }
    }

    best.map(|(pattern, _)| pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_dot_last_wins_for_dotted_addresses() {
        let text = "Reach jordan.lee@acme.io or sam.ray@acme.io for details.";
        assert_eq!(infer_pattern("acme.io", text), Some(EmailPattern::FirstDotLast));
    }

    #[test]
    fn test_other_domains_are_ignored() {
        let text = "press: jordan.lee@othercorp.com, support@acme.io.example.net";
        assert_eq!(infer_pattern("acme.io", text), None);
    }

    #[test]
    fn test_host_comparison_is_case_insensitive() {
        let text = "Write to Jordan.Lee@ACME.io";
        assert_eq!(extract_local_parts("acme.io", text), vec!["jordan.lee"]);
    }

    #[test]
    fn test_classification_precedence() {
        assert_eq!(classify_local_part("jordan.lee"), Some(EmailPattern::FirstDotLast));
        assert_eq!(classify_local_part("jordanlee"), Some(EmailPattern::FirstLast));
        assert_eq!(classify_local_part("jlee"), Some(EmailPattern::FirstLast));
        // Single-letter segments still satisfy the dotted rule first.
        assert_eq!(classify_local_part("j.lee"), Some(EmailPattern::FirstDotLast));
        assert_eq!(classify_local_part("jordan.l"), Some(EmailPattern::FirstDotLast));
        assert_eq!(classify_local_part("info.desk2"), None);
        assert_eq!(classify_local_part("jordan_lee"), None);
    }

    #[test]
    fn test_short_words_classify_as_first() {
        // Low-confidence edge: 1-3 letter locals never count as firstlast.
        assert_eq!(classify_local_part("sam"), Some(EmailPattern::First));
        assert_eq!(classify_local_part("jo"), Some(EmailPattern::First));
        assert_eq!(classify_local_part("j"), Some(EmailPattern::First));
    }

    #[test]
    fn test_scores_sum_weights_per_address() {
        let text = "info@acme.io sales@acme.io bob@acme.io jordan.lee@acme.io";
        assert_eq!(score_patterns("acme.io", text), [5, 8, 0, 0, 2]);
        assert_eq!(infer_pattern("acme.io", text), Some(EmailPattern::FirstLast));
    }

    #[test]
    fn test_each_pattern_scores_in_its_own_slot() {
        let text = "jordan.lee@acme.io jordanlee@acme.io \
                    amy@acme.io bo@acme.io jo@acme.io";
        assert_eq!(score_patterns("acme.io", text), [5, 4, 0, 0, 6]);
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        // firstlast (4) + first (2) x2 = 4 vs 4: firstlast is declared earlier.
        let text = "bob@acme.io amy@acme.io jordan@acme.io";
        assert_eq!(score_patterns("acme.io", text), [0, 4, 0, 0, 4]);
        assert_eq!(infer_pattern("acme.io", text), Some(EmailPattern::FirstLast));
    }

    #[test]
    fn test_no_addresses_yields_none() {
        assert_eq!(infer_pattern("acme.io", "<html>No contact here</html>"), None);
        assert_eq!(infer_pattern("acme.io", "123-456@acme.io"), None);
    }
}
