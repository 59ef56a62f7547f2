//! Finds an organization's email convention by probing a fixed set of pages,
//! then falling back to domain-name keywords.

use crate::core::pattern::infer_pattern;
use crate::domain::model::{Confidence, EmailPattern, PatternDiscoveryResult};
use crate::domain::ports::PageFetcher;
use std::collections::HashSet;

/// Domain keyword hints, checked in order.
const KEYWORD_HINTS: &[(&[&str], EmailPattern)] = &[
    (&["io", "tech", "systems", "labs"], EmailPattern::FirstDotLast),
    (&["finance", "bank", "capital"], EmailPattern::InitialDotLast),
    (&["media", "creative", "studio"], EmailPattern::FirstLast),
];

const CONTACT_PATHS: &[&str] = &["contact", "team", "about"];

/// Pages worth probing for `domain`, deduplicated, in probe order.
pub fn candidate_urls(domain: &str) -> Vec<String> {
    let toggled = match domain.strip_prefix("www.") {
        Some(bare) => bare.to_string(),
        None => format!("www.{}", domain),
    };

    let mut urls = vec![
        format!("https://{}", domain),
        format!("https://{}", toggled),
        format!("http://{}", domain),
        format!("http://{}", toggled),
    ];
    urls.extend(
        CONTACT_PATHS
            .iter()
            .map(|path| format!("https://{}/{}", domain, path)),
    );

    let mut seen = HashSet::new();
    urls.retain(|url| seen.insert(url.clone()));
    urls
}

pub fn keyword_hint(domain: &str) -> Option<EmailPattern> {
    let lowered = domain.to_lowercase();
    KEYWORD_HINTS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, pattern)| *pattern)
}

pub async fn discover_pattern<F>(fetcher: &F, domain: &str) -> PatternDiscoveryResult
where
    F: PageFetcher + ?Sized,
{
    for url in candidate_urls(domain) {
        tracing::debug!("Probing {} for published addresses", url);
        let Some(text) = fetcher.fetch(&url).await else {
            continue;
        };

        if let Some(pattern) = infer_pattern(domain, &text) {
            tracing::info!("🔎 {}: pattern {} found on {}", domain, pattern, url);
            return PatternDiscoveryResult {
                pattern: Some(pattern),
                confidence: Confidence::High,
                source: url,
            };
        }
    }

    let source = format!("https://{}", domain);
    match keyword_hint(domain) {
        Some(pattern) => {
            tracing::info!("🔎 {}: no published addresses, guessing {} from name", domain, pattern);
            PatternDiscoveryResult {
                pattern: Some(pattern),
                confidence: Confidence::Medium,
                source,
            }
        }
        None => {
            tracing::info!("🔎 {}: pattern unknown", domain);
            PatternDiscoveryResult {
                pattern: None,
                confidence: Confidence::Low,
                source,
            }
        }
    }
}
