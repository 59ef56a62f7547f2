//! Website string → canonical mail domain.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z][a-z0-9+.-]*://").unwrap()
});

/// Consumer mailbox providers; a company never owns these.
pub const FREE_MAIL_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "aol.com",
    "protonmail.com",
    "zoho.com",
    "yandex.com",
    "gmx.com",
    "mail.com",
];

pub fn is_free_mail_provider(host: &str) -> bool {
    FREE_MAIL_PROVIDERS
        .iter()
        .any(|provider| provider.eq_ignore_ascii_case(host))
}

/// Normalize a free-form website value into a lowercase hostname without a
/// leading `www.` label.
///
/// Returns `None` when the value cannot be parsed as a URL or when it points
/// at a free mail provider.
pub fn derive_domain(website: &str) -> Option<String> {
    let trimmed = website.trim();
    if trimmed.is_empty() {
        return None;
    }

    let candidate = if SCHEME_REGEX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Cannot parse website '{}': {}", website, e);
            return None;
        }
    };

    let host = url.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
    if host.is_empty() {
        return None;
    }

    if is_free_mail_provider(&host) {
        tracing::debug!("Skipping free mail provider domain: {}", host);
        return None;
    }

    Some(host)
}
