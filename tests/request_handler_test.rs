use async_trait::async_trait;
use email_finder::core::discovery::discover_pattern;
use email_finder::core::domain_resolver::{derive_domain, FREE_MAIL_PROVIDERS};
use email_finder::core::identifier::parse_profile_ref;
use email_finder::core::pattern::infer_pattern;
use email_finder::core::processor::handle_batch_request;
use email_finder::core::synthesizer::synthesize_email;
use email_finder::core::PageFetcher;
use email_finder::domain::model::{Confidence, EmailPattern, ResponseStatus};
use email_finder::ContactProcessor;
use serde_json::json;

/// Every fetch fails, as if the network were down.
struct Offline;

#[async_trait]
impl PageFetcher for Offline {
    async fn fetch(&self, _url: &str) -> Option<String> {
        None
    }
}

#[test]
fn test_website_forms_resolve_to_the_same_domain() {
    for website in ["acme.io", "https://www.acme.io/x", "http://acme.io"] {
        assert_eq!(derive_domain(website).as_deref(), Some("acme.io"), "{}", website);
    }
}

#[tokio::test]
async fn test_free_mail_websites_never_produce_contacts() {
    let processor = ContactProcessor::new(Offline, 4);

    for provider in FREE_MAIL_PROVIDERS {
        for website in [provider.to_string(), format!("https://www.{}/", provider.to_uppercase())] {
            let body = json!({"entries": [{
                "company": "Someone",
                "website": website,
                "linkedinProfiles": ["jordan-lee-founder", "sam-ray"]
            }]});
            let (status, response) = handle_batch_request(&processor, &body).await;
            assert_eq!(status, ResponseStatus::Ok);
            assert!(response.results.is_empty(), "{} produced contacts", website);
        }
    }
}

#[tokio::test]
async fn test_discovery_degrades_without_pages() {
    let tech = discover_pattern(&Offline, "acmetech.io").await;
    assert_eq!(tech.pattern, Some(EmailPattern::FirstDotLast));
    assert_eq!(tech.confidence, Confidence::Medium);

    let unknown = discover_pattern(&Offline, "example-corp.com").await;
    assert_eq!(unknown.pattern, None);
    assert_eq!(unknown.confidence, Confidence::Low);
}

#[test]
fn test_profile_to_address() {
    let person =
        parse_profile_ref("https://www.linkedin.com/in/jordan-lee-founder-ceo/", "Acme").unwrap();
    assert_eq!(person.role, "Founder & CEO");

    let page = "Contact jordan.lee@acme.io or sam.ray@acme.io";
    let pattern = infer_pattern("acme.io", page).unwrap();
    assert_eq!(
        synthesize_email(&person, "acme.io", pattern).as_deref(),
        Some("jordan.lee@acme.io")
    );
    assert_eq!(
        synthesize_email(&person, "acme.io", EmailPattern::InitialDotLast).as_deref(),
        Some("j.lee@acme.io")
    );
}

#[tokio::test]
async fn test_request_errors() {
    let processor = ContactProcessor::new(Offline, 1);

    let (status, response) = handle_batch_request(&processor, &json!({})).await;
    assert_eq!(status.code(), 400);
    assert!(response.results.is_empty());
    assert!(response.message.is_some());

    let (status, _) = handle_batch_request(&processor, &json!("entries")).await;
    assert_eq!(status, ResponseStatus::ClientError);

    let (status, response) =
        handle_batch_request(&processor, &json!({"entries": [{"linkedinProfiles": "jordan-lee"}]}))
            .await;
    assert_eq!(status.code(), 500);
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_duplicate_pairs_across_entries_collapse() {
    let processor = ContactProcessor::new(Offline, 2);
    let body = json!({"entries": [
        {"company": "Acme", "website": "acme.io", "linkedinProfiles": ["jordan-lee-ceo"]},
        {"company": "ACME", "website": "www.acme.io", "linkedinProfiles": ["Jordan-Lee"]}
    ]});

    let (_, response) = handle_batch_request(&processor, &body).await;
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].role, "CEO");
}
