//! Per-entry inference and batch assembly.

use crate::core::confidence::{build_contact, dedup_contacts};
use crate::core::discovery::discover_pattern;
use crate::core::domain_resolver::derive_domain;
use crate::core::identifier::parse_profile_ref;
use crate::domain::model::{BatchResponse, ContactResult, Entry, ResponseStatus};
use crate::domain::ports::PageFetcher;
use crate::utils::error::{FinderError, Result};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Resolve, discover, and synthesize contacts for a single entry.
pub async fn process_entry_with<F>(fetcher: &F, entry: &Entry) -> Vec<ContactResult>
where
    F: PageFetcher + ?Sized,
{
    let Some(domain) = derive_domain(&entry.website) else {
        tracing::info!(
            "⏭️  Skipping {}: no company domain in '{}'",
            entry.company,
            entry.website
        );
        return Vec::new();
    };

    let discovery = discover_pattern(fetcher, &domain).await;

    let contacts: Vec<ContactResult> = entry
        .profile_refs
        .iter()
        .filter_map(|reference| {
            let person = parse_profile_ref(reference, &entry.company);
            if person.is_none() {
                tracing::debug!("No name found in profile reference '{}'", reference);
            }
            person
        })
        .filter_map(|person| build_contact(&person, &domain, &discovery))
        .collect();

    tracing::debug!(
        "{} ({}): {} contacts from {} profile references",
        entry.company,
        domain,
        contacts.len(),
        entry.profile_refs.len()
    );
    contacts
}

pub struct ContactProcessor<F: PageFetcher> {
    fetcher: Arc<F>,
    concurrency: usize,
}

impl<F: PageFetcher + 'static> ContactProcessor<F> {
    pub fn new(fetcher: F, concurrency: usize) -> Self {
        Self::from_shared(Arc::new(fetcher), concurrency)
    }

    pub fn from_shared(fetcher: Arc<F>, concurrency: usize) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn process_entry(&self, entry: &Entry) -> Vec<ContactResult> {
        process_entry_with(self.fetcher.as_ref(), entry).await
    }

    /// Process every entry and deduplicate the combined output.
    ///
    /// Entries run concurrently up to the configured limit; output keeps the
    /// input order of entries and of profile references within each entry.
    pub async fn process_batch(&self, entries: Vec<Entry>) -> Result<Vec<ContactResult>> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        let total = entries.len();

        for (index, entry) in entries.into_iter().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                (index, process_entry_with(fetcher.as_ref(), &entry).await)
            });
        }

        let mut per_entry: Vec<(usize, Vec<ContactResult>)> = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            let finished = joined.map_err(|e| FinderError::ProcessingError {
                message: format!("entry task failed: {}", e),
            })?;
            per_entry.push(finished);
        }
        per_entry.sort_by_key(|(index, _)| *index);

        let combined: Vec<ContactResult> = per_entry
            .into_iter()
            .flat_map(|(_, contacts)| contacts)
            .collect();
        let before = combined.len();
        let deduped = dedup_contacts(combined);

        tracing::info!(
            "✅ {} entries → {} contacts ({} duplicates removed)",
            total,
            deduped.len(),
            before - deduped.len()
        );
        Ok(deduped)
    }
}

/// Pull the entry list out of a request body.
pub fn parse_batch_request(body: &serde_json::Value) -> Result<Vec<Entry>> {
    let entries = body
        .get("entries")
        .and_then(|v| v.as_array())
        .ok_or_else(|| FinderError::ValidationError {
            message: "`entries` must be an array".to_string(),
        })?;

    if entries.is_empty() {
        return Err(FinderError::ValidationError {
            message: "No entries provided".to_string(),
        });
    }

    Ok(Vec::<Entry>::deserialize(&body["entries"])?)
}

/// Request handler: validation failures are client errors, anything else
/// that goes wrong is a server error with no partial results.
pub async fn handle_batch_request<F: PageFetcher + 'static>(
    processor: &ContactProcessor<F>,
    body: &serde_json::Value,
) -> (ResponseStatus, BatchResponse) {
    let outcome = match parse_batch_request(body) {
        Ok(entries) => processor.process_batch(entries).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(results) => (
            ResponseStatus::Ok,
            BatchResponse {
                results,
                message: None,
            },
        ),
        Err(FinderError::ValidationError { message }) => {
            tracing::warn!("Rejected batch request: {}", message);
            (
                ResponseStatus::ClientError,
                BatchResponse {
                    results: Vec::new(),
                    message: Some(message),
                },
            )
        }
        Err(e) => {
            tracing::error!("❌ Batch request failed: {}", e);
            (
                ResponseStatus::ServerError,
                BatchResponse {
                    results: Vec::new(),
                    message: Some(e.to_string()),
                },
            )
        }
    }
}
