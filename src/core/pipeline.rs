use crate::core::processor::{parse_batch_request, ContactProcessor};
use crate::core::{ConfigProvider, Entry, PageFetcher, Pipeline, Storage, TransformResult};
use crate::domain::model::ResultsDocument;
use crate::utils::error::Result;
use crate::utils::export::to_csv;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const RESULTS_FILE: &str = "results.json";
pub const CSV_FILE: &str = "contacts.csv";
pub const ZIP_FILE: &str = "contacts.zip";

/// Request file in, contact files out.
pub struct ContactPipeline<S: Storage, C: ConfigProvider, F: PageFetcher> {
    storage: S,
    config: C,
    processor: ContactProcessor<F>,
}

impl<S: Storage, C: ConfigProvider, F: PageFetcher + 'static> ContactPipeline<S, C, F> {
    pub fn new(storage: S, config: C, fetcher: F) -> Self {
        let processor = ContactProcessor::new(fetcher, config.concurrent_requests());
        Self {
            storage,
            config,
            processor,
        }
    }

    fn output_file(&self, name: &str) -> String {
        format!("{}/{}", self.config.output_path().trim_end_matches('/'), name)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, F: PageFetcher + 'static> Pipeline
    for ContactPipeline<S, C, F>
{
    async fn extract(&self) -> Result<Vec<Entry>> {
        tracing::debug!("Reading batch request from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;
        let body: serde_json::Value = serde_json::from_slice(&raw)?;
        let entries = parse_batch_request(&body)?;
        tracing::info!("📥 Loaded {} entries", entries.len());
        Ok(entries)
    }

    async fn transform(&self, entries: Vec<Entry>) -> Result<TransformResult> {
        let entries_processed = entries.len();
        let contacts = self.processor.process_batch(entries).await?;
        let csv_output = to_csv(&contacts)?;

        Ok(TransformResult {
            contacts,
            csv_output,
            entries_processed,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let document = ResultsDocument {
            generated_at: chrono::Utc::now(),
            results: result.contacts,
        };
        let json_data = serde_json::to_string_pretty(&document)?;

        if !self.config.compress_output() {
            let results_path = self.output_file(RESULTS_FILE);
            self.storage
                .write_file(&results_path, json_data.as_bytes())
                .await?;
            self.storage
                .write_file(&self.output_file(CSV_FILE), result.csv_output.as_bytes())
                .await?;
            tracing::debug!("Wrote {} and {}", RESULTS_FILE, CSV_FILE);
            return Ok(results_path);
        }

        // 打包成單一 ZIP
        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>(RESULTS_FILE, FileOptions::default())?;
            zip.write_all(json_data.as_bytes())?;

            zip.start_file::<_, ()>(CSV_FILE, FileOptions::default())?;
            zip.write_all(result.csv_output.as_bytes())?;

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        let zip_path = self.output_file(ZIP_FILE);
        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(&zip_path, &zip_data).await?;
        Ok(zip_path)
    }
}
