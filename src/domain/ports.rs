use crate::domain::model::{Entry, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn fetch_timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
    fn compress_output(&self) -> bool;
}

/// Retrieves page text for discovery. Any failure is `None`, never an error.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Entry>>;
    async fn transform(&self, entries: Vec<Entry>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
