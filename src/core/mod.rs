pub mod confidence;
pub mod discovery;
pub mod domain_resolver;
pub mod etl;
pub mod identifier;
pub mod pattern;
pub mod pipeline;
pub mod processor;
pub mod synthesizer;

pub use crate::domain::model::{Entry, TransformResult};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
