pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use adapters::http::HttpPageFetcher;
pub use config::lambda::LambdaConfig;
pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::ContactPipeline, processor::ContactProcessor};
pub use domain::model::{BatchResponse, ContactResult, Entry};
pub use utils::error::{FinderError, Result};
