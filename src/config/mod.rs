#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::http::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "request.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "email-finder")]
#[command(about = "Infer company email conventions and generate likely contact addresses")]
pub struct CliConfig {
    /// Batch request JSON ({"entries": [...]})
    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// TOML configuration file; command line --input overrides its [input] path
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "4")]
    pub concurrent_requests: usize,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Bundle results.json and contacts.csv into contacts.zip
    #[arg(long)]
    pub compress: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log phase timings and memory usage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn fetch_timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn compress_output(&self) -> bool {
        self.compress
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        validate_path("input", self.input_path())?;
        validate_path("output_path", &self.output_path)?;
        validate_discovery_settings(
            self.timeout_seconds,
            self.concurrent_requests,
            &self.user_agent,
        )
    }
}
