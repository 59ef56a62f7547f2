use crate::adapters::http::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_discovery_settings, Validate};
use std::env;

/// Settings for the Lambda handler, read from the function environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub fetch_timeout_seconds: u64,
    pub user_agent: String,
    pub concurrent_requests: usize,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        Self {
            fetch_timeout_seconds: lookup("FETCH_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            user_agent: lookup("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            concurrent_requests: lookup("CONCURRENT_REQUESTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
        }
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_discovery_settings(
            self.fetch_timeout_seconds,
            self.concurrent_requests,
            &self.user_agent,
        )?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
