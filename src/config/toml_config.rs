use crate::adapters::http::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::Validate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

const DEFAULT_CONCURRENT_REQUESTS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub finder: FinderInfo,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub concurrent_requests: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub compress: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER_AGENT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn set_input_path(&mut self, path: String) {
        self.input.path = Some(path);
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn fetch_timeout_seconds(&self) -> u64 {
        self.discovery
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn user_agent(&self) -> &str {
        self.discovery
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    fn concurrent_requests(&self) -> usize {
        self.discovery
            .concurrent_requests
            .unwrap_or(DEFAULT_CONCURRENT_REQUESTS)
    }

    fn compress_output(&self) -> bool {
        self.output.compress.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        let input = validate_required_field("input.path", &self.input.path)?;
        validate_path("input.path", input)?;
        validate_path("output.path", &self.output.path)?;
        validate_discovery_settings(
            self.fetch_timeout_seconds(),
            self.concurrent_requests(),
            self.user_agent(),
        )
    }
}
