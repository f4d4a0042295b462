use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::adapters::supabase::DEFAULT_TABLE;
use crate::config::{DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub key: Option<String>,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_pages: default_max_pages(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            key: None,
            table: default_table(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${VITE_SUPABASE_ANON_KEY})，未設定的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Fills store credentials the file leaves out (e.g. from the environment).
    pub fn with_store_fallback(mut self, url: Option<String>, key: Option<String>) -> Self {
        if resolved(&self.store.url).is_none() {
            self.store.url = url;
        }
        if resolved(&self.store.key).is_none() {
            self.store.key = key;
        }
        self
    }
}

/// Unresolved `${VAR}` placeholders count as missing.
fn resolved(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && !(v.starts_with("${") && v.ends_with('}')))
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn max_pages(&self) -> u32 {
        self.source.max_pages
    }

    fn user_agent(&self) -> &str {
        &self.source.user_agent
    }

    fn store_url(&self) -> Option<&str> {
        resolved(&self.store.url)
    }

    fn store_key(&self) -> Option<&str> {
        resolved(&self.store.key)
    }

    fn table(&self) -> &str {
        &self.store.table
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;
        validation::validate_positive_number(
            "source.max_pages",
            self.source.max_pages as usize,
            1,
        )?;
        validation::validate_non_empty_string("source.user_agent", &self.source.user_agent)?;
        validation::validate_non_empty_string("store.table", &self.store.table)?;
        Ok(())
    }
}
