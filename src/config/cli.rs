use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::adapters::supabase::DEFAULT_TABLE;
use crate::config::{DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "whitehouse-actions")]
#[command(about = "Scrape presidential actions and store them for title matching")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, env = "VITE_SUPABASE_URL", hide_env_values = true)]
    pub supabase_url: Option<String>,

    #[arg(long, env = "VITE_SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,

    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    #[arg(long, help = "Load source/store settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Scrape only, do not insert rows")]
    pub dry_run: bool,

    #[arg(long, help = "Also write scraped actions to this CSV file")]
    pub export_csv: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_pages(&self) -> u32 {
        self.max_pages
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn store_url(&self) -> Option<&str> {
        self.supabase_url.as_deref()
    }

    fn store_key(&self) -> Option<&str> {
        self.supabase_key.as_deref()
    }

    fn table(&self) -> &str {
        &self.table
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_positive_number("max_pages", self.max_pages as usize, 1)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        validation::validate_non_empty_string("table", &self.table)?;
        Ok(())
    }
}
