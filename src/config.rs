use crate::{
    driver::Pagination,
    github::{
        account::{Account, AccountKind},
        github_client::GITHUB_API_URL,
        MAX_PER_PAGE,
    },
    scan::throttle::{Throttle, DEFAULT_THROTTLE_SECONDS},
};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

const DEFAULT_CONFIG_FILE_NAME: &str = "reposcanner.yaml";

const GITHUB_URL: &str = "https://github.com";

const DEFAULT_SCANNER_PROGRAM: &str = "trufflehog";
const DEFAULT_SCANNER_RULES: &str = "rules.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub account: AccountConfig,
    /// Number of pages to fetch. When absent pages are fetched until one
    /// comes back empty.
    pub pages: Option<u32>,
    #[serde(default = "Config::default_per_page")]
    pub per_page: u32,
    #[serde(default = "Config::default_throttle_seconds")]
    pub throttle_seconds: u64,
    #[serde(default = "Config::default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default = "Config::default_github_url")]
    pub github_url: String,
    #[serde(default)]
    pub scanner: ScannerConfig,
}

impl Config {
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE_NAME));

        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        Config::parse(&config_string)
    }

    pub fn parse(config_string: &str) -> Result<Config> {
        let config = serde_yaml::from_str::<Config>(config_string)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.account.name.trim().is_empty() {
            bail!("account name must not be empty");
        }

        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            bail!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE,
                self.per_page
            );
        }

        if self.pages == Some(0) {
            bail!("pages must be at least 1, omit it to fetch until an empty page");
        }

        Ok(())
    }

    pub fn account(&self) -> Account {
        Account::new(self.account.kind, self.account.name.trim())
    }

    pub fn pagination(&self) -> Pagination {
        match self.pages {
            Some(pages) => Pagination::Fixed(pages),
            None => Pagination::UntilEmpty,
        }
    }

    pub fn throttle(&self) -> Throttle {
        Throttle::new(Duration::from_secs(self.throttle_seconds))
    }

    fn default_per_page() -> u32 {
        MAX_PER_PAGE
    }

    fn default_throttle_seconds() -> u64 {
        DEFAULT_THROTTLE_SECONDS
    }

    fn default_snapshot_dir() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_api_url() -> String {
        GITHUB_API_URL.to_owned()
    }

    fn default_github_url() -> String {
        GITHUB_URL.to_owned()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountConfig {
    pub kind: AccountKind,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "ScannerConfig::default_program")]
    pub program: String,
    #[serde(default = "ScannerConfig::default_rules")]
    pub rules: String,
    #[serde(default = "ScannerConfig::enabled")]
    pub regex: bool,
    #[serde(default)]
    pub entropy: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            program: ScannerConfig::default_program(),
            rules: ScannerConfig::default_rules(),
            regex: true,
            entropy: false,
        }
    }
}

impl ScannerConfig {
    fn default_program() -> String {
        DEFAULT_SCANNER_PROGRAM.to_owned()
    }

    fn default_rules() -> String {
        DEFAULT_SCANNER_RULES.to_owned()
    }

    fn enabled() -> bool {
        true
    }
}
