//! Shared argument handling for the subcommands

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, ExclusionSet, Repository};
use crate::fetch::{fetch_all_with, GithubClient};

/// Where repositories come from and which ones to leave out
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to config file (repo-showcase.toml or .repo-showcase.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GitHub account whose public repositories are listed
    #[arg(short = 'a', long, value_name = "NAME")]
    pub account: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// File with repository names to leave out, one per line
    #[arg(short = 'x', long, value_name = "FILE")]
    pub exclude_file: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl SourceArgs {
    /// Defaults, then config file and environment, then these flags and `extra`.
    pub fn resolve(&self, extra: CliOverrides) -> Result<Config> {
        let cwd = std::env::current_dir()?;
        let file_config = load_config(&cwd, self.config.as_deref())?;

        let overrides = CliOverrides {
            account: self.account.clone(),
            api_url: self.api_url.clone(),
            exclude_file: self.exclude_file.clone(),
            timeout_secs: self.timeout,
            ..extra
        };
        let config = merge_cli_with_config(file_config, overrides);
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

pub fn load_exclusions(config: &Config) -> Result<ExclusionSet> {
    let exclusions = ExclusionSet::load(&config.exclude_file)?;
    if !exclusions.is_empty() {
        tracing::info!(
            count = exclusions.len(),
            path = %config.exclude_file.display(),
            "loaded exclusion list"
        );
    }
    Ok(exclusions)
}

/// Page through the account's repositories with a spinner on stderr.
pub fn fetch_repositories(config: &Config) -> Result<Vec<Repository>> {
    let mut client = GithubClient::new(config).context("Failed to build HTTP client")?;
    tracing::debug!(url = client.listing_url(), "listing repositories");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Fetching repositories for {}", config.account));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let mut fetched = 0usize;
    let result = fetch_all_with(&mut client, |page, records| {
        fetched += records;
        spinner.set_message(format!("Fetched page {page} ({fetched} repositories)"));
    });
    spinner.finish_and_clear();

    result.with_context(|| format!("Failed to list repositories for {}", config.account))
}
