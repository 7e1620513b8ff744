//! Blocking GitHub REST client for the public repository listing

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

use super::PageSource;
use crate::domain::{Config, Repository};
use crate::error::FetchError;

pub struct GithubClient {
    client: Client,
    listing_url: String,
    per_page: u32,
}

impl GithubClient {
    /// Build a client for `config.account`. No credentials are sent.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            listing_url: listing_url(&config.api_url, &config.account),
            per_page: config.per_page,
        })
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }
}

impl PageSource for GithubClient {
    fn fetch_page(&mut self, page: u32) -> Result<Vec<Repository>, FetchError> {
        let response = self
            .client
            .get(&self.listing_url)
            .query(&[("page", page), ("per_page", self.per_page)])
            .send()
            .map_err(|source| FetchError::Transport { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { page, status: status.as_u16() });
        }

        let body = response.text().map_err(|source| FetchError::Transport { page, source })?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { page, source })
    }
}

fn listing_url(api_url: &str, account: &str) -> String {
    format!("{}/users/{}/repos", api_url.trim_end_matches('/'), account)
}
