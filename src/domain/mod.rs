//! Core domain types and models
//!
//! Defines Repository, Category, the exclusion set, the per-category
//! collections and the run configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::FileSystemError;

/// Topical bucket a repository is shown under.
///
/// Declaration order is significant: it is both the column order of the
/// rendered table and the tie-break order of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Information-Security")]
    InformationSecurity,
    #[serde(rename = "Machine-Learning")]
    MachineLearning,
    #[serde(rename = "Blockchain-Stuff")]
    BlockchainStuff,
    #[serde(rename = "Other-Stuff")]
    OtherStuff,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::InformationSecurity,
        Category::MachineLearning,
        Category::BlockchainStuff,
        Category::OtherStuff,
    ];

    pub fn index(self) -> usize {
        match self {
            Category::InformationSecurity => 0,
            Category::MachineLearning => 1,
            Category::BlockchainStuff => 2,
            Category::OtherStuff => 3,
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Category::InformationSecurity => "Information-Security",
            Category::MachineLearning => "Machine-Learning",
            Category::BlockchainStuff => "Blockchain-Stuff",
            Category::OtherStuff => "Other-Stuff",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::InformationSecurity => "icon-is.png",
            Category::MachineLearning => "icon-ml.png",
            Category::BlockchainStuff => "icon-bc.png",
            Category::OtherStuff => "icon-ot.png",
        }
    }

    pub fn icon_alt(self) -> &'static str {
        match self {
            Category::InformationSecurity => "IS",
            Category::MachineLearning => "ML",
            Category::BlockchainStuff => "BC",
            Category::OtherStuff => "OT",
        }
    }

    /// Text used when a repository has no description.
    pub fn fallback_description(self) -> &'static str {
        match self {
            Category::InformationSecurity => "Security project",
            Category::MachineLearning => "ML project",
            Category::BlockchainStuff => "Blockchain project",
            Category::OtherStuff => "Other project",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A repository record as returned by the listing API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Topic tags, in API order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,

    pub html_url: String,

    /// Last push time; `null` for repositories that were never pushed
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub private: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Repository names that must never be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// Parse one name per line. Lines are trimmed and blank lines skipped.
    pub fn from_lines(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    /// Load the exclusion list from `path`. A missing file is an empty set.
    pub fn load(path: &Path) -> Result<Self, FileSystemError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::from_lines(&content)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no exclusion list, excluding nothing");
                Ok(Self::default())
            }
            Err(source) => Err(FileSystemError::Read { path: path.to_path_buf(), source }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Repositories grouped per category, in insertion order until sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedCollections {
    groups: [Vec<Repository>; 4],
}

impl CategorizedCollections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, repo: Repository) {
        self.groups[category.index()].push(repo);
    }

    pub fn get(&self, category: Category) -> &[Repository] {
        &self.groups[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Repository])> {
        Category::ALL.into_iter().map(move |category| (category, self.get(category)))
    }

    /// Total repositories across all categories.
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Length of the longest category, i.e. the number of table rows.
    pub fn max_len(&self) -> usize {
        self.groups.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Most recently pushed first. The sort is stable so equal timestamps
    /// keep fetch order; never-pushed repositories go last.
    pub fn sort_by_recency(&mut self) {
        for group in &mut self.groups {
            group.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
        }
    }
}

/// Main configuration for repo-showcase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Account whose public repositories are listed
    #[serde(default = "default_account")]
    pub account: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_exclude_file")]
    pub exclude_file: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Emit each repository's description as the link tooltip
    #[serde(default)]
    pub show_descriptions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: default_account(),
            api_url: default_api_url(),
            per_page: default_per_page(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            exclude_file: default_exclude_file(),
            output: default_output(),
            show_descriptions: false,
        }
    }
}

// Default value functions for serde
fn default_account() -> String {
    "st-mn".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    100
}

fn default_user_agent() -> String {
    concat!("repo-showcase/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_exclude_file() -> PathBuf {
    PathBuf::from("exclude_repos.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("README.md")
}
