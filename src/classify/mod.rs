//! Keyword-based repository classification
//!
//! Each scored category earns one point per keyword found anywhere in the
//! repository's derived text. The strictly highest score wins; ties go to the
//! category listed first in [`KEYWORD_TABLE`], and no match at all falls back
//! to [`Category::OtherStuff`].

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

use crate::domain::{CategorizedCollections, Category, ExclusionSet, Repository};

pub mod keywords;

pub use keywords::{KEYWORD_TABLE, OTHER_OVERRIDES};

static OVERRIDE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| OTHER_OVERRIDES.iter().copied().collect());

/// Full classifier outcome for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,

    /// Scores in [`KEYWORD_TABLE`] order: security, machine learning, blockchain.
    pub scores: [u32; 3],

    /// True when a name override replaced the scored category.
    pub overridden: bool,
}

/// Lowercased name, description and topics joined by single spaces.
pub fn derived_text(repo: &Repository) -> String {
    let mut parts = vec![repo.name.to_lowercase()];
    if let Some(desc) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        parts.push(desc.to_lowercase());
    }
    if !repo.topics.is_empty() {
        parts.push(repo.topics.join(" ").to_lowercase());
    }
    parts.join(" ")
}

/// Number of keywords contained in `text`. Each keyword counts at most once.
pub fn keyword_score(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|keyword| text.contains(*keyword)).count() as u32
}

pub fn classify_detailed(repo: &Repository) -> Classification {
    let text = derived_text(repo);

    let mut scores = [0u32; 3];
    let mut best = 0u32;
    let mut category = Category::OtherStuff;
    for (slot, (candidate, keywords)) in KEYWORD_TABLE.iter().enumerate() {
        let score = keyword_score(&text, keywords);
        scores[slot] = score;
        if score > best {
            best = score;
            category = *candidate;
        }
    }

    let overridden = is_forced_other(&repo.name);
    if overridden {
        category = Category::OtherStuff;
    }

    Classification { category, scores, overridden }
}

/// Pick the category for one repository. Never fails.
pub fn classify(repo: &Repository) -> Category {
    classify_detailed(repo).category
}

fn is_forced_other(name: &str) -> bool {
    OVERRIDE_SET.contains(name.to_lowercase().as_str())
}

/// True for repositories that belong in the output at all.
pub fn is_visible(repo: &Repository, exclusions: &ExclusionSet) -> bool {
    !repo.private && !exclusions.contains(&repo.name)
}

/// Drop private and excluded repositories, then bucket the rest by category.
///
/// Fetch order is preserved inside each bucket.
pub fn categorize(repos: Vec<Repository>, exclusions: &ExclusionSet) -> CategorizedCollections {
    let mut groups = CategorizedCollections::new();
    for repo in repos {
        if !is_visible(&repo, exclusions) {
            tracing::debug!(name = %repo.name, private = repo.private, "skipping repository");
            continue;
        }
        let category = classify(&repo);
        tracing::trace!(name = %repo.name, %category, "classified");
        groups.push(category, repo);
    }
    groups
}
