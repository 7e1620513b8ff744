//! repo-showcase: Render a GitHub account's repositories as a categorized table
//!
//! Fetches every public repository of one account, sorts them into a few
//! topical buckets with keyword heuristics and writes the result as an
//! HTML-in-Markdown table.

use anyhow::Result;

mod classify;
mod cli;
mod config;
mod domain;
mod error;
mod fetch;
mod render;
mod utils;

fn main() -> Result<()> {
    cli::run()
}
