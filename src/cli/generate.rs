//! Generate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{fetch_repositories, load_exclusions, SourceArgs};
use crate::classify::categorize;
use crate::config::CliOverrides;
use crate::domain::Category;
use crate::render::{render_table, write_document, RenderOptions};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Document to write (overwritten if present)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show each repository's description as the link tooltip
    #[arg(long, conflicts_with = "no_show_descriptions")]
    pub show_descriptions: bool,

    /// Hide descriptions even when the config file enables them
    #[arg(long)]
    pub no_show_descriptions: bool,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    fn show_descriptions_override(&self) -> Option<bool> {
        match (self.show_descriptions, self.no_show_descriptions) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = args.source.resolve(CliOverrides {
        output: args.output.clone(),
        show_descriptions: args.show_descriptions_override(),
        ..CliOverrides::default()
    })?;

    let exclusions = load_exclusions(&config)?;
    let repos = fetch_repositories(&config)?;
    let fetched = repos.len();

    let mut groups = categorize(repos, &exclusions);
    groups.sort_by_recency();
    let document = render_table(&groups, RenderOptions::from(&config));

    if args.dry_run {
        print!("{document}");
        return Ok(());
    }

    write_document(&config.output, &document)?;
    tracing::info!(output = %config.output.display(), "document updated");

    println!("{} updated", config.output.display());
    println!();
    println!("Statistics:");
    println!("  Account:         {}", config.account);
    println!("  Fetched:         {fetched}");
    println!("  Shown:           {}", groups.total());
    for category in Category::ALL {
        println!("  {:<21}{}", format!("{category}:"), groups.get(category).len());
    }

    Ok(())
}
