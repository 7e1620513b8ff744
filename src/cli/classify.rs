//! Classify command implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use super::utils::{fetch_repositories, load_exclusions, SourceArgs};
use crate::classify::{classify_detailed, is_visible};
use crate::config::CliOverrides;
use crate::domain::Category;

#[derive(Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Emit a JSON array instead of a text listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ClassifiedRepo {
    name: String,
    category: Category,
    security_score: u32,
    machine_learning_score: u32,
    blockchain_score: u32,
    overridden: bool,
    pushed_at: Option<DateTime<Utc>>,
}

pub fn run(args: ClassifyArgs) -> Result<()> {
    let config = args.source.resolve(CliOverrides::default())?;
    let exclusions = load_exclusions(&config)?;
    let repos = fetch_repositories(&config)?;

    let rows: Vec<ClassifiedRepo> = repos
        .iter()
        .filter(|repo| is_visible(repo, &exclusions))
        .map(|repo| {
            let result = classify_detailed(repo);
            ClassifiedRepo {
                name: repo.name.clone(),
                category: result.category,
                security_score: result.scores[0],
                machine_learning_score: result.scores[1],
                blockchain_score: result.scores[2],
                overridden: result.overridden,
                pushed_at: repo.pushed_at,
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let marker = if row.overridden { "  (override)" } else { "" };
        println!(
            "{:<21}{}  [is={} ml={} bc={}]{marker}",
            row.category.label(),
            row.name,
            row.security_score,
            row.machine_learning_score,
            row.blockchain_score
        );
    }
    println!();
    println!("{} repositories classified", rows.len());

    Ok(())
}
