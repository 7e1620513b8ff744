//! HTML-in-Markdown table rendering
//!
//! One column per category, one row per rank position. Repositories are
//! expected to be sorted already (see
//! [`CategorizedCollections::sort_by_recency`]).

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::{CategorizedCollections, Category, Config, Repository};
use crate::error::FileSystemError;
use crate::utils::{escape_html, truncate_chars};

/// Maximum characters of description kept for a cell.
pub const DESCRIPTION_LIMIT: usize = 50;

/// Full repository names shown under a fixed label instead of the derived one.
pub const DISPLAY_ALIASES: &[(&str, &str)] =
    &[("spring-boot-microservices-example", "java-microservices")];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the cell description as the link's `title` attribute.
    pub show_descriptions: bool,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self { show_descriptions: config.show_descriptions }
    }
}

/// Link label: the first two hyphen-separated tokens of the name.
pub fn display_label(name: &str) -> String {
    if let Some((_, alias)) = DISPLAY_ALIASES.iter().find(|(full, _)| *full == name) {
        return (*alias).to_string();
    }
    name.split('-').take(2).collect::<Vec<_>>().join("-")
}

/// Description shortened to [`DESCRIPTION_LIMIT`] characters, or the
/// category's fallback text when there is none.
pub fn cell_description(repo: &Repository, category: Category) -> String {
    let desc = truncate_chars(repo.description.as_deref().unwrap_or(""), DESCRIPTION_LIMIT);
    if desc.is_empty() {
        category.fallback_description().to_string()
    } else {
        desc.to_string()
    }
}

fn render_cell(out: &mut String, repo: &Repository, category: Category, options: RenderOptions) {
    let label = display_label(&repo.name);
    if options.show_descriptions {
        let title = escape_html(&cell_description(repo, category));
        let _ = writeln!(
            out,
            r#"<td style="text-align:center"><a href="{}" title="{}">{}</a></td>"#,
            repo.html_url, title, label
        );
    } else {
        let _ = writeln!(
            out,
            r#"<td style="text-align:center"><a href="{}">{}</a></td>"#,
            repo.html_url, label
        );
    }
}

/// Render the whole document. Pure: the same input always yields the same bytes.
pub fn render_table(groups: &CategorizedCollections, options: RenderOptions) -> String {
    let mut out = String::new();
    out.push_str("<div style=\"text-align: center;\">\n");
    out.push_str("<table style=\"width: 100%; margin: auto;\">\n");

    out.push_str("<tr>\n");
    for category in Category::ALL {
        let _ = writeln!(
            out,
            r#"<th style="text-align:center"><img src="{}" alt="{}" width="20"> {}</th>"#,
            category.icon(),
            category.icon_alt(),
            category.label()
        );
    }
    out.push_str("</tr>\n");

    for row in 0..groups.max_len() {
        out.push_str("<tr>\n");
        for (category, repos) in groups.iter() {
            match repos.get(row) {
                Some(repo) => render_cell(&mut out, repo, category, options),
                None => out.push_str("<td></td>\n"),
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n</div>\n");
    out
}

/// Write the rendered document, replacing any existing file.
pub fn write_document(path: &Path, content: &str) -> Result<(), FileSystemError> {
    std::fs::write(path, content)
        .map_err(|source| FileSystemError::Write { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}
