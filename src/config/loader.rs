//! Layered config: built-in defaults, then a config file, then environment

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::Path;

use crate::domain::Config;

/// Files looked up in the anchor directory when no `--config` is given.
pub const CONFIG_FILE_NAMES: &[&str] = &["repo-showcase.toml", ".repo-showcase.yml"];

/// Prefix for environment overrides, e.g. `REPO_SHOWCASE_ACCOUNT`.
pub const ENV_PREFIX: &str = "REPO_SHOWCASE_";

pub fn load_config(anchor: &Path, explicit: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    match explicit {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = merge_file(figment, path);
        }
        None => {
            if let Some(found) =
                CONFIG_FILE_NAMES.iter().map(|name| anchor.join(name)).find(|p| p.is_file())
            {
                tracing::debug!(path = %found.display(), "using config file");
                figment = merge_file(figment, &found);
            }
        }
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Invalid repo-showcase configuration")
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") | Some("yaml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_any_file() {
        let tmp = TempDir::new().expect("tmp");
        let config = load_config(tmp.path(), None).expect("load");
        assert_eq!(config.per_page, 100);
        assert_eq!(config.output, PathBuf::from("README.md"));
        assert_eq!(config.exclude_file, PathBuf::from("exclude_repos.txt"));
        assert!(!config.show_descriptions);
    }

    #[test]
    fn discovers_toml_in_anchor_dir() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("repo-showcase.toml"),
            "account = \"octocat\"\nshow_descriptions = true\n",
        )
        .expect("write config");

        let config = load_config(tmp.path(), None).expect("load");
        assert_eq!(config.account, "octocat");
        assert!(config.show_descriptions);
        assert_eq!(config.api_url, "https://api.github.com");
    }

    #[test]
    fn explicit_yaml_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("custom.yaml");
        fs::write(&path, "account: someone\noutput: docs/REPOS.md\n").expect("write config");

        let config = load_config(tmp.path(), Some(&path)).expect("load");
        assert_eq!(config.account, "someone");
        assert_eq!(config.output, PathBuf::from("docs/REPOS.md"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_config(tmp.path(), Some(&tmp.path().join("absent.toml")))
            .expect_err("missing file");
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("repo-showcase.toml"), "per_page = \"lots\"\n")
            .expect("write config");
        assert!(load_config(tmp.path(), None).is_err());
    }
}
