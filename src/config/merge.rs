//! CLI argument merging with config

use crate::domain::Config;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub account: Option<String>,
    pub api_url: Option<String>,
    pub per_page: Option<u32>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub exclude_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub show_descriptions: Option<bool>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(account) = cli.account {
        base_config.account = account;
    }
    if let Some(api_url) = cli.api_url {
        base_config.api_url = api_url;
    }
    if let Some(per_page) = cli.per_page {
        base_config.per_page = per_page;
    }
    if let Some(user_agent) = cli.user_agent {
        base_config.user_agent = user_agent;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        base_config.timeout_secs = timeout_secs;
    }

    if let Some(exclude_file) = cli.exclude_file {
        base_config.exclude_file = exclude_file;
    }
    if let Some(output) = cli.output {
        base_config.output = output;
    }
    if let Some(show_descriptions) = cli.show_descriptions {
        base_config.show_descriptions = show_descriptions;
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::domain::Config;
    use std::path::PathBuf;

    #[test]
    fn cli_overrides_replace_base_values() {
        let base = Config {
            account: "from-file".to_string(),
            output: PathBuf::from("docs/README.md"),
            per_page: 50,
            ..Config::default()
        };

        let cli = CliOverrides {
            account: Some("from-cli".to_string()),
            api_url: Some("http://127.0.0.1:9000".to_string()),
            show_descriptions: Some(true),
            ..CliOverrides::default()
        };

        let merged = merge_cli_with_config(base, cli);
        assert_eq!(merged.account, "from-cli");
        assert_eq!(merged.api_url, "http://127.0.0.1:9000");
        assert!(merged.show_descriptions);
        assert_eq!(merged.per_page, 50);
        assert_eq!(merged.output, PathBuf::from("docs/README.md"));
    }

    #[test]
    fn empty_overrides_leave_config_untouched() {
        let base = Config::default();
        let merged = merge_cli_with_config(base.clone(), CliOverrides::default());
        assert_eq!(merged, base);
    }
}
