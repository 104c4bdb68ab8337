use std::path::Path;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::repo::RepoRef;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".gh-contribute.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub repo: Option<String>,
    pub gh_binary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Repository to scan. `None` means auto-detect via `gh repo view`.
    pub repo: Option<String>,
    pub gh_binary: String,
}

impl Config {
    pub fn load(cli: &Cli) -> Result<Self> {
        let file_config = match cli.config.as_deref() {
            Some(path) => read_config(Path::new(path))?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    read_config(default_path)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        Ok(merge(file_config, cli))
    }
}

fn read_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ConfigFile) -> Result<()> {
    if let Some(ref binary) = config.gh_binary
        && binary.trim().is_empty()
    {
        return Err(Error::ConfigValidation(
            "gh_binary must not be empty".to_string(),
        ));
    }
    if let Some(ref repo) = config.repo
        && repo.parse::<RepoRef>().is_err()
    {
        return Err(Error::ConfigValidation(format!(
            "invalid repo: {repo} (expected OWNER/NAME)"
        )));
    }
    Ok(())
}

pub fn merge(file: ConfigFile, cli: &Cli) -> Config {
    Config {
        repo: cli.requested_repo().map(str::to_string).or(file.repo),
        gh_binary: file.gh_binary.unwrap_or_else(|| "gh".to_string()),
    }
}
