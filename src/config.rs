use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{
    DEFAULT_CONTAINER_SELECTORS, DEFAULT_SECTION_SELECTOR, MARKDOWN_CLASS, STORY_PART_CLASS,
};
use crate::error::{Result, ScraperError};
use crate::teams::{TeamConfig, TeamRegistry};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,
    /// Replaces the built-in team table when present.
    #[serde(default)]
    pub teams: Option<Vec<TeamConfig>>,
}

/// Where candidate blocks live in the page.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// CSS selectors for the article container, tried in order.
    pub containers: Vec<String>,
    /// Optional element to descend into inside the container.
    pub section: Option<String>,
    /// Classes a candidate block must carry, all of them.
    pub markers: Vec<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            containers: DEFAULT_CONTAINER_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            section: Some(DEFAULT_SECTION_SELECTOR.to_string()),
            markers: vec![STORY_PART_CLASS.to_string(), MARKDOWN_CLASS.to_string()],
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.selector.containers.is_empty() {
            return Err(ScraperError::Config(
                "selector.containers must name at least one selector".to_string(),
            ));
        }
        if config.selector.markers.is_empty() {
            return Err(ScraperError::Config(
                "selector.markers must name at least one class".to_string(),
            ));
        }
        Ok(config)
    }

    /// Team table for this configuration: the `[[teams]]` entries if given,
    /// otherwise the built-in MLB table.
    pub fn team_registry(&self) -> Result<TeamRegistry> {
        match &self.teams {
            Some(teams) => TeamRegistry::new(teams.clone()),
            None => Ok(TeamRegistry::builtin()),
        }
    }
}
