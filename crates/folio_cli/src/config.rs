//! Site configuration file handling
//!
//! A site directory may contain `folio.toml`:
//! - `[site]` - where the portfolio content lives
//! - `[coordinator]` - scroll-spy tuning
//! - `[layout]` - layout metrics and the scroll spring
//! - `[theme]` - brand color overrides
//!
//! Every table is optional and a missing file means all defaults.

use anyhow::{Context, Result};
use folio_app::{LayoutConfig, PageConfig};
use folio_content::Portfolio;
use folio_core::CoordinatorConfig;
use folio_theme::ThemeOverrides;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "folio.toml";

/// Site configuration stored in folio.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub coordinator: CoordinatorConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub theme: ThemeOverrides,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Portfolio content file, relative to the site directory. The bundled
    /// content is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
}

impl FolioConfig {
    /// Load folio.toml from a site directory, or defaults if there is none
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        if !config_path.exists() {
            debug!("No {} in {}, using defaults", CONFIG_FILE, path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: FolioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Load the portfolio content this configuration points at
    pub fn load_portfolio(&self, dir: &Path) -> Result<Portfolio> {
        match &self.site.content {
            Some(content) => {
                let path = dir.join(content);
                Portfolio::load(&path)
                    .with_context(|| format!("Invalid content in {}", path.display()))
            }
            None => Portfolio::builtin().context("Bundled content is invalid"),
        }
    }

    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            coordinator: self.coordinator.clone(),
            layout: self.layout.clone(),
            theme: self.theme.clone(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize site config")
    }
}
