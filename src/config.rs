// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dashboard configuration
//!
//! Read from an optional YAML file, then overridden by command-line flags.

use crate::dashboard::PUBLIC_ROOT;
use crate::i18n::Lang;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Language the dashboard opens in. Unsupported codes fall back to English.
    pub default_lang: String,
    pub asset_root: PathBuf,
    pub download_dir: PathBuf,
    /// External résumé data replacing the embedded set.
    pub data: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_lang: Lang::default().code().to_string(),
            asset_root: PathBuf::from(PUBLIC_ROOT),
            download_dir: PathBuf::from("."),
            data: None,
        }
    }
}

impl DashboardConfig {
    /// Load `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                let config = Self::from_yaml(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?;
                tracing::debug!(path = %path.display(), "config loaded");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn default_lang(&self) -> Lang {
        Lang::from_code_or(&self.default_lang, Lang::default())
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        lang: Option<String>,
        data: Option<PathBuf>,
        asset_root: Option<PathBuf>,
    ) -> Self {
        if let Some(lang) = lang {
            self.default_lang = lang;
        }
        if data.is_some() {
            self.data = data;
        }
        if let Some(root) = asset_root {
            self.asset_root = root;
        }
        self
    }
}
