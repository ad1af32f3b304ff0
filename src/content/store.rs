// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading the résumé data store.
//!
//! The default data set is compiled into the binary. A JSON or YAML file
//! with the same shape can replace it at start-up.

use super::model::CvData;
use serde_json;
use serde_yaml;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_CV: &str = include_str!("../../data/cv.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },

    #[error("invalid YAML in {origin}: {source}")]
    Yaml {
        origin: String,
        source: serde_yaml::Error,
    },

    #[error("unsupported data file {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

/// Where the résumé content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Embedded,
    File(PathBuf),
}

impl DataSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map(DataSource::File).unwrap_or(DataSource::Embedded)
    }

    pub fn load(&self) -> Result<CvData, ContentError> {
        let data = match self {
            DataSource::Embedded => embedded()?,
            DataSource::File(path) => load_file(path)?,
        };
        tracing::info!(
            source = %self,
            experience = data.experience.len(),
            education = data.education.len(),
            "résumé data loaded"
        );
        Ok(data)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Embedded => write!(f, "<embedded>"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The data set shipped with the binary.
pub fn embedded() -> Result<CvData, ContentError> {
    parse(EMBEDDED_CV, DataFormat::Json, "<embedded>")
}

pub fn load_file(path: &Path) -> Result<CvData, ContentError> {
    let format = DataFormat::from_path(path)
        .ok_or_else(|| ContentError::UnsupportedFormat(path.to_path_buf()))?;
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw, format, &path.display().to_string())
}

pub fn parse(raw: &str, format: DataFormat, origin: &str) -> Result<CvData, ContentError> {
    match format {
        DataFormat::Json => serde_json::from_str(raw).map_err(|source| ContentError::Json {
            origin: origin.to_string(),
            source,
        }),
        DataFormat::Yaml => serde_yaml::from_str(raw).map_err(|source| ContentError::Yaml {
            origin: origin.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_parses() {
        let data = embedded().expect("embedded data should parse");
        assert_eq!(data.personal.name, "José Manuel Ortega");
        assert!(!data.experience.is_empty());
    }

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(DataFormat::from_path(Path::new("cv.JSON")), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_path(Path::new("cv.yml")), Some(DataFormat::Yaml));
        assert_eq!(DataFormat::from_path(Path::new("cv.toml")), None);
        assert_eq!(DataFormat::from_path(Path::new("cv")), None);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = load_file(Path::new("does-not-exist.toml")).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_file(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
