//! YAML configuration file support for jsondiff
//!
//! Every knob of the action lives in one YAML file: how documents are
//! canonicalized, which selections the action accepts, and the strings the
//! host shows. Every section is optional and falls back to defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "team defaults"
//!
//! canonical:
//!   version: 1
//!   indent_width: 2
//!   require_object_root: false
//!   charset: "utf-8"
//!
//! selection:
//!   extension: "json"
//!   max_candidates: 2
//!   reject_empty_files: true
//!
//! presentation:
//!   single_file_label: "Compare JSON File With..."
//!   two_file_label: "Compare JSON Files"
//!   title_separator: " vs "
//! ```

use std::fs;
use std::path::Path;

use canonical::{CanonicalizeConfig, Charset};
use selection::SelectionConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::title::PathTitles;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the JSON diff action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JsonDiffConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    #[serde(default)]
    pub selection: SelectionYamlConfig,

    #[serde(default)]
    pub presentation: PresentationYamlConfig,
}

impl JsonDiffConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: JsonDiffConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical.validate()?;
        self.selection.validate()?;
        self.presentation.validate()?;
        Ok(())
    }

    pub fn canonicalize_config(&self) -> CanonicalizeConfig {
        self.canonical.to_canonicalize_config()
    }

    pub fn selection_config(&self) -> SelectionConfig {
        self.selection.to_selection_config()
    }
}

impl Default for JsonDiffConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalYamlConfig::default(),
            selection: SelectionYamlConfig::default(),
            presentation: PresentationYamlConfig::default(),
        }
    }
}

/// Canonicalization section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    #[serde(default)]
    pub require_object_root: bool,

    #[serde(default)]
    pub max_input_bytes: Option<usize>,

    /// Charset assumed for files that do not start with a byte order mark.
    #[serde(default)]
    pub charset: Charset,
}

impl CanonicalYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_canonicalize_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("canonical: {e}")))
    }

    pub fn to_canonicalize_config(&self) -> CanonicalizeConfig {
        CanonicalizeConfig {
            version: self.version,
            indent_width: self.indent_width,
            require_object_root: self.require_object_root,
            max_input_bytes: self.max_input_bytes,
        }
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            indent_width: default_indent_width(),
            require_object_root: false,
            max_input_bytes: None,
            charset: Charset::default(),
        }
    }
}

/// Selection section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionYamlConfig {
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    #[serde(default = "true_value")]
    pub reject_empty_files: bool,
}

impl SelectionYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_selection_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("selection: {e}")))
    }

    pub fn to_selection_config(&self) -> SelectionConfig {
        SelectionConfig {
            extension: self.extension.clone(),
            max_candidates: self.max_candidates,
            reject_empty_files: self.reject_empty_files,
        }
    }
}

impl Default for SelectionYamlConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            max_candidates: default_max_candidates(),
            reject_empty_files: true,
        }
    }
}

/// Host-facing strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationYamlConfig {
    #[serde(default = "default_single_file_label")]
    pub single_file_label: String,

    #[serde(default = "default_two_file_label")]
    pub two_file_label: String,

    #[serde(default = "default_title_separator")]
    pub title_separator: String,
}

impl PresentationYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.single_file_label.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "presentation.single_file_label must not be empty".to_string(),
            ));
        }
        if self.two_file_label.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "presentation.two_file_label must not be empty".to_string(),
            ));
        }
        if self.title_separator.is_empty() {
            return Err(ConfigLoadError::Validation(
                "presentation.title_separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn labels(&self) -> ActionLabels {
        ActionLabels {
            single_file: self.single_file_label.clone(),
            two_files: self.two_file_label.clone(),
        }
    }

    pub fn titles(&self) -> PathTitles {
        PathTitles::new(self.title_separator.clone())
    }
}

impl Default for PresentationYamlConfig {
    fn default() -> Self {
        Self {
            single_file_label: default_single_file_label(),
            two_file_label: default_two_file_label(),
            title_separator: default_title_separator(),
        }
    }
}

/// Menu text for the two selection shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabels {
    pub single_file: String,
    pub two_files: String,
}

impl Default for ActionLabels {
    fn default() -> Self {
        PresentationYamlConfig::default().labels()
    }
}

fn default_version() -> u32 {
    1
}
fn default_indent_width() -> usize {
    2
}
fn default_extension() -> String {
    "json".to_string()
}
fn default_max_candidates() -> usize {
    2
}
fn true_value() -> bool {
    true
}
fn default_single_file_label() -> String {
    "Compare JSON File With...".to_string()
}
fn default_two_file_label() -> String {
    "Compare JSON Files".to_string()
}
fn default_title_separator() -> String {
    " vs ".to_string()
}
