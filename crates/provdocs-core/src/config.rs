//! Settings loading with precedence
//!
//! Settings are resolved from the following sources (low to high):
//! 1. Built-in defaults
//! 2. Settings file (`provdocs.yaml` in the root, or an explicit path)
//! 3. Environment variables (PROVDOCS_* prefix)
//! 4. CLI flags (handled by caller)

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use tracing::debug;

use crate::error::{Error, Result};

/// Settings file looked up in the repository root
pub const SETTINGS_FILE_NAME: &str = "provdocs.yaml";

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Repository root; relative paths below are resolved against it
    pub root_dir: Utf8PathBuf,

    /// Directory scanned for provider.yaml files
    pub providers_dir: Utf8PathBuf,

    /// Main documentation directory
    pub docs_dir: Utf8PathBuf,

    /// Required leading text of documentation paths in provider metadata
    pub docs_prefix: String,

    /// Required extension of documentation paths
    pub docs_suffix: String,

    /// Leading text of paths that live in a provider's own docs tree
    pub provider_docs_prefix: String,

    /// Load templates from this directory instead of the embedded ones
    pub template_dir: Option<Utf8PathBuf>,

    /// Include providers marked `suspended: true`
    pub include_suspended: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_dir: Utf8PathBuf::from("."),
            providers_dir: Utf8PathBuf::from("airflow/providers"),
            docs_dir: Utf8PathBuf::from("docs"),
            docs_prefix: "/docs/".to_string(),
            docs_suffix: ".rst".to_string(),
            provider_docs_prefix: "/docs/apache-airflow-providers-".to_string(),
            template_dir: None,
            include_suspended: false,
        }
    }
}

/// Partial settings as written in a settings file
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct SettingsFile {
    providers_dir: Option<Utf8PathBuf>,
    docs_dir: Option<Utf8PathBuf>,
    docs_prefix: Option<String>,
    docs_suffix: Option<String>,
    provider_docs_prefix: Option<String>,
    template_dir: Option<Utf8PathBuf>,
    include_suspended: Option<bool>,
}

impl Settings {
    /// Defaults rooted at `root_dir`
    pub fn with_root(root_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// Load settings for `root_dir`.
    ///
    /// An explicit `config_path` must exist; otherwise `provdocs.yaml` in the
    /// root is used when present. Environment overrides are applied last.
    pub fn load(root_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        let mut settings = Self::with_root(root_dir);

        let file = match config_path {
            Some(path) => Some(read_settings_file(path)?),
            None => {
                let default_path = root_dir.join(SETTINGS_FILE_NAME);
                if default_path.exists() {
                    Some(read_settings_file(&default_path)?)
                } else {
                    None
                }
            }
        };

        if let Some(file) = file {
            settings.merge_file(file);
        }

        settings.apply_env_overrides()
    }

    fn merge_file(&mut self, file: SettingsFile) {
        if let Some(v) = file.providers_dir {
            self.providers_dir = v;
        }
        if let Some(v) = file.docs_dir {
            self.docs_dir = v;
        }
        if let Some(v) = file.docs_prefix {
            self.docs_prefix = v;
        }
        if let Some(v) = file.docs_suffix {
            self.docs_suffix = v;
        }
        if let Some(v) = file.provider_docs_prefix {
            self.provider_docs_prefix = v;
        }
        if file.template_dir.is_some() {
            self.template_dir = file.template_dir;
        }
        if let Some(v) = file.include_suspended {
            self.include_suspended = v;
        }
    }

    /// Apply PROVDOCS_* environment variables
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_env_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PROVDOCS_PROVIDERS_DIR") {
            self.providers_dir = Utf8PathBuf::from(val);
        }

        if let Some(val) = lookup("PROVDOCS_TEMPLATE_DIR") {
            self.template_dir = Some(Utf8PathBuf::from(val));
        }

        if let Some(val) = lookup("PROVDOCS_INCLUDE_SUSPENDED") {
            self.include_suspended = parse_bool(&val).ok_or_else(|| {
                Error::invalid_config("PROVDOCS_INCLUDE_SUSPENDED must be true or false")
            })?;
        }

        Ok(self)
    }

    /// Providers directory resolved against the root
    pub fn providers_path(&self) -> Utf8PathBuf {
        self.root_dir.join(&self.providers_dir)
    }

    /// Template override directory resolved against the root
    pub fn template_path(&self) -> Option<Utf8PathBuf> {
        self.template_dir.as_ref().map(|dir| self.root_dir.join(dir))
    }
}

fn read_settings_file(path: &Utf8Path) -> Result<SettingsFile> {
    debug!("Loading settings from {}", path);
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config_not_found(path.as_str())
        } else {
            Error::Io(e)
        }
    })?;
    serde_yaml_ng::from_str(&content)
        .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
