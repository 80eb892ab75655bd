//! Provider metadata discovery and loading
//!
//! Every `provider.yaml` below the providers directory is a provider
//! record. Files are loaded in lexicographic path order, which is the order
//! later used to resolve name collisions.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fs;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::schema::ProviderSchema;
use crate::types::ProviderRecord;

/// File name identifying a provider package directory
pub const PROVIDER_FILE_NAME: &str = "provider.yaml";

/// Loaded providers plus every metadata file that was read
#[derive(Debug, Clone, Default)]
pub struct PackageData {
    /// Providers in load order (suspended ones excluded unless requested)
    pub providers: Vec<ProviderRecord>,

    /// All discovered provider.yaml paths, including skipped ones
    pub paths: Vec<Utf8PathBuf>,
}

/// Reads provider.yaml files from a repository checkout
pub struct ProviderLoader {
    root_dir: Utf8PathBuf,
    providers_dir: Utf8PathBuf,
    include_suspended: bool,
    schema: ProviderSchema,
}

impl ProviderLoader {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            root_dir: settings.root_dir.clone(),
            providers_dir: settings.providers_path(),
            include_suspended: settings.include_suspended,
            schema: ProviderSchema::new()?,
        })
    }

    /// Discover provider.yaml files, sorted by path string
    pub fn discover(&self) -> Result<Vec<Utf8PathBuf>> {
        if !self.providers_dir.is_dir() {
            return Err(Error::providers_dir_not_found(self.providers_dir.as_str()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.providers_dir).follow_links(true) {
            let entry = entry.map_err(|e| Error::Io(e.into()))?;
            if !entry.file_type().is_file() || entry.file_name() != PROVIDER_FILE_NAME {
                continue;
            }
            let path = Utf8PathBuf::from_path_buf(entry.into_path()).map_err(|p| {
                Error::invalid_config(format!("Path is not valid UTF-8: {}", p.display()))
            })?;
            debug!("Discovered provider file: {}", path);
            paths.push(path);
        }

        paths.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(paths)
    }

    /// Discover and load every provider
    pub fn load(&self) -> Result<PackageData> {
        let paths = self.discover()?;
        let mut providers = Vec::with_capacity(paths.len());

        for path in &paths {
            let provider = self.load_file(path)?;
            if provider.suspended && !self.include_suspended {
                warn!("Skipping suspended provider: {}", provider.package_name);
                continue;
            }
            providers.push(provider);
        }

        info!(
            "Loaded {} providers from {} files in {}",
            providers.len(),
            paths.len(),
            self.providers_dir
        );

        Ok(PackageData { providers, paths })
    }

    /// Parse, validate and annotate a single provider.yaml
    pub fn load_file(&self, path: &Utf8Path) -> Result<ProviderRecord> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml_ng::from_str(&content)?;
        self.schema.validate(&value, path)?;

        let mut provider: ProviderRecord = serde_json::from_value(value)
            .map_err(|e| Error::provider_parse(path.as_str(), e.to_string()))?;

        let package_dir = path.parent().unwrap_or(Utf8Path::new("."));
        provider.python_module = python_module(&self.root_dir, package_dir);
        provider.package_dir = Some(package_dir.to_string());

        Ok(provider)
    }
}

/// Dotted module path of `package_dir` relative to `root_dir`
fn python_module(root_dir: &Utf8Path, package_dir: &Utf8Path) -> Option<String> {
    let relative = package_dir.strip_prefix(root_dir).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_str())
        .filter(|c| *c != ".")
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("."))
    }
}
