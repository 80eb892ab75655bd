//! Provider metadata types matching provider.schema.json
//!
//! Field names are read in kebab-case (as written in `provider.yaml`) and
//! serialized in snake_case so templates can use plain attribute access.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Provider definition from provider.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct ProviderRecord {
    /// Installable package name (e.g. apache-airflow-providers-amazon)
    pub package_name: String,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Suspended providers are skipped unless explicitly requested
    #[serde(default)]
    pub suspended: bool,

    #[serde(default)]
    pub integrations: Vec<IntegrationRecord>,

    #[serde(default)]
    pub operators: Vec<ResourceEntry>,

    #[serde(default)]
    pub sensors: Vec<ResourceEntry>,

    #[serde(default)]
    pub hooks: Vec<ResourceEntry>,

    #[serde(default)]
    pub transfers: Vec<TransferRecord>,

    /// Task log handler class paths
    #[serde(default)]
    pub logging: Vec<String>,

    /// API auth backend module paths
    #[serde(default)]
    pub auth_backends: Vec<String>,

    /// Secrets backend class paths
    #[serde(default)]
    pub secrets_backends: Vec<String>,

    #[serde(default)]
    pub connection_types: Vec<ConnectionTypeRecord>,

    /// Operator extra link class paths
    #[serde(default)]
    pub extra_links: Vec<String>,

    /// Dotted module path of the provider directory, derived by the loader
    #[serde(default)]
    pub python_module: Option<String>,

    /// Provider directory, derived by the loader
    #[serde(default)]
    pub package_dir: Option<String>,
}

/// A named external system described by a provider.
///
/// `external-doc-url` and `tags` are required by the schema; they default
/// here only so name-only placeholders can be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct IntegrationRecord {
    pub integration_name: String,

    #[serde(default)]
    pub external_doc_url: Option<String>,

    /// Documentation pages, as `/docs/...rst` paths until normalized
    #[serde(default)]
    pub how_to_guide: Vec<String>,

    #[serde(default)]
    pub logo: Option<String>,

    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl IntegrationRecord {
    /// Name-only record with no metadata
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            integration_name: name.into(),
            external_doc_url: None,
            how_to_guide: Vec::new(),
            logo: None,
            tags: BTreeSet::new(),
        }
    }
}

/// Operators, sensors and hooks grouped by integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct ResourceEntry {
    pub integration_name: String,

    #[serde(default)]
    pub python_modules: Vec<String>,
}

/// An operator moving data between two integrations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct TransferRecord {
    pub source_integration_name: String,

    pub target_integration_name: String,

    pub python_module: String,

    #[serde(default)]
    pub how_to_guide: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct ConnectionTypeRecord {
    pub connection_type: String,

    pub hook_class_name: String,
}

/// Anything keyed by an integration name in a resource index
pub trait IntegrationKeyed {
    fn integration_name(&self) -> &str;
}

impl IntegrationKeyed for IntegrationRecord {
    fn integration_name(&self) -> &str {
        &self.integration_name
    }
}

impl IntegrationKeyed for ResourceEntry {
    fn integration_name(&self) -> &str {
        &self.integration_name
    }
}
