//! Per-package categories without cross references

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::{ConnectionTypeRecord, ProviderRecord};

/// Categories rendered as plain per-package lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleCategory {
    Logging,
    AuthBackends,
    SecretsBackends,
    ConnectionTypes,
    ExtraLinks,
}

impl SimpleCategory {
    fn entries(&self, provider: &ProviderRecord) -> Vec<CategoryEntry> {
        let class_paths = |paths: &[String]| -> Vec<CategoryEntry> {
            paths
                .iter()
                .cloned()
                .map(CategoryEntry::ClassPath)
                .collect()
        };
        match self {
            Self::Logging => class_paths(&provider.logging),
            Self::AuthBackends => class_paths(&provider.auth_backends),
            Self::SecretsBackends => class_paths(&provider.secrets_backends),
            Self::ExtraLinks => class_paths(&provider.extra_links),
            Self::ConnectionTypes => provider
                .connection_types
                .iter()
                .cloned()
                .map(CategoryEntry::ConnectionType)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    /// Dotted class or module path
    ClassPath(String),
    ConnectionType(ConnectionTypeRecord),
}

/// A provider's display name with its raw entries for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub entries: Vec<CategoryEntry>,
}

/// Map package name to its entries for `category`.
///
/// Providers without entries are skipped. Order follows load order.
pub fn collect_category(
    providers: &[ProviderRecord],
    category: SimpleCategory,
) -> IndexMap<String, CategoryGroup> {
    let mut groups = IndexMap::new();
    for provider in providers {
        let entries = category.entries(provider);
        if entries.is_empty() {
            continue;
        }
        groups.insert(
            provider.package_name.clone(),
            CategoryGroup {
                name: provider.name.clone(),
                entries,
            },
        );
    }
    groups
}
