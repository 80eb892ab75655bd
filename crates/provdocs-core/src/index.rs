//! Resource indexes keyed by integration name
//!
//! An index maps each resource's `integration-name` to a copy of the record
//! annotated with the package that declared it. Providers are visited in
//! load order and a later record with the same name replaces the earlier
//! one (last-write-wins). Collisions are not errors.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::types::{IntegrationKeyed, IntegrationRecord, ProviderRecord, ResourceEntry};

/// A record annotated with its owning provider package
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indexed<T> {
    #[serde(flatten)]
    pub record: T,

    /// `None` only for synthetic entries that no provider declares
    pub package_name: Option<String>,
}

impl<T> Indexed<T> {
    pub fn new(record: T, package_name: impl Into<String>) -> Self {
        Self {
            record,
            package_name: Some(package_name.into()),
        }
    }

    /// Entry injected by the aggregator rather than loaded from a provider
    pub fn synthetic(record: T) -> Self {
        Self {
            record,
            package_name: None,
        }
    }
}

/// Resource categories that can be indexed by integration name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryCategory {
    Operators,
    Hooks,
}

impl EntryCategory {
    fn entries<'a>(&self, provider: &'a ProviderRecord) -> &'a [ResourceEntry] {
        match self {
            Self::Operators => &provider.operators,
            Self::Hooks => &provider.hooks,
        }
    }
}

/// Insertion-ordered index from integration name to annotated record
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ResourceIndex<T> {
    entries: IndexMap<String, Indexed<T>>,
}

impl<T> Default for ResourceIndex<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> ResourceIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    ///
    /// A replaced key keeps its original position, the value is the new one.
    pub fn insert(&mut self, name: impl Into<String>, entry: Indexed<T>) -> Option<Indexed<T>> {
        self.entries.insert(name.into(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&Indexed<T>> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<T> IntoIterator for ResourceIndex<T> {
    type Item = (String, Indexed<T>);
    type IntoIter = indexmap::map::IntoIter<String, Indexed<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build an index over the records `select` picks from each provider.
pub fn build_index<T, F>(providers: &[ProviderRecord], select: F) -> ResourceIndex<T>
where
    T: IntegrationKeyed + Clone,
    F: Fn(&ProviderRecord) -> &[T],
{
    let mut index = ResourceIndex::new();
    for provider in providers {
        for record in select(provider) {
            let name = record.integration_name().to_string();
            let entry = Indexed::new(record.clone(), provider.package_name.as_str());
            if let Some(previous) = index.insert(name.clone(), entry) {
                debug!(
                    "Integration '{}' from {} replaced by {}",
                    name,
                    previous.package_name.as_deref().unwrap_or("<synthetic>"),
                    provider.package_name
                );
            }
        }
    }
    index
}

/// Index every integration declared by the providers
pub fn index_integrations(providers: &[ProviderRecord]) -> ResourceIndex<IntegrationRecord> {
    build_index(providers, |p| p.integrations.as_slice())
}

/// Index operators or hooks by the integration they belong to
pub fn index_entries(
    providers: &[ProviderRecord],
    category: EntryCategory,
) -> ResourceIndex<ResourceEntry> {
    build_index(providers, |p| category.entries(p))
}
