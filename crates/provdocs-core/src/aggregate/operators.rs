//! Operators and hooks grouped by integration

use serde::Serialize;

use super::{matches_tags, TagFilter};
use crate::docs_path::DocsPathNormalizer;
use crate::error::Result;
use crate::index::{index_entries, index_integrations, EntryCategory, Indexed};
use crate::types::{IntegrationRecord, ProviderRecord, ResourceEntry};

/// One integration with the resources attached to it.
///
/// Absent resources are left out of the serialized item entirely.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorsHooksItem {
    pub integration: Indexed<IntegrationRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operators: Option<Indexed<ResourceEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Indexed<ResourceEntry>>,
}

/// Join operators and hooks onto their integrations.
///
/// Integrations are filtered by `tags` first, their how-to guides are
/// normalized, and only those with an operator or hook are kept. The result
/// is sorted case-insensitively by integration name.
pub fn prepare_operators_data(
    providers: &[ProviderRecord],
    tags: Option<&TagFilter>,
    docs: &DocsPathNormalizer,
) -> Result<Vec<OperatorsHooksItem>> {
    let all_integrations = index_integrations(providers);
    let operators_by_integration = index_entries(providers, EntryCategory::Operators);
    let hooks_by_integration = index_entries(providers, EntryCategory::Hooks);
    // NOTE: sensors are looked up in the hooks index, not in `sensors`,
    // and land in the hooks slot. Existing rendered tables depend on this.
    let sensors_by_integration = index_entries(providers, EntryCategory::Hooks);

    let mut results = Vec::new();

    for (name, mut integration) in all_integrations {
        if let Some(filter) = tags {
            if !matches_tags(filter, &integration.record.tags) {
                continue;
            }
        }

        integration.record.how_to_guide = docs.normalize_all(&integration.record.how_to_guide)?;

        let operators = operators_by_integration.get(&name).cloned();
        let sensors = sensors_by_integration.get(&name).cloned();
        let hooks = hooks_by_integration.get(&name).cloned().or(sensors);

        if operators.is_none() && hooks.is_none() {
            continue;
        }

        results.push(OperatorsHooksItem {
            integration,
            operators,
            hooks,
        });
    }

    results.sort_by_cached_key(|item| item.integration.record.integration_name.to_lowercase());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::tag_filter;
    use crate::error::Error;

    fn normalizer() -> DocsPathNormalizer {
        DocsPathNormalizer::new("/docs/", ".rst", "/docs/apache-airflow-providers-", "docs")
            .unwrap()
    }

    fn entry(name: &str, module: &str) -> ResourceEntry {
        ResourceEntry {
            integration_name: name.to_string(),
            python_modules: vec![module.to_string()],
        }
    }

    fn provider(package: &str) -> ProviderRecord {
        let yaml = format!("package-name: {}\nname: {}\n", package, package);
        serde_yaml_ng::from_str(&yaml).unwrap()
    }

    fn integration(name: &str, tags: &[&str]) -> IntegrationRecord {
        let mut record = IntegrationRecord::placeholder(name);
        record.tags = tags.iter().map(|t| t.to_string()).collect();
        record
    }

    fn sample() -> Vec<ProviderRecord> {
        let mut a = provider("pkg-a");
        a.integrations = vec![
            integration("beta", &["aws"]),
            integration("Alpha", &["gcp"]),
            integration("Gamma", &["gcp"]),
        ];
        a.operators = vec![entry("beta", "a.operators.beta")];
        a.hooks = vec![entry("Alpha", "a.hooks.alpha")];
        a.sensors = vec![entry("Gamma", "a.sensors.gamma")];
        vec![a]
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let items = prepare_operators_data(&sample(), None, &normalizer()).unwrap();
        let names: Vec<&str> = items
            .iter()
            .map(|i| i.integration.record.integration_name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }

    #[test]
    fn test_sensor_only_integration_is_dropped() {
        let items = prepare_operators_data(&sample(), None, &normalizer()).unwrap();
        assert!(items
            .iter()
            .all(|i| i.integration.record.integration_name != "Gamma"));
    }

    #[test]
    fn test_absent_resources_are_omitted() {
        let items = prepare_operators_data(&sample(), None, &normalizer()).unwrap();
        let alpha = serde_json::to_value(&items[0]).unwrap();
        assert!(alpha.get("operators").is_none());
        assert_eq!(alpha["hooks"]["python_modules"][0], "a.hooks.alpha");
    }

    #[test]
    fn test_tag_filter() {
        let filter = tag_filter(["aws"]).unwrap();
        let items = prepare_operators_data(&sample(), Some(&filter), &normalizer()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].integration.record.integration_name, "beta");
    }

    #[test]
    fn test_how_to_guides_normalized() {
        let mut providers = sample();
        providers[0].integrations[1].how_to_guide =
            vec!["/docs/apache-airflow-providers-google/operators/alpha.rst".to_string()];
        let items = prepare_operators_data(&providers, None, &normalizer()).unwrap();
        assert_eq!(
            items[0].integration.record.how_to_guide,
            vec!["google:operators/alpha".to_string()]
        );
    }

    #[test]
    fn test_invalid_guide_fails_even_without_resources() {
        let mut providers = sample();
        providers[0].integrations[2].how_to_guide = vec!["/docs/gamma.md".to_string()];
        let err = prepare_operators_data(&providers, None, &normalizer()).unwrap_err();
        assert!(matches!(err, Error::DocsPathSuffix { .. }));
    }

    #[test]
    fn test_last_provider_wins_for_operators() {
        let mut providers = sample();
        let mut b = provider("pkg-b");
        b.operators = vec![entry("beta", "b.operators.beta")];
        providers.push(b);
        let items = prepare_operators_data(&providers, None, &normalizer()).unwrap();
        let beta = items
            .iter()
            .find(|i| i.integration.record.integration_name == "beta")
            .unwrap();
        let operators = beta.operators.as_ref().unwrap();
        assert_eq!(operators.package_name.as_deref(), Some("pkg-b"));
        assert_eq!(operators.record.python_modules, vec!["b.operators.beta"]);
    }
}
