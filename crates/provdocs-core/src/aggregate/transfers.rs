//! Transfer operators with resolved source and target integrations

use serde::Serialize;

use super::{matches_tags, TagFilter};
use crate::docs_path::DocsPathNormalizer;
use crate::error::{Error, Result, TransferEndpoint};
use crate::index::{index_integrations, Indexed, ResourceIndex};
use crate::types::{IntegrationRecord, ProviderRecord, TransferRecord};

/// Endpoints transfers may name without any provider declaring them
pub const PLACEHOLDER_INTEGRATIONS: [&str; 2] = ["SQL", "Local"];

#[derive(Debug, Clone, Serialize)]
pub struct TransferItem {
    #[serde(flatten)]
    pub transfer: TransferRecord,

    pub package_name: String,

    pub source_integration: Indexed<IntegrationRecord>,

    pub target_integration: Indexed<IntegrationRecord>,
}

/// Resolve every transfer against the integration index.
///
/// Placeholder integrations replace any declared integration of the same
/// name. A transfer naming an unknown integration fails the whole call,
/// even when the tag filter would have dropped it.
pub fn prepare_transfer_data(
    providers: &[ProviderRecord],
    tags: Option<&TagFilter>,
    docs: &DocsPathNormalizer,
) -> Result<Vec<TransferItem>> {
    let mut integrations = index_integrations(providers);
    for name in PLACEHOLDER_INTEGRATIONS {
        integrations.insert(
            name,
            Indexed::synthetic(IntegrationRecord::placeholder(name)),
        );
    }

    let mut all_transfers = Vec::new();
    for provider in providers {
        for transfer in &provider.transfers {
            let source_integration = resolve(
                &integrations,
                &transfer.source_integration_name,
                provider,
                TransferEndpoint::Source,
            )?;
            let target_integration = resolve(
                &integrations,
                &transfer.target_integration_name,
                provider,
                TransferEndpoint::Target,
            )?;
            all_transfers.push(TransferItem {
                transfer: transfer.clone(),
                package_name: provider.package_name.clone(),
                source_integration,
                target_integration,
            });
        }
    }

    let mut to_display: Vec<TransferItem> = match tags {
        None => all_transfers,
        Some(filter) => all_transfers
            .into_iter()
            .filter(|t| {
                matches_tags(filter, &t.source_integration.record.tags)
                    || matches_tags(filter, &t.target_integration.record.tags)
            })
            .collect(),
    };

    for item in &mut to_display {
        if let Some(guide) = &item.transfer.how_to_guide {
            item.transfer.how_to_guide = Some(docs.normalize(guide)?);
        }
    }

    Ok(to_display)
}

fn resolve(
    integrations: &ResourceIndex<IntegrationRecord>,
    name: &str,
    provider: &ProviderRecord,
    endpoint: TransferEndpoint,
) -> Result<Indexed<IntegrationRecord>> {
    integrations
        .get(name)
        .cloned()
        .ok_or_else(|| Error::unknown_integration(&provider.package_name, name, endpoint))
}
