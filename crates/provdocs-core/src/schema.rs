//! JSON Schema validation for provider.yaml files

use camino::Utf8Path;
use jsonschema::Validator;
use rust_embed::RustEmbed;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded schema files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/schemas/"]
#[prefix = ""]
struct EmbeddedSchemas;

const PROVIDER_SCHEMA: &str = "provider.schema.json";

/// Validator for provider metadata
#[derive(Debug)]
pub struct ProviderSchema {
    validator: Validator,
}

impl ProviderSchema {
    /// Compile the embedded provider schema
    pub fn new() -> Result<Self> {
        let content = EmbeddedSchemas::get(PROVIDER_SCHEMA)
            .ok_or_else(|| Error::invalid_config(format!("Missing schema: {}", PROVIDER_SCHEMA)))?;
        let json_str = std::str::from_utf8(&content.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in schema: {}", PROVIDER_SCHEMA))
        })?;
        let schema_value: Value = serde_json::from_str(json_str)?;
        Self::from_value(&schema_value)
    }

    /// Compile a schema given as a JSON value
    pub fn from_value(schema: &Value) -> Result<Self> {
        debug!("Compiling provider schema");
        let validator = jsonschema::validator_for(schema).map_err(|e| {
            Error::invalid_config(format!("Failed to compile provider schema: {}", e))
        })?;
        Ok(Self { validator })
    }

    /// Validate a parsed provider document. `path` is used in the error only.
    pub fn validate(&self, value: &Value, path: &Utf8Path) -> Result<()> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(value)
            .map(|e| {
                let location = e.instance_path().to_string();
                if location.is_empty() {
                    format!("  - {}", e)
                } else {
                    format!("  - {}: {}", location, e)
                }
            })
            .collect();

        if !errors.is_empty() {
            return Err(Error::schema_validation(path.as_str(), errors));
        }

        Ok(())
    }
}
