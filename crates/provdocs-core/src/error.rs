//! Error types for provdocs-core

use thiserror::Error;

/// Result type alias using provdocs-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a transfer referenced an integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEndpoint {
    Source,
    Target,
}

impl std::fmt::Display for TransferEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Core error types for provdocs
#[derive(Error, Debug)]
pub enum Error {
    /// Providers directory does not exist
    #[error("Providers directory not found: {path}")]
    ProvidersDirNotFound { path: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Provider file failed schema validation
    #[error("Unable to parse {path}. Schema validation failed:\n{errors}")]
    SchemaValidation { path: String, errors: String },

    /// Provider file passed validation but does not fit the record types
    #[error("Unable to parse {path}: {message}")]
    ProviderParse { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Documentation path does not start with the docs root
    #[error("The path must start with '{prefix}'. Current value: {path}")]
    DocsPathPrefix { path: String, prefix: String },

    /// Documentation path does not end with the page extension
    #[error("The path must end with '{suffix}'. Current value: {path}")]
    DocsPathSuffix { path: String, suffix: String },

    /// Transfer references an integration missing from the index
    #[error(
        "Provider {package} declares a transfer whose {endpoint} integration '{integration}' is not defined by any provider"
    )]
    UnknownIntegration {
        package: String,
        integration: String,
        endpoint: TransferEndpoint,
    },

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Unknown directive name
    #[error("Unknown directive: {name}")]
    UnknownDirective { name: String },

    /// Invalid directive option
    #[error("Invalid option '{option}': {message}")]
    InvalidOption { option: String, message: String },
}

impl Error {
    /// Create a providers-dir-not-found error
    pub fn providers_dir_not_found(path: impl Into<String>) -> Self {
        Self::ProvidersDirNotFound { path: path.into() }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a schema validation error from a list of errors
    pub fn schema_validation(path: impl Into<String>, errors: Vec<String>) -> Self {
        Self::SchemaValidation {
            path: path.into(),
            errors: errors.join("\n"),
        }
    }

    /// Create a provider parse error
    pub fn provider_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unknown integration error
    pub fn unknown_integration(
        package: impl Into<String>,
        integration: impl Into<String>,
        endpoint: TransferEndpoint,
    ) -> Self {
        Self::UnknownIntegration {
            package: package.into(),
            integration: integration.into(),
            endpoint,
        }
    }

    /// Create an invalid option error
    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }
}
