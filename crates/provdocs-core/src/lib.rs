//! # provdocs-core
//!
//! Core library for provdocs providing:
//! - Discovery, schema validation and parsing of `provider.yaml` metadata
//! - Resource indexes keyed by integration name (last-write-wins)
//! - Aggregated views for operators/hooks, transfers and simple categories
//! - Documentation path normalization
//! - Tera rendering of reStructuredText reference tables
//! - Named directives wrapping the full pipeline

pub mod aggregate;
pub mod config;
pub mod directive;
pub mod docs_path;
pub mod error;
pub mod index;
pub mod loader;
pub mod pipeline;
pub mod schema;
pub mod templates;
pub mod types;

pub use config::Settings;
pub use directive::{Directive, DirectiveOptions, DirectiveOutput};
pub use error::{Error, Result};
pub use loader::{PackageData, ProviderLoader};
pub use pipeline::Pipeline;
pub use templates::TemplateRenderer;

/// Header separator used when none is given
pub const DEFAULT_HEADER_SEPARATOR: char = '=';
