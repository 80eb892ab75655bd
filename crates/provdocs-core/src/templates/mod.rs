//! Template rendering for reference tables
//!
//! Uses Tera templates to turn aggregated provider data into
//! reStructuredText. The renderer is built once and then shared by every
//! render call; templates are embedded in the binary unless an override
//! directory is given.

use camino::Utf8Path;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded reStructuredText templates
#[derive(RustEmbed)]
#[folder = "src/templates/rst/"]
struct RstTemplates;

pub const OPERATORS_AND_HOOKS_TEMPLATE: &str = "operators_and_hooks_ref.rst.tera";
pub const TRANSFERS_TEMPLATE: &str = "operators_and_hooks_ref-transfers.rst.tera";
pub const LOGGING_TEMPLATE: &str = "logging.rst.tera";
pub const AUTH_BACKEND_TEMPLATE: &str = "auth_backend.rst.tera";
pub const SECRET_BACKEND_TEMPLATE: &str = "secret_backend.rst.tera";
pub const CONNECTIONS_TEMPLATE: &str = "connections.rst.tera";
pub const EXTRA_LINKS_TEMPLATE: &str = "extra_links.rst.tera";

/// Compiled template set
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a renderer with the embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        register_filters(&mut tera);

        for file in RstTemplates::iter() {
            if let Some(content) = RstTemplates::get(&file) {
                let content_str = std::str::from_utf8(content.data.as_ref()).map_err(|_| {
                    tera::Error::msg(format!("Invalid UTF-8 in template: {}", file))
                })?;
                debug!("Registering embedded template: {}", file);
                tera.add_raw_template(&file, content_str)?;
            }
        }

        Ok(Self { tera })
    }

    /// Create a renderer from every `*.tera` file below `dir`
    pub fn from_directory(dir: &Utf8Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::invalid_config(format!(
                "Template directory not found: {}",
                dir
            )));
        }

        let mut tera = Tera::new(&format!("{}/**/*.tera", dir))?;
        register_filters(&mut tera);

        if tera.get_template_names().next().is_none() {
            return Err(Error::invalid_config(format!(
                "No templates found in {}",
                dir
            )));
        }
        debug!(
            "Loaded {} templates from {}",
            tera.get_template_names().count(),
            dir
        );

        Ok(Self { tera })
    }

    /// Names of all registered templates, sorted
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    /// Render `template_name` with `items` and the header separator
    pub fn render<T>(&self, template_name: &str, items: &T, header_separator: char) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        debug!("Rendering template: {}", template_name);
        let mut context = Context::new();
        context.insert("items", items);
        context.insert("header_separator", &header_separator.to_string());
        Ok(self.tera.render(template_name, &context)?)
    }
}

fn register_filters(tera: &mut Tera) {
    tera.register_filter("underline", underline_filter);
}

/// Repeat `char` (default `=`) once per character of the value
fn underline_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("Expected string"))?;
    let underline_char = args.get("char").and_then(|v| v.as_str()).unwrap_or("=");

    Ok(Value::String(underline_char.repeat(text.chars().count())))
}
