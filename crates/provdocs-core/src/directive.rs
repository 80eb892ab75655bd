//! Named reference-table directives
//!
//! A directive is one of the seven tables provdocs can produce, addressed by
//! the name documentation sources use for it. Directives take string
//! options (`tags`, `header-separator`) and return rendered lines together
//! with the provider files the output depends on.

use camino::Utf8PathBuf;
use std::fmt;
use std::str::FromStr;

use crate::aggregate::{
    collect_category, prepare_operators_data, prepare_transfer_data, SimpleCategory, TagFilter,
};
use crate::docs_path::DocsPathNormalizer;
use crate::error::{Error, Result};
use crate::loader::PackageData;
use crate::templates::{
    TemplateRenderer, AUTH_BACKEND_TEMPLATE, CONNECTIONS_TEMPLATE, EXTRA_LINKS_TEMPLATE,
    LOGGING_TEMPLATE, OPERATORS_AND_HOOKS_TEMPLATE, SECRET_BACKEND_TEMPLATE, TRANSFERS_TEMPLATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    OperatorsHooksRef,
    TransfersRef,
    Logging,
    AuthBackends,
    SecretsBackends,
    Connections,
    ExtraLinks,
}

impl Directive {
    pub const ALL: [Directive; 7] = [
        Self::OperatorsHooksRef,
        Self::TransfersRef,
        Self::Logging,
        Self::AuthBackends,
        Self::SecretsBackends,
        Self::Connections,
        Self::ExtraLinks,
    ];

    /// Registered directive name
    pub fn name(&self) -> &'static str {
        match self {
            Self::OperatorsHooksRef => "operators-hooks-ref",
            Self::TransfersRef => "transfers-ref",
            Self::Logging => "airflow-logging",
            Self::AuthBackends => "airflow-auth-backends",
            Self::SecretsBackends => "airflow-secrets-backends",
            Self::Connections => "airflow-connections",
            Self::ExtraLinks => "airflow-extra-links",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OperatorsHooksRef => "List of operators, sensors and hooks",
            Self::TransfersRef => "List of transfer operators",
            Self::Logging => "List of logging handlers",
            Self::AuthBackends => "List of auth backends",
            Self::SecretsBackends => "List of secrets backends",
            Self::Connections => "List of connection types",
            Self::ExtraLinks => "List of extra links",
        }
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            Self::OperatorsHooksRef => OPERATORS_AND_HOOKS_TEMPLATE,
            Self::TransfersRef => TRANSFERS_TEMPLATE,
            Self::Logging => LOGGING_TEMPLATE,
            Self::AuthBackends => AUTH_BACKEND_TEMPLATE,
            Self::SecretsBackends => SECRET_BACKEND_TEMPLATE,
            Self::Connections => CONNECTIONS_TEMPLATE,
            Self::ExtraLinks => EXTRA_LINKS_TEMPLATE,
        }
    }

    /// The per-package category behind a simple directive
    pub fn category(&self) -> Option<SimpleCategory> {
        match self {
            Self::OperatorsHooksRef | Self::TransfersRef => None,
            Self::Logging => Some(SimpleCategory::Logging),
            Self::AuthBackends => Some(SimpleCategory::AuthBackends),
            Self::SecretsBackends => Some(SimpleCategory::SecretsBackends),
            Self::Connections => Some(SimpleCategory::ConnectionTypes),
            Self::ExtraLinks => Some(SimpleCategory::ExtraLinks),
        }
    }

    /// Only the operators and transfers tables honour a tag filter
    pub fn accepts_tags(&self) -> bool {
        self.category().is_none()
    }

    /// Aggregate `data` and render this directive's table
    pub fn render_content(
        &self,
        data: &PackageData,
        renderer: &TemplateRenderer,
        docs: &DocsPathNormalizer,
        tags: Option<&TagFilter>,
        header_separator: char,
    ) -> Result<String> {
        let template = self.template_name();

        if let Some(category) = self.category() {
            let items = collect_category(&data.providers, category);
            return renderer.render(template, &items, header_separator);
        }

        if *self == Self::TransfersRef {
            let items = prepare_transfer_data(&data.providers, tags, docs)?;
            renderer.render(template, &items, header_separator)
        } else {
            let items = prepare_operators_data(&data.providers, tags, docs)?;
            renderer.render(template, &items, header_separator)
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Directive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| Error::UnknownDirective {
                name: s.to_string(),
            })
    }
}

/// Parsed directive options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveOptions {
    pub tags: Option<TagFilter>,
    pub header_separator: char,
}

impl DirectiveOptions {
    /// Parse raw option values.
    ///
    /// `tags` is a comma separated list; each tag is trimmed. An absent or
    /// empty value means no filter. `header-separator` is required and must
    /// be a single character.
    pub fn parse(tags: Option<&str>, header_separator: Option<&str>) -> Result<Self> {
        let tags = tags
            .filter(|raw| !raw.is_empty())
            .map(|raw| raw.split(',').map(|t| t.trim().to_string()).collect());

        let raw = header_separator
            .ok_or_else(|| Error::invalid_option("header-separator", "option is required"))?;
        let mut chars = raw.chars();
        let header_separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(Error::invalid_option(
                    "header-separator",
                    format!("expected a single character, got '{}'", raw),
                ))
            }
        };

        Ok(Self {
            tags,
            header_separator,
        })
    }
}

/// Rendered directive content and the files it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveOutput {
    pub lines: Vec<String>,
    pub dependencies: Vec<Utf8PathBuf>,
}

impl DirectiveOutput {
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}
