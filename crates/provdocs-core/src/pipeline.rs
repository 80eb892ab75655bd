//! Load → index → aggregate → render
//!
//! The pipeline owns the long-lived pieces (loader with its compiled schema,
//! template renderer, path normalizer). Provider data is reloaded on every
//! call so each render reflects the files on disk.

use tracing::debug;

use crate::aggregate::TagFilter;
use crate::config::Settings;
use crate::directive::{Directive, DirectiveOptions, DirectiveOutput};
use crate::docs_path::DocsPathNormalizer;
use crate::error::Result;
use crate::loader::ProviderLoader;
use crate::templates::TemplateRenderer;

pub struct Pipeline {
    loader: ProviderLoader,
    renderer: TemplateRenderer,
    docs: DocsPathNormalizer,
}

impl Pipeline {
    /// Build the pipeline, using the template override directory if set
    pub fn new(settings: &Settings) -> Result<Self> {
        let renderer = match settings.template_path() {
            Some(dir) => TemplateRenderer::from_directory(&dir)?,
            None => TemplateRenderer::new()?,
        };
        Self::with_renderer(settings, renderer)
    }

    pub fn with_renderer(settings: &Settings, renderer: TemplateRenderer) -> Result<Self> {
        Ok(Self {
            loader: ProviderLoader::new(settings)?,
            renderer,
            docs: DocsPathNormalizer::from_settings(settings)?,
        })
    }

    /// Render one directive's table from freshly loaded provider data
    pub fn render(
        &self,
        directive: Directive,
        tags: Option<&TagFilter>,
        header_separator: char,
    ) -> Result<String> {
        let data = self.loader.load()?;
        debug!("Rendering {} for {} providers", directive, data.providers.len());
        directive.render_content(&data, &self.renderer, &self.docs, tags, header_separator)
    }

    /// Run a directive with parsed options.
    ///
    /// Tags are ignored by directives that do not filter. Every discovered
    /// provider file is reported as a dependency.
    pub fn run_directive(
        &self,
        directive: Directive,
        options: &DirectiveOptions,
    ) -> Result<DirectiveOutput> {
        let data = self.loader.load()?;
        let tags = if directive.accepts_tags() {
            options.tags.as_ref()
        } else {
            None
        };
        let content = directive.render_content(
            &data,
            &self.renderer,
            &self.docs,
            tags,
            options.header_separator,
        )?;

        Ok(DirectiveOutput {
            lines: content.lines().map(String::from).collect(),
            dependencies: data.paths,
        })
    }
}
