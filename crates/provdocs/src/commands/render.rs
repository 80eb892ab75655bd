//! Table rendering subcommands

use anyhow::{Context, Result};
use provdocs_core::aggregate::tag_filter;
use provdocs_core::Directive;

use crate::cli::{GlobalArgs, RenderArgs};

pub fn run(
    directive: Directive,
    tags: &[String],
    args: &RenderArgs,
    global: &GlobalArgs,
) -> Result<()> {
    let pipeline = super::build_pipeline(global)?;
    let tags = tag_filter(tags.iter().cloned());

    let content = pipeline
        .render(directive, tags.as_ref(), args.header_separator)
        .with_context(|| format!("Failed to render {}", directive))?;

    println!("{}", content);
    Ok(())
}
