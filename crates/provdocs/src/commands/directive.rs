//! Named directive execution

use anyhow::{Context, Result};
use provdocs_core::{Directive, DirectiveOptions};

use crate::cli::{DirectiveArgs, GlobalArgs};

pub fn run(args: DirectiveArgs, global: &GlobalArgs) -> Result<()> {
    let directive: Directive = match args.name.parse() {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("Available directives:");
            for directive in Directive::ALL {
                eprintln!("  {:<26} {}", directive.name(), directive.description());
            }
            return Err(e.into());
        }
    };
    let options = DirectiveOptions::parse(args.tags.as_deref(), args.header_separator.as_deref())
        .with_context(|| format!("Invalid options for {}", directive))?;

    let pipeline = super::build_pipeline(global)?;
    let output = pipeline
        .run_directive(directive, &options)
        .with_context(|| format!("Failed to run {}", directive))?;

    for line in &output.lines {
        println!("{}", line);
    }

    if args.list_dependencies {
        println!();
        println!("Dependencies:");
        for path in &output.dependencies {
            println!("  {}", path);
        }
    }

    Ok(())
}
