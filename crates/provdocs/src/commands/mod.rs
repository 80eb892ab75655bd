//! CLI command implementations

pub mod completions;
pub mod directive;
pub mod render;

use anyhow::{Context, Result};
use provdocs_core::{Pipeline, Settings};

use crate::cli::GlobalArgs;

/// Resolve settings (defaults, file, environment) and apply CLI flags on top
fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let mut settings = Settings::load(&global.root, global.config.as_deref())
        .with_context(|| format!("Failed to load settings for {}", global.root))?;

    if let Some(dir) = &global.template_dir {
        settings.template_dir = Some(dir.clone());
    }
    if global.include_suspended {
        settings.include_suspended = true;
    }

    Ok(settings)
}

fn build_pipeline(global: &GlobalArgs) -> Result<Pipeline> {
    let settings = load_settings(global)?;
    Pipeline::new(&settings).context("Failed to initialize pipeline")
}
