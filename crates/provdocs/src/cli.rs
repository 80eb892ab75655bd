//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use provdocs_core::DEFAULT_HEADER_SEPARATOR;

/// provdocs - Render provider reference tables from provider.yaml metadata
#[derive(Parser, Debug)]
#[command(name = "provdocs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every rendering command
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Repository root containing the providers and docs directories
    #[arg(long, env = "PROVDOCS_ROOT", default_value = ".", global = true)]
    pub root: Utf8PathBuf,

    /// Path to a provdocs.yaml settings file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Load templates from this directory instead of the built-in ones
    #[arg(long, global = true)]
    pub template_dir: Option<Utf8PathBuf>,

    /// Include providers marked as suspended
    #[arg(long, global = true)]
    pub include_suspended: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Operators, sensors and hooks grouped by integration
    OperatorsAndHooks(TaggedRenderArgs),

    /// Transfer operators between integrations
    Transfers(TaggedRenderArgs),

    /// Logging handlers per provider
    Logging(RenderArgs),

    /// Auth backends per provider
    AuthBackends(RenderArgs),

    /// Secrets backends per provider
    SecretBackends(RenderArgs),

    /// Connection types per provider
    Connections(RenderArgs),

    /// Extra links per provider
    ExtraLinks(RenderArgs),

    /// Run a named directive with raw string options
    Directive(DirectiveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Character used to underline section headers
    #[arg(long, default_value_t = DEFAULT_HEADER_SEPARATOR)]
    pub header_separator: char,
}

#[derive(Args, Debug, Clone)]
pub struct TaggedRenderArgs {
    /// Only show integrations with this tag (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DirectiveArgs {
    /// Directive name, e.g. operators-hooks-ref or airflow-connections
    pub name: String,

    /// Comma separated tag filter
    #[arg(long)]
    pub tags: Option<String>,

    /// Header underline character (required)
    #[arg(long)]
    pub header_separator: Option<String>,

    /// Also print the provider files the output depends on
    #[arg(long)]
    pub list_dependencies: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
