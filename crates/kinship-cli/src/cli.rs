//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use kinship_resolver::{PrerequisiteScope, ResolverConfig};

/// Kinship CLI - Resolve relationship claims into a family tree.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINSHIP_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format
    Table,
    /// JSON format (default)
    Json,
    /// Quiet format (one link per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an input document into the {nodes, links} tree
    Resolve(ResolveArgs),

    /// Resolve and report metrics, optionally for one person
    Inspect(InspectArgs),

    /// List the relation type catalog
    Catalog,
}

/// Input and engine options shared by resolve and inspect.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// Input JSON file ({persons, parentEdges, claims})
    pub input: Option<String>,

    /// Read the input document from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Which claims dependent categories may consult
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Skip co-parent spouse inference
    #[arg(long)]
    pub no_co_parents: bool,

    /// Drop links for labels outside the catalog
    #[arg(long)]
    pub no_generic: bool,

    /// Reject repeated claims
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the tree to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the inspect command.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only show links touching this person id
    #[arg(short, long)]
    pub person: Option<u64>,
}

/// Prerequisite scope argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ScopeArg {
    /// Only earlier claims
    Preceding,
    /// Any claim of the run
    Complete,
}

impl InputArgs {
    /// Apply command-line overrides on top of the configured engine settings.
    pub fn apply(&self, mut config: ResolverConfig) -> ResolverConfig {
        if let Some(scope) = self.scope {
            config.prerequisite_scope = scope.into();
        }
        if self.no_co_parents {
            config.infer_co_parents = false;
        }
        if self.no_generic {
            config.emit_generic_links = false;
        }
        if self.strict {
            config.reject_duplicate_claims = true;
        }
        config
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ScopeArg> for PrerequisiteScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Preceding => PrerequisiteScope::Preceding,
            ScopeArg::Complete => PrerequisiteScope::Complete,
        }
    }
}
