//! Resolve command implementation.

use super::read_input;
use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinship_resolver::{Resolver, ResolverConfig};
use std::fs;
use tracing::info;

/// Execute the resolve command.
pub fn execute_resolve(
    args: ResolveArgs,
    config: &ResolverConfig,
    formatter: &Formatter,
) -> Result<()> {
    let input = read_input(&args.input)?;
    let resolver = Resolver::new(args.input.apply(config.clone()));
    let resolution = resolver.resolve(&input)?;

    let output = if args.compact {
        resolution.tree.to_json(false)?
    } else {
        formatter.format_tree(&resolution.tree)?
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output)?;
            info!(path = %path, links = resolution.links.len(), "Wrote family tree");
            eprintln!(
                "{}",
                formatter.success(&format!(
                    "Resolved {} link(s) for {} person(s) into {}",
                    resolution.links.len(),
                    resolution.tree.nodes.len(),
                    path
                ))
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}
