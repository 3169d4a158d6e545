//! Inspect command implementation.

use super::read_input;
use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_domain::PersonId;
use kinship_resolver::{Resolver, ResolverConfig};

/// Execute the inspect command.
pub fn execute_inspect(
    args: InspectArgs,
    config: &ResolverConfig,
    formatter: &Formatter,
) -> Result<()> {
    let input = read_input(&args.input)?;
    let resolver = Resolver::new(args.input.apply(config.clone()));
    let resolution = resolver.resolve(&input)?;

    if let Some(id) = args.person {
        let person = PersonId::new(id);
        if resolution.tree.node(person).is_none() {
            return Err(CliError::InvalidInput(format!("No person with id {}", id)));
        }
        println!("{}", formatter.format_person(&resolution.tree, person)?);
        return Ok(());
    }

    println!("{}", formatter.format_metrics(&resolution.metrics)?);

    let unresolved = resolution.metrics.total_unresolved();
    if unresolved > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "{} claim(s) found no prerequisite and produced no link",
                unresolved
            ))
        );
    }

    Ok(())
}
