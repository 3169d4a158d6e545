//! Catalog command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kinship_domain::RelationType;

/// Execute the catalog command.
pub fn execute_catalog(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_catalog(&RelationType::ALL)?);
    Ok(())
}
