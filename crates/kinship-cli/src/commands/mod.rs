//! Command implementations.

pub mod catalog;
pub mod inspect;
pub mod resolve;

pub use self::catalog::execute_catalog;
pub use self::inspect::execute_inspect;
pub use self::resolve::execute_resolve;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use kinship_resolver::FamilyInput;
use std::fs;
use std::io::{self, Read};

/// Read the input document named by the arguments.
pub fn read_input(args: &InputArgs) -> Result<FamilyInput> {
    let json_data = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.input {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either an input file or --stdin".to_string(),
        ));
    };

    Ok(FamilyInput::from_json(&json_data)?)
}
