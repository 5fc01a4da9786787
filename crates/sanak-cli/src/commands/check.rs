//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sanak_tree::FamilyTree;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, formatter: &Formatter) -> Result<()> {
    let tree = FamilyTree::load(&args.file)?;
    let diagnostics = tree.diagnostics();

    println!("{}", formatter.format_diagnostics(&diagnostics)?);

    if args.strict && !diagnostics.is_empty() {
        return Err(CliError::ChecksFailed(diagnostics.len()));
    }
    Ok(())
}
