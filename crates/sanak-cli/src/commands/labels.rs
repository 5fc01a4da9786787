//! Labels command implementation.

use crate::cli::LabelsArgs;
use crate::error::Result;
use crate::output::Formatter;
use sanak_domain::Kinship;
use sanak_tree::FamilyTree;

/// Execute the labels command.
pub fn execute_labels(args: LabelsArgs, formatter: &Formatter) -> Result<()> {
    let tree = FamilyTree::load(&args.file)?;
    println!("{}", render_labels(&tree, &args.pov, args.known_only, formatter)?);
    Ok(())
}

/// Label everyone from `pov` and format the result.
pub fn render_labels(tree: &FamilyTree, pov: &str, known_only: bool, formatter: &Formatter) -> Result<String> {
    let mut labels = tree.labels_from(pov)?;
    if known_only {
        labels.retain(|label| label.kinship != Kinship::Relative);
    }
    formatter.format_labels(&labels)
}
