//! Layout command implementation.

use crate::cli::LayoutArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sanak_tree::{FamilyTree, GenerationLayout};

/// Execute the layout command.
pub fn execute_layout(args: LayoutArgs, formatter: &Formatter) -> Result<()> {
    let tree = FamilyTree::load(&args.file)?;

    if args.request {
        println!("{}", formatter.format_layout_request(&tree.layout_request())?);
        return Ok(());
    }

    let engine = engine_from(&args)?;
    println!("{}", formatter.format_layout(&tree.layout_with(&engine)?)?);
    Ok(())
}

fn engine_from(args: &LayoutArgs) -> Result<GenerationLayout> {
    if !(args.node_spacing >= 0.0 && args.layer_spacing >= 0.0) {
        return Err(CliError::InvalidInput(
            "Spacing must be a non-negative number".to_string(),
        ));
    }

    Ok(GenerationLayout {
        node_spacing: args.node_spacing,
        layer_spacing: args.layer_spacing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(node_spacing: f64, layer_spacing: f64) -> LayoutArgs {
        LayoutArgs {
            file: PathBuf::from("family.yaml"),
            request: false,
            node_spacing,
            layer_spacing,
        }
    }

    #[test]
    fn test_engine_spacing() {
        let engine = engine_from(&args(10.0, 20.0)).unwrap();
        assert_eq!(engine.node_spacing, 10.0);
        assert_eq!(engine.layer_spacing, 20.0);
    }

    #[test]
    fn test_negative_spacing_rejected() {
        assert!(engine_from(&args(-1.0, 20.0)).is_err());
        assert!(engine_from(&args(10.0, f64::NAN)).is_err());
    }
}
