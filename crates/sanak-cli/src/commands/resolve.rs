//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::output::Formatter;
use sanak_domain::Person;
use sanak_tree::{FamilyTree, TreeError};

/// Execute the resolve command.
pub fn execute_resolve(args: ResolveArgs, formatter: &Formatter) -> Result<()> {
    let tree = FamilyTree::load(&args.file)?;
    println!("{}", render_resolve(&tree, &args.pov, &args.target, formatter)?);
    Ok(())
}

/// Name `target` from `pov` and format the answer.
pub fn render_resolve(tree: &FamilyTree, pov: &str, target: &str, formatter: &Formatter) -> Result<String> {
    let kinship = tree.label(pov, target)?;
    let pov = person(tree, pov)?;
    let target = person(tree, target)?;

    formatter.format_resolution(pov, target, kinship)
}

fn person<'a>(tree: &'a FamilyTree, id: &str) -> Result<&'a Person> {
    tree.person(id)
        .ok_or_else(|| TreeError::UnknownPerson(id.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use sanak_domain::{Edge, Gender, Locale};

    fn tree() -> FamilyTree {
        FamilyTree::new(
            vec![
                Person::new("ayah", Some(Gender::Male)),
                Person::new("anak", Some(Gender::Female)),
            ],
            vec![Edge::parent("ayah", "anak")],
        )
    }

    #[test]
    fn test_render_resolve() {
        let formatter = Formatter::new(OutputFormat::Quiet, false, Locale::En);
        assert_eq!(render_resolve(&tree(), "anak", "ayah", &formatter).unwrap(), "Father");
        assert_eq!(render_resolve(&tree(), "ayah", "anak", &formatter).unwrap(), "Daughter");
    }

    #[test]
    fn test_unknown_id() {
        let formatter = Formatter::new(OutputFormat::Quiet, false, Locale::En);
        let err = render_resolve(&tree(), "anak", "paman", &formatter).unwrap_err();
        assert!(matches!(err, CliError::Tree(TreeError::UnknownPerson(id)) if id == "paman"));
    }
}
