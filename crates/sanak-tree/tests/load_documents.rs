//! Integration tests for loading family documents from disk

use sanak_domain::{Kinship, Locale};
use sanak_tree::{FamilyTree, GenerationLayout, Severity, TreeError};
use std::fs;
use tempfile::TempDir;

const FAMILY_YAML: &str = r#"
people:
  - id: raden
    name: Raden Mas
    gender: male
  - id: siti
    gender: female
  - id: budi
    gender: male
  - id: agus
    gender: male
  - id: eko
    gender: male
    birthDate: "1985-04-12"
  - id: dewi
    gender: female
  - id: rina
    gender: female
relationships:
  - { from: raden, to: siti, type: married }
  - { from: budi, to: raden }
  - { from: budi, to: siti }
  - { from: agus, to: raden }
  - { from: agus, to: siti }
  - { from: eko, to: budi }
  - { from: rina, to: agus }
  - { from: eko, to: dewi, type: married }
"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_yaml_and_label() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "family.yaml", FAMILY_YAML);

    let tree = FamilyTree::load(&path).unwrap();

    assert_eq!(tree.people().len(), 7);
    assert_eq!(tree.person("raden").unwrap().display_name(), "Raden Mas");
    assert_eq!(tree.label("eko", "raden").unwrap(), Kinship::Grandfather);
    assert_eq!(tree.label("eko", "rina").unwrap(), Kinship::Cousin);
    assert_eq!(tree.label("dewi", "agus").unwrap(), Kinship::Uncle);
    assert_eq!(tree.label("raden", "dewi").unwrap(), Kinship::GrandchildInLaw);
    assert_eq!(tree.label("budi", "dewi").unwrap().label(Locale::Id), "Menantu");
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn test_load_json_by_extension() {
    let dir = TempDir::new().unwrap();
    let json = r#"{
        "people": [
            {"id": "ibu", "gender": "female"},
            {"id": "anak", "gender": "female", "birthDate": "2001-02-03"}
        ],
        "relationships": [{"from": "anak", "to": "ibu"}]
    }"#;
    let path = write(&dir, "family.json", json);

    let tree = FamilyTree::load(&path).unwrap();
    assert_eq!(tree.label("anak", "ibu").unwrap(), Kinship::Mother);
    assert_eq!(tree.label("ibu", "anak").unwrap(), Kinship::Daughter);
    assert_eq!(tree.person("anak").unwrap().birth_date.as_deref(), Some("2001-02-03"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = FamilyTree::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, TreeError::Io(_)));
}

#[test]
fn test_invalid_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.yaml", "people:\n  - id: a\n");

    let err = FamilyTree::load(&path).unwrap_err();
    assert!(matches!(err, TreeError::InvalidDocument(_)));
    assert!(err.to_string().contains("relationships"));
}

#[test]
fn test_malformed_graph_loads_with_diagnostics() {
    let dir = TempDir::new().unwrap();
    let yaml = r#"
people:
  - id: a
  - id: b
relationships:
  - { from: a, to: ghost }
  - { from: b, to: b, type: married }
"#;
    let path = write(&dir, "odd.yaml", yaml);

    let tree = FamilyTree::load(&path).unwrap();
    let diagnostics = tree.diagnostics();

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().any(|d| d.severity == Severity::Error));
    assert!(diagnostics.iter().any(|d| d.message.contains("ghost")));
    assert_eq!(tree.label("a", "b").unwrap(), Kinship::Relative);
}

#[test]
fn test_layout_of_loaded_tree() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "family.yaml", FAMILY_YAML);
    let tree = FamilyTree::load(&path).unwrap();

    let request = tree.layout_request();
    assert_eq!(request.nodes.len(), 7);
    assert!(request.edges.iter().any(|e| e.id == "e-raden-budi"));
    assert!(request.edges.iter().any(|e| e.id == "e-agus-rina"));

    let response = tree.layout_with(&GenerationLayout::default()).unwrap();
    let raden = response.position_of("raden").unwrap();
    let eko = response.position_of("eko").unwrap();
    assert!(eko.y > raden.y);
}

#[test]
fn test_load_document_with_full_person_details() {
    let dir = TempDir::new().unwrap();
    let yaml = r#"
people:
  - id: ibu
    name: Ratna
    gender: female
    birthDate: "1962-03-08"
    photo_link: https://example.com/ratna.png
    address:
      - address: Jl. Sudirman 21, Jakarta
        gmap_link: https://maps.google.com/?q=sudirman
    phone_number:
      number: "0812-1111-2222"
      is_whatsapp_number: false
    short_bio: Retired nurse.
    deceased: true
  - id: anak
    gender: male
    phone_number: { number: "0813-3333-4444", is_whatsapp_number: true }
relationships:
  - { from: anak, to: ibu }
"#;
    let path = write(&dir, "full.yaml", yaml);

    let tree = FamilyTree::load(&path).unwrap();
    assert_eq!(tree.label("anak", "ibu").unwrap(), Kinship::Mother);
    assert!(tree.graph().contains("ibu"));

    let ibu = tree.person("ibu").unwrap();
    assert_eq!(ibu.address.len(), 1);
    assert_eq!(ibu.address[0].address, "Jl. Sudirman 21, Jakarta");
    assert_eq!(ibu.phone_number.as_ref().unwrap().number, "0812-1111-2222");
    assert!(!ibu.phone_number.as_ref().unwrap().is_whatsapp_number);
    assert_eq!(ibu.short_bio.as_deref(), Some("Retired nurse."));
    assert!(ibu.deceased);

    let anak = tree.person("anak").unwrap();
    assert!(anak.address.is_empty());
    assert!(anak.phone_number.as_ref().unwrap().is_whatsapp_number);
}
