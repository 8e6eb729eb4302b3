//! # Golden Tests
//!
//! These tests ensure that every built-in template renders byte-identical
//! ZPL at both supported resolutions.
//!
//! ## Regenerating Golden Files
//!
//! ```bash
//! UPDATE_GOLDEN=1 cargo test --test golden_tests
//! ```

use std::fs;

use pretty_assertions::assert_eq;
use zebrella::PrinterModel;
use zebrella::template::{TemplateCatalog, TemplateRef};

/// Path to golden test directory
const GOLDEN_DIR: &str = "tests/golden";

fn check_golden(name: &str, actual: &str) {
    let path = format!("{}/{}.zpl", GOLDEN_DIR, name);
    if std::env::var_os("UPDATE_GOLDEN").is_some() {
        fs::write(&path, actual).unwrap();
        return;
    }
    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing golden file {}: {}", path, e));
    assert_eq!(expected.trim_end(), actual, "golden mismatch for {}", name);
}

fn render(template: &str, model: PrinterModel) -> String {
    let catalog = TemplateCatalog::builtin();
    let printer = model.profile("127.0.0.1");
    catalog
        .resolve(&TemplateRef::from(template), None)
        .unwrap()
        .render(&printer)
        .unwrap()
        .text
}

#[test]
fn test_golden_203_dpi() {
    for name in TemplateCatalog::builtin().names() {
        let text = render(name, PrinterModel::ZEBRA_GK420T);
        check_golden(&format!("{}_203", name), &text);
    }
}

#[test]
fn test_golden_300_dpi() {
    for name in TemplateCatalog::builtin().names() {
        let text = render(name, PrinterModel::ZEBRA_GX430T);
        check_golden(&format!("{}_300", name), &text);
    }
}

#[test]
fn test_203_dpi_models_agree() {
    for name in TemplateCatalog::builtin().names() {
        let gk = render(name, PrinterModel::ZEBRA_GK420T);
        assert_eq!(gk, render(name, PrinterModel::ZEBRA_ZD420));
        assert_eq!(gk, render(name, PrinterModel::ZEBRA_ZT410));
    }
}
