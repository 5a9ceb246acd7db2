//! Viewer command tests
//!
//! Covers the terminal presentation commands: list, show and issues.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn lister_cmd() -> Command {
    let mut cmd = Command::cargo_bin("unit-lister").unwrap();
    cmd.env_remove("UNIT_LISTER_MODEL");
    cmd.env_remove("UNIT_LISTER_SCHEMAS");
    cmd
}

#[test]
fn test_list_shows_totals_and_quantities() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(common::SAMPLE_MODEL);

    lister_cmd()
        .current_dir(&workspace.path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantities: 2"))
        .stdout(predicate::str::contains("Units: 3"))
        .stdout(predicate::str::contains("host version 2026"))
        .stdout(predicate::str::contains("Length"))
        .stdout(predicate::str::contains("Temperature"))
        .stdout(predicate::str::contains("spec:length-1.0.0"));
}

#[test]
fn test_list_sorts_by_display_name() {
    // model enumerates Temperature before Length; the viewer sorts
    let workspace = common::TestWorkspace::new();
    workspace.write_model(common::SAMPLE_MODEL);

    lister_cmd()
        .current_dir(&workspace.path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Length.*Temperature").unwrap());
}

#[test]
fn test_list_detailed_includes_units() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(common::SAMPLE_MODEL);

    lister_cmd()
        .current_dir(&workspace.path)
        .args(["list", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meters"))
        .stdout(predicate::str::contains("Feet"))
        .stdout(predicate::str::contains("Celsius"));
}

#[test]
fn test_list_reports_issue_counts() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(
        r#"{
            "version": "2026",
            "units": [
                {"typeId": "u:m", "displayName": "Meters",
                 "factorFromInternal": 1.0, "factorToInternal": 1.0}
            ],
            "quantities": [
                {"typeId": "q:length", "displayName": "Length", "unitTypeIds": ["u:m"]},
                {"typeId": "q:cost", "displayName": "Cost", "unitTypeIds": []}
            ]
        }"#,
    );

    lister_cmd()
        .current_dir(&workspace.path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings: 1"));
}

#[test]
fn test_show_by_display_name() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(common::SAMPLE_MODEL);

    lister_cmd()
        .current_dir(&workspace.path)
        .args(["show", "Length"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Length (Common)"))
        .stdout(predicate::str::contains("spec:length-1.0.0"))
        .stdout(predicate::str::contains("Meters"))
        .stdout(predicate::str::contains("Feet"))
        .stdout(predicate::str::contains("from internal: 3.2808"));
}

#[test]
fn test_show_by_name_is_case_insensitive() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(common::SAMPLE_MODEL);

    lister_cmd()
        .current_dir(&workspace.path)
        .args(["show", "temperature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Temperature (HVAC)"));
}

#[test]
fn test_show_by_type_id() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(common::SAMPLE_MODEL);

    lister_cmd()
        .current_dir(&workspace.path)
        .args(["show", "spec:temperature-1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Celsius"));
}

#[test]
fn test_show_unknown_quantity_fails() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(common::SAMPLE_MODEL);

    lister_cmd()
        .current_dir(&workspace.path)
        .args(["show", "Voltage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity 'Voltage' not found"));
}

#[test]
fn test_issues_prints_counters_and_messages() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(
        r#"{
            "version": "2026",
            "units": [
                {"typeId": "u:m", "displayName": "Meters",
                 "factorFromInternal": 1.0, "factorToInternal": 1.0},
                {"typeId": "u:sqm", "displayName": "Square meters",
                 "factorFromInternal": 1.0, "factorToInternal": 1.0}
            ],
            "quantities": [
                {"typeId": "q:length", "displayName": "Length",
                 "unitTypeIds": ["u:m"]},
                {"typeId": "q:length", "displayName": "Length",
                 "unitTypeIds": ["u:m"]},
                {"typeId": "q:area", "displayName": "Area",
                 "unitTypeIds": ["u:sqm", "u:ghost"]},
                {"typeId": "q:cost", "displayName": "Cost", "unitTypeIds": []}
            ]
        }"#,
    );

    lister_cmd()
        .current_dir(&workspace.path)
        .arg("issues")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Unit Lister Issues ("))
        .stdout(predicate::str::contains("Errors: 1"))
        .stdout(predicate::str::contains("Failed to process unit u:ghost"))
        .stdout(predicate::str::contains("Warnings: 2"))
        .stdout(predicate::str::contains("Duplicate quantity skipped: Length (q:length)"))
        .stdout(predicate::str::contains("Quantity 'Cost' has no valid units"))
        .stdout(predicate::str::contains("Duplicate quantities skipped: 1"))
        .stdout(predicate::str::contains("Failed quantities: 0"))
        .stdout(predicate::str::contains("Failed units: 1"));
}

#[test]
fn test_issues_clean_run_shows_zero_counters() {
    let workspace = common::TestWorkspace::new();
    workspace.write_model(common::SAMPLE_MODEL);

    lister_cmd()
        .current_dir(&workspace.path)
        .arg("issues")
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors: 0"))
        .stdout(predicate::str::contains("Warnings: 0"))
        .stdout(predicate::str::contains("Duplicate quantities skipped: 0"));
}
