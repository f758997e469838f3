//! CLI integration tests - scenario lifecycle through the odt binary

mod common;

use common::{create_scenario, odt, setup_dir};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// new
// ============================================================================

#[test]
fn test_new_creates_scenario_file() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Launch Odds");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("title: Launch Odds"));
    assert!(content.contains("id: SCN-"));
    assert!(content.contains("type: normal"));
    assert!(content.contains("std_dev: 10.0"));
}

#[test]
fn test_new_refuses_to_overwrite() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Launch Odds");

    odt()
        .args([
            "new",
            "--title",
            "Another",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite"));
}

#[test]
fn test_new_derives_filename_from_title() {
    let tmp = setup_dir();
    odt()
        .current_dir(tmp.path())
        .args(["new", "--title", "Launch Odds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created scenario"));

    assert!(tmp.path().join("launch-odds.odt.yaml").exists());
}

// ============================================================================
// add / rm / set-kind
// ============================================================================

#[test]
fn test_add_appends_component_with_defaults() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args([
            "add",
            path.to_str().unwrap(),
            "--kind",
            "exponential",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added exponential component"))
        .stdout(predicate::str::contains("2 total"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("type: exponential"));
    assert!(content.contains("lambda: 1.0"));
    assert!(content.contains("name: Component 2"));
}

#[test]
fn test_add_with_custom_name() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args([
            "add",
            path.to_str().unwrap(),
            "--kind",
            "dirac",
            "--name",
            "Fixed Cost",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed Cost"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("name: Fixed Cost"));
    assert!(content.contains("location: 0.0"));
}

#[test]
fn test_rm_removes_component_by_index() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args(["add", path.to_str().unwrap(), "--kind", "uniform"])
        .assert()
        .success();

    odt()
        .args(["rm", path.to_str().unwrap(), "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed component 'Component 1'"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("type: normal"));
    assert!(content.contains("type: uniform"));
}

#[test]
fn test_rm_rejects_out_of_range_index() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args(["rm", path.to_str().unwrap(), "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no component at index 5"));
}

#[test]
fn test_set_kind_reinitializes_defaults() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args(["set-kind", path.to_str().unwrap(), "0", "linear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("normal -> linear"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("type: linear"));
    assert!(!content.contains("std_dev"));
    assert!(content.contains("points:"));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_lists_components_and_domains() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Gap Odds");

    odt()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gap Odds"))
        .stdout(predicate::str::contains("Component 1"))
        .stdout(predicate::str::contains("μ=50 σ=10"))
        // normal defaults span [mean - 4σ, mean + 4σ]
        .stdout(predicate::str::contains("[10, 90]"))
        .stdout(predicate::str::contains("Convolution"));
}

#[test]
fn test_show_plot_renders_braille_chart() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args(["show", path.to_str().unwrap(), "--plot"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.chars().any(|c| (0x2800..=0x28FF).contains(&(c as u32)))
        }))
        .stdout(predicate::str::contains("peak density"));
}

#[test]
fn test_show_truncates_long_multibyte_name() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args([
            "add",
            path.to_str().unwrap(),
            "--name",
            "Durée de préparation générale étendue",
        ])
        .assert()
        .success();

    odt()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Durée de prépara"))
        .stdout(predicate::str::contains("..."));
}

#[test]
fn test_show_all_point_masses_reports_exact_sum() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args(["set-kind", path.to_str().unwrap(), "0", "dirac"])
        .assert()
        .success();

    odt()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("the sum is exactly 0"));
}

// ============================================================================
// compute
// ============================================================================

#[test]
fn test_compute_csv_to_stdout() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args(["compute", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("series,x,y"))
        .stdout(predicate::str::contains("Component 1,"))
        .stdout(predicate::str::contains("convolution,"));
}

#[test]
fn test_compute_yaml_to_file() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");
    let out = tmp.path().join("series.yaml");

    odt()
        .args([
            "compute",
            path.to_str().unwrap(),
            "--format",
            "yaml",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("per_component:"));
    assert!(content.contains("convolution:"));
}

#[test]
fn test_compute_convolution_only_selection() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args([
            "compute",
            path.to_str().unwrap(),
            "--series",
            "convolution",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("convolution,"))
        .stdout(predicate::str::contains("Component 1").not());
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_passes_good_scenario() {
    let tmp = setup_dir();
    let path = create_scenario(&tmp, "Test");

    odt()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) checked: 1 passed, 0 failed"));
}

#[test]
fn test_validate_rejects_zero_area_linear() {
    let tmp = setup_dir();
    let path = tmp.path().join("flat.odt.yaml");
    fs::write(
        &path,
        "\
id: SCN-0123456789ABCDEFGHJKMNPQRS
title: Flat
created: 2024-01-01T00:00:00Z
author: test
components:
  - name: Flat Shape
    distribution:
      type: linear
      points:
        - x: 0.0
          y: 0.0
        - x: 10.0
          y: 0.0
",
    )
    .unwrap();

    odt()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("0 passed, 1 failed"))
        .stderr(predicate::str::contains("zero area"));
}

#[test]
fn test_validate_reports_yaml_syntax_error() {
    let tmp = setup_dir();
    let path = tmp.path().join("broken.odt.yaml");
    fs::write(&path, "title: [unclosed\n").unwrap();

    odt()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"));
}
