use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const FILES: [&str; 3] = [
    "Basil_scatter.png",
    "Basil_histogram.png",
    "Basil_line_plot.png",
];

fn basil(out: &Path) -> Command {
    let mut cmd = Command::cargo_bin("plant_plots").unwrap();
    cmd.arg("--plant")
        .arg("Basil")
        .args(&["--height", "5", "7", "9"])
        .args(&["--leaf_count", "2", "3", "4"])
        .args(&["--dry_weight", "0.5", "0.6", "0.7", "0.8"])
        .arg("--output_dir")
        .arg(out);
    cmd
}

#[test]
fn test_help_works() {
    let mut cmd = Command::cargo_bin("plant_plots").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--leaf_count"));
}

#[test]
fn test_three_plots() {
    let tmp = tempdir().unwrap();
    basil(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant: Basil"))
        .stdout(predicate::str::contains("Height data: [5.0, 7.0, 9.0] cm"))
        .stdout(predicate::str::contains("Leaf count data: [2, 3, 4]"))
        .stdout(predicate::str::contains(
            "Dry weight data: [0.5, 0.6, 0.7, 0.8] g",
        ))
        .stdout(predicate::str::contains("Generated plots for Basil:"))
        .stdout(predicate::str::contains(
            "Scatter plot saved as Basil_scatter.png",
        ))
        .stdout(predicate::str::contains(
            "Histogram saved as Basil_histogram.png",
        ))
        .stdout(predicate::str::contains(
            "Line plot saved as Basil_line_plot.png",
        ));
    for f in FILES.iter() {
        let meta = std::fs::metadata(tmp.path().join(f)).unwrap();
        assert!(meta.len() > 0, "{} is empty", f);
    }
}

#[test]
fn test_output_dir_is_created() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("nested").join("plots");
    basil(&out).assert().success();
    for f in FILES.iter() {
        assert!(out.join(f).is_file());
    }
}

#[test]
fn test_rerun_overwrites() {
    let tmp = tempdir().unwrap();
    let scatter = tmp.path().join("Basil_scatter.png");
    std::fs::write(&scatter, "stale").unwrap();
    basil(tmp.path()).assert().success();
    basil(tmp.path()).assert().success();
    assert_ne!(std::fs::read(&scatter).unwrap(), b"stale".to_vec());
    for f in FILES.iter() {
        assert!(tmp.path().join(f).is_file());
    }
}

#[test]
fn test_missing_option_fails() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("plant_plots").unwrap();
    cmd.args(&["--plant", "Basil", "--height", "5", "--leaf_count", "2"])
        .arg("--output_dir")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"))
        .stderr(predicate::str::contains("dry_weight"));
    assert!(!tmp.path().join("Basil_scatter.png").exists());
}

#[test]
fn test_malformed_value_fails() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("plant_plots").unwrap();
    cmd.args(&["--plant", "Basil", "--height", "5", "--leaf_count", "two"])
        .args(&["--dry_weight", "0.5"])
        .arg("--output_dir")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("isn't a valid value"));
    assert!(!tmp.path().join("Basil_scatter.png").exists());
}

#[test]
fn test_length_mismatch_fails() {
    let tmp = tempdir().unwrap();
    let scatter = tmp.path().join("Basil_scatter.png");
    std::fs::write(&scatter, "previous run").unwrap();
    let mut cmd = Command::cargo_bin("plant_plots").unwrap();
    cmd.args(&["--plant", "Basil", "--height", "5", "7", "9"])
        .args(&["--leaf_count", "2", "3"])
        .args(&["--dry_weight", "0.5"])
        .arg("--output_dir")
        .arg(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("same size"));
    assert_eq!(std::fs::read(&scatter).unwrap(), b"previous run".to_vec());
    assert!(!tmp.path().join("Basil_histogram.png").exists());
    assert!(!tmp.path().join("Basil_line_plot.png").exists());
}

#[test]
fn test_unwritable_output_dir_fails() {
    let tmp = tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();
    basil(&blocker.join("plots"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
