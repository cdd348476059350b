//! Invocations of the amf2scad binary.

mod support;

use amf2scad::{ConvertOptions, convert_str};
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use support::{MISSING_VERTICES, SINGLE_TRIANGLE};
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_amf2scad"));
    cmd.current_dir(dir.path());
    cmd
}

fn expected_output() -> String {
    convert_str(SINGLE_TRIANGLE, &ConvertOptions::default())
        .map(|conversion| conversion.render())
        .unwrap_or_default()
}

#[test]
fn no_argument_converts_default_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("Test.amf"), SINGLE_TRIANGLE)?;

    cli(&dir).assert().success();

    let written = fs::read_to_string(dir.path().join("Test_convert.scad"))?;
    assert_eq!(written, expected_output());
    Ok(())
}

#[test]
fn named_input_gets_derived_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("part.amf"), SINGLE_TRIANGLE)?;

    cli(&dir).arg("part.amf").assert().success();

    let written = fs::read_to_string(dir.path().join("part_convert.scad"))?;
    assert!(written.starts_with("points_0=[[0,0,0],[1,0,0],[0,1,0]];\n"));
    Ok(())
}

#[test]
fn two_arguments_are_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("a.amf"), SINGLE_TRIANGLE)?;
    fs::write(dir.path().join("b.amf"), SINGLE_TRIANGLE)?;

    cli(&dir)
        .args(["a.amf", "b.amf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    assert!(!dir.path().join("a_convert.scad").exists());
    assert!(!dir.path().join("b_convert.scad").exists());
    Ok(())
}

#[test]
fn output_option_overrides_derived_name() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("part.amf"), SINGLE_TRIANGLE)?;

    cli(&dir)
        .args(["part.amf", "-o", "custom.scad"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("custom.scad"))?,
        expected_output()
    );
    assert!(!dir.path().join("part_convert.scad").exists());
    Ok(())
}

#[test]
fn stdout_option_prints_instead_of_writing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("part.amf"), SINGLE_TRIANGLE)?;

    cli(&dir)
        .args(["part.amf", "--stdout"])
        .assert()
        .success()
        .stdout(expected_output());

    assert!(!dir.path().join("part_convert.scad").exists());
    Ok(())
}

#[test]
fn malformed_mesh_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("broken.amf"), MISSING_VERTICES)?;

    cli(&dir)
        .arg("broken.amf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no <vertices> block"));

    assert!(!dir.path().join("broken_convert.scad").exists());
    Ok(())
}

#[test]
fn missing_input_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    cli(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Test.amf"));

    assert!(!dir.path().join("Test_convert.scad").exists());
    Ok(())
}
