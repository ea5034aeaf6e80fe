//! CLI integration tests for Drydock.
//!
//! These tests verify the full CLI workflow from platform validation
//! through writing the generator configuration.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the drydock binary command.
fn drydock() -> Command {
    Command::cargo_bin("drydock").unwrap()
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a minimal project manifest into a directory.
fn write_manifest(dir: &Path) {
    fs::write(
        dir.join("Drydock.toml"),
        r#"
[package]
name = "capdemo"
version = "0.1.0"

[dependencies]
sdl = "2.28.3"
libxml2 = "2.15.0"
libsndfile = "1.2.2"
boost = "1.89.0"
gsl-lite = "0.42.0"

[dev-dependencies]
cppunit = "1.15.1"
"#,
    )
    .unwrap();
}

// ============================================================================
// drydock validate
// ============================================================================

#[test]
fn test_validate_supported_platform() {
    drydock()
        .args([
            "validate",
            "--os",
            "linux",
            "--arch",
            "x86_64",
            "--variant",
            "Release",
            "--compiler",
            "gcc",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Supported"));
}

#[test]
fn test_validate_unsupported_os() {
    drydock()
        .args([
            "validate",
            "--os",
            "windows",
            "--arch",
            "x86_64",
            "--variant",
            "Debug",
            "--compiler",
            "msvc",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Only Linux and x86_64 currently supported",
        ));
}

#[test]
fn test_validate_unsupported_arch() {
    drydock()
        .args(["validate", "--os", "linux", "--arch", "arm64", "--compiler", "gcc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Only Linux and x86_64 currently supported",
        ));
}

#[test]
fn test_validate_rejects_unknown_os_value() {
    drydock()
        .args(["validate", "--os", "beos", "--arch", "x86_64", "--compiler", "gcc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid values"));
}

// ============================================================================
// drydock layout
// ============================================================================

#[test]
fn test_layout_single_config_includes_variant() {
    drydock()
        .args([
            "layout",
            "--os",
            "linux",
            "--arch",
            "x86_64",
            "--variant",
            "Release",
            "--compiler",
            "gcc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("build/Release/generators"));
}

#[test]
fn test_layout_multi_config_omits_variant() {
    drydock()
        .args([
            "layout",
            "--os",
            "linux",
            "--arch",
            "x86_64",
            "--variant",
            "Debug",
            "--compiler",
            "msvc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("build/generators"))
        .stdout(predicate::str::contains("build/Debug").not());
}

#[test]
fn test_layout_json_output() {
    let output = drydock()
        .args([
            "layout",
            "--os",
            "linux",
            "--arch",
            "x86_64",
            "--variant",
            "RelWithDebInfo",
            "--compiler",
            "clang",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["strategy"], "single-config");
    assert_eq!(value["layout"]["build_dir"], "build/RelWithDebInfo");
}

// ============================================================================
// drydock configure
// ============================================================================

#[test]
fn test_configure_writes_generator_config() {
    let tmp = temp_dir();
    write_manifest(tmp.path());

    drydock()
        .args([
            "configure",
            "--os",
            "linux",
            "--arch",
            "x86_64",
            "--variant",
            "Release",
            "--compiler",
            "gcc",
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Configured"));

    let generators = tmp.path().join("build").join("Release").join("generators");
    assert!(generators.is_dir());

    let config = fs::read_to_string(generators.join("drydock.toml")).unwrap();
    assert!(config.contains("sdl"));
    assert!(config.contains("2.28.3"));
    assert!(config.contains("wayland"));
}

#[test]
fn test_configure_unsupported_platform_fails_fast() {
    let tmp = temp_dir();
    write_manifest(tmp.path());

    drydock()
        .args([
            "configure",
            "--os",
            "windows",
            "--arch",
            "x86_64",
            "--variant",
            "Debug",
            "--compiler",
            "msvc",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Only Linux and x86_64 currently supported",
        ));

    // Fail fast: no partial configuration artifacts.
    assert!(!tmp.path().join("build").exists());
}

#[test]
fn test_configure_fails_without_manifest() {
    let tmp = temp_dir();

    drydock()
        .args([
            "configure",
            "--os",
            "linux",
            "--arch",
            "x86_64",
            "--compiler",
            "gcc",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Drydock.toml"));
}

#[test]
fn test_configure_parallel_variants_do_not_collide() {
    let tmp = temp_dir();
    write_manifest(tmp.path());

    for variant in ["Debug", "Release"] {
        drydock()
            .args([
                "configure",
                "--os",
                "linux",
                "--arch",
                "x86_64",
                "--variant",
                variant,
                "--compiler",
                "gcc",
            ])
            .current_dir(tmp.path())
            .assert()
            .success();
    }

    assert!(tmp.path().join("build/Debug/generators/drydock.toml").is_file());
    assert!(tmp.path().join("build/Release/generators/drydock.toml").is_file());
}

// ============================================================================
// drydock deps
// ============================================================================

#[test]
fn test_deps_lists_pins_and_options() {
    let tmp = temp_dir();
    write_manifest(tmp.path());

    drydock()
        .args(["deps"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sdl/2.28.3"))
        .stdout(predicate::str::contains("cppunit/1.15.1 (dev)"))
        .stdout(predicate::str::contains("sdl.wayland = false"));
}

#[test]
fn test_deps_json_output() {
    let tmp = temp_dir();
    write_manifest(tmp.path());

    let output = drydock()
        .args(["deps", "--format", "json"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let deps = value["dependencies"].as_array().unwrap();
    assert_eq!(deps.len(), 6);
    assert_eq!(value["options"]["sdl"]["wayland"], false);
}

#[test]
fn test_deps_finds_manifest_in_parent() {
    let tmp = temp_dir();
    write_manifest(tmp.path());
    let nested = tmp.path().join("src");
    fs::create_dir(&nested).unwrap();

    drydock()
        .args(["deps"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("boost/1.89.0"));
}
