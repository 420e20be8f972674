use assert_cmd::cargo::cargo_bin_cmd;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const NOTEBOOK: &str = r##"{
 "cells": [
  {"cell_type": "markdown", "metadata": {}, "source": ["# Title\n", "Intro"]},
  {"cell_type": "code", "execution_count": 1, "metadata": {}, "outputs": [], "source": "a = 1"},
  {"cell_type": "code", "execution_count": 2, "metadata": {}, "outputs": [], "source": "b = 2"}
 ],
 "metadata": {"kernelspec": {"name": "python3", "display_name": "Python 3", "language": "python"}},
 "nbformat": 4,
 "nbformat_minor": 4
}"##;

const SCRIPT: &str = "# -\n# # Title\n# Intro\n\n# +\n\na = 1\nb = 2\n";

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Point --config at a file that does not need to exist in the user's home
fn empty_config(dir: &TempDir) -> std::path::PathBuf {
    write(dir, "config.toml", "")
}

#[test]
fn to_script_prints_script() {
    let dir = TempDir::new().unwrap();
    let notebook = write(&dir, "nb.ipynb", NOTEBOOK);

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("to-script")
        .arg(&notebook)
        .assert()
        .success()
        .stdout(SCRIPT);
}

#[test]
fn to_script_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let notebook = write(&dir, "nb.ipynb", NOTEBOOK);
    let output = dir.path().join("nb.py");

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("to-script")
        .arg(&notebook)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), SCRIPT);
}

#[test]
fn to_script_unmerged_from_config() {
    let dir = TempDir::new().unwrap();
    let notebook = write(&dir, "nb.ipynb", NOTEBOOK);
    let config = write(&dir, "custom.toml", "[script]\nmerge_code_cells = false\n");

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(&config)
        .arg("to-script")
        .arg(&notebook)
        .assert()
        .success()
        .stdout("# -\n# # Title\n# Intro\n\n# +\n\na = 1\n\n# +\n\nb = 2\n");
}

#[test]
fn to_script_rejects_malformed_notebook() {
    let dir = TempDir::new().unwrap();
    let notebook = write(&dir, "broken.ipynb", "{ \"cells\": [");

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("to-script")
        .arg(&notebook)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error parsing notebook"));
}

#[test]
fn to_script_missing_file() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("to-script")
        .arg(dir.path().join("missing.ipynb"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn to_notebook_writes_next_to_script() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "analysis.py", SCRIPT);

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("to-notebook")
        .arg(&script)
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("analysis.ipynb")).unwrap();
    assert!(written.starts_with("{\n \"cells\": ["));
    assert!(written.contains("\"a = 1\\n\","));
    assert!(written.contains("\"nbformat_minor\": 5"));
}

#[test]
fn to_notebook_keeps_kernelspec() {
    let dir = TempDir::new().unwrap();
    let notebook = write(&dir, "nb.ipynb", NOTEBOOK);
    let script = write(&dir, "edited.py", "# +\n\nprint('edited')\n");

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("to-notebook")
        .arg(&script)
        .arg("-o")
        .arg(&notebook)
        .assert()
        .success();

    let written = fs::read_to_string(&notebook).unwrap();
    assert!(written.contains("\"kernelspec\""));
    assert!(written.contains("print('edited')"));
    assert!(!written.contains("# Title"));
}

#[test]
fn to_notebook_print_shows_normalized_script() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "messy.py", "x = 1\n# -\n# Notes\n# +\ny = 2\n");

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("to-notebook")
        .arg(&script)
        .arg("--print")
        .assert()
        .success()
        .stdout("# +\n\nx = 1\n\n# -\n# Notes\n\n# +\n\ny = 2\n");
}

#[test]
fn to_notebook_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "a.py", SCRIPT);

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("to-notebook")
        .arg(&script)
        .arg("-o")
        .arg(dir.path().join("a.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(".ipynb extension"));
}

#[test]
fn normalize_in_place() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "messy.py", "x = 1\n# -\n# Notes\n# +\ny = 2\n");

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(empty_config(&dir))
        .arg("normalize")
        .arg(&script)
        .arg("--in-place")
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&script).unwrap(),
        "# +\n\nx = 1\n\n# -\n# Notes\n\n# +\n\ny = 2\n"
    );
}

#[test]
fn round_trip_through_cli() {
    let dir = TempDir::new().unwrap();
    let notebook = write(&dir, "nb.ipynb", NOTEBOOK);
    let script = dir.path().join("nb.py");
    let config = empty_config(&dir);

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(&config)
        .arg("to-script")
        .arg(&notebook)
        .arg("-o")
        .arg(&script)
        .assert()
        .success();

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(&config)
        .arg("to-notebook")
        .arg(&script)
        .assert()
        .success();

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(&config)
        .arg("to-script")
        .arg(&notebook)
        .assert()
        .success()
        .stdout(SCRIPT);
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "a.py", SCRIPT);

    cargo_bin_cmd!("nbscript")
        .arg("--config")
        .arg(Path::new("/nonexistent/nbscript.toml"))
        .arg("normalize")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
