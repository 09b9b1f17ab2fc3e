use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ENTITY: &str = r"<?php

class Entity
{
    /**
     * @var int
     */
    private $count;

    /**
     * The display name
     * @var string
     */
    protected $name;
}
";

fn getset_cmd() -> Command {
    Command::cargo_bin("getset").unwrap()
}

/// A temp project with a space-indented config and one PHP file.
fn project(source: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("getset.toml"), "use_tabs = false\n").unwrap();
    let file = tmp.path().join("Entity.php");
    fs::write(&file, source).unwrap();
    (tmp, file)
}

#[test]
fn help_lists_commands() {
    getset_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("getters"))
        .stdout(predicate::str::contains("accessors"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn getters_print_to_stdout() {
    let (_tmp, file) = project(ENTITY);

    getset_cmd()
        .arg("getters")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("    public function getCount()"))
        .stdout(predicate::str::contains("     * @return int"))
        .stdout(predicate::str::contains("public function getName()"))
        .stdout(predicate::str::contains("function set").not());

    // Printing leaves the file untouched.
    assert_eq!(fs::read_to_string(&file).unwrap(), ENTITY);
}

#[test]
fn setters_for_named_member() {
    let (_tmp, file) = project(ENTITY);

    getset_cmd()
        .args(["setters", "--name", "name"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("public function setName(string $name)"))
        .stdout(predicate::str::contains("setCount").not());
}

#[test]
fn write_inserts_then_reports_nothing_to_do() {
    let (_tmp, file) = project(ENTITY);

    getset_cmd()
        .args(["accessors", "--write"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Added"));

    let updated = fs::read_to_string(&file).unwrap();
    assert!(updated.contains("public function getCount()"));
    assert!(updated.contains("public function setCount(int $count)"));
    assert!(updated.trim_end().ends_with('}'));

    getset_cmd()
        .args(["accessors", "--write"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to generate"));

    assert_eq!(fs::read_to_string(&file).unwrap(), updated);
}

#[test]
fn unknown_template_fails() {
    let (_tmp, file) = project(ENTITY);

    getset_cmd()
        .args(["getters", "--template", "Zend"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Zend"));
}

#[test]
fn non_php_input_needs_force() {
    let (_tmp, file) = project("class Entity\n{\n    private $count;\n}\n");

    getset_cmd()
        .arg("getters")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only available for PHP sources"));

    getset_cmd()
        .args(["getters", "--force"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("getCount()"));
}

#[test]
fn reads_stdin() {
    let (tmp, _file) = project(ENTITY);

    getset_cmd()
        .current_dir(tmp.path())
        .args(["getters", "-"])
        .write_stdin(ENTITY)
        .assert()
        .success()
        .stdout(predicate::str::contains("    public function getCount()"));
}

#[test]
fn write_refuses_stdin() {
    let (tmp, _file) = project(ENTITY);

    getset_cmd()
        .current_dir(tmp.path())
        .args(["getters", "--write"])
        .write_stdin(ENTITY)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--write needs a file"));
}

#[test]
fn list_as_json() {
    let (_tmp, file) = project(ENTITY);

    let output = getset_cmd()
        .args(["list", "--json"])
        .arg(&file)
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let members = value["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["name"], "count");
    assert_eq!(members[0]["visibility"], "private");
    assert_eq!(members[0]["type"], "int");
    assert_eq!(members[1]["description"], "The display name");
    assert!(value["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn templates_marks_active() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("getset.toml");
    fs::write(&config, "template = \"SnakeCase\"\n").unwrap();

    getset_cmd()
        .args(["templates", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("PSR2"))
        .stdout(predicate::str::contains("CamelCaseFluent"))
        .stdout(predicate::str::is_match(r"(?m)^\* SnakeCase\s+snakeCase$").unwrap());
}

#[test]
fn invalid_config_fails() {
    let (tmp, file) = project(ENTITY);
    fs::write(tmp.path().join("getset.toml"), "unknown_key = 1\n").unwrap();

    getset_cmd()
        .arg("getters")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load getset.toml"));
}
