use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn no_arguments_prints_usage_and_fails() {
    cargo_bin_cmd!("markdown2html")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn one_argument_prints_usage_and_fails() {
    cargo_bin_cmd!("markdown2html")
        .arg("README.md")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.md");
    let output = dir.path().join("out.html");

    cargo_bin_cmd!("markdown2html")
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("Missing {}", input.display())));

    assert!(!output.exists());
}

#[test]
fn converts_readme() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("README.html");
    fs::write(
        &input,
        "# My Project\n\nSome intro.\n\n## Features\n- fast\n- small  \n####### nope\n",
    )
    .unwrap();

    cargo_bin_cmd!("markdown2html")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<h1>My Project</h1>\n\nSome intro.\n\n<h2>Features</h2>\n<ul>\n<li>fast</li>\n<li>small</li>\n</ul>\n####### nope\n"
    );
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    fs::write(&input, "- only\n").unwrap();
    fs::write(&output, "stale content that is much longer than the new output\n").unwrap();

    cargo_bin_cmd!("markdown2html")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<ul>\n<li>only</li>\n</ul>\n"
    );
}

#[test]
fn empty_input_gives_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.md");
    let output = dir.path().join("empty.html");
    fs::write(&input, "").unwrap();

    cargo_bin_cmd!("markdown2html")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    fs::write(&input, "# Hi\n").unwrap();

    cargo_bin_cmd!("markdown2html")
        .arg(&input)
        .arg(&output)
        .arg("extra")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<h1>Hi</h1>\n");
}

#[test]
fn extra_flag_like_arguments_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    fs::write(&input, "- a\n").unwrap();

    cargo_bin_cmd!("markdown2html")
        .arg(&input)
        .arg(&output)
        .arg("--foo")
        .arg("-x")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<ul>\n<li>a</li>\n</ul>\n"
    );
}

#[test]
fn invalid_utf8_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.md");
    let output = dir.path().join("out.html");
    fs::write(&input, [0xffu8, 0xfe, b'\n']).unwrap();

    cargo_bin_cmd!("markdown2html")
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: Failed to read"));
}

#[test]
fn help_exits_successfully() {
    cargo_bin_cmd!("markdown2html")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}
