//! Integration tests for the fugen CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn fugen() -> Command {
    Command::cargo_bin("fugen").unwrap()
}

#[test]
fn test_process_reference_sentence() {
    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-d")
        .arg(fixture_path("german-words.txt"))
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Jahresfeier\n  Jahr\n  feier"))
        .stdout(predicate::str::contains(
            "Rechtsanwaltskanzleien\n  Recht\n  anwalt\n  kanzlei",
        ))
        .stdout(predicate::str::contains("gekostet\n  gekosten"))
        .stdout(predicate::str::contains("Ökosteuer\n  Ökosteuer"));
}

#[test]
fn test_process_from_stdin() {
    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-d")
        .arg(fixture_path("german-words.txt"))
        .arg("-q")
        .write_stdin("Donaudampfschiff");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Donaudampfschiff\n  Donau\n  dampf\n  schiff",
        ));
}

#[test]
fn test_json_output() {
    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-d")
        .arg(fixture_path("german-words.txt"))
        .arg("-f")
        .arg("json")
        .arg("-q")
        .write_stdin("Jahresfeier");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let tokens = parsed.as_array().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0]["text"], "Jahresfeier");
    assert_eq!(tokens[0]["kind"], "original");
    assert_eq!(tokens[0]["position_increment"], 1);
    assert_eq!(tokens[1]["text"], "Jahr");
    assert_eq!(tokens[1]["kind"], "subword");
    assert_eq!(tokens[1]["position_increment"], 0);
    assert_eq!(tokens[2]["text"], "feier");
}

#[test]
fn test_keywords_are_respected() {
    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-d")
        .arg(fixture_path("german-words.txt"))
        .arg("-k")
        .arg(fixture_path("keywords.txt"))
        .arg("-q")
        .write_stdin("Schlüsselwort Bindestrichwort");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Schlüsselwort"))
        .stdout(predicate::str::contains("  Schlüssel").not())
        .stdout(predicate::str::contains("  Bindestrich"));
}

#[test]
fn test_disabling_keyword_respect() {
    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-d")
        .arg(fixture_path("german-words.txt"))
        .arg("-k")
        .arg(fixture_path("keywords.txt"))
        .arg("--no-respect-keywords")
        .arg("-q")
        .write_stdin("Schlüsselwort");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Schlüsselwort\n  Schlüssel\n  wort"));
}

#[test]
fn test_subwords_only() {
    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-d")
        .arg(fixture_path("german-words.txt"))
        .arg("--subwords-only")
        .arg("-q")
        .write_stdin("Jahresfeier");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Jahr"))
        .stdout(predicate::str::contains("Jahresfeier").not());
}

#[test]
fn test_output_to_file() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("expanded.txt");

    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-d")
        .arg(fixture_path("german-words.txt"))
        .arg("-o")
        .arg(&out_path)
        .arg("-q")
        .write_stdin("Jahresfeier");

    cmd.assert().success();
    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, "Jahresfeier\n  Jahr\n  feier\n");
}

#[test]
fn test_config_file_supplies_dictionary() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("fugen.toml");
    let dictionary = fs::canonicalize(fixture_path("german-words.txt")).unwrap();
    fs::write(
        &config_path,
        format!(
            "[engine]\ndictionary = {:?}\nmin_subword_len = 2\nkeywords = []\n\
             respect_keywords = true\nsubwords_only = false\n",
            dictionary
        ),
    )
    .unwrap();

    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-c")
        .arg(&config_path)
        .arg("-q")
        .write_stdin("Jahresfeier");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Jahresfeier\n  Jahr\n  feier"));
}

#[test]
fn test_missing_dictionary_fails() {
    let mut cmd = fugen();
    cmd.arg("process").arg("-q").write_stdin("Jahresfeier");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No dictionary given"));
}

#[test]
fn test_nonexistent_dictionary_fails() {
    let mut cmd = fugen();
    cmd.arg("process")
        .arg("-d")
        .arg("does-not-exist.txt")
        .arg("-q")
        .write_stdin("Jahresfeier");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Dictionary not found"));
}

#[test]
fn test_list_formats() {
    let mut cmd = fugen();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_list_connectors() {
    let mut cmd = fugen();
    cmd.arg("list").arg("connectors");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(none)"))
        .stdout(predicate::str::contains("-es-"));
}
