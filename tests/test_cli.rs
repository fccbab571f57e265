use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[allow(deprecated)]
fn rpawogen_cmd() -> Command {
    Command::cargo_bin("rpawogen").unwrap()
}

#[test]
fn help_works() {
    rpawogen_cmd().arg("--help").assert().success();
}

#[test]
fn gen_prints_lowercase_password_by_default() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    rpawogen_cmd()
        .arg("--config")
        .arg(&settings)
        .args(["gen", "--seed", "7", "-l", "5", "--no-strength"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Generated password: [a-z]{5}\n$").unwrap());
}

#[test]
fn gen_with_seed_is_reproducible() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    let run = || {
        rpawogen_cmd()
            .arg("--config")
            .arg(&settings)
            .args(["gen", "--seed", "123", "--all", "-l", "20", "--no-strength"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn gen_rejects_out_of_range_length() {
    let dir = tempdir().unwrap();
    rpawogen_cmd()
        .arg("--config")
        .arg(dir.path().join("settings.json"))
        .args(["gen", "-l", "21"])
        .assert()
        .failure();
}

#[test]
fn config_show_prints_defaults() {
    let dir = tempdir().unwrap();
    rpawogen_cmd()
        .arg("--config")
        .arg(dir.path().join("settings.json"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""length": 10"#));
}

#[test]
fn config_reset_writes_defaults() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    std::fs::write(&settings, r#"{ "length": 16, "classes": ["symbols"] }"#).unwrap();

    rpawogen_cmd()
        .arg("--config")
        .arg(&settings)
        .args(["config", "reset"])
        .assert()
        .success();

    let saved = rpawogen::configtool::Settings::load_from(&settings).unwrap();
    assert_eq!(saved, rpawogen::configtool::Settings::default());

    rpawogen_cmd()
        .arg("--config")
        .arg(&settings)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""length": 10"#))
        .stdout(predicate::str::contains(r#""lowercase""#));
}
