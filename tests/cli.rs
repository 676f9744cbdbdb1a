use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn totion(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("totion").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CACHE_HOME", home.join(".cache"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_version() {
    let home = TempDir::new().unwrap();
    totion(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "totion {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn help_lists_key_bindings() {
    let home = TempDir::new().unwrap();
    totion(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ctrl+N new"));
}

#[cfg(unix)]
#[test]
fn unusable_storage_directory_fails_startup() {
    let home = TempDir::new().unwrap();
    // A plain file where the storage directory should be.
    std::fs::write(home.path().join(".totion"), "in the way").unwrap();

    totion(home.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Storage directory unavailable"));
}

#[cfg(target_os = "linux")]
#[test]
fn storage_is_prepared_before_requiring_a_terminal() {
    let home = TempDir::new().unwrap();

    totion(home.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));

    assert!(home.path().join(".totion").is_dir());
    assert!(home.path().join(".cache/totion/totion.log").is_file());
}
