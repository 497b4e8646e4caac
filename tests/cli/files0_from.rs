use predicates::prelude::*;

use crate::common::Fixture;

#[test]
fn reads_names_from_list_file() {
    let fx = Fixture::new(&[
        ("a.txt", "alpha\n"),
        ("b c.txt", "beta gamma\n"),
        ("list", "a.txt\0b c.txt\0"),
    ]);
    fx.command()
        .args(["--files0-from", "list"])
        .assert()
        .success()
        .stdout(" 1  1  6 a.txt\n 1  2 11 b c.txt\n 2  3 17 total\n");
}

#[test]
fn reads_names_from_stdin_list() {
    let fx = Fixture::new(&[("a.txt", "alpha\n")]);
    fx.command()
        .args(["--files0-from", "-"])
        .write_stdin(fx.path("a.txt").display().to_string())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 1 6 "));
}

#[test]
fn missing_list_file_fails() {
    let fx = Fixture::new(&[]);
    fx.command()
        .args(["--files0-from", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read file list"));
}

#[test]
fn list_conflicts_with_positional_paths() {
    let fx = Fixture::new(&[("list", "")]);
    fx.command().args(["--files0-from", "list", "a.txt"]).assert().failure();
}
