use predicates::prelude::*;

use crate::common::{Fixture, stream_wc};

#[test]
fn shows_help() {
    stream_wc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stream_wc"));
}

#[test]
fn counts_stdin_without_name() {
    stream_wc()
        .write_stdin("hello world\n\n")
        .assert()
        .success()
        .stdout("2 2 13\n");
}

#[test]
fn dash_reads_stdin() {
    stream_wc()
        .arg("-")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("0 1 5\n");
}

#[test]
fn single_file_has_no_total() {
    let fx = Fixture::new(&[("a.txt", "hello\n")]);
    fx.command()
        .arg("a.txt")
        .assert()
        .success()
        .stdout("1 1 6 a.txt\n");
}

#[test]
fn multiple_files_append_total() {
    let fx = Fixture::new(&[("a.txt", "hello\n"), ("b.txt", "hello world\n\n")]);
    fx.command()
        .args(["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(" 1  1  6 a.txt\n 2  2 13 b.txt\n 3  3 19 total\n");
}

#[test]
fn column_flags_select_counts() {
    let fx = Fixture::new(&[("a.txt", "日本語 text\n")]);
    fx.command()
        .args(["-w", "-m", "a.txt"])
        .assert()
        .success()
        .stdout("2 9 a.txt\n");
}

#[test]
fn json_output_is_parseable() {
    let fx = Fixture::new(&[("a.txt", "one\n"), ("b.txt", "two three")]);
    let output = fx
        .command()
        .args(["--format", "json", "a.txt", "b.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert_eq!(json["total"]["words"], 3);
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn tiny_chunk_size_gives_same_counts() {
    let fx = Fixture::new(&[("u.txt", "😀 é 語\nxyz\n")]);
    fx.command()
        .args(["--chunk-size", "1b", "u.txt"])
        .assert()
        .success()
        .stdout(" 2  4 10 u.txt\n");
}
