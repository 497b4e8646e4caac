use predicates::prelude::*;

use crate::common::{Fixture, stream_wc};

#[test]
fn missing_file_is_reported_and_others_still_counted() {
    let fx = Fixture::new(&[("a.txt", "one two\n"), ("b.txt", "three\n")]);
    fx.command()
        .args(["a.txt", "missing.txt", "b.txt"])
        .assert()
        .failure()
        .stdout(" 1  2  8 a.txt\n 1  1  6 b.txt\n 2  3 14 total\n")
        .stderr(predicate::str::contains("stream_wc: missing.txt:"));
}

#[test]
fn invalid_utf8_is_excluded_from_total() {
    let fx = Fixture::new(&[("good.txt", "fine\n")]);
    fx.write_bytes("bad.txt", b"caf\xE9 au lait\n");
    fx.command()
        .args(["good.txt", "bad.txt"])
        .assert()
        .failure()
        .stdout("1 1 5 good.txt\n")
        .stderr(predicate::str::contains("bad.txt").and(predicate::str::contains("invalid UTF-8")));
}

#[test]
fn strict_mode_prints_nothing_after_failure() {
    let fx = Fixture::new(&[("good.txt", "fine\n")]);
    fx.write_bytes("bad.txt", b"\xFF");
    fx.command()
        .args(["--strict", "good.txt", "bad.txt"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("bad.txt"));
}

#[test]
fn directory_argument_fails() {
    let fx = Fixture::new(&[]);
    fx.command().arg(".").assert().failure().stderr(predicate::str::contains("stream_wc: .:"));
}

#[test]
fn zero_chunk_size_is_rejected_by_parser() {
    let fx = Fixture::new(&[]);
    fx.command().args(["--chunk-size", "0"]).assert().failure();
}

#[test]
fn truncated_character_at_end_fails() {
    let fx = Fixture::new(&[]);
    fx.write_bytes("t.txt", b"ok \xE6\x97");
    fx.command()
        .arg("t.txt")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("incomplete UTF-8"));
}

#[test]
fn each_failure_is_reported_once() {
    let fx = Fixture::new(&[("good.txt", "fine\n")]);
    fx.write_bytes("bad.txt", b"caf\xE9 au lait\n");
    fx.command()
        .env_remove("RUST_LOG")
        .args(["good.txt", "bad.txt"])
        .assert()
        .failure()
        .stdout("1 1 5 good.txt\n")
        .stderr("stream_wc: bad.txt: invalid UTF-8 sequence of 1 byte(s) at byte offset 3\n");
}

#[test]
fn strict_stdin_failure_names_standard_input() {
    stream_wc()
        .env_remove("RUST_LOG")
        .arg("--strict")
        .write_stdin(&b"\xFF"[..])
        .assert()
        .failure()
        .stdout("")
        .stderr("stream_wc: standard input: invalid UTF-8 sequence of 1 byte(s) at byte offset 0\n");
}

#[test]
fn stdin_failure_uses_same_name_without_strict() {
    stream_wc()
        .env_remove("RUST_LOG")
        .write_stdin(&b"\xFF"[..])
        .assert()
        .failure()
        .stdout("")
        .stderr("stream_wc: standard input: invalid UTF-8 sequence of 1 byte(s) at byte offset 0\n");
}
