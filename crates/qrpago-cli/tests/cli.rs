//! End-to-end tests for the qrpago binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn qrpago() -> Command {
    Command::cargo_bin("qrpago").unwrap()
}

#[test]
fn decode_prints_merchant_summary() {
    qrpago()
        .args(["decode", "5907Jon Doe6004Cali"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jon Doe"))
        .stdout(predicate::str::contains("Cali"));
}

#[test]
fn decode_json_output() {
    qrpago()
        .args(["decode", "--format", "json", "5907Jon Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unknown\""))
        .stdout(predicate::str::contains("\"Jon Doe\""));
}

#[test]
fn decode_garbage_still_succeeds() {
    qrpago()
        .args(["decode", "590A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No encontrado"));
}

#[test]
fn decode_reads_stdin() {
    qrpago()
        .args(["decode", "-"])
        .write_stdin("5907Jon Doe\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jon Doe"));
}

#[test]
fn gen_writes_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("code.png");
    qrpago()
        .args(["gen", "hola mundo", "--output"])
        .arg(&out)
        .assert()
        .success();
    assert!(out.exists());
}
