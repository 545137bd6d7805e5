//! CLI integration tests for base-rfc
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn base_rfc() -> Command {
    Command::cargo_bin("base-rfc").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base_rfc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RFC 4648"));
}

#[test]
fn test_version() {
    base_rfc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-rfc"));
}

#[test]
fn test_list_codecs() {
    base_rfc()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base64url"))
        .stdout(predicate::str::contains("crockford_check"))
        .stdout(predicate::str::contains("check symbol"));
}

// ============================================================================
// Encode/Decode
// ============================================================================

#[test]
fn test_encode_base64() {
    base_rfc()
        .args(["--encode", "base64"])
        .write_stdin("Hello World")
        .assert()
        .success()
        .stdout("SGVsbG8gV29ybGQ=\n");
}

#[test]
fn test_encode_uses_default_codec() {
    base_rfc()
        .write_stdin("Hello World")
        .assert()
        .success()
        .stdout("SGVsbG8gV29ybGQ=\n");
}

#[test]
fn test_decode_base64_with_wrapping() {
    base_rfc()
        .args(["--decode", "base64"])
        .write_stdin("SGVsbG8g\nV29ybGQ=\n")
        .assert()
        .success()
        .stdout("Hello World");
}

#[test]
fn test_encode_base16() {
    base_rfc()
        .args(["-e", "base16_lower"])
        .write_stdin(vec![0xDE, 0xAD, 0xBE, 0xEF])
        .assert()
        .success()
        .stdout("deadbeef\n");
}

#[test]
fn test_roundtrip_crockford_check() {
    let encoded = base_rfc()
        .args(["--encode", "crockford_check"])
        .write_stdin("hello")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_rfc()
        .args(["--decode", "crockford_check"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("hello");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decode_missing_padding_fails() {
    base_rfc()
        .args(["--decode", "base64"])
        .write_stdin("SGVsbG8gV29ybGQ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid padding"));
}

#[test]
fn test_decode_invalid_character_fails() {
    base_rfc()
        .args(["--decode", "base32"])
        .write_stdin("MZXW1===")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '1' at position 4"));
}

#[test]
fn test_decode_empty_input_fails() {
    base_rfc()
        .args(["--decode", "base16"])
        .write_stdin("  \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn test_unknown_codec_suggests() {
    base_rfc()
        .args(["--encode", "bas64"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'base64'?"));
}

#[test]
fn test_encode_and_decode_conflict() {
    base_rfc()
        .args(["--encode", "base64", "--decode", "base64"])
        .assert()
        .failure();
}
