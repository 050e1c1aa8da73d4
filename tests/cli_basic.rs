//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, each subcommand
//! responds to `--help`, and the offline validation paths fail before any
//! network or process call would be made.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `yukkurigen` binary with a clean env.
fn yukkurigen() -> Command {
    let mut cmd = Command::cargo_bin("yukkurigen").expect("binary 'yukkurigen' should be built");
    cmd.env_remove("VOICEVOX_HOST")
        .env_remove("VOICEVOX_PORT")
        .env_remove("VOICE_ID");
    cmd
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    yukkurigen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: yukkurigen"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("voices"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn version_flag_shows_semver() {
    yukkurigen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^yukkurigen \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    yukkurigen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: yukkurigen"));
}

#[test]
fn invalid_subcommand_fails() {
    yukkurigen()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── Subcommand help ─────────────────────────────────────────────────────────

#[test]
fn generate_help() {
    yukkurigen()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate a narrated video"))
        .stdout(predicate::str::contains("<TOPIC>"))
        .stdout(predicate::str::contains("--voice-id"))
        .stdout(predicate::str::contains("--background"))
        .stdout(predicate::str::contains("--char"))
        .stdout(predicate::str::contains("--no-subtitles"))
        .stdout(predicate::str::contains("--high-quality"));
}

#[test]
fn voices_help() {
    yukkurigen()
        .args(["voices", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List speaker styles"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn doctor_help() {
    yukkurigen()
        .args(["doctor", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ffmpeg"))
        .stdout(predicate::str::contains("VOICEVOX"));
}

// ─── Subcommand argument validation ──────────────────────────────────────────

#[test]
fn generate_missing_topic_fails() {
    yukkurigen()
        .args(["generate", "--background", "bg.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<TOPIC>"));
}

#[test]
fn generate_missing_background_fails() {
    yukkurigen()
        .args(["generate", "some topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--background"));
}

#[test]
fn generate_invalid_voice_id_fails() {
    yukkurigen()
        .args([
            "generate",
            "topic",
            "--background",
            "bg.png",
            "--voice-id",
            "zunda",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─── Offline validation paths (no server, no ffmpeg needed) ─────────────────

#[test]
fn generate_empty_topic_fails_before_any_call() {
    yukkurigen()
        .args(["generate", "   ", "--background", "bg.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("topic must not be empty"));
}

#[test]
fn generate_missing_background_file_fails_before_any_call() {
    yukkurigen()
        .args([
            "generate",
            "topic",
            "--background",
            "/definitely/not/here.png",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("asset not found"));
}
