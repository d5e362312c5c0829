//! CLI integration tests

use std::process::Command;

fn voicetask_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_voicetask"))
}

#[test]
fn help_output() {
    let output = voicetask_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("list"));
    assert!(stdout.contains("add"));
    assert!(stdout.contains("record"));
    assert!(stdout.contains("toggle"));
    assert!(stdout.contains("edit"));
    assert!(stdout.contains("delete"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--max-duration"));
}

#[test]
fn version_output() {
    let output = voicetask_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("voicetask"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("voicetask"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = voicetask_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_get_unknown_key() {
    let output = voicetask_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid keys"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let output = voicetask_bin()
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid keys"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_base_url() {
    let output = voicetask_bin()
        .args(["config", "set", "base_url", "not a url"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn config_set_rejects_non_http_scheme() {
    let output = voicetask_bin()
        .args(["config", "set", "base_url", "ftp://example.com"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("scheme"),
        "Expected error about scheme, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_max_duration() {
    let output = voicetask_bin()
        .args(["config", "set", "max_duration", "invalid"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn config_set_invalid_audio_cue() {
    let output = voicetask_bin()
        .args(["config", "set", "audio_cue", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") && stderr.contains("false"),
        "Expected error naming valid booleans, got: {}",
        stderr
    );
}

#[test]
fn config_list_without_file_shows_not_set() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("base_url"));
    assert!(stdout.contains("max_duration"));
    assert!(stdout.contains("audio_cue"));
    assert!(stdout.contains("(not set)"));
}

#[test]
fn config_init_then_get() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "base_url"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://127.0.0.1:5000"));
}

#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn invalid_max_duration_is_a_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("VOICETASK_BASE_URL")
        .args(["--max-duration", "invalid", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid max-duration"),
        "Expected error about invalid max-duration, got: {}",
        stderr
    );
}

#[test]
fn list_against_unreachable_backend_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("VOICETASK_BASE_URL")
        // Nothing listens on port 1
        .args(["-u", "http://127.0.0.1:1", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Request failed") || stderr.contains("failed"),
        "Expected a request failure message, got: {}",
        stderr
    );
}

#[test]
fn base_url_env_variable_is_honored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voicetask_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("VOICETASK_BASE_URL", "http://127.0.0.1:1")
        .arg("list")
        .output()
        .expect("Failed to execute command");

    // Honoring the env var means trying (and failing) to reach that origin
    assert_eq!(output.status.code(), Some(1));
}
