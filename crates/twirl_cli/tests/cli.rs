//! Integration tests: run the `twirl` binary in an isolated home directory.

use std::process::{Command, Output};

fn twirl(home: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_twirl"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("TWIRL_PRESET")
        .env_remove("TWIRL_COLOR")
        .env_remove("TWIRL_INTERVAL_MS")
        .env_remove("TWIRL_MESSAGE")
        .env_remove("TWIRL_OUTPUT")
        .env_remove("TWIRL_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run twirl")
}

#[test]
fn presets_json_lists_every_preset() {
    let home = tempfile::TempDir::new().unwrap();
    let out = twirl(home.path(), &["presets", "--output", "json"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let items = value["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 17);
    assert!(items.iter().any(|i| i["name"] == "bouncing-bar"));
}

#[test]
fn frames_prints_catalog() {
    let home = tempfile::TempDir::new().unwrap();
    let out = twirl(home.path(), &["frames", "circle"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for glyph in ["◐", "◓", "◑", "◒"] {
        assert!(stdout.lines().any(|l| l == glyph), "missing {glyph}: {stdout}");
    }
}

#[test]
fn version_and_about_come_from_app_metadata() {
    let home = tempfile::TempDir::new().unwrap();
    let out = twirl(home.path(), &["--version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), format!("twirl {}", env!("CARGO_PKG_VERSION")));

    let out = twirl(home.path(), &["--help"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Single-line animated terminal spinners"), "stdout: {stdout}");
}

#[test]
fn unknown_preset_fails_with_message() {
    let home = tempfile::TempDir::new().unwrap();
    let out = twirl(home.path(), &["frames", "spiral"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown preset"), "stderr: {stderr}");
}

#[test]
fn spin_hides_then_restores_cursor() {
    let home = tempfile::TempDir::new().unwrap();
    let out = twirl(
        home.path(),
        &["spin", "--preset", "simple", "--seconds", "0.3", "--color", "none", "--progress"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let hide = stdout.find("\x1b[?25l").unwrap();
    let show = stdout.rfind("\x1b[?25h").unwrap();
    assert!(hide < show);
    assert!(stdout.contains("0%"));
    assert!(stdout.contains("Done!"));
}

#[test]
fn spin_reads_home_config() {
    let home = tempfile::TempDir::new().unwrap();
    let dir = home.path().join(".twirl");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "preset = \"diamond\"\ncolor = \"none\"\nmessage = \"from config\"\n",
    )
    .unwrap();
    let out = twirl(home.path(), &["spin", "--seconds", "0.2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("♦ From config..."), "stdout: {stdout:?}");
}

#[test]
fn bad_config_file_is_reported() {
    let home = tempfile::TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    std::fs::write(&path, "interval_ms = 0\n").unwrap();
    let out = twirl(
        home.path(),
        &["spin", "--config", path.to_str().unwrap(), "--seconds", "0.1"],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("interval_ms"), "stderr: {stderr}");
}
