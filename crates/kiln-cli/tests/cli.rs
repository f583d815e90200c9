//! End-to-end tests for the kiln binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const ENV_KEYS: &[&str] = &[
    "KILN_ENTRY",
    "KILN_OUTPUT__PATH",
    "KILN_OUTPUT__PUBLIC_PATH",
    "KILN_OUTPUT__FILENAME",
    "KILN_OUTPUT__CONTENT_BASE",
    "KILN_PROFILE",
    "KILN_LOG",
    "RUST_LOG",
    "FORCE_COLOR",
];

/// A kiln command running in `dir` with a clean environment.
fn kiln(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("kiln");
    cmd.current_dir(dir).env("NO_COLOR", "1");
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

fn write(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

const PROFILED_CONFIG: &str = r#"
entry = "./src/main.js"

[output]
publicPath = "/static/"

[profiles.production.output]
filename = "[name].min.js"
publicPath = "https://cdn.example.com/"

[profiles.development.output]
path = "./dev"
"#;

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("profiles"));
}

#[test]
fn version_prints_package_version() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// show
// =============================================================================

#[test]
fn show_without_config_prints_builtin_values() {
    let temp = TempDir::new().unwrap();
    let stdout = stdout_of(kiln(temp.path()).arg("show"));

    insta::assert_snapshot!(stdout.trim_end(), @r#"
{
  "entry": "./src/app.js",
  "output": {
    "path": "./bin",
    "publicPath": "/assets/",
    "filename": "app.bundle.js",
    "contentBase": "./public"
  }
}
"#);
}

#[test]
fn show_toml_format() {
    let temp = TempDir::new().unwrap();
    let stdout = stdout_of(kiln(temp.path()).args(["show", "--format", "toml"]));

    insta::assert_snapshot!(stdout.trim_end(), @r#"
entry = "./src/app.js"

[output]
path = "./bin"
publicPath = "/assets/"
filename = "app.bundle.js"
contentBase = "./public"
"#);
}

#[test]
fn show_merges_file_over_builtin_values() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "kiln.toml", PROFILED_CONFIG);

    let stdout = stdout_of(kiln(temp.path()).arg("show"));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["entry"], "./src/main.js");
    assert_eq!(value["output"]["publicPath"], "/static/");
    assert_eq!(value["output"]["path"], "./bin");
    assert!(value.get("profiles").is_none());
}

#[test]
fn show_applies_profile() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "kiln.toml", PROFILED_CONFIG);

    let stdout = stdout_of(kiln(temp.path()).args(["show", "--profile", "production"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["entry"], "./src/main.js");
    assert_eq!(value["output"]["filename"], "[name].min.js");
    assert_eq!(value["output"]["publicPath"], "https://cdn.example.com/");
}

#[test]
fn show_reads_profile_from_env() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "kiln.toml", PROFILED_CONFIG);

    let stdout = stdout_of(kiln(temp.path()).env("KILN_PROFILE", "development").arg("show"));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["output"]["path"], "./dev");
}

#[test]
fn flags_override_env_and_file() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "kiln.toml", PROFILED_CONFIG);

    let stdout = stdout_of(
        kiln(temp.path())
            .env("KILN_OUTPUT__PUBLIC_PATH", "/env/")
            .env("KILN_ENTRY", "./env.js")
            .args(["show", "--public-path", "/flag/"]),
    );
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["entry"], "./env.js");
    assert_eq!(value["output"]["publicPath"], "/flag/");
}

#[test]
fn numeric_looking_env_values_are_strings() {
    let temp = TempDir::new().unwrap();

    let stdout = stdout_of(
        kiln(temp.path())
            .env("KILN_OUTPUT__FILENAME", "123")
            .env("KILN_OUTPUT__PATH", "2024")
            .arg("show"),
    );
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["output"]["filename"], "123");
    assert_eq!(value["output"]["path"], "2024");
}

#[test]
fn no_env_ignores_kiln_variables() {
    let temp = TempDir::new().unwrap();

    let stdout = stdout_of(
        kiln(temp.path())
            .env("KILN_ENTRY", "./env.js")
            .args(["show", "--no-env"]),
    );
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["entry"], "./src/app.js");
}

#[test]
fn show_resolved_anchors_to_root() {
    let temp = TempDir::new().unwrap();
    let stdout = stdout_of(kiln(temp.path()).args([
        "show",
        "--resolved",
        "--root",
        "web",
        "--filename",
        "[name].js",
    ]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let root = temp.path().join("web");
    assert_eq!(value["filename"], "main.js");
    assert_eq!(
        value["bundlePath"],
        root.join("bin").join("main.js").display().to_string()
    );
    assert_eq!(value["bundleUrl"], "/assets/main.js");
}

#[test]
fn show_unknown_profile_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "kiln.toml", PROFILED_CONFIG);

    kiln(temp.path())
        .args(["show", "--profile", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile 'staging' not found"));
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "kiln.config.json", r#"{ "entry": "./a.js", "mode": "production" }"#);

    kiln(temp.path()).arg("show").assert().failure();
}

#[test]
fn package_json_field_is_used() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "package.json",
        r#"{ "name": "site", "kiln": { "output": { "filename": "site.js" } } }"#,
    );

    let stdout = stdout_of(kiln(temp.path()).arg("show"));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["output"]["filename"], "site.js");
    assert_eq!(value["entry"], "./src/app.js");
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_passes_for_builtin_values() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid"));
}

#[test]
fn quiet_check_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["-q", "check"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn check_rejects_public_path_without_slash() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["check", "--public-path", "/assets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("publicPath"));
}

#[test]
fn check_fs_reports_missing_entry() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["check", "--fs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry file not found"));
}

#[test]
fn init_then_check_fs() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path()).arg("init").assert().success();
    assert!(temp.path().join("kiln.toml").is_file());

    write(temp.path(), "src/app.js", "export {};\n");
    fs::create_dir_all(temp.path().join("public")).unwrap();

    kiln(temp.path()).args(["check", "--fs"]).assert().success();
}

// =============================================================================
// init
// =============================================================================

#[test]
fn init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "kiln.config.json", "{}");

    kiln(temp.path())
        .args(["init", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to overwrite"));

    kiln(temp.path())
        .args(["init", "--format", "json", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("kiln.config.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["output"]["contentBase"], "./public");
}

// =============================================================================
// profiles & schema
// =============================================================================

#[test]
fn profiles_lists_names_in_file_order() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "kiln.toml", PROFILED_CONFIG);

    kiln(temp.path())
        .arg("profiles")
        .assert()
        .success()
        .stdout("production\ndevelopment\n");
}

#[test]
fn profiles_without_config_fails() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .arg("profiles")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config not found"));
}

#[test]
fn schema_is_json() {
    let temp = TempDir::new().unwrap();
    let stdout = stdout_of(kiln(temp.path()).arg("schema"));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value["properties"]["output"].is_object());
}
