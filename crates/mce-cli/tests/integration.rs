//! Integration tests for the mce binary

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PACKAGE_JSON: &str = r#"{
  "name": "tinymce-example-plugin",
  "version": "1.0.0",
  "description": "Example TinyMCE plugin",
  "main": "dist/plugins/example/plugin.min.js",
  "scripts": {
    "build": "rollup -c"
  },
  "license": "MIT"
}
"#;

/// Temporary project root with its own HOME so the log file stays inside it
struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> io::Result<Self> {
        let dir = TempDir::new()?;
        fs::create_dir_all(dir.path().join("home"))?;
        Ok(Project { dir })
    }

    fn with_manifest() -> io::Result<Self> {
        let project = Self::new()?;
        fs::write(project.path().join("package.json"), PACKAGE_JSON)?;
        Ok(project)
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn add_entry(&self, plugin: &str, entry: &str) -> io::Result<()> {
        let path: PathBuf = self.path().join("src/plugins").join(plugin).join(entry);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, "export default () => {};\n")
    }

    fn manifest(&self) -> String {
        fs::read_to_string(self.path().join("package.json")).unwrap_or_default()
    }

    fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mce");
        cmd.env("HOME", self.path().join("home"))
            .env_remove("MCE_CONFIG")
            .env_remove("NODE_ENV")
            .env_remove("RUST_LOG")
            .arg("--root")
            .arg(self.path());
        cmd
    }
}

#[test]
fn test_version() {
    cargo_bin_cmd!("mce")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mce"));
}

#[test]
fn test_help() {
    cargo_bin_cmd!("mce")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("update-exports"));
}

#[test]
fn test_invalid_command() {
    cargo_bin_cmd!("mce").arg("invalid").assert().failure();
}

#[test]
fn test_update_exports_mixed_dialects() -> io::Result<()> {
    let project = Project::with_manifest()?;
    project.add_entry("alpha", "main/js/Main.js")?;
    project.add_entry("beta", "main/ts/Main.ts")?;

    project
        .command()
        .arg("update-exports")
        .assert()
        .success()
        .stderr(predicate::str::contains("Updated package.json exports:"))
        .stdout(predicate::str::contains(
            r#""./alpha/js": "./dist/plugins/alpha/plugin.min.js""#,
        ))
        .stdout(predicate::str::contains(
            r#""./beta/ts": "./dist/plugins/beta/plugin-ts.min.js""#,
        ));

    let manifest: serde_json::Value =
        serde_json::from_str(&project.manifest()).unwrap_or_default();
    let keys: Vec<&str> = manifest["exports"]
        .as_object()
        .map(|e| e.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys, vec![".", "./alpha", "./alpha/js", "./beta/ts"]);
    assert_eq!(
        manifest["exports"]["."],
        "./dist/plugins/alpha/plugin.min.js"
    );
    assert_eq!(manifest["main"], "dist/plugins/alpha/plugin.min.js");
    assert_eq!(manifest["scripts"]["build"], "rollup -c");
    assert_eq!(manifest["license"], "MIT");
    Ok(())
}

#[test]
fn test_no_subcommand_runs_update_exports() -> io::Result<()> {
    let project = Project::with_manifest()?;
    project.add_entry("example", "main/js/Main.js")?;

    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""./example": "#));
    assert!(project.manifest().contains("\"exports\""));
    Ok(())
}

#[test]
fn test_update_exports_is_idempotent() -> io::Result<()> {
    let project = Project::with_manifest()?;
    project.add_entry("alpha", "main/js/Main.js")?;
    project.add_entry("alpha", "main/ts/Main.ts")?;

    project.command().assert().success();
    let first = project.manifest();
    project.command().assert().success();
    assert_eq!(first, project.manifest());
    assert!(first.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_missing_plugins_dir_falls_back_to_default() -> io::Result<()> {
    let project = Project::with_manifest()?;

    project
        .command()
        .assert()
        .success()
        .stderr(predicate::str::contains("Plugins directory not found"))
        .stdout(predicate::str::contains(
            r#"".": "./dist/plugins/example/plugin.min.js""#,
        ));
    Ok(())
}

#[test]
fn test_plugins_path_is_a_file_warns() -> io::Result<()> {
    let project = Project::with_manifest()?;
    fs::create_dir_all(project.path().join("src"))?;
    fs::write(project.path().join("src/plugins"), "not a directory")?;

    project
        .command()
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not scan plugins directory"))
        .stdout(predicate::str::contains(
            r#"".": "./dist/plugins/example/plugin.min.js""#,
        ));
    Ok(())
}

#[test]
fn test_missing_manifest_exits_with_error() -> io::Result<()> {
    let project = Project::new()?;
    project.add_entry("alpha", "main/js/Main.js")?;

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to update package.json exports:",
        ))
        .stderr(predicate::str::contains("Log file:"));
    assert!(!project.path().join("package.json").exists());
    Ok(())
}

#[test]
fn test_invalid_manifest_exits_with_error() -> io::Result<()> {
    let project = Project::new()?;
    fs::write(project.path().join("package.json"), "not json")?;

    project.command().assert().failure().code(1);
    assert_eq!(project.manifest(), "not json");
    Ok(())
}

#[test]
fn test_list_json() -> io::Result<()> {
    let project = Project::new()?;
    project.add_entry("beta", "main/ts/Main.ts")?;
    project.add_entry("alpha", "main/js/Main.js")?;
    fs::create_dir_all(project.path().join("src/plugins/empty"))?;

    let output = project.command().args(["list", "--json"]).output()?;
    assert!(output.status.success());
    let plugins: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap_or_default();
    assert_eq!(
        plugins,
        serde_json::json!([
            {"name": "alpha", "has_js": true, "has_ts": false},
            {"name": "beta", "has_js": false, "has_ts": true}
        ])
    );
    Ok(())
}

#[test]
fn test_bundle_config_production() -> io::Result<()> {
    let project = Project::new()?;
    project.add_entry("example", "main/js/Main.js")?;
    project.add_entry("example", "main/ts/Main.ts")?;

    let output = project
        .command()
        .args(["bundle-config", "--production"])
        .output()?;
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap_or_default();
    let records = records.as_array().cloned().unwrap_or_default();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0]["outputPaths"],
        serde_json::json!([
            "dist/plugins/example/plugin.min.js",
            "demo/public/dist/plugins/example/plugin.min.js"
        ])
    );
    assert_eq!(records[1]["banner"], "/*! TinyMCE Example Plugin (TypeScript) */");
    assert_eq!(
        records
            .iter()
            .filter(|r| r.get("cleanTargets").is_some())
            .count(),
        1
    );
    Ok(())
}

#[test]
fn test_bundle_config_respects_node_env() -> io::Result<()> {
    let project = Project::new()?;
    project.add_entry("example", "main/js/Main.js")?;

    project
        .command()
        .env("NODE_ENV", "production")
        .arg("bundle-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugin.min.js"))
        .stdout(predicate::str::contains("\"isMinified\": true"));
    Ok(())
}

#[test]
fn test_clean_requires_confirmation() -> io::Result<()> {
    let project = Project::new()?;
    let bundle = project.path().join("dist/plugins/example/plugin.js");
    fs::create_dir_all(project.path().join("dist/plugins/example"))?;
    fs::write(&bundle, "(function () {})();")?;

    project
        .command()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    assert!(bundle.exists());

    project.command().args(["clean", "--yes"]).assert().success();
    assert!(!bundle.exists());
    assert!(project.path().join("dist").is_dir());
    Ok(())
}

#[test]
fn test_config_set_changes_plugins_dir() -> io::Result<()> {
    let project = Project::with_manifest()?;
    let entry = project.path().join("plugins/custom/main/js/Main.js");
    if let Some(parent) = entry.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&entry, "")?;

    project
        .command()
        .args(["config", "set", "plugins-dir", "plugins"])
        .assert()
        .success();
    assert!(project.path().join("mce.toml").exists());

    project
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration:"))
        .stdout(predicate::str::contains("plugins"));

    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""./custom/js""#));
    Ok(())
}

#[test]
fn test_config_unknown_key_fails() -> io::Result<()> {
    let project = Project::new()?;
    project
        .command()
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
    Ok(())
}
