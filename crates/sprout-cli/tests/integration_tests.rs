//! Integration tests for the `sprout` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch working directory with its own (initially empty) config file,
/// so the user's real configuration never leaks into a test.
struct Sandbox {
    dir: TempDir,
    config: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        Self::with_config("")
    }

    fn with_config(body: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("sprout.toml");
        fs::write(&config, body).unwrap();
        Self { dir, config }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn sprout(&self) -> Command {
        let mut cmd = Command::cargo_bin("sprout").unwrap();
        cmd.current_dir(self.path())
            .env("SPROUT_CONFIG", &self.config)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("sprout")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("sprout")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    Command::cargo_bin("sprout")
        .unwrap()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--kind"))
        .stdout(predicate::str::contains("--layout"))
        .stdout(predicate::str::contains("--no-git"));
}

#[test]
fn test_bare_new_creates_terraform_foo() {
    let sandbox = Sandbox::new();

    sandbox
        .sprout()
        .args(["new", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.tf"));

    let root = sandbox.path().join("foo");
    assert_eq!(
        sorted_names(&root),
        [
            "main.tf",
            "outputs.tf",
            "providers.tf",
            "variables.tf",
            "versions.tf"
        ]
    );
    assert_eq!(fs::metadata(root.join("main.tf")).unwrap().len(), 0);
}

#[test]
fn test_new_html_under_path() {
    let sandbox = Sandbox::new();
    fs::create_dir(sandbox.path().join("projects")).unwrap();

    sandbox
        .sprout()
        .args(["new", "site", "--kind", "web", "--path", "projects", "--no-git"])
        .assert()
        .success();

    let root = sandbox.path().join("projects/site");
    assert!(root.join("static/css/main.css").is_file());
    assert!(root.join("static/js/main.js").is_file());
    assert!(root.join("assets/images").is_dir());
    assert!(root.join("index.html").is_file());
}

#[test]
fn test_new_python_with_git() {
    if std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_err()
    {
        eprintln!("git not installed, skipping");
        return;
    }
    let sandbox = Sandbox::new();

    sandbox
        .sprout()
        .args(["new", "app", "--kind", "python", "--baseline-files"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git repository initialised"));

    let root = sandbox.path().join("app");
    assert!(root.join(".git").is_dir());
    assert!(root.join("src/__init__.py").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("README.md").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let sandbox = Sandbox::new();

    sandbox
        .sprout()
        .args(["new", "preview", "--kind", "html", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would scaffold"))
        .stdout(predicate::str::contains("index.html"));

    assert!(!sandbox.path().join("preview").exists());
}

#[test]
fn test_rerun_succeeds_and_reports_existing() {
    let sandbox = Sandbox::new();
    sandbox.sprout().args(["new", "--no-git"]).assert().success();

    sandbox
        .sprout()
        .args(["new", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_missing_base_is_reported_but_exits_zero() {
    let sandbox = Sandbox::new();

    sandbox
        .sprout()
        .args(["new", "--no-git", "--path", "does/not/exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parent missing"));

    assert!(!sandbox.path().join("does").exists());
}

#[test]
fn test_custom_layout_from_config() {
    let sandbox = Sandbox::with_config(
        r#"
[layouts.docs]
description = "AsciiDoc book"
dirs = ["chapters"]
files = ["book.adoc", "chapters/intro.adoc"]
"#,
    );

    sandbox
        .sprout()
        .args(["new", "manual", "--layout", "docs", "--no-git"])
        .assert()
        .success();

    assert!(sandbox.path().join("manual/chapters/intro.adoc").is_file());
    assert!(sandbox.path().join("manual/book.adoc").is_file());
}

#[test]
fn test_config_defaults_apply() {
    let sandbox = Sandbox::with_config("[defaults]\nroot_name = \"web\"\nkind = \"html\"\n");

    sandbox.sprout().args(["new", "--no-git"]).assert().success();

    assert!(sandbox.path().join("web/index.html").is_file());
}

#[test]
fn test_environment_overrides_config_file() {
    let sandbox = Sandbox::with_config("[defaults]\nkind = \"terraform\"\n");

    sandbox
        .sprout()
        .env("SPROUT_DEFAULTS__KIND", "python")
        .args(["new", "--no-git"])
        .assert()
        .success();

    assert!(sandbox.path().join("foo/main.py").is_file());
}

#[test]
fn test_json_output_is_a_report() {
    let sandbox = Sandbox::new();

    let assert = sandbox
        .sprout()
        .args(["--output-format", "json", "new", "--no-git"])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["blueprint"], "terraform");
    assert_eq!(report["root_outcome"]["status"], "created");
    assert_eq!(report["files"].as_array().unwrap().len(), 5);
    assert_eq!(report["vcs"]["status"], "skipped");
}

#[test]
fn test_list_names() {
    let sandbox = Sandbox::with_config(
        r#"
[layouts.docs]
dirs = ["pages"]
files = ["pages/index.adoc"]
"#,
    );

    sandbox
        .sprout()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("terraform\npython\nhtml\ndocs\n");
}

#[test]
fn test_list_json() {
    let sandbox = Sandbox::new();

    let assert = sandbox
        .sprout()
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let layouts: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(layouts.as_array().unwrap().len(), 3);
    assert_eq!(layouts[0]["name"], "terraform");
    assert_eq!(layouts[0]["builtin"], true);
}

#[test]
fn test_check_passes_for_builtins() {
    let sandbox = Sandbox::new();

    sandbox
        .sprout()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("terraform"))
        .stdout(predicate::str::contains("html"));
}

#[test]
fn test_init_writes_loadable_config() {
    let sandbox = Sandbox::new();
    let target = sandbox.path().join("fresh/config.toml");

    sandbox
        .sprout()
        .arg("--config")
        .arg(&target)
        .args(["init"])
        .assert()
        .success();

    assert!(target.is_file());

    sandbox
        .sprout()
        .arg("--config")
        .arg(&target)
        .args(["config", "get", "defaults.root_name"])
        .assert()
        .success()
        .stdout("foo\n");
}

#[test]
fn test_config_get_reads_file() {
    let sandbox = Sandbox::with_config("[scaffold]\nbaseline_files = true\n");

    sandbox
        .sprout()
        .args(["config", "get", "scaffold.baseline_files"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_config_path_prints_active_file() {
    let sandbox = Sandbox::new();

    sandbox
        .sprout()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprout.toml"));
}

#[test]
fn test_completions_bash() {
    Command::cargo_bin("sprout")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprout"));
}

#[test]
fn test_cwd_files_outside_root_untouched() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.path().join("keep.txt"), "data").unwrap();

    sandbox.sprout().args(["new", "--no-git"]).assert().success();

    assert_eq!(
        fs::read_to_string(sandbox.path().join("keep.txt")).unwrap(),
        "data"
    );
    assert_eq!(sorted_names(sandbox.path()), ["foo", "keep.txt", "sprout.toml"]);
}

#[test]
fn test_no_color_accepts_any_truthy_value() {
    let sandbox = Sandbox::new();

    for value in ["1", "true", "yes"] {
        sandbox
            .sprout()
            .env("NO_COLOR", value)
            .args(["list", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("terraform"));
    }

    sandbox
        .sprout()
        .env("NO_COLOR", "0")
        .args(["new", "--no-git"])
        .assert()
        .success();
    assert!(sandbox.path().join("foo/main.tf").is_file());
}

#[test]
fn test_new_here_scaffolds_current_directory() {
    let sandbox = Sandbox::new();

    sandbox
        .sprout()
        .args(["new", "--here", "--kind", "html", "--no-git"])
        .assert()
        .success();

    assert!(sandbox.path().join("index.html").is_file());
    assert!(sandbox.path().join("static/css/main.css").is_file());
    assert!(!sandbox.path().join("foo").exists());
}

#[test]
fn test_new_here_under_path() {
    let sandbox = Sandbox::new();
    let infra = sandbox.path().join("infra");
    fs::create_dir(&infra).unwrap();
    fs::write(infra.join("notes.txt"), "keep").unwrap();

    sandbox
        .sprout()
        .args(["new", "--here", "--path", "infra", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(
        sorted_names(&infra),
        [
            "main.tf",
            "notes.txt",
            "outputs.tf",
            "providers.tf",
            "variables.tf",
            "versions.tf"
        ]
    );
    assert_eq!(fs::read_to_string(infra.join("notes.txt")).unwrap(), "keep");
}

#[test]
fn test_dry_run_sees_existing_root() {
    let sandbox = Sandbox::new();
    sandbox.sprout().args(["new", "--no-git"]).assert().success();

    sandbox
        .sprout()
        .args(["new", "--no-git", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
