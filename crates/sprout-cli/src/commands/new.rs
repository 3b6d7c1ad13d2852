//! Implementation of the `sprout new` command.
//!
//! Responsibility: resolve the root name, blueprint and base directory from
//! flags and config, run the scaffold service, and display the report. No
//! business logic lives here.
//!
//! `--dry-run` scaffolds into a [`MemoryFilesystem`] seeded with whatever the
//! run would find on disk, so the preview reports the same outcomes.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use sprout_adapters::{GitCli, LocalFilesystem, MemoryFilesystem, RecordingVcs};
use sprout_core::{
    application::{Filesystem, LayoutService, ScaffoldRequest, ScaffoldService},
    domain::{
        Blueprint, DomainValidator, EntryKind, PathOutcome, PathReport, ScaffoldKind,
        ScaffoldReport, VcsOutcome,
    },
    error::SproutError,
};

use crate::{
    cli::{Kind, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sprout new` command.
///
/// Dispatch sequence:
/// 1. Resolve and validate the root name (none with `--here`)
/// 2. Resolve the blueprint (`--kind`, `--layout`, else `defaults.kind`)
/// 3. Resolve the base directory and the git / baseline / strict switches
/// 4. Run the scaffold against the real disk, or in memory for `--dry-run`
/// 5. Print the report; `--strict` turns any failure into an error
#[instrument(skip_all, fields(name = ?args.name, here = args.here, dry_run = args.dry_run))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Root name
    let name = if args.here {
        None
    } else {
        let name = args
            .name
            .clone()
            .unwrap_or_else(|| config.defaults.root_name.clone());
        DomainValidator::validate_root_name(&name).map_err(SproutError::from)?;
        Some(name)
    };

    // 2. Blueprint
    let layouts = super::layout_service(&config)?;
    let blueprint = resolve_blueprint(&args, &config, &layouts)?;

    // 3. Base directory and switches
    let base = resolve_base(args.path.as_deref())?;
    let options = RunOptions::resolve(&args, &config);

    let request = match &name {
        Some(name) => ScaffoldRequest::new(&base, name, blueprint),
        None => ScaffoldRequest::in_place(&base, blueprint),
    }
    .with_git(options.git)
    .with_baseline_files(options.baseline_files);

    // 4. Scaffold
    let service = if args.dry_run {
        info!(root = %request.root().display(), "Dry run, scaffolding in memory");
        ScaffoldService::new(
            Box::new(preview_filesystem(&request, &LocalFilesystem::new())),
            Box::new(RecordingVcs::new()),
        )
    } else {
        ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(GitCli::new()))
    };

    let report = service.run(&request);

    // 5. Report
    if output.is_json() {
        output.json(&report)?;
    } else {
        print_report(&report, args.dry_run, &output)?;
    }

    if options.strict && !report.is_clean() {
        return Err(CliError::StrictFailure {
            failures: report.failure_count(),
            vcs_failed: report.vcs.is_failure(),
        });
    }

    Ok(())
}

/// Switches merged from flags and `[scaffold]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunOptions {
    git: bool,
    baseline_files: bool,
    strict: bool,
}

impl RunOptions {
    fn resolve(args: &NewArgs, config: &AppConfig) -> Self {
        Self {
            git: config.scaffold.git && !args.no_git,
            baseline_files: args.baseline_files || config.scaffold.baseline_files,
            strict: args.strict || config.scaffold.strict,
        }
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

fn resolve_blueprint(
    args: &NewArgs,
    config: &AppConfig,
    layouts: &LayoutService,
) -> CliResult<Blueprint> {
    match (args.kind, &args.layout) {
        (Some(kind), _) => Ok(Blueprint::builtin(convert_kind(kind))),
        (None, Some(layout)) => Ok(layouts.resolve(layout)?),
        (None, None) => Ok(layouts.resolve(&config.defaults.kind)?),
    }
}

fn resolve_base(path: Option<&Path>) -> CliResult<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir().map_err(|e| CliError::IoError {
            message: "cannot determine the current directory".into(),
            source: e,
        }),
    }
}

/// Mirror of what `disk` already holds along the request's paths: the
/// deepest existing ancestor of the root, and any blueprint directory.
fn preview_filesystem(request: &ScaffoldRequest, disk: &dyn Filesystem) -> MemoryFilesystem {
    let root = request.root();
    let preview = match root
        .ancestors()
        .find(|p| !p.as_os_str().is_empty() && disk.exists(p))
    {
        Some(existing) => MemoryFilesystem::with_base(existing),
        None => MemoryFilesystem::new(),
    };

    for dir in request.blueprint().directories() {
        let path = root.join(dir);
        if disk.exists(&path) {
            preview.add_directory(path);
        }
    }
    preview
}

fn convert_kind(kind: Kind) -> ScaffoldKind {
    match kind {
        Kind::Terraform => ScaffoldKind::Terraform,
        Kind::Python => ScaffoldKind::Python,
        Kind::Html => ScaffoldKind::Html,
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

fn print_report(report: &ScaffoldReport, dry_run: bool, out: &OutputManager) -> CliResult<()> {
    let verb = if dry_run { "Would scaffold" } else { "Scaffolding" };
    out.header(&format!(
        "{verb} '{}' into {}",
        report.blueprint,
        report.root().display()
    ))?;

    print_line(
        &PathReport::new(
            report.root(),
            EntryKind::Directory,
            report.root_outcome.clone(),
        ),
        out,
    )?;
    for entry in report.directories.iter().chain(report.files.iter()) {
        print_line(entry, out)?;
    }

    match &report.vcs {
        VcsOutcome::Skipped => out.dimmed("  git init skipped")?,
        VcsOutcome::Initialized => out.success("git repository initialised")?,
        VcsOutcome::Failed { message } => out.warning(message)?,
    }
    for entry in &report.baseline_files {
        print_line(entry, out)?;
    }

    out.print("")?;
    let summary = format!(
        "{} created, {} already existed, {} failed",
        report.created_count() + usize::from(report.root_outcome.is_created()),
        report.existing_count()
            + usize::from(report.root_outcome == PathOutcome::AlreadyExists),
        report.failure_count(),
    );
    if report.failure_count() == 0 {
        out.success(&summary)?;
    } else {
        out.warning(&summary)?;
    }

    if dry_run {
        out.info("Dry run: nothing was written")?;
    }
    Ok(())
}

fn print_line(entry: &PathReport, out: &OutputManager) -> CliResult<()> {
    let line = format!("{:<4} {}", entry.kind, entry.path.display());
    match &entry.outcome {
        PathOutcome::Created => out.success(&line)?,
        PathOutcome::AlreadyExists => out.dimmed(&format!("  {line} (already exists)"))?,
        failure => out.error(&format!("{line} ({failure})"))?,
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    fn args() -> NewArgs {
        NewArgs {
            name: None,
            kind: None,
            layout: None,
            path: None,
            here: false,
            no_git: false,
            baseline_files: false,
            dry_run: false,
            strict: false,
        }
    }

    fn config_with_docs() -> AppConfig {
        let mut config = AppConfig::default();
        config.layouts.insert(
            "docs".into(),
            LayoutConfig {
                description: "docs".into(),
                dirs: vec!["pages".into()],
                files: vec!["pages/index.adoc".into()],
            },
        );
        config
    }

    #[test]
    fn default_blueprint_is_terraform() {
        let config = AppConfig::default();
        let layouts = super::super::layout_service(&config).unwrap();
        let blueprint = resolve_blueprint(&args(), &config, &layouts).unwrap();
        assert_eq!(blueprint.kind(), Some(ScaffoldKind::Terraform));
    }

    #[test]
    fn kind_flag_wins_over_default() {
        let config = AppConfig::default();
        let layouts = super::super::layout_service(&config).unwrap();
        let blueprint = resolve_blueprint(
            &NewArgs {
                kind: Some(Kind::Html),
                ..args()
            },
            &config,
            &layouts,
        )
        .unwrap();
        assert_eq!(blueprint.kind(), Some(ScaffoldKind::Html));
    }

    #[test]
    fn layout_flag_selects_custom_layout() {
        let config = config_with_docs();
        let layouts = super::super::layout_service(&config).unwrap();
        let blueprint = resolve_blueprint(
            &NewArgs {
                layout: Some("docs".into()),
                ..args()
            },
            &config,
            &layouts,
        )
        .unwrap();
        assert_eq!(blueprint.name(), "docs");
    }

    #[test]
    fn default_kind_may_be_an_alias() {
        let mut config = AppConfig::default();
        config.defaults.kind = "py".into();
        let layouts = super::super::layout_service(&config).unwrap();
        let blueprint = resolve_blueprint(&args(), &config, &layouts).unwrap();
        assert_eq!(blueprint.kind(), Some(ScaffoldKind::Python));
    }

    #[test]
    fn unknown_layout_is_not_found() {
        let config = AppConfig::default();
        let layouts = super::super::layout_service(&config).unwrap();
        let err = resolve_blueprint(
            &NewArgs {
                layout: Some("rails".into()),
                ..args()
            },
            &config,
            &layouts,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn no_git_flag_overrides_config() {
        let options = RunOptions::resolve(
            &NewArgs {
                no_git: true,
                ..args()
            },
            &AppConfig::default(),
        );
        assert!(!options.git);
    }

    #[test]
    fn config_switches_apply_without_flags() {
        let mut config = AppConfig::default();
        config.scaffold.baseline_files = true;
        config.scaffold.strict = true;
        config.scaffold.git = false;

        let options = RunOptions::resolve(&args(), &config);
        assert_eq!(
            options,
            RunOptions {
                git: false,
                baseline_files: true,
                strict: true,
            }
        );
    }

    #[test]
    fn explicit_path_is_used_verbatim() {
        let base = resolve_base(Some(Path::new("/srv/projects"))).unwrap();
        assert_eq!(base, PathBuf::from("/srv/projects"));
    }

    #[test]
    fn default_base_is_current_directory() {
        assert_eq!(resolve_base(None).unwrap(), std::env::current_dir().unwrap());
    }

    fn preview_run(request: &ScaffoldRequest, disk: &MemoryFilesystem) -> ScaffoldReport {
        ScaffoldService::new(
            Box::new(preview_filesystem(request, disk)),
            Box::new(RecordingVcs::new()),
        )
        .run(request)
    }

    fn terraform() -> Blueprint {
        Blueprint::builtin(ScaffoldKind::Terraform)
    }

    #[test]
    fn preview_of_fresh_base_creates_root() {
        let disk = MemoryFilesystem::with_base("/srv");
        let report = preview_run(&ScaffoldRequest::new("/srv", "foo", terraform()), &disk);

        assert_eq!(report.root_outcome, PathOutcome::Created);
        assert!(report.is_clean());
        assert!(!disk.exists(Path::new("/srv/foo")));
    }

    #[test]
    fn preview_sees_existing_root() {
        let disk = MemoryFilesystem::with_base("/srv/foo");
        let report = preview_run(&ScaffoldRequest::new("/srv", "foo", terraform()), &disk);

        assert_eq!(report.root_outcome, PathOutcome::AlreadyExists);
    }

    #[test]
    fn preview_sees_missing_base() {
        let disk = MemoryFilesystem::with_base("/srv");
        let report = preview_run(
            &ScaffoldRequest::new("/srv/nowhere", "foo", terraform()),
            &disk,
        );

        assert_eq!(report.root_outcome, PathOutcome::ParentMissing);
        assert!(!report.is_clean());
    }

    #[test]
    fn preview_sees_existing_blueprint_directories() {
        let disk = MemoryFilesystem::with_base("/srv/site");
        disk.add_directory("/srv/site/static");
        let html = Blueprint::builtin(ScaffoldKind::Html);
        let report = preview_run(&ScaffoldRequest::in_place("/srv/site", html), &disk);

        assert_eq!(report.root_outcome, PathOutcome::AlreadyExists);
        assert_eq!(report.directories[0].path, PathBuf::from("static"));
        assert_eq!(report.directories[0].outcome, PathOutcome::AlreadyExists);
        assert_eq!(report.directories[1].outcome, PathOutcome::Created);
    }

    #[test]
    fn every_kind_converts() {
        assert_eq!(convert_kind(Kind::Terraform), ScaffoldKind::Terraform);
        assert_eq!(convert_kind(Kind::Python), ScaffoldKind::Python);
        assert_eq!(convert_kind(Kind::Html), ScaffoldKind::Html);
    }
}
