//! Implementation of the `sprout check` command.
//!
//! Each layout is validated structurally and, when that passes, scaffolded
//! into a throwaway temporary directory so the real filesystem gets a say
//! (over-long names, reserved characters, case collisions). The directory is
//! removed afterwards.

use serde::Serialize;
use tempfile::TempDir;
use tracing::{debug, instrument};

use sprout_adapters::{LocalFilesystem, RecordingVcs};
use sprout_core::{
    application::{ScaffoldRequest, ScaffoldService},
    domain::{Blueprint, LayoutIssue},
};

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Outcome of checking one layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct LayoutCheck {
    name: String,
    compliant: bool,
    issues: Vec<String>,
}

#[instrument(skip_all, fields(layout = ?args.layout))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layouts = super::layout_service(&config)?;
    let results = layouts
        .check(args.layout.as_deref())?
        .into_iter()
        .map(|(blueprint, issues)| check_layout(&blueprint, issues))
        .collect::<CliResult<Vec<LayoutCheck>>>()?;

    if output.is_json() {
        output.json(&results)?;
    } else {
        for result in &results {
            if result.compliant {
                output.success(&result.name)?;
            } else {
                output.error(&result.name)?;
                for issue in &result.issues {
                    output.print(&format!("    {issue}"))?;
                }
            }
        }
    }

    let failing = results.iter().filter(|r| !r.compliant).count();
    if failing > 0 {
        return Err(CliError::LayoutsNotCompliant { count: failing });
    }
    Ok(())
}

fn check_layout(blueprint: &Blueprint, issues: Vec<LayoutIssue>) -> CliResult<LayoutCheck> {
    let issues = if issues.is_empty() {
        rehearse(blueprint)?
    } else {
        issues.iter().map(ToString::to_string).collect()
    };
    debug!(layout = blueprint.name(), issues = issues.len(), "Layout checked");

    Ok(LayoutCheck {
        name: blueprint.name().to_string(),
        compliant: issues.is_empty(),
        issues,
    })
}

/// Scaffold into a temporary directory and describe every path that failed.
fn rehearse(blueprint: &Blueprint) -> CliResult<Vec<String>> {
    let scratch = TempDir::with_prefix("sprout-check-").map_err(|e| CliError::IoError {
        message: "cannot create a temporary directory for the rehearsal".into(),
        source: e,
    })?;
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(RecordingVcs::new()),
    );
    let request = ScaffoldRequest::in_place(scratch.path(), blueprint.clone()).with_git(false);

    let failures: Vec<String> = service
        .run(&request)
        .failures()
        .map(|entry| {
            format!(
                "{} '{}' could not be created: {}",
                entry.kind,
                entry.path.display(),
                entry.outcome
            )
        })
        .collect();
    Ok(failures)
}
