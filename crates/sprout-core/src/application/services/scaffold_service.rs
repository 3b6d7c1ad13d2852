//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Create the root directory (or, in place, confirm that it exists)
//! 2. Create the blueprint's directories, then its files
//! 3. Initialise version control (and optionally the baseline files)
//!
//! No step aborts a later one and nothing is rolled back. Every outcome is
//! recorded in the returned [`ScaffoldReport`].

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, VersionControl},
    domain::{Blueprint, EntryKind, PathOutcome, PathReport, ScaffoldReport, VcsOutcome},
};

/// Files created after a successful repository initialisation when
/// baseline files are requested.
pub const BASELINE_FILES: [&str; 2] = [".gitignore", "README.md"];

/// A single scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    root: PathBuf,
    blueprint: Blueprint,
    create_root: bool,
    git: bool,
    baseline_files: bool,
}

impl ScaffoldRequest {
    /// Scaffold `blueprint` into `base/name`. Git is on, baseline files off.
    pub fn new(base: impl AsRef<Path>, name: impl AsRef<Path>, blueprint: Blueprint) -> Self {
        Self {
            root: base.as_ref().join(name),
            blueprint,
            create_root: true,
            git: true,
            baseline_files: false,
        }
    }

    /// Scaffold `blueprint` directly into the existing directory `dir`.
    pub fn in_place(dir: impl AsRef<Path>, blueprint: Blueprint) -> Self {
        Self {
            root: dir.as_ref().to_path_buf(),
            create_root: false,
            git: true,
            baseline_files: false,
            blueprint,
        }
    }

    pub fn with_git(mut self, git: bool) -> Self {
        self.git = git;
        self
    }

    pub fn with_baseline_files(mut self, baseline_files: bool) -> Self {
        self.baseline_files = baseline_files;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub const fn git(&self) -> bool {
        self.git
    }

    pub const fn baseline_files(&self) -> bool {
        self.baseline_files
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sprout_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     vcs,        // impl VersionControl
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, vcs: Box<dyn VersionControl>) -> Self {
        Self { filesystem, vcs }
    }

    /// Run the whole sequence: root, directories, files, repository.
    #[instrument(
        skip_all,
        fields(
            blueprint = %request.blueprint.name(),
            root = %request.root.display(),
        )
    )]
    pub fn run(&self, request: &ScaffoldRequest) -> ScaffoldReport {
        info!("Scaffolding '{}'", request.blueprint.name());

        let root_outcome = self.prepare_root(request);
        match &root_outcome {
            PathOutcome::Created => debug!("Root directory created"),
            PathOutcome::AlreadyExists => {
                warn!("Root directory already exists, continuing")
            }
            other => warn!(outcome = %other, "Could not create root directory, continuing"),
        }

        let (directories, files) = self.scaffold(&request.root, &request.blueprint);

        let (vcs, baseline_files) = if request.git {
            self.init_repo(&request.root, request.baseline_files)
        } else {
            debug!("Version control disabled");
            (VcsOutcome::Skipped, Vec::new())
        };

        let report = ScaffoldReport {
            blueprint: request.blueprint.name().to_string(),
            root: request.root.clone(),
            root_outcome,
            directories,
            files,
            vcs,
            baseline_files,
        };

        info!(
            created = report.created_count(),
            existing = report.existing_count(),
            failed = report.failure_count(),
            "Scaffold finished"
        );
        report
    }

    /// Create the root, or check that an in-place target is already there.
    fn prepare_root(&self, request: &ScaffoldRequest) -> PathOutcome {
        if request.create_root {
            PathOutcome::from(self.filesystem.create_dir(&request.root))
        } else if self.filesystem.exists(&request.root) {
            PathOutcome::AlreadyExists
        } else {
            PathOutcome::Failed {
                reason: "target directory does not exist".into(),
            }
        }
    }

    /// Create the blueprint's directories, then its files, under `root`.
    pub fn scaffold(
        &self,
        root: &Path,
        blueprint: &Blueprint,
    ) -> (Vec<PathReport>, Vec<PathReport>) {
        let directories = self.create_directories(root, blueprint.directories());
        let files = self.create_files(root, blueprint.files());
        (directories, files)
    }

    /// Create one directory level per path, continuing past failures.
    pub fn create_directories<P: AsRef<Path>>(&self, root: &Path, paths: &[P]) -> Vec<PathReport> {
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let outcome = PathOutcome::from(self.filesystem.create_dir(&root.join(path)));
                log_outcome(EntryKind::Directory, path, &outcome);
                PathReport::new(path, EntryKind::Directory, outcome)
            })
            .collect()
    }

    /// Create one empty file per path, continuing past failures.
    pub fn create_files<P: AsRef<Path>>(&self, root: &Path, paths: &[P]) -> Vec<PathReport> {
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let outcome =
                    PathOutcome::from(self.filesystem.create_empty_file(&root.join(path)));
                log_outcome(EntryKind::File, path, &outcome);
                PathReport::new(path, EntryKind::File, outcome)
            })
            .collect()
    }

    /// Initialise a repository in `root`.
    ///
    /// A failure is logged and returned as [`VcsOutcome::Failed`]; baseline
    /// files are only created after a successful initialisation.
    pub fn init_repo(&self, root: &Path, baseline_files: bool) -> (VcsOutcome, Vec<PathReport>) {
        match self.vcs.init(root) {
            Ok(()) => {
                info!(vcs = self.vcs.name(), "Repository initialised");
                let baseline = if baseline_files {
                    self.create_files(root, &BASELINE_FILES)
                } else {
                    Vec::new()
                };
                (VcsOutcome::Initialized, baseline)
            }
            Err(e) => {
                warn!(vcs = self.vcs.name(), error = %e, "Repository initialisation failed");
                (
                    VcsOutcome::Failed {
                        message: e.to_string(),
                    },
                    Vec::new(),
                )
            }
        }
    }
}

fn log_outcome(kind: EntryKind, path: &Path, outcome: &PathOutcome) {
    if outcome.is_failure() {
        warn!(%kind, path = %path.display(), %outcome, "Could not create entry");
    } else {
        debug!(%kind, path = %path.display(), %outcome, "Entry processed");
    }
}
