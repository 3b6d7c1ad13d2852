//! Version-control stand-in that records calls instead of running anything.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use sprout_core::application::ports::{VcsFailure, VersionControl};

/// Records every `init` call; optionally fails each one.
///
/// Used for dry runs, where nothing may be spawned, and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingVcs {
    calls: Arc<RwLock<Vec<PathBuf>>>,
    failure: Option<String>,
}

impl RecordingVcs {
    /// A recorder whose `init` always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose `init` always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// Directories `init` was called with, in order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.read().map(|c| c.clone()).unwrap_or_default()
    }
}

impl VersionControl for RecordingVcs {
    fn name(&self) -> &str {
        "recorded git"
    }

    fn init(&self, dir: &Path) -> Result<(), VcsFailure> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(dir.to_path_buf());
        }

        match &self.failure {
            Some(message) => Err(VcsFailure {
                command: "git init".into(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
