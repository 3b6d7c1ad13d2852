//! Domain value objects: ScaffoldKind.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! Each kind owns the fixed directory and file lists of its built-in
//! blueprint; nothing else in the crate hard-codes paths.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `FromStr`, `directories` and `files` arms here
//! 3. Add it to [`ScaffoldKind::ALL`]
//! 4. Mirror it in the CLI's `Kind` value enum

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ScaffoldKind ──────────────────────────────────────────────────────────────

/// A built-in project skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldKind {
    Terraform,
    Python,
    Html,
}

impl ScaffoldKind {
    /// Every built-in kind, in listing order.
    pub const ALL: [Self; 3] = [Self::Terraform, Self::Python, Self::Html];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Terraform => "terraform",
            Self::Python => "python",
            Self::Html => "html",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Terraform => "Terraform module with the five conventional .tf files",
            Self::Python => "Python starter with src/ and tests/ packages",
            Self::Html => "Static site skeleton with css, js and image folders",
        }
    }

    /// Directories to create, parents before children.
    pub const fn directories(&self) -> &'static [&'static str] {
        match self {
            Self::Terraform => &[],
            Self::Python => &["src", "tests"],
            Self::Html => &[
                "static",
                "static/css",
                "static/js",
                "assets",
                "assets/images",
            ],
        }
    }

    /// Empty files to create once every directory exists.
    pub const fn files(&self) -> &'static [&'static str] {
        match self {
            Self::Terraform => &[
                "main.tf",
                "outputs.tf",
                "providers.tf",
                "variables.tf",
                "versions.tf",
            ],
            Self::Python => &[
                "main.py",
                "requirements.txt",
                "src/__init__.py",
                "tests/__init__.py",
            ],
            Self::Html => &["static/css/main.css", "static/js/main.js", "index.html"],
        }
    }
}

impl fmt::Display for ScaffoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaffoldKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terraform" | "tf" => Ok(Self::Terraform),
            "python" | "py" => Ok(Self::Python),
            "html" | "web" => Ok(Self::Html),
            other => Err(DomainError::UnknownScaffoldKind(other.to_string())),
        }
    }
}
