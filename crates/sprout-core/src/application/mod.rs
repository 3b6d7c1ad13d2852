//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, LayoutService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BASELINE_FILES,
    LayoutInfo, // DTO for blueprint metadata
    LayoutService,
    ScaffoldRequest,
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{BlueprintCatalog, Filesystem, VcsFailure, VersionControl};

pub use error::ApplicationError;
